//! The Still-Image Encoder: a one-shot "wipe" paint of a single frame.

use cdg_types::block::encode_block;
use cdg_types::color::Palette;
use cdg_types::config::RevealMode;
use cdg_types::error::CdgError;
use cdg_types::frame::{Frame, GridExtent, block_coords, squash_to_two_colors};
use cdg_types::packet::{Packet, preset_border, preset_memory};
use cdg_types::palette_codec::encode_palette;
use log::info;
use rand::seq::SliceRandom;

/// Orders `coords` according to `reveal_mode`.
///
/// `Random` uses `rng` to shuffle in place; the four sorted modes are
/// deterministic and ignore `rng` entirely.
fn order_coords(mut coords: Vec<(usize, usize)>, reveal_mode: RevealMode, rng: &mut impl rand::Rng) -> Vec<(usize, usize)> {
	match reveal_mode {
		RevealMode::Row => coords.sort_unstable(),
		RevealMode::RowRev => {
			coords.sort_unstable();
			coords.reverse();
		}
		RevealMode::Col => coords.sort_unstable_by_key(|&(row, col)| (col, row)),
		RevealMode::ColRev => {
			coords.sort_unstable_by_key(|&(row, col)| (col, row));
			coords.reverse();
		}
		RevealMode::Random => coords.shuffle(rng),
	}
	coords
}

/// Picks one of the five reveal modes uniformly at random, for callers that
/// don't request a specific one — mirroring the reference encoder's
/// "wipe" behavior when no mode is specified up front.
pub fn random_reveal_mode(rng: &mut impl rand::Rng) -> RevealMode {
	const MODES: [RevealMode; 5] =
		[RevealMode::Row, RevealMode::RowRev, RevealMode::Col, RevealMode::ColRev, RevealMode::Random];
	*MODES.choose(rng).expect("MODES is non-empty")
}

/// Encodes a single frame as palette + presets followed by every block of
/// the frame in `reveal_mode` order, one `Write Font Block` packet each.
///
/// There is no packet budget, no NOPs, and no shadow canvas here: this is a
/// one-shot paint, not a delta-scheduled video frame.
pub fn encode_still_image(
	image: &Frame,
	palette: &Palette,
	reveal_mode: RevealMode,
	fill_frame: bool,
	rng: &mut impl rand::Rng,
) -> Result<Vec<Packet>, CdgError> {
	info!("still image encoder: reveal_mode={reveal_mode:?} fill_frame={fill_frame}");

	let (low, high) = encode_palette(palette);
	let mut packets = vec![low, high, preset_memory(0, 4)?, preset_border(1)?];

	let extent = if fill_frame { GridExtent::Full } else { GridExtent::DisplayOnly };
	let coords = order_coords(block_coords(extent).collect(), reveal_mode, rng);

	for (row, col) in coords {
		let raw_block = image.block_at(row, col);
		let block = squash_to_two_colors(&raw_block, palette);
		packets.push(encode_block(&block, row as u8, col as u8)?);
	}

	Ok(packets)
}
