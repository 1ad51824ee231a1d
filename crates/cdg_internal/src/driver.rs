//! The Encoder Driver: one-time palette/preset emission, then per-frame scheduling.

use cdg_types::color::Palette;
use cdg_types::config::EncoderConfig;
use cdg_types::error::CdgError;
use cdg_types::frame::GridExtent;
use cdg_types::packet::{Packet, preset_border, preset_memory};
use cdg_types::palette_codec::encode_palette;
use cdg_types::scheduler::{ShadowCanvas, schedule_frame};
use log::{debug, info};

use crate::frame_source::FrameSource;
use crate::quantize::quantize_frame;

/// Color index `Preset Memory` fills the canvas with at start of encode.
const PRESET_MEMORY_COLOR: u8 = 0;
/// Number of times `Preset Memory` is nominally repeated, per the reference encoder.
const PRESET_MEMORY_REPEAT: u8 = 4;
/// Color index `Preset Border` fills the border with at start of encode.
///
/// The intent (black border vs. palette-entry-1 border) is caller policy;
/// see the Open Questions entry for this value.
const PRESET_BORDER_COLOR: u8 = 1;

/// Drives a full video encode: palette, presets, then one delta-scheduled
/// pass per frame pulled from a [`FrameSource`].
pub struct EncoderDriver {
	palette: Palette,
	config: EncoderConfig,
}

impl EncoderDriver {
	/// Builds a driver for `palette`/`config`.
	///
	/// If `config.mono` is set, `palette` is ignored in favor of the
	/// black/white convention in [`Palette::mono`]. Fails with
	/// [`CdgError::InvalidFrameRate`] if `config.frame_rate` doesn't divide
	/// 300.
	pub fn new(palette: Palette, config: EncoderConfig) -> Result<Self, CdgError> {
		config.packets_per_frame()?;
		let palette = if config.mono { Palette::mono() } else { palette };

		info!(
			"encoder driver: frame_rate={} packets_per_frame={} pixel_threshold={} fill_frame={} mono={}",
			config.frame_rate,
			config.packets_per_frame().expect("validated above"),
			config.pixel_threshold,
			config.fill_frame,
			config.mono,
		);

		Ok(Self {
			palette,
			config,
		})
	}

	/// Encodes every frame `source` yields into a single ordered packet stream.
	///
	/// Palette and preset packets are emitted once, up front; every
	/// subsequent frame contributes exactly `packets_per_frame` packets
	/// (writes plus NOP padding).
	pub fn encode(&self, source: &mut dyn FrameSource) -> Result<Vec<Packet>, CdgError> {
		let packets_per_frame = self.config.packets_per_frame()?;
		let extent = if self.config.fill_frame { GridExtent::Full } else { GridExtent::DisplayOnly };
		let mut shadow = ShadowCanvas::new();

		let (load_low, load_high) = encode_palette(&self.palette);
		let mut output = vec![
			load_low,
			load_high,
			preset_memory(PRESET_MEMORY_COLOR, PRESET_MEMORY_REPEAT)?,
			preset_border(PRESET_BORDER_COLOR)?,
		];

		let mut frame_index = 0u64;
		while let Some(raw_frame) = source.next_frame() {
			frame_index += 1;
			let frame = quantize_frame(&raw_frame, &self.palette)?;
			let packets = schedule_frame(
				&mut shadow,
				&frame,
				&self.palette,
				packets_per_frame,
				self.config.pixel_threshold,
				extent,
			)?;
			let writes = packets.iter().filter(|p| !p.is_nop()).count();
			debug!("encoder driver: frame {frame_index} wrote {writes}/{packets_per_frame} packets, {} padded", packets_per_frame as usize - writes);
			output.extend(packets);
		}

		Ok(output)
	}
}
