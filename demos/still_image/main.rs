//! Decodes a PNG and emits a "wipe" still-image `.cdg` stream: palette,
//! presets, then every block of the image in a reveal-mode order.
//!
//! Like `png-encode`, this binary is the external caller the core expects —
//! decode and scaling happen here via the `image` crate, never in
//! `cdg_types`/`cdg_internal`.

use std::fs;
use std::path::PathBuf;

use cdg_internal::cdg_types::color::{Palette, Rgb888};
use cdg_internal::cdg_types::config::RevealMode;
use cdg_internal::cdg_types::constants::{FULL_HEIGHT, FULL_WIDTH};
use cdg_internal::quantize::quantize_frame;
use cdg_internal::still_image::{encode_still_image, random_reveal_mode};
use clap::{Parser, ValueEnum};
use image::imageops::FilterType;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// CLI mirror of [`RevealMode`], plus an "unspecified" choice that picks one at random.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum RevealModeArg {
	Row,
	RowRev,
	Col,
	ColRev,
	Random,
	Unspecified,
}

impl From<RevealModeArg> for Option<RevealMode> {
	fn from(value: RevealModeArg) -> Self {
		match value {
			RevealModeArg::Row => Some(RevealMode::Row),
			RevealModeArg::RowRev => Some(RevealMode::RowRev),
			RevealModeArg::Col => Some(RevealMode::Col),
			RevealModeArg::ColRev => Some(RevealMode::ColRev),
			RevealModeArg::Random => Some(RevealMode::Random),
			RevealModeArg::Unspecified => None,
		}
	}
}

/// Encodes a single PNG as a still-image "wipe" `.cdg` packet stream.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
	/// Input PNG path.
	input: PathBuf,

	/// Output `.cdg` path.
	output: PathBuf,

	/// Reveal order; leave unset to pick one of the five uniformly at random.
	#[arg(long, value_enum, default_value_t = RevealModeArg::Unspecified)]
	reveal_mode: RevealModeArg,
}

fn extract_palette(pixels: &[u8]) -> Palette {
	let mut colors = Vec::new();
	for chunk in pixels.chunks_exact(3) {
		let color = Rgb888::new(chunk[0], chunk[1], chunk[2]);
		if colors.len() < 16 && !colors.contains(&color) {
			colors.push(color);
		}
		if colors.len() == 16 {
			break;
		}
	}
	Palette::new(&colors).expect("capped at 16 colors above")
}

fn main() {
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let args = Args::parse();
	let mut rng = SmallRng::from_os_rng();

	let image = image::open(&args.input).expect("failed to open input image").to_rgb8();
	let resized = image::imageops::resize(&image, FULL_WIDTH as u32, FULL_HEIGHT as u32, FilterType::Lanczos3);
	let rgb_bytes = resized.into_raw();

	let palette = extract_palette(&rgb_bytes);
	let frame = quantize_frame(&rgb_bytes, &palette).expect("quantization failed");

	let reveal_mode: Option<RevealMode> = args.reveal_mode.into();
	let reveal_mode = reveal_mode.unwrap_or_else(|| random_reveal_mode(&mut rng));

	let packets =
		encode_still_image(&frame, &palette, reveal_mode, false, &mut rng).expect("still-image encode failed");

	let mut bytes = Vec::with_capacity(packets.len() * 24);
	for packet in &packets {
		bytes.extend_from_slice(packet.as_bytes());
	}
	fs::write(&args.output, bytes).expect("failed to write output");

	log::info!(
		"wrote {} packets ({} bytes) to {} using reveal_mode={reveal_mode:?}",
		packets.len(),
		packets.len() * 24,
		args.output.display(),
	);
}
