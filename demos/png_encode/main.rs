//! Decodes a PNG into RGB frames and a palette using the `image` crate, then
//! hands them to the core through [`FrameSource`].
//!
//! This is a demonstration of the boundary described in the core's Non-goals:
//! image decode, scaling, and palette generation all happen here, outside
//! `cdg_types`/`cdg_internal`, which only ever see pre-decoded frames and a
//! pre-computed palette.

use std::fs;
use std::path::PathBuf;

use cdg_internal::cdg_types::color::{Palette, Rgb888};
use cdg_internal::cdg_types::config::EncoderConfig;
use cdg_internal::cdg_types::constants::{FULL_HEIGHT, FULL_WIDTH};
use cdg_internal::{EncoderDriver, VecFrameSource};
use clap::Parser;
use image::imageops::FilterType;

/// Encodes a single PNG image as a `.cdg` packet stream (one still frame, repeated).
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
	/// Input PNG path.
	input: PathBuf,

	/// Output `.cdg` path.
	output: PathBuf,

	/// Packets-per-second divisor; must divide 300.
	#[arg(long, default_value_t = 15)]
	frame_rate: u32,

	/// Number of times to repeat the decoded frame (useful for a quick preview clip).
	#[arg(long, default_value_t = 1)]
	repeat: usize,
}

/// Builds a palette from the first 16 distinct colors encountered, row-major.
///
/// This is a deliberately naive stand-in for real palette generation, which
/// the core treats as an external collaborator (see the Non-goals in the
/// crate's top-level documentation).
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

	let image = image::open(&args.input).expect("failed to open input image").to_rgb8();
	let resized = image::imageops::resize(&image, FULL_WIDTH as u32, FULL_HEIGHT as u32, FilterType::Lanczos3);
	let rgb_bytes = resized.into_raw();

	let palette = extract_palette(&rgb_bytes);
	let config = EncoderConfig {
		frame_rate: args.frame_rate,
		..EncoderConfig::default()
	};

	let driver = EncoderDriver::new(palette, config).expect("invalid encoder configuration");
	let mut source = VecFrameSource::new(vec![rgb_bytes; args.repeat.max(1)]);

	let packets = driver.encode(&mut source).expect("encode failed");

	let mut bytes = Vec::with_capacity(packets.len() * 24);
	for packet in &packets {
		bytes.extend_from_slice(packet.as_bytes());
	}
	fs::write(&args.output, bytes).expect("failed to write output");

	log::info!("wrote {} packets ({} bytes) to {}", packets.len(), packets.len() * 24, args.output.display());
}
