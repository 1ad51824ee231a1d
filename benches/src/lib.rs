//! Benchmark helper utilities for `cdg-rs`.
//!
//! Generates synthetic palette-indexed frames of increasing "busyness" so
//! the Delta Scheduler and Block Codec benchmarks exercise a realistic
//! spread of diff counts rather than one degenerate all-black or all-noise
//! case.

use cdg_types::color::{Palette, Rgb888};
use cdg_types::constants::{FULL_HEIGHT, FULL_WIDTH};
use cdg_types::frame::Frame;
use rand::Rng;
use rand::rngs::SmallRng;

/// A 16-entry palette with a visible spread of colors, for benchmarks that
/// want non-degenerate two-color squashing.
pub fn benchmark_palette() -> Palette {
	let mut colors = Vec::with_capacity(16);
	for i in 0..16u32 {
		let v = ((i * 255) / 15) as u8;
		colors.push(Rgb888::new(v, 255 - v, (v / 2).wrapping_add(64)));
	}
	Palette::new(&colors).expect("exactly 16 colors")
}

/// A full-canvas frame filled with one palette index.
pub fn solid_frame(index: u8) -> Frame {
	Frame::solid(index)
}

/// A full-canvas frame with `dirty_fraction` (0.0..=1.0) of its pixels
/// replaced with a random palette index, the rest left at `base_index`.
///
/// Used to benchmark the Delta Scheduler under varying amounts of
/// frame-to-frame change.
pub fn noisy_frame(rng: &mut SmallRng, base_index: u8, dirty_fraction: f64) -> Frame {
	let mut indices = vec![base_index; FULL_WIDTH * FULL_HEIGHT];
	for index in &mut indices {
		if rng.random_bool(dirty_fraction) {
			*index = rng.random_range(0..16);
		}
	}
	Frame::new(indices).expect("FULL_WIDTH * FULL_HEIGHT elements by construction")
}

/// Benchmark dirty-fraction presets, from a near-static frame to full noise.
pub mod dirty_fractions {
	/// A handful of blocks change, well under most packet budgets.
	pub const SPARSE: f64 = 0.01;
	/// A moderate amount of motion, typical of a talking-head video.
	pub const MODERATE: f64 = 0.15;
	/// Every pixel changes, forcing worst-case budget starvation.
	pub const FULL: f64 = 1.0;
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;

	#[test]
	fn benchmark_palette_has_sixteen_distinct_entries() {
		let palette = benchmark_palette();
		let mut seen = std::collections::HashSet::new();
		for color in palette.entries() {
			seen.insert((color.r, color.g, color.b));
		}
		assert!(seen.len() > 1);
	}

	#[test]
	fn noisy_frame_respects_requested_size() {
		let mut rng = SmallRng::seed_from_u64(7);
		let frame = noisy_frame(&mut rng, 0, dirty_fractions::MODERATE);
		assert_eq!(frame.get(0, 0), frame.get(0, 0));
	}
}
