//! Maps raw RGB-888 frame bytes onto the global palette, with no dithering.

use cdg_types::color::{Palette, Rgb888};
use cdg_types::constants::{FULL_HEIGHT, FULL_WIDTH};
use cdg_types::error::CdgError;
use cdg_types::frame::Frame;

/// Quantizes `rgb_bytes` (row-major RGB-888, 3 bytes/pixel) against `palette`,
/// producing a full-canvas [`Frame`] of palette indices.
///
/// Fails with [`CdgError::FrameSizeMismatch`] unless `rgb_bytes` is exactly
/// `FULL_WIDTH * FULL_HEIGHT * 3` bytes.
pub fn quantize_frame(rgb_bytes: &[u8], palette: &Palette) -> Result<Frame, CdgError> {
	let expected_len = FULL_WIDTH * FULL_HEIGHT * 3;
	if rgb_bytes.len() != expected_len {
		return Err(CdgError::FrameSizeMismatch {
			width: FULL_WIDTH,
			height: rgb_bytes.len() / 3 / FULL_WIDTH.max(1),
			expected_width: FULL_WIDTH,
			expected_height: FULL_HEIGHT,
		});
	}

	let mut indices = Vec::with_capacity(FULL_WIDTH * FULL_HEIGHT);
	for chunk in rgb_bytes.chunks_exact(3) {
		let color = Rgb888::new(chunk[0], chunk[1], chunk[2]);
		indices.push(palette.nearest_index(color));
	}
	Frame::new(indices)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn quantizes_each_pixel_to_the_nearest_palette_entry() {
		let palette = Palette::new(&[Rgb888::BLACK, Rgb888::new(255, 255, 255)]).unwrap();
		let bytes = vec![0u8; FULL_WIDTH * FULL_HEIGHT * 3];
		let frame = quantize_frame(&bytes, &palette).unwrap();
		assert_eq!(frame.get(0, 0), 0);
	}

	#[test]
	fn rejects_wrong_sized_input() {
		let palette = Palette::black();
		assert!(quantize_frame(&[0u8; 10], &palette).is_err());
	}
}
