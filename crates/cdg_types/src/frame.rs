//! The Frame Partitioner: slices a palette-indexed frame into 6x12 blocks and
//! reduces each block to at most two palette indices.

use crate::block::{BLOCK_HEIGHT, BLOCK_WIDTH, Block};
use crate::color::Palette;
use crate::constants::{
	DISPLAY_COL_END, DISPLAY_COL_START, DISPLAY_ROW_END, DISPLAY_ROW_START, FULL_HEIGHT,
	FULL_HEIGHT_BLOCKS, FULL_WIDTH, FULL_WIDTH_BLOCKS,
};
use crate::error::CdgError;

/// A `FULL_WIDTH x FULL_HEIGHT` matrix of palette indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
	indices: Vec<u8>,
}

impl Frame {
	/// Builds a frame from row-major palette indices sized `FULL_WIDTH * FULL_HEIGHT`.
	pub fn new(indices: Vec<u8>) -> Result<Self, CdgError> {
		if indices.len() != FULL_WIDTH * FULL_HEIGHT {
			let height = indices.len() / FULL_WIDTH.max(1);
			return Err(CdgError::FrameSizeMismatch {
				width: FULL_WIDTH,
				height,
				expected_width: FULL_WIDTH,
				expected_height: FULL_HEIGHT,
			});
		}
		Ok(Self {
			indices,
		})
	}

	/// A frame filled entirely with one palette index.
	pub fn solid(index: u8) -> Self {
		Self {
			indices: vec![index; FULL_WIDTH * FULL_HEIGHT],
		}
	}

	/// The palette index at `(x, y)` in pixel coordinates.
	pub fn get(&self, x: usize, y: usize) -> u8 {
		self.indices[y * FULL_WIDTH + x]
	}

	/// Extracts the 6x12 block at block coordinates `(row, col)`.
	pub fn block_at(&self, row: usize, col: usize) -> Block {
		let mut pixels = [0u8; BLOCK_WIDTH * BLOCK_HEIGHT];
		let base_x = col * BLOCK_WIDTH;
		let base_y = row * BLOCK_HEIGHT;
		for by in 0..BLOCK_HEIGHT {
			for bx in 0..BLOCK_WIDTH {
				pixels[by * BLOCK_WIDTH + bx] = self.get(base_x + bx, base_y + by);
			}
		}
		Block::new(pixels)
	}

	/// Overwrites the 6x12 block at `(row, col)` with `block`.
	pub fn set_block_at(&mut self, row: usize, col: usize, block: &Block) {
		let base_x = col * BLOCK_WIDTH;
		let base_y = row * BLOCK_HEIGHT;
		for by in 0..BLOCK_HEIGHT {
			for bx in 0..BLOCK_WIDTH {
				let index = block.get(by, bx);
				self.indices[(base_y + by) * FULL_WIDTH + base_x + bx] = index;
			}
		}
	}
}

/// Which subset of the block grid a partitioning pass iterates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridExtent {
	/// The full 50x18 grid, border blocks included.
	Full,
	/// Only display blocks (rows 1..17, cols 1..49); callers framing for
	/// display use must pad their input to full canvas size first.
	DisplayOnly,
}

/// Iterates `(row, col)` block coordinates for `extent` in row-major order.
pub fn block_coords(extent: GridExtent) -> impl Iterator<Item = (usize, usize)> {
	let (row_range, col_range) = match extent {
		GridExtent::Full => (0..FULL_HEIGHT_BLOCKS, 0..FULL_WIDTH_BLOCKS),
		GridExtent::DisplayOnly => (DISPLAY_ROW_START..DISPLAY_ROW_END, DISPLAY_COL_START..DISPLAY_COL_END),
	};
	row_range.flat_map(move |row| col_range.clone().map(move |col| (row, col)))
}

/// Reduces `block`'s pixels to at most two palette indices.
///
/// If the block already has one or two distinct colors it is returned
/// unchanged. Otherwise it is squashed: the block's pixels are quantized in
/// RGB-888 space (via `palette`) to exactly two representative colors using
/// a one-level median-cut split (no dithering), then each representative is
/// re-mapped to the closest entry in the *original* palette. This guarantees
/// the result uses only indices that are members of `palette`, at the cost
/// of some color drift.
pub fn squash_to_two_colors(block: &Block, palette: &Palette) -> Block {
	let distinct = block.distinct_colors();
	if distinct.len() <= 2 {
		return block.clone();
	}

	let colors: Vec<_> = block.pixels().iter().map(|&index| palette.color(index)).collect();

	// One-level median cut: split on the channel with the widest range,
	// bucket by whether a pixel falls below or above the midpoint.
	let (mut min_r, mut max_r) = (u8::MAX, 0u8);
	let (mut min_g, mut max_g) = (u8::MAX, 0u8);
	let (mut min_b, mut max_b) = (u8::MAX, 0u8);
	for color in &colors {
		min_r = min_r.min(color.r);
		max_r = max_r.max(color.r);
		min_g = min_g.min(color.g);
		max_g = max_g.max(color.g);
		min_b = min_b.min(color.b);
		max_b = max_b.max(color.b);
	}
	let range_r = u32::from(max_r) - u32::from(min_r);
	let range_g = u32::from(max_g) - u32::from(min_g);
	let range_b = u32::from(max_b) - u32::from(min_b);

	enum Axis {
		R,
		G,
		B,
	}
	let axis = if range_r >= range_g && range_r >= range_b {
		Axis::R
	} else if range_g >= range_b {
		Axis::G
	} else {
		Axis::B
	};

	let channel = |c: crate::color::Rgb888| -> u8 {
		match axis {
			Axis::R => c.r,
			Axis::G => c.g,
			Axis::B => c.b,
		}
	};
	let midpoint = match axis {
		Axis::R => min_r / 2 + max_r / 2,
		Axis::G => min_g / 2 + max_g / 2,
		Axis::B => min_b / 2 + max_b / 2,
	};

	let (mut low_sum, mut low_count) = ((0u32, 0u32, 0u32), 0u32);
	let (mut high_sum, mut high_count) = ((0u32, 0u32, 0u32), 0u32);
	for color in &colors {
		if channel(*color) <= midpoint {
			low_sum.0 += u32::from(color.r);
			low_sum.1 += u32::from(color.g);
			low_sum.2 += u32::from(color.b);
			low_count += 1;
		} else {
			high_sum.0 += u32::from(color.r);
			high_sum.1 += u32::from(color.g);
			high_sum.2 += u32::from(color.b);
			high_count += 1;
		}
	}

	let average = |sum: (u32, u32, u32), count: u32| -> crate::color::Rgb888 {
		if count == 0 {
			return crate::color::Rgb888::BLACK;
		}
		crate::color::Rgb888::new((sum.0 / count) as u8, (sum.1 / count) as u8, (sum.2 / count) as u8)
	};

	let low_color = average(low_sum, low_count);
	let high_color = if high_count == 0 { low_color } else { average(high_sum, high_count) };

	let low_index = palette.nearest_index(low_color);
	let high_index = palette.nearest_index(high_color);

	let mut squashed = [0u8; BLOCK_WIDTH * BLOCK_HEIGHT];
	for (i, &index) in block.pixels().iter().enumerate() {
		let color = palette.color(index);
		squashed[i] = if channel(color) <= midpoint { low_index } else { high_index };
	}
	Block::new(squashed)
}
