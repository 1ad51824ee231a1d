//! Error types shared by every `cdg_types` module.

use thiserror::Error;

use crate::constants::PACKETS_PER_SECOND;

/// Errors that can occur while building or validating CD+G packet data.
#[derive(Debug, Error)]
pub enum CdgError {
	/// A palette carried more than 16 entries.
	#[error("palette has {0} entries, at most 16 are allowed")]
	InvalidPalette(usize),

	/// `frame_rate` was not a positive integer divisor of `PACKETS_PER_SECOND`.
	#[error("frame rate {0} does not evenly divide {PACKETS_PER_SECOND} packets/second")]
	InvalidFrameRate(u32),

	/// An instruction argument exceeded the range the wire format allows for it.
	#[error("{field} value {value:#04x} exceeds the maximum of {max:#04x}")]
	InvalidArgument {
		/// Name of the out-of-range field (`"color"`, `"row"`, `"col"`, `"pixel"`, ...).
		field: &'static str,
		/// The value that was supplied.
		value: u8,
		/// The largest value the field accepts.
		max: u8,
	},

	/// The Block Codec was handed a block with more than two distinct palette indices.
	#[error("block at (row {row}, col {col}) has {color_count} distinct colors, at most 2 are allowed")]
	TooManyColorsInBlock {
		/// Block row.
		row: usize,
		/// Block column.
		col: usize,
		/// Number of distinct palette indices found in the block.
		color_count: usize,
	},

	/// An input frame's dimensions did not match what the partitioner expects.
	#[error(
		"frame is {width}x{height}, expected {expected_width}x{expected_height} (or a multiple of the block size)"
	)]
	FrameSizeMismatch {
		/// Width that was supplied.
		width: usize,
		/// Height that was supplied.
		height: usize,
		/// Width that was expected.
		expected_width: usize,
		/// Height that was expected.
		expected_height: usize,
	},
}
