//! Encoder configuration options exposed to callers.

use serde::{Deserialize, Serialize};

use crate::error::CdgError;
use crate::scheduler::{DEFAULT_PIXEL_THRESHOLD, packets_per_frame};

/// The order in which a still image's blocks are revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevealMode {
	/// Row-ascending, left to right within each row.
	Row,
	/// Row-descending.
	RowRev,
	/// Column-ascending, top to bottom within each column.
	Col,
	/// Column-descending.
	ColRev,
	/// Uniformly shuffled.
	Random,
}

impl Default for RevealMode {
	fn default() -> Self {
		Self::Random
	}
}

/// Options controlling how the Encoder Driver and Still-Image Encoder behave.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncoderConfig {
	/// Packets-per-frame divisor of 300.
	pub frame_rate: u32,
	/// Minimum per-block pixel diff required to schedule a rewrite.
	pub pixel_threshold: usize,
	/// Whether frames cover the full 50x18 canvas or just the 48x16 display area.
	pub fill_frame: bool,
	/// Forces the palette to {black, white}; degenerates block squashing.
	pub mono: bool,
	/// Still-image reveal order; unused by the video Encoder Driver.
	pub reveal_mode: RevealMode,
}

impl Default for EncoderConfig {
	fn default() -> Self {
		Self {
			frame_rate: 15,
			pixel_threshold: DEFAULT_PIXEL_THRESHOLD,
			fill_frame: false,
			mono: false,
			reveal_mode: RevealMode::default(),
		}
	}
}

impl EncoderConfig {
	/// Validates the configuration, currently just `frame_rate`.
	///
	/// Returns the derived packets-per-frame budget on success.
	pub fn packets_per_frame(&self) -> Result<u32, CdgError> {
		packets_per_frame(self.frame_rate)
	}
}
