//! The frame-source boundary: a pull iterator the Encoder Driver awaits between frames.

use cdg_types::constants::{FULL_HEIGHT, FULL_WIDTH};

/// Raw RGB-888 bytes for one `FULL_WIDTH x FULL_HEIGHT` frame, row-major,
/// 3 bytes per pixel.
pub const FRAME_BYTE_LEN: usize = FULL_WIDTH * FULL_HEIGHT * 3;

/// A finite, lazily-pulled sequence of RGB-888 frames.
///
/// This promotes the frame-source contract ("callable yielding successive
/// `FULL_WIDTH x FULL_HEIGHT` RGB-888 frames... end-of-stream signaled by an
/// empty yield") to a first-class trait, so the Encoder Driver can be
/// generic over anything that can hand it frames: an in-memory buffer for
/// tests, or a caller-supplied adapter around a real video decoder in
/// production.
pub trait FrameSource {
	/// Returns the next frame's raw RGB-888 bytes, or `None` once exhausted.
	fn next_frame(&mut self) -> Option<Vec<u8>>;
}

/// A [`FrameSource`] backed by an in-memory list of frames, for tests and
/// small one-shot encodes.
pub struct VecFrameSource {
	frames: std::vec::IntoIter<Vec<u8>>,
}

impl VecFrameSource {
	/// Wraps `frames` (each expected to be [`FRAME_BYTE_LEN`] bytes) as a frame source.
	pub fn new(frames: Vec<Vec<u8>>) -> Self {
		Self {
			frames: frames.into_iter(),
		}
	}
}

impl FrameSource for VecFrameSource {
	fn next_frame(&mut self) -> Option<Vec<u8>> {
		self.frames.next()
	}
}
