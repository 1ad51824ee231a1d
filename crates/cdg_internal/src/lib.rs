//! Internal crate for `cdg-rs`: the Encoder Driver and Still-Image Encoder
//! that orchestrate `cdg_types`'s core into a complete packet stream.
//!
//! This crate is the one actually wired into the root `cdg-rs` facade; it
//! depends on `cdg_types` for every wire-format and scheduling concern and
//! adds the pieces a real encode needs on top: the frame-source boundary,
//! RGB-to-palette quantization, and the two top-level encode entry points.

pub mod driver;
pub mod frame_source;
pub mod quantize;
pub mod still_image;

/// `use cdg_internal::prelude::*;` to import commonly used items.
pub mod prelude;

pub use driver::EncoderDriver;
pub use frame_source::{FRAME_BYTE_LEN, FrameSource, VecFrameSource};
pub use quantize::quantize_frame;
pub use still_image::{encode_still_image, random_reveal_mode};

// Re-export cdg_types for convenience.
pub use cdg_types;
