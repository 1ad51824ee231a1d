//! Core, IO-free data types for a CD+Graphics (CD+G) video encoder.
//!
//! This crate owns the binary packet format, the global 16-entry palette,
//! block packing, frame partitioning, and the inter-frame delta scheduler.
//! It has no file IO, no randomness, and no image-decoding dependencies —
//! those live one layer up, in `cdg_internal`.

pub mod block;
pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod frame;
pub mod packet;
pub mod palette_codec;
pub mod scheduler;

pub use block::{Block, encode_block};
pub use color::{Palette, Rgb888};
pub use config::{EncoderConfig, RevealMode};
pub use error::CdgError;
pub use frame::{Frame, GridExtent, block_coords, squash_to_two_colors};
pub use packet::Packet;
pub use palette_codec::encode_palette;
pub use scheduler::{ShadowCanvas, packets_per_frame, schedule_frame};
