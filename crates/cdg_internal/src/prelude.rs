//! Prelude module for `cdg_internal`.
//!
//! Pulls in the types most callers of the Encoder Driver or Still-Image
//! Encoder need, without requiring separate imports from `cdg_types`.

#[doc(inline)]
pub use crate::{EncoderDriver, FRAME_BYTE_LEN, FrameSource, VecFrameSource, encode_still_image, random_reveal_mode};

#[doc(inline)]
pub use cdg_types::{Block, CdgError, EncoderConfig, Frame, GridExtent, Packet, Palette, RevealMode, Rgb888};
