#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `cdg-rs` encodes already-decoded, already-palette-quantized RGB frames
//! into a CD+Graphics (CD+G) subchannel packet stream at a fixed 300
//! packets/second.
//!
//! Video decoding, scaling, palette generation, audio muxing, and CLI
//! concerns are deliberately out of scope — see the `demos/` binaries for
//! how a caller wires a real decoder up to [`EncoderDriver`].
//!
//! # Examples
//!
//! ```rust
//! use cdg_rs::prelude::*;
//!
//! let palette = Palette::new(&[Rgb888::new(0, 0, 0), Rgb888::new(255, 255, 255)]).unwrap();
//! let driver = EncoderDriver::new(palette, EncoderConfig::default()).unwrap();
//! let mut source = VecFrameSource::new(vec![]);
//! let packets = driver.encode(&mut source).unwrap();
//! assert_eq!(packets.len(), 4); // palette + presets, no frames
//! ```

pub use cdg_internal::*;
