//! The Palette Codec: converts a [`Palette`] into the two `Load Color Table` packets.

use crate::color::Palette;
use crate::packet::{self, Packet};

/// Emits `Load Color Table Low` (indices 0..8) and `Load Color Table High`
/// (indices 8..16), converting each entry to RGB-444 with round-to-nearest,
/// clamp-to-15 per channel.
pub fn encode_palette(palette: &Palette) -> (Packet, Packet) {
	let entries = palette.entries();

	let mut low = [(0u8, 0u8, 0u8); 8];
	for (i, slot) in low.iter_mut().enumerate() {
		*slot = entries[i].to_444();
	}

	let mut high = [(0u8, 0u8, 0u8); 8];
	for (i, slot) in high.iter_mut().enumerate() {
		*slot = entries[8 + i].to_444();
	}

	(packet::load_color_table_low(&low), packet::load_color_table_high(&high))
}
