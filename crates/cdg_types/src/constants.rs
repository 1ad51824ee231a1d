//! Canvas geometry fixed by the CD+G subchannel specification.

/// Full canvas width in pixels, including the border.
pub const FULL_WIDTH: usize = 300;
/// Full canvas height in pixels, including the border.
pub const FULL_HEIGHT: usize = 216;
/// Visible display width in pixels (border excluded).
pub const DISPLAY_WIDTH: usize = 294;
/// Visible display height in pixels (border excluded).
pub const DISPLAY_HEIGHT: usize = 204;
/// Border width in pixels, one block wide.
pub const BORDER_WIDTH: usize = 6;
/// Border height in pixels, one block tall.
pub const BORDER_HEIGHT: usize = 12;

/// CD+G subchannel packets are delivered at this fixed rate.
pub const PACKETS_PER_SECOND: u32 = 300;

/// Full canvas width in blocks: a 50-column grid.
pub const FULL_WIDTH_BLOCKS: usize = FULL_WIDTH / crate::block::BLOCK_WIDTH;
/// Full canvas height in blocks: an 18-row grid.
pub const FULL_HEIGHT_BLOCKS: usize = FULL_HEIGHT / crate::block::BLOCK_HEIGHT;

/// First display (non-border) block row, inclusive.
pub const DISPLAY_ROW_START: usize = 1;
/// One past the last display block row (16 display rows, 1..=16).
pub const DISPLAY_ROW_END: usize = 17;
/// First display (non-border) block column, inclusive.
pub const DISPLAY_COL_START: usize = 1;
/// One past the last display block column (48 display columns, 1..=48).
pub const DISPLAY_COL_END: usize = 49;
