// src/cell.rs

//! Defines the `Cell` type (one cubelet of a face) and its state flags.

use bitflags::bitflags;
use std::fmt;

/// Index of a link within its face's link table.
pub type LinkId = usize;

/// Represents a single cubelet on a face.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
    /// The glyph shown on the cubelet, `None` when blank.
    pub content: Option<char>,
    /// The link this cubelet belongs to, if any.
    pub link: Option<LinkId>,
    pub flags: CellFlags,
}

bitflags! {
    /// Transient and structural cubelet state, mapped to styling by the surface.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct CellFlags: u8 {
        const LINKED = 1 << 0; // Part of a link span.
        const POPPED = 1 << 1; // Mid pop animation.
    }
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Self {
        Cell {
            row,
            col,
            content: None,
            link: None,
            flags: CellFlags::empty(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.content.is_none()
    }

    pub fn is_popped(&self) -> bool {
        self.flags.contains(CellFlags::POPPED)
    }
}

/// Prints the glyph, or a space for blank cubelets.
impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.content.unwrap_or(' '))
    }
}

/// Screen placement of a cubelet inside its face.
///
/// All cubelets share one background image, so each one shows the slice of
/// it under its own position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub top_px: i64,
    pub left_px: i64,
    pub background_x_px: i64,
    pub background_y_px: i64,
}
