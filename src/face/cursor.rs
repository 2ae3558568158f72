// src/face/cursor.rs

//! Writing position on a face.

/// Column/row where the next glyph lands. Zero-based, `x` is the column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub x: usize,
    pub y: usize,
}

impl Cursor {
    pub fn new(x: usize, y: usize) -> Self {
        Cursor { x, y }
    }
}

/// Horizontal placement of a written run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    /// Start at the padding column.
    Left,
    /// End one padding away from the right edge.
    Right,
    /// Center on the row, rounding towards the left.
    Center,
}

impl Align {
    /// Start column for a run of `len` glyphs on a row of `width` cubelets.
    ///
    /// Runs wider than the row start at column 0.
    pub fn start_column(self, width: usize, padding: usize, len: usize) -> usize {
        match self {
            Align::Left => padding,
            Align::Right => width.saturating_sub(padding).saturating_sub(len),
            Align::Center => width.saturating_sub(len) / 2,
        }
    }
}
