// src/face/layout.rs

//! Text layout on a face: aligned runs, greedy word wrap, titles and links.
//!
//! Writes past the grid are clipped: glyphs that fall outside are dropped
//! while the cursor keeps advancing as if they had landed.

use super::{Align, Face};
use crate::cell::CellFlags;
use crate::link::{Link, LinkTarget};
use crate::surface::SurfaceUpdate;
use log::{trace, warn};

impl Face {
    /// Last column (exclusive) text may occupy before wrapping.
    fn wrap_limit(&self) -> usize {
        self.geometry.cubes_per_side.saturating_sub(self.padding)
    }

    /// Writes `text` glyph by glyph from the cursor, after moving the cursor to
    /// the start column for `align`. `None` keeps the current column.
    ///
    /// Returns the `(row, col)` of every cubelet written, in order.
    pub fn write(&mut self, text: &str, align: Option<Align>) -> Vec<(usize, usize)> {
        let len = text.chars().count();
        if let Some(align) = align {
            self.cursor.x = align.start_column(self.geometry.cubes_per_side, self.padding, len);
        }

        let mut affected = Vec::with_capacity(len);
        let mut clipped = 0usize;
        for ch in text.chars() {
            let (row, col) = (self.cursor.y, self.cursor.x);
            let landed = match self.cell_mut(row, col) {
                Some(cell) => {
                    cell.content = Some(ch);
                    true
                }
                None => false,
            };
            if landed {
                affected.push((row, col));
                self.pending.push(SurfaceUpdate::Glyph {
                    face: self.name.clone(),
                    row,
                    col,
                    ch,
                });
            } else {
                clipped += 1;
            }
            self.cursor.x += 1;
        }

        if clipped > 0 {
            warn!(
                "Face '{}': clipped {} of {} glyphs of {:?} outside the {}x{} grid",
                self.name,
                clipped,
                len,
                text,
                self.geometry.cubes_per_side,
                self.geometry.cubes_per_side
            );
        }
        trace!("Face '{}': wrote {:?}, cursor now {:?}", self.name, text, self.cursor);
        affected
    }

    /// Writes `title` centered on the current row, then moves two rows down.
    pub fn add_title(&mut self, title: &str) -> &mut Self {
        self.write(title, Some(Align::Center));
        self.new_line(2)
    }

    /// Writes `text` from the cursor with greedy word wrap.
    ///
    /// Words are split on single spaces and never hyphenated. A word that
    /// would cross the right padding starts a new row first; one blank cubelet
    /// separates words while the row has room.
    pub fn add_text(&mut self, text: &str) -> &mut Self {
        let limit = self.wrap_limit();
        let words: Vec<&str> = text.split(' ').collect();
        for (i, word) in words.iter().enumerate() {
            if self.cursor.x + word.chars().count() > limit {
                self.new_line(1);
            }
            self.write(word, None);
            if i + 1 < words.len() && self.cursor.x < limit {
                self.cursor.x += 1;
            }
        }
        self
    }

    /// Writes a link titled `title` (or `target` when `title` is empty).
    ///
    /// `target` is a URL or `#!name` for another face. The fit check always
    /// measures from the cursor against the right padding, whatever `align`
    /// is; an aligned title that would fit after repositioning can still wrap.
    pub fn add_link(&mut self, target: &str, title: &str, align: Option<Align>) -> &mut Self {
        let title = if title.is_empty() { target } else { title };
        let len = title.chars().count() as isize;
        let room = self.geometry.cubes_per_side as isize - self.padding as isize - len;
        if self.cursor.x as isize > room {
            self.new_line(1);
        }

        let cells = self.write(title, align);
        let id = self.links.len();
        for &(row, col) in &cells {
            if let Some(cell) = self.cell_mut(row, col) {
                cell.link = Some(id);
                cell.flags.insert(CellFlags::LINKED);
            }
        }

        let target = LinkTarget::parse(target);
        self.pending.push(SurfaceUpdate::Link {
            face: self.name.clone(),
            link: id,
            target: target.clone(),
            cells: cells.clone(),
        });
        self.links.push(Link {
            target,
            title: title.to_string(),
            cells,
        });
        self
    }

    /// Moves the cursor `count` rows down (at least one) and back to the padding column.
    pub fn new_line(&mut self, count: usize) -> &mut Self {
        self.cursor.y += count.max(1);
        self.cursor.x = self.padding;
        self
    }
}
