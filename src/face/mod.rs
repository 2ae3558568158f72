// src/face/mod.rs

//! One face of the cube: a square grid of cubelets, a writing cursor, and the
//! face's half of every rotation.

pub mod cursor;
mod effects;
pub mod geometry;
mod layout;

pub use cursor::{Align, Cursor};
pub use effects::{Motion, Stage};
pub use geometry::Geometry;

use log::{debug, trace};

use crate::cell::{Cell, LinkId};
use crate::direction::Direction;
use crate::link::Link;
use crate::surface::SurfaceUpdate;

/// Stable handle of a face within its cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FaceId(pub usize);

/// What the surface should show for a face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceState {
    /// Parked at a position with no animation. `Positioned(Front)` is the resting visible face.
    Positioned(Direction),
    /// Rotating into the front position.
    Entering,
    /// Rotating out towards the given position.
    Exiting(Direction),
    /// Not rendered at all.
    Hidden,
}

/// A face of the cube and its content.
#[derive(Debug)]
pub struct Face {
    id: FaceId,
    name: String,
    origin: Direction,
    geometry: Geometry,
    padding: usize,
    /// Row-major, `cubes_per_side²` cubelets.
    cells: Vec<Cell>,
    cursor: Cursor,
    links: Vec<Link>,
    position: Direction,
    animated: bool,
    visible: bool,
    /// Updates not yet handed to the surface.
    pending: Vec<SurfaceUpdate>,
}

impl Face {
    /// Allocates the cubelet grid and queues its creation on the surface.
    ///
    /// The cursor starts at `(padding, padding)`.
    pub fn new(id: FaceId, name: &str, origin: Direction, geometry: Geometry, padding: usize) -> Self {
        let n = geometry.cubes_per_side;
        let cells: Vec<Cell> = (0..n * n).map(|i| Cell::new(i / n, i % n)).collect();
        let placements = cells
            .iter()
            .map(|c| geometry.placement(c.row, c.col))
            .collect();

        debug!(
            "Face '{}': {}x{} cubelets of {}px, origin {}",
            name, n, n, geometry.cubelet_px, origin
        );

        Face {
            id,
            name: name.to_string(),
            origin,
            geometry,
            padding,
            cells,
            cursor: Cursor::new(padding, padding),
            links: Vec::new(),
            position: origin,
            animated: false,
            visible: true,
            pending: vec![SurfaceUpdate::CreateFace {
                face: name.to_string(),
                cubes_per_side: n,
                cells: placements,
            }],
        }
    }

    pub fn id(&self) -> FaceId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Default direction this face enters from.
    pub fn origin(&self) -> Direction {
        self.origin
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn padding(&self) -> usize {
        self.padding
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn link(&self, id: LinkId) -> Option<&Link> {
        self.links.get(id)
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Returns the cubelet at `(row, col)`, or `None` outside the grid.
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        let n = self.geometry.cubes_per_side;
        if row >= n || col >= n {
            return None;
        }
        self.cells.get(row * n + col)
    }

    pub(crate) fn cell_mut(&mut self, row: usize, col: usize) -> Option<&mut Cell> {
        let n = self.geometry.cubes_per_side;
        if row >= n || col >= n {
            return None;
        }
        self.cells.get_mut(row * n + col)
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// The link covering `(row, col)`, if any.
    pub fn link_at(&self, row: usize, col: usize) -> Option<&Link> {
        self.cell(row, col)
            .and_then(|c| c.link)
            .and_then(|id| self.links.get(id))
    }

    /// The visual state derived from position, animation and visibility.
    pub fn state(&self) -> FaceState {
        if !self.visible {
            FaceState::Hidden
        } else if !self.animated {
            FaceState::Positioned(self.position)
        } else if self.position == Direction::Front {
            FaceState::Entering
        } else {
            FaceState::Exiting(self.position)
        }
    }

    pub fn show(&mut self) -> &mut Self {
        if !self.visible {
            self.visible = true;
            self.push_state();
        }
        self
    }

    pub fn hide(&mut self) -> &mut Self {
        if self.visible {
            self.visible = false;
            self.push_state();
        }
        self
    }

    /// Ends any animation, leaving the face parked where it is.
    pub(crate) fn settle(&mut self) {
        if self.animated {
            self.animated = false;
            self.push_state();
        }
    }

    /// Renders the grid as text, one string per row, blanks as spaces.
    pub fn lines(&self) -> Vec<String> {
        self.cells
            .chunks(self.geometry.cubes_per_side.max(1))
            .map(|row| row.iter().map(|c| c.to_string()).collect())
            .collect()
    }

    /// Drains the updates produced since the last call.
    pub(crate) fn take_updates(&mut self) -> Vec<SurfaceUpdate> {
        std::mem::take(&mut self.pending)
    }

    fn push_state(&mut self) {
        let state = self.state();
        trace!("Face '{}': state {:?}", self.name, state);
        self.pending.push(SurfaceUpdate::FaceState {
            face: self.name.clone(),
            state,
        });
    }
}

#[cfg(test)]
mod tests;
