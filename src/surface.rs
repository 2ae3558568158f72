// src/surface.rs

//! Message protocol between the cube and whatever draws it.
//!
//! The cube never touches a visual tree directly. Every visible change is a
//! `SurfaceUpdate`; the surface maps faces to elements, `FaceState` to
//! position/transition styling, and pop flags to cubelet styling.

use crate::cell::{LinkId, Placement};
use crate::face::FaceState;
use crate::link::LinkTarget;

/// A visible change requested by the cube.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceUpdate {
    /// A face was added. `cells` holds one placement per cubelet, row-major.
    CreateFace {
        face: String,
        cubes_per_side: usize,
        cells: Vec<Placement>,
    },

    /// A glyph was written into a cubelet.
    Glyph {
        face: String,
        row: usize,
        col: usize,
        ch: char,
    },

    /// The listed cubelets were wrapped in a link.
    Link {
        face: String,
        link: LinkId,
        target: LinkTarget,
        cells: Vec<(usize, usize)>,
    },

    /// A face moved, started animating, or was shown or hidden.
    FaceState { face: String, state: FaceState },

    /// A cubelet entered or left its pop animation.
    CellPop {
        face: String,
        row: usize,
        col: usize,
        popped: bool,
    },
}

impl SurfaceUpdate {
    pub fn face(&self) -> &str {
        match self {
            SurfaceUpdate::CreateFace { face, .. }
            | SurfaceUpdate::Glyph { face, .. }
            | SurfaceUpdate::Link { face, .. }
            | SurfaceUpdate::FaceState { face, .. }
            | SurfaceUpdate::CellPop { face, .. } => face,
        }
    }
}

/// Receives visual updates from the cube.
pub trait Surface {
    fn apply(&mut self, update: SurfaceUpdate);
}

/// Keeps every update for later inspection.
#[derive(Debug, Default, Clone)]
pub struct RecordingSurface {
    updates: Vec<SurfaceUpdate>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn updates(&self) -> &[SurfaceUpdate] {
        &self.updates
    }

    pub fn take(&mut self) -> Vec<SurfaceUpdate> {
        std::mem::take(&mut self.updates)
    }

    /// Face states applied to `face`, oldest first.
    pub fn face_states(&self, face: &str) -> Vec<FaceState> {
        self.updates
            .iter()
            .filter_map(|u| match u {
                SurfaceUpdate::FaceState { face: f, state } if f == face => Some(*state),
                _ => None,
            })
            .collect()
    }

    /// The most recent state applied to `face`.
    pub fn last_face_state(&self, face: &str) -> Option<FaceState> {
        self.face_states(face).last().copied()
    }
}

impl Surface for RecordingSurface {
    fn apply(&mut self, update: SurfaceUpdate) {
        self.updates.push(update);
    }
}

/// Discards every update.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSurface;

impl Surface for NullSurface {
    fn apply(&mut self, _update: SurfaceUpdate) {}
}
