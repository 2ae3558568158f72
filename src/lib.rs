// src/lib.rs

//! A six-face cube navigation menu.
//!
//! Each face is a square grid of cubelets holding word-wrapped text and
//! links. The [`Cube`] tracks which face is in front, keeps a back history,
//! and sequences the two-phase rotation between faces on a virtual clock.
//! Drawing, sound and the passage of time are supplied by the host through
//! the [`Surface`], [`AudioCues`] and [`Scheduler`] traits.

pub mod audio;
pub mod cell;
pub mod config;
pub mod cube;
pub mod direction;
pub mod error;
pub mod face;
pub mod link;
pub mod showcase;
pub mod surface;
pub mod timer;

pub use audio::{AudioCues, Cue};
pub use config::Config;
pub use cube::{Action, Cube, Followed, NavigationState};
pub use direction::Direction;
pub use error::CubeError;
pub use face::{Align, Face, FaceState};
pub use surface::{Surface, SurfaceUpdate};
pub use timer::{Scheduler, Timer, TimerQueue};
