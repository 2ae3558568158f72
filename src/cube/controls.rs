// src/cube/controls.rs

//! Entry points for the surrounding page: control buttons, link hrefs and
//! pointer clicks.

use std::str::FromStr;

use log::{debug, info};

use super::Cube;
use crate::audio::{AudioCues, Cue};
use crate::error::CubeError;
use crate::link::{Link, LinkTarget};
use crate::surface::Surface;
use crate::timer::Scheduler;

/// A control button action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Back,
    Home,
    /// Pop about a tenth of the active face.
    Pop,
    PopMore,
    PopAlot,
    /// Toggle all sound.
    Mute,
}

impl Action {
    /// Per-cubelet chance for the pop actions.
    pub fn pop_chance(self) -> Option<f64> {
        match self {
            Action::Pop => Some(0.1),
            Action::PopMore => Some(0.3),
            Action::PopAlot => Some(0.7),
            _ => None,
        }
    }
}

impl FromStr for Action {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "back" => Ok(Action::Back),
            "home" => Ok(Action::Home),
            "pop" => Ok(Action::Pop),
            "popMore" => Ok(Action::PopMore),
            "popAlot" => Ok(Action::PopAlot),
            "mute" => Ok(Action::Mute),
            other => Err(CubeError::UnknownAction(other.to_string())),
        }
    }
}

/// Outcome of following a link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Followed {
    /// An internal link; `true` if a navigation started.
    Navigated(bool),
    /// An external URL for the host to open.
    External(String),
}

impl<V: Surface, A: AudioCues, S: Scheduler> Cube<V, A, S> {
    pub fn perform(&mut self, action: Action) -> Result<(), CubeError> {
        debug!("Cube: action {:?}", action);
        match action {
            Action::Back => {
                self.back()?;
            }
            Action::Home => {
                self.home()?;
            }
            Action::Mute => self.toggle_mute(),
            Action::Pop | Action::PopMore | Action::PopAlot => {
                let chance = action.pop_chance().unwrap_or(self.config.effects.pop_chance);
                self.pop_active(chance)?;
            }
        }
        Ok(())
    }

    /// Pops cubelets of the active face. Returns how many were scheduled.
    pub fn pop_active(&mut self, chance: f64) -> Result<usize, CubeError> {
        let id = self.active.ok_or(CubeError::NoActiveFace)?;
        let count = self.faces[id.0].pop_cubelets(chance, &mut self.services.stage());
        Ok(count)
    }

    /// Flips mute on the audio backend and plays the change cue.
    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
        info!("Cube: sound {}", if self.muted { "muted" } else { "unmuted" });
        self.services.audio.set_muted(self.muted);
        self.services.audio.play(Cue::SfxChange);
    }

    /// Follows an href: `#!name` activates that face, anything else is
    /// returned for the host to open.
    pub fn follow(&mut self, href: &str) -> Result<Followed, CubeError> {
        match LinkTarget::parse(href) {
            LinkTarget::Face(name) => Ok(Followed::Navigated(self.activate(&name)?)),
            LinkTarget::External(url) => Ok(Followed::External(url)),
        }
    }

    /// The link under `(row, col)` of the active face.
    pub fn link_at(&self, row: usize, col: usize) -> Option<&Link> {
        self.active_face()?.link_at(row, col)
    }

    /// Resolves a click at face-relative pixel coordinates and follows the
    /// link under it. Returns `None` when no link was hit.
    pub fn click_px(&mut self, x_px: i64, y_px: i64) -> Result<Option<Followed>, CubeError> {
        let Some((row, col)) = self.geometry.pixels_to_cell(x_px, y_px) else {
            return Ok(None);
        };
        let Some(href) = self.link_at(row, col).map(|l| l.target.to_string()) else {
            return Ok(None);
        };
        self.follow(&href).map(Some)
    }
}
