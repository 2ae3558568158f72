// src/face/effects.rs

//! Face movement and the cubelet pop burst.

use std::time::Duration;

use log::{debug, trace};

use super::Face;
use crate::audio::{AudioCues, Cue};
use crate::cell::CellFlags;
use crate::config::EffectsConfig;
use crate::direction::Direction;
use crate::surface::SurfaceUpdate;
use crate::timer::{Scheduler, Timer};

/// How a face reaches a new position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    /// Jump there without a transition.
    Immediate,
    /// Rotate there with a transition.
    Animated,
}

/// Services a face needs to play effects: audio, timers and randomness,
/// plus the cube's current clock reading.
pub struct Stage<'a> {
    pub audio: &'a mut dyn AudioCues,
    pub scheduler: &'a mut dyn Scheduler,
    pub rng: &'a mut fastrand::Rng,
    pub effects: &'a EffectsConfig,
    pub now: Duration,
}

impl Face {
    /// Places the face at `position`.
    ///
    /// An animated move to the front plays the move cue and pops cubelets
    /// with the configured chance.
    pub fn to(&mut self, position: Direction, motion: Motion, stage: &mut Stage<'_>) -> &mut Self {
        self.position = position;
        self.animated = motion == Motion::Animated;
        self.push_state();

        if motion == Motion::Animated && position == Direction::Front {
            stage.audio.play(Cue::Move);
            let chance = stage.effects.pop_chance;
            self.pop_cubelets(chance, stage);
        }
        self
    }

    /// Pops each cubelet independently with probability `chance`.
    ///
    /// A popped cubelet starts at a random offset within the configured
    /// spread and reverts after the pop duration. The popping cue plays once
    /// per burst. Returns how many pops were scheduled.
    pub fn pop_cubelets(&mut self, chance: f64, stage: &mut Stage<'_>) -> usize {
        stage.audio.play(Cue::Popping);

        let spread = stage.effects.pop_spread_ms.max(1);
        let pop = Duration::from_millis(stage.effects.pop_duration_ms);
        let mut scheduled = 0;
        for cell in &self.cells {
            if stage.rng.f64() >= chance {
                continue;
            }
            let start = stage.now + Duration::from_millis(stage.rng.u64(0..spread));
            let (face, row, col) = (self.id, cell.row, cell.col);
            stage.scheduler.schedule(start, Timer::PopStart { face, row, col });
            stage.scheduler.schedule(start + pop, Timer::PopEnd { face, row, col });
            scheduled += 1;
        }

        debug!(
            "Face '{}': popping {} of {} cubelets (chance {})",
            self.name,
            scheduled,
            self.cells.len(),
            chance
        );
        scheduled
    }

    /// Enters or leaves the pop state of one cubelet.
    pub(crate) fn set_popped(&mut self, row: usize, col: usize, popped: bool) {
        let name = self.name.clone();
        let Some(cell) = self.cell_mut(row, col) else {
            return;
        };
        if cell.flags.contains(CellFlags::POPPED) == popped {
            return;
        }
        cell.flags.set(CellFlags::POPPED, popped);
        trace!("Face '{}': cubelet ({}, {}) popped={}", name, row, col, popped);
        self.pending.push(SurfaceUpdate::CellPop {
            face: name,
            row,
            col,
            popped,
        });
    }
}
