// src/cube/navigation.rs

//! Activation, back and home navigation, and the two-phase rotation.
//!
//! A transition moves through three phases:
//! 1. `Positioned`: the incoming face is shown, parked at its origin.
//! 2. `Animating`: after the paint delay, the incoming face rotates to the
//!    front while the outgoing face rotates to the opposite of the origin.
//! 3. `Settled`: after the move duration the outgoing face is hidden and the
//!    lock is released.
//!
//! The paint delay exists so the host renders the incoming face at its origin
//! before the rotation starts; without it both steps land in one frame and
//! the face appears to jump.

use std::time::Duration;

use log::{debug, warn};

use super::Cube;
use crate::audio::AudioCues;
use crate::direction::Direction;
use crate::error::CubeError;
use crate::face::{FaceId, Motion};
use crate::surface::Surface;
use crate::timer::{Scheduler, Timer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Positioned,
    Animating,
    Settled,
}

/// One navigation from `outgoing` to `incoming`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub incoming: FaceId,
    /// `None` when no face was active yet.
    pub outgoing: Option<FaceId>,
    /// Where the incoming face enters from.
    pub origin: Direction,
    pub phase: Phase,
}

/// Snapshot of the navigation state, handed to the active-changed callback.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavigationState {
    pub index: Option<String>,
    pub active: Option<String>,
    pub leaving: Option<String>,
    /// Oldest first.
    pub history: Vec<String>,
    pub locked: bool,
}

impl NavigationState {
    /// Whether a back control has anywhere to go.
    pub fn show_back(&self) -> bool {
        !self.history.is_empty()
    }

    /// Whether a home control would change anything.
    pub fn show_home(&self) -> bool {
        self.active != self.index
    }
}

impl<V: Surface, A: AudioCues, S: Scheduler> Cube<V, A, S> {
    pub fn navigation(&self) -> NavigationState {
        NavigationState {
            index: self.index().map(str::to_string),
            active: self.active().map(str::to_string),
            leaving: self.leaving().map(str::to_string),
            history: self.history().into_iter().map(str::to_string).collect(),
            locked: self.is_locked(),
        }
    }

    /// Navigates to `name`, entering from its default origin and recording
    /// the current face in the history.
    pub fn activate(&mut self, name: &str) -> Result<bool, CubeError> {
        self.activate_with(name, None, false)
    }

    /// Navigates to `name`.
    ///
    /// `origin` overrides the face's default origin; `forget` skips the
    /// history push. Returns `Ok(false)` without touching any state when a
    /// transition is in flight or `name` is already active. Dropped calls are
    /// not queued.
    pub fn activate_with(
        &mut self,
        name: &str,
        origin: Option<Direction>,
        forget: bool,
    ) -> Result<bool, CubeError> {
        let id = self.face_id(name)?;
        if self.is_locked() {
            debug!("Cube: transition in flight, dropping activation of '{}'", name);
            return Ok(false);
        }
        if self.active == Some(id) {
            debug!("Cube: '{}' is already active", name);
            return Ok(false);
        }

        let origin = origin.unwrap_or_else(|| self.faces[id.0].origin());
        if !forget {
            if let Some(current) = self.active {
                self.history.push(current);
            }
        }
        self.leaving = self.active;
        self.active = Some(id);
        self.transition = Some(Transition {
            incoming: id,
            outgoing: self.leaving,
            origin,
            phase: Phase::Positioned,
        });
        debug!(
            "Cube: activating '{}' from {} (leaving {:?})",
            name,
            origin,
            self.leaving()
        );

        self.notify_active_changed();

        let face = &mut self.faces[id.0];
        face.to(origin, Motion::Immediate, &mut self.services.stage());
        face.show();

        let at = self.services.now + Duration::from_millis(self.config.navigation.paint_delay_ms);
        self.services.scheduler.schedule(at, Timer::BeginMove);
        self.flush();
        Ok(true)
    }

    /// Pops the previous face off the history and returns to it, entering
    /// from the opposite of the current face's origin. Does nothing with an
    /// empty history.
    ///
    /// The pop happens before activation, so while a transition is in flight
    /// the entry is consumed even though the activation itself is dropped.
    pub fn back(&mut self) -> Result<bool, CubeError> {
        if self.history.is_empty() {
            return Ok(false);
        }
        let current = self.active.ok_or(CubeError::NoActiveFace)?;
        let origin = self.faces[current.0].origin().opposite();
        let Some(previous) = self.history.pop() else {
            return Ok(false);
        };
        let name = self.faces[previous.0].name().to_string();
        self.activate_with(&name, Some(origin), true)
    }

    /// Clears the history and returns to the index face, entering from the
    /// opposite of the current face's origin.
    ///
    /// The history is cleared even when the activation is dropped because a
    /// transition is in flight or the index face is already active.
    pub fn home(&mut self) -> Result<bool, CubeError> {
        let index = self.index.ok_or(CubeError::NoIndexFace)?;
        let current = self.active.ok_or(CubeError::NoActiveFace)?;
        self.history.clear();
        let origin = self.faces[current.0].origin().opposite();
        let name = self.faces[index.0].name().to_string();
        self.activate_with(&name, Some(origin), true)
    }

    /// Second phase: rotate both faces.
    pub(super) fn begin_move(&mut self) {
        let Some(transition) = self.transition.as_mut() else {
            warn!("Cube: move timer fired with no transition");
            return;
        };
        if transition.phase != Phase::Positioned {
            warn!("Cube: stale move timer in phase {:?}", transition.phase);
            return;
        }
        transition.phase = Phase::Animating;
        let (incoming, outgoing, origin) = (transition.incoming, transition.outgoing, transition.origin);

        self.faces[incoming.0].to(Direction::Front, Motion::Animated, &mut self.services.stage());
        if let Some(outgoing) = outgoing {
            self.faces[outgoing.0].to(origin.opposite(), Motion::Animated, &mut self.services.stage());
        }

        let at = self.services.now + Duration::from_millis(self.config.navigation.move_duration_ms);
        self.services.scheduler.schedule(at, Timer::Settle);
    }

    /// Third phase: hide the outgoing face and release the lock.
    pub(super) fn settle(&mut self) {
        let Some(transition) = self.transition.as_mut() else {
            warn!("Cube: settle timer fired with no transition");
            return;
        };
        if transition.phase != Phase::Animating {
            warn!("Cube: stale settle timer in phase {:?}", transition.phase);
            return;
        }
        transition.phase = Phase::Settled;
        let (incoming, outgoing) = (transition.incoming, transition.outgoing);

        if let Some(outgoing) = outgoing {
            self.faces[outgoing.0].hide();
        }
        self.faces[incoming.0].settle();
        debug!("Cube: settled on '{}'", self.faces[incoming.0].name());
    }
}
