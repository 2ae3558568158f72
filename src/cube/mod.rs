// src/cube/mod.rs

//! The cube: a named set of faces, the active/leaving pair, navigation
//! history, and the transition lock.
//!
//! The cube is a single-threaded state machine. Navigation starts a
//! transition and schedules its remaining phases on the `Scheduler`; the host
//! drives time with [`Cube::advance`]. While a transition is in flight every
//! further navigation is dropped.

mod controls;
mod navigation;

pub use controls::{Action, Followed};
pub use navigation::{NavigationState, Phase, Transition};

use std::collections::HashMap;
use std::time::Duration;

use log::{debug, info, trace, warn};

use crate::audio::AudioCues;
use crate::config::{Config, EffectsConfig};
use crate::direction::Direction;
use crate::error::CubeError;
use crate::face::{Face, FaceId, Geometry, Motion, Stage};
use crate::surface::Surface;
use crate::timer::{Scheduler, Timer, TimerQueue};

type ActiveChanged = Box<dyn FnMut(&NavigationState)>;

/// Collaborators faces borrow while playing effects.
struct Services<A, S> {
    audio: A,
    scheduler: S,
    rng: fastrand::Rng,
    effects: EffectsConfig,
    now: Duration,
}

impl<A: AudioCues, S: Scheduler> Services<A, S> {
    fn stage(&mut self) -> Stage<'_> {
        Stage {
            audio: &mut self.audio,
            scheduler: &mut self.scheduler,
            rng: &mut self.rng,
            effects: &self.effects,
            now: self.now,
        }
    }
}

/// A navigable cube of faces.
pub struct Cube<V: Surface, A: AudioCues, S: Scheduler = TimerQueue> {
    config: Config,
    geometry: Geometry,
    faces: Vec<Face>,
    names: HashMap<String, FaceId>,
    index: Option<FaceId>,
    active: Option<FaceId>,
    leaving: Option<FaceId>,
    history: Vec<FaceId>,
    transition: Option<Transition>,
    muted: bool,
    on_active: Option<ActiveChanged>,
    surface: V,
    services: Services<A, S>,
}

impl<V: Surface, A: AudioCues> Cube<V, A, TimerQueue> {
    /// Creates an empty cube driven by the built-in timer queue.
    pub fn new(config: Config, surface: V, audio: A) -> Self {
        Self::with_scheduler(config, surface, audio, TimerQueue::new())
    }
}

impl<V: Surface, A: AudioCues, S: Scheduler> Cube<V, A, S> {
    pub fn with_scheduler(config: Config, surface: V, audio: A, scheduler: S) -> Self {
        let geometry = Geometry::new(config.grid.cubes_per_side, config.cubelet_px());
        let rng = match config.effects.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };
        info!(
            "Cube: {} cubelets per side, {}px each",
            geometry.cubes_per_side, geometry.cubelet_px
        );

        Cube {
            geometry,
            faces: Vec::new(),
            names: HashMap::new(),
            index: None,
            active: None,
            leaving: None,
            history: Vec::new(),
            transition: None,
            muted: false,
            on_active: None,
            surface,
            services: Services {
                audio,
                scheduler,
                rng,
                effects: config.effects.clone(),
                now: Duration::ZERO,
            },
            config,
        }
    }

    /// Registers a callback run after every started navigation, e.g. to show
    /// or hide back/home controls.
    pub fn on_active_changed(&mut self, callback: impl FnMut(&NavigationState) + 'static) {
        self.on_active = Some(Box::new(callback));
    }

    /// Adds a face and returns it for content building.
    ///
    /// `origin` defaults to the configured default origin. The first face
    /// added with `is_index` becomes the home face: it is active and parked at
    /// the front immediately. Every other face starts hidden.
    pub fn add_side(
        &mut self,
        name: &str,
        origin: Option<Direction>,
        is_index: bool,
    ) -> Result<&mut Face, CubeError> {
        if self.names.contains_key(name) {
            return Err(CubeError::DuplicateFace(name.to_string()));
        }

        let id = FaceId(self.faces.len());
        let origin = origin.unwrap_or(self.config.navigation.default_origin);
        let mut face = Face::new(id, name, origin, self.geometry, self.config.layout.padding);

        if is_index && self.index.is_none() {
            self.index = Some(id);
            self.active = Some(id);
            face.to(Direction::Front, Motion::Immediate, &mut self.services.stage());
            info!("Cube: index face '{}'", name);
        } else {
            face.hide();
        }

        self.names.insert(name.to_string(), id);
        self.faces.push(face);
        Ok(&mut self.faces[id.0])
    }

    pub fn side(&self, name: &str) -> Option<&Face> {
        self.names.get(name).map(|id| &self.faces[id.0])
    }

    pub fn side_mut(&mut self, name: &str) -> Option<&mut Face> {
        let id = *self.names.get(name)?;
        Some(&mut self.faces[id.0])
    }

    pub fn faces(&self) -> impl Iterator<Item = &Face> {
        self.faces.iter()
    }

    pub fn active_face(&self) -> Option<&Face> {
        self.active.map(|id| &self.faces[id.0])
    }

    pub fn active(&self) -> Option<&str> {
        self.name_of(self.active)
    }

    pub fn leaving(&self) -> Option<&str> {
        self.name_of(self.leaving)
    }

    pub fn index(&self) -> Option<&str> {
        self.name_of(self.index)
    }

    /// Face names to return to, oldest first.
    pub fn history(&self) -> Vec<&str> {
        self.history.iter().map(|id| self.faces[id.0].name()).collect()
    }

    /// True while a transition is in flight.
    pub fn is_locked(&self) -> bool {
        self.transition
            .as_ref()
            .is_some_and(|t| t.phase != Phase::Settled)
    }

    /// The current or most recent transition.
    pub fn transition(&self) -> Option<&Transition> {
        self.transition.as_ref()
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Current reading of the cube's clock.
    pub fn now(&self) -> Duration {
        self.services.now
    }

    pub fn surface(&self) -> &V {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut V {
        &mut self.surface
    }

    pub fn audio(&self) -> &A {
        &self.services.audio
    }

    pub fn audio_mut(&mut self) -> &mut A {
        &mut self.services.audio
    }

    pub fn scheduler(&self) -> &S {
        &self.services.scheduler
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Moves the clock forward by `elapsed`, firing every timer that comes due
    /// in deadline order, then hands pending updates to the surface.
    pub fn advance(&mut self, elapsed: Duration) {
        let target = self.services.now + elapsed;
        while let Some((at, timer)) = self.services.scheduler.pop_due(target) {
            self.services.now = self.services.now.max(at);
            self.fire(timer);
        }
        self.services.now = target;
        self.flush();
    }

    /// Advances until no timer is pending: transitions settle and pops revert.
    pub fn run_until_idle(&mut self) {
        while let Some(at) = self.services.scheduler.next_deadline() {
            let elapsed = at.saturating_sub(self.services.now);
            self.advance(elapsed);
        }
        self.flush();
    }

    /// Hands every face's pending updates to the surface, oldest face first.
    pub fn flush(&mut self) {
        for face in &mut self.faces {
            for update in face.take_updates() {
                self.surface.apply(update);
            }
        }
    }

    fn fire(&mut self, timer: Timer) {
        trace!("Cube: firing {:?} at {:?}", timer, self.services.now);
        match timer {
            Timer::BeginMove => self.begin_move(),
            Timer::Settle => self.settle(),
            Timer::PopStart { face, row, col } => self.set_popped(face, row, col, true),
            Timer::PopEnd { face, row, col } => self.set_popped(face, row, col, false),
        }
    }

    fn set_popped(&mut self, face: FaceId, row: usize, col: usize, popped: bool) {
        match self.faces.get_mut(face.0) {
            Some(f) => f.set_popped(row, col, popped),
            None => warn!("Cube: pop timer for unknown face {:?}", face),
        }
    }

    fn face_id(&self, name: &str) -> Result<FaceId, CubeError> {
        self.names
            .get(name)
            .copied()
            .ok_or_else(|| CubeError::UnknownFace(name.to_string()))
    }

    fn name_of(&self, id: Option<FaceId>) -> Option<&str> {
        id.map(|id| self.faces[id.0].name())
    }

    fn notify_active_changed(&mut self) {
        if let Some(mut callback) = self.on_active.take() {
            let state = self.navigation();
            debug!("Cube: active changed to {:?}", state.active);
            callback(&state);
            self.on_active = Some(callback);
        }
    }
}
