// src/audio.rs

//! Named sound cues and the trait the cube plays them through.
//!
//! The cube itself only triggers `Move` and `Popping`; the remaining cues
//! belong to the surrounding page (hover feedback, capability checks) and
//! are listed so one audio backend can serve both.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    CubeletOver,
    LinkOver,
    LinkOut,
    /// A face rotates to the front.
    Move,
    /// A burst of cubelet pops starts.
    Popping,
    SupportOver,
    SupportOut,
    Yes,
    No,
    Link,
    Flash,
    /// Mute was toggled.
    SfxChange,
}

impl Cue {
    /// Asset stem of the sound file backing this cue.
    pub fn asset(self) -> &'static str {
        match self {
            Cue::CubeletOver => "cube_cubelet_over",
            Cue::LinkOver => "cube_link_over",
            Cue::LinkOut => "cube_link_out",
            Cue::Move => "cube_move",
            Cue::Popping => "cube_popping",
            Cue::SupportOver => "support_over",
            Cue::SupportOut => "support_out",
            Cue::Yes => "confirm_yes",
            Cue::No => "confirm_no",
            Cue::Link => "link",
            Cue::Flash => "flash",
            Cue::SfxChange => "sfx_change",
        }
    }
}

impl fmt::Display for Cue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.asset())
    }
}

/// Audio backend the cube plays cues through.
pub trait AudioCues {
    fn play(&mut self, cue: Cue);

    /// Mutes or unmutes every cue. Backends without volume control ignore it.
    fn set_muted(&mut self, _muted: bool) {}
}

/// Plays nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentAudio;

impl AudioCues for SilentAudio {
    fn play(&mut self, cue: Cue) {
        log::trace!("SilentAudio: dropping cue {}", cue);
    }
}

/// Records every cue that would have been audible.
#[derive(Debug, Default, Clone)]
pub struct CueRecorder {
    played: Vec<Cue>,
    muted: bool,
}

impl CueRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn played(&self) -> &[Cue] {
        &self.played
    }

    pub fn count(&self, cue: Cue) -> usize {
        self.played.iter().filter(|c| **c == cue).count()
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn clear(&mut self) {
        self.played.clear();
    }
}

impl AudioCues for CueRecorder {
    fn play(&mut self, cue: Cue) {
        if !self.muted {
            self.played.push(cue);
        }
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recorder_respects_mute() {
        let mut audio = CueRecorder::new();
        audio.play(Cue::Move);
        audio.set_muted(true);
        audio.play(Cue::Popping);
        audio.set_muted(false);
        audio.play(Cue::Popping);
        assert_eq!(audio.played(), &[Cue::Move, Cue::Popping]);
        assert_eq!(audio.count(Cue::Popping), 1);
    }
}
