// src/face/tests.rs

//! Unit tests for face layout and effects.

use super::*;
use crate::audio::{Cue, CueRecorder};
use crate::config::EffectsConfig;
use crate::link::LinkTarget;
use crate::timer::{Scheduler, Timer, TimerQueue};
use std::time::Duration;
use test_log::test;

// --- Test Helpers ---

fn new_face(cubes_per_side: usize, padding: usize) -> Face {
    Face::new(
        FaceId(0),
        "test",
        Direction::Right,
        Geometry::new(cubes_per_side, 20),
        padding,
    )
}

/// Row `y` as a string, blanks as spaces.
fn row(face: &Face, y: usize) -> String {
    face.lines()[y].clone()
}

/// Glyphs of a row with the padding-trimmed blanks removed from both ends.
fn row_text(face: &Face, y: usize) -> String {
    row(face, y).trim().to_string()
}

struct Services {
    audio: CueRecorder,
    timers: TimerQueue,
    rng: fastrand::Rng,
    effects: EffectsConfig,
}

impl Services {
    fn new(seed: u64) -> Self {
        Services {
            audio: CueRecorder::new(),
            timers: TimerQueue::new(),
            rng: fastrand::Rng::with_seed(seed),
            effects: EffectsConfig::default(),
        }
    }

    fn stage(&mut self) -> Stage<'_> {
        Stage {
            audio: &mut self.audio,
            scheduler: &mut self.timers,
            rng: &mut self.rng,
            effects: &self.effects,
            now: Duration::ZERO,
        }
    }
}

// --- Construction ---

#[test]
fn new_face_is_blank_with_cursor_at_padding() {
    let mut face = new_face(20, 1);
    assert_eq!(face.cells().count(), 400);
    assert!(face.cells().all(|c| c.is_blank()));
    assert_eq!(face.cursor(), Cursor::new(1, 1));

    let updates = face.take_updates();
    assert_eq!(updates.len(), 1);
    match &updates[0] {
        SurfaceUpdate::CreateFace { face, cubes_per_side, cells } => {
            assert_eq!(face, "test");
            assert_eq!(*cubes_per_side, 20);
            assert_eq!(cells.len(), 400);
            // Row-major: index 21 is row 1, col 1
            assert_eq!((cells[21].left_px, cells[21].top_px), (20, 20));
            assert_eq!(cells[21].background_x_px, -20);
        }
        other => panic!("expected CreateFace, got {:?}", other),
    }
}

// --- Layout ---

#[test]
fn write_aligns_and_returns_touched_cells() {
    let mut face = new_face(20, 1);

    let cells = face.write("abc", Some(Align::Right));
    assert_eq!(cells, vec![(1, 16), (1, 17), (1, 18)]);
    assert_eq!(face.cursor().x, 19);

    face.new_line(1);
    let cells = face.write("ab", None);
    assert_eq!(cells, vec![(2, 1), (2, 2)]);
    assert_eq!(face.cell(2, 1).unwrap().content, Some('a'));
}

#[test]
fn title_and_text_scenario() {
    let mut face = new_face(20, 1);
    face.add_title("About");
    assert_eq!(row(&face, 1), "       About        ");
    assert_eq!(face.cursor(), Cursor::new(1, 3));

    face.add_text("Hello world");
    assert_eq!(row(&face, 3), " Hello world        ");
    assert_eq!(face.cursor(), Cursor::new(12, 3));
}

#[test]
fn add_text_wraps_whole_words() {
    let mut face = new_face(20, 1);
    face.add_text("Riddick game cube menu navigation in HTML, CSS, and JavaScript");

    assert_eq!(row_text(&face, 1), "Riddick game cube");
    assert_eq!(row_text(&face, 2), "menu navigation in");
    assert_eq!(row_text(&face, 3), "HTML, CSS, and");
    assert_eq!(row_text(&face, 4), "JavaScript");
}

#[test]
fn wrapped_text_rejoins_to_input() {
    let text = "Clicking on Loop link below cycles through About and Loop sections";
    let mut face = new_face(20, 1);
    face.add_text(text);

    let rebuilt: Vec<String> = face
        .lines()
        .iter()
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty())
        .collect();
    assert_eq!(rebuilt.join(" "), text);

    // Every written row starts at the padding column
    for line in face.lines().iter().filter(|l| !l.trim().is_empty()) {
        assert!(line.starts_with(' '));
        assert!(!line[1..].starts_with(' '));
    }
}

#[test]
fn word_filling_the_row_skips_trailing_space() {
    let mut face = new_face(10, 1);
    // "abcdefgh" ends exactly at the limit (col 9); no gap is added
    face.add_text("abcdefgh xy");
    assert_eq!(row_text(&face, 1), "abcdefgh");
    assert_eq!(row_text(&face, 2), "xy");
}

#[test]
fn new_line_zero_still_advances() {
    let mut face = new_face(20, 2);
    face.write("x", None);
    face.new_line(0);
    assert_eq!(face.cursor(), Cursor::new(2, 3));
}

#[test]
fn add_link_wraps_the_link_cells() {
    let mut face = new_face(20, 1);
    face.add_text("-").add_link("http://www.gog.com/", "GOG.com", None);

    assert_eq!(row_text(&face, 1), "-GOG.com");
    let link = &face.links()[0];
    assert_eq!(link.target, LinkTarget::External("http://www.gog.com/".into()));
    assert_eq!(link.cells.first(), Some(&(1, 2)));
    assert_eq!(link.cells.len(), 7);
    assert!(face.link_at(1, 5).is_some());
    assert!(face.link_at(1, 1).is_none());
    assert!(face.cell(1, 2).unwrap().flags.contains(crate::cell::CellFlags::LINKED));
}

#[test]
fn add_link_defaults_title_to_target() {
    let mut face = new_face(20, 1);
    face.add_link("#!about", "", Some(Align::Center));
    let link = &face.links()[0];
    assert_eq!(link.title, "#!about");
    assert_eq!(link.target, LinkTarget::Face("about".into()));
    // 7 glyphs centered on 20 columns
    assert_eq!(link.cells.first(), Some(&(1, 6)));
}

#[test]
fn add_link_fit_check_ignores_alignment() {
    let mut face = new_face(20, 1);
    face.write("0123456789abcde", None);
    // Cursor at 16; "Loop" centered would fit at col 8, but the check uses the cursor.
    face.add_link("#!loop", "Loop", Some(Align::Center));
    assert_eq!(face.links()[0].cells.first(), Some(&(2, 8)));
}

#[test]
fn writes_past_the_grid_are_clipped() {
    let mut face = new_face(5, 1);
    let cells = face.write("abcdefg", None);
    assert_eq!(cells.len(), 4);
    assert_eq!(face.cursor().x, 8);

    face.new_line(10);
    assert!(face.write("zz", None).is_empty());
    assert_eq!(face.cells().filter(|c| !c.is_blank()).count(), 4);
}

// --- Effects ---

#[test]
fn animated_move_to_front_pops_and_plays_move() {
    let mut face = new_face(20, 1);
    let mut services = Services::new(7);

    face.to(Direction::Front, Motion::Animated, &mut services.stage());
    assert_eq!(face.state(), FaceState::Entering);
    assert_eq!(services.audio.played(), &[Cue::Move, Cue::Popping]);
    // Every pop schedules a start and an end
    assert_eq!(services.timers.pending() % 2, 0);
}

#[test]
fn immediate_and_exit_moves_are_silent() {
    let mut face = new_face(20, 1);
    let mut services = Services::new(7);

    face.to(Direction::Left, Motion::Immediate, &mut services.stage());
    assert_eq!(face.state(), FaceState::Positioned(Direction::Left));
    face.to(Direction::Right, Motion::Animated, &mut services.stage());
    assert_eq!(face.state(), FaceState::Exiting(Direction::Right));
    face.hide();
    assert_eq!(face.state(), FaceState::Hidden);

    assert!(services.audio.played().is_empty());
    assert_eq!(services.timers.pending(), 0);
}

#[test]
fn pop_chance_bounds() {
    let mut face = new_face(10, 1);
    let mut services = Services::new(1);

    assert_eq!(face.pop_cubelets(0.0, &mut services.stage()), 0);
    assert_eq!(face.pop_cubelets(1.0, &mut services.stage()), 100);
    assert_eq!(services.timers.pending(), 200);
    assert_eq!(services.audio.count(Cue::Popping), 2);
}

#[test]
fn pops_start_within_spread_and_last_pop_duration() {
    let mut face = new_face(6, 1);
    let mut services = Services::new(42);
    face.pop_cubelets(1.0, &mut services.stage());

    let mut starts = std::collections::HashMap::new();
    while let Some((at, timer)) = services.timers.pop_due(Duration::from_secs(10)) {
        match timer {
            Timer::PopStart { row, col, .. } => {
                assert!(at < Duration::from_millis(1000));
                starts.insert((row, col), at);
            }
            Timer::PopEnd { row, col, .. } => {
                assert_eq!(at - starts[&(row, col)], Duration::from_millis(100));
            }
            other => panic!("unexpected timer {:?}", other),
        }
    }
    assert_eq!(starts.len(), 36);
}

#[test]
fn set_popped_emits_only_changes() {
    let mut face = new_face(4, 1);
    face.take_updates();
    face.set_popped(1, 1, true);
    face.set_popped(1, 1, true);
    assert!(face.cell(1, 1).unwrap().is_popped());
    face.set_popped(1, 1, false);
    face.set_popped(9, 9, true);
    assert_eq!(face.take_updates().len(), 2);
}
