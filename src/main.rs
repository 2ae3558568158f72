// src/main.rs

//! Headless driver for the stock cube menu.
//!
//! Builds the showcase faces, then replays the navigation steps given on the
//! command line, letting every transition settle and printing the face in
//! front after each one. A step is a control action (`back`, `home`, `pop`,
//! `popMore`, `popAlot`, `mute`), an href (`#!about`, `http://...`) or a bare
//! face name.

use anyhow::Context;
use log::{info, trace, warn};

use rdcube::config::CONFIG;
use rdcube::{showcase, Action, AudioCues, Cube, Cue, Followed, Surface, SurfaceUpdate};

/// Logs updates instead of drawing them.
#[derive(Default)]
struct LogSurface {
    applied: usize,
}

impl Surface for LogSurface {
    fn apply(&mut self, update: SurfaceUpdate) {
        self.applied += 1;
        match &update {
            SurfaceUpdate::FaceState { face, state } => info!("Surface: '{}' -> {:?}", face, state),
            other => trace!("Surface: {:?}", other),
        }
    }
}

/// Logs cues instead of playing them.
#[derive(Default)]
struct LogAudio {
    muted: bool,
}

impl AudioCues for LogAudio {
    fn play(&mut self, cue: Cue) {
        if !self.muted {
            info!("Audio: {}", cue);
        }
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }
}

fn print_active(cube: &Cube<LogSurface, LogAudio>) {
    let Some(face) = cube.active_face() else {
        warn!("No active face to print");
        return;
    };
    let width = face.geometry().cubes_per_side;
    println!("+{}+ {}", "-".repeat(width), face.name());
    for line in face.lines() {
        println!("|{}|", line);
    }
    println!("+{}+", "-".repeat(width));
}

fn run_step(cube: &mut Cube<LogSurface, LogAudio>, step: &str) -> anyhow::Result<()> {
    if let Ok(action) = step.parse::<Action>() {
        cube.perform(action)
            .with_context(|| format!("Action '{}' failed", step))?;
        return Ok(());
    }

    let href = if step.contains(':') || step.starts_with('#') {
        step.to_string()
    } else {
        format!("{}{}", rdcube::link::FACE_LINK_PREFIX, step)
    };
    match cube
        .follow(&href)
        .with_context(|| format!("Failed to follow '{}'", href))?
    {
        Followed::Navigated(true) => {}
        Followed::Navigated(false) => warn!("Navigation to '{}' was dropped", href),
        Followed::External(url) => println!("external link: {}", url),
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    // Initialize the logger. Default filter is "info" if RUST_LOG is not set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    info!("Starting rdcube...");

    let mut cube = Cube::new(CONFIG.clone(), LogSurface::default(), LogAudio::default());
    cube.on_active_changed(|nav| {
        info!(
            "Active face: {:?} (back {}, home {})",
            nav.active,
            if nav.show_back() { "shown" } else { "hidden" },
            if nav.show_home() { "shown" } else { "hidden" }
        );
    });
    showcase::build(&mut cube).context("Failed to build showcase faces")?;
    print_active(&cube);

    for step in std::env::args().skip(1) {
        run_step(&mut cube, &step)?;
        cube.run_until_idle();
        print_active(&cube);
    }

    info!(
        "Done at {:?}, {} surface updates applied",
        cube.now(),
        cube.surface().applied
    );
    Ok(())
}
