// src/config.rs

//! Defines the configuration structures for the cube widget.
//!
//! Every section can be deserialized from a JSON file and falls back to the
//! defaults of the stock menu (20 cubelets per side, one cell of padding,
//! faces entering from the right, 700ms rotations).

use std::path::Path;

use anyhow::Context;
use log::{info, warn};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::direction::Direction;

/// Environment variable naming a JSON configuration file.
pub const CONFIG_ENV_VAR: &str = "RDCUBE_CONFIG";

/// Process-wide configuration, resolved once from `RDCUBE_CONFIG`.
pub static CONFIG: Lazy<Config> = Lazy::new(Config::from_env);

// --- Top-Level Configuration Structure ---

/// Represents the complete configuration for a cube.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Grid geometry.
    pub grid: GridConfig,
    /// Text layout settings.
    pub layout: LayoutConfig,
    /// Face rotation settings.
    pub navigation: NavigationConfig,
    /// Cubelet pop effect settings.
    pub effects: EffectsConfig,
}

impl Config {
    /// Reads a configuration from a JSON file. Missing fields take their defaults.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Loads the file named by `RDCUBE_CONFIG`, or the defaults when unset or unreadable.
    pub fn from_env() -> Self {
        match std::env::var(CONFIG_ENV_VAR) {
            Ok(path) => Self::load(&path).unwrap_or_else(|e| {
                warn!("Ignoring {}={}: {:#}", CONFIG_ENV_VAR, path, e);
                Config::default()
            }),
            Err(_) => Config::default(),
        }
    }

    /// Pixel size of a single cubelet, derived from the frame width.
    pub fn cubelet_px(&self) -> usize {
        let cubes = self.grid.cubes_per_side.max(1) as f64;
        (self.grid.side_px as f64 / cubes).round() as usize
    }
}

// --- Grid Configuration ---

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GridConfig {
    /// Number of cubelets along each edge of a face.
    pub cubes_per_side: usize,
    /// Width of the frame hosting the cube, in pixels.
    pub side_px: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        GridConfig {
            cubes_per_side: 20,
            side_px: 400,
        }
    }
}

// --- Layout Configuration ---

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LayoutConfig {
    /// Empty cells kept between the face edge and its text.
    pub padding: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig { padding: 1 }
    }
}

// --- Navigation Configuration ---

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NavigationConfig {
    /// Direction a face enters from when it was added without an explicit origin.
    pub default_origin: Direction,
    /// Length of the rotation animation. The transition lock is held this long.
    pub move_duration_ms: u64,
    /// Gap between showing the incoming face off-screen and starting the rotation,
    /// so the host paints the face at its origin first.
    pub paint_delay_ms: u64,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        NavigationConfig {
            default_origin: Direction::Right,
            move_duration_ms: 700,
            paint_delay_ms: 30,
        }
    }
}

// --- Effects Configuration ---

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EffectsConfig {
    /// How long a single cubelet stays popped.
    pub pop_duration_ms: u64,
    /// Pops start at a random offset in `[0, pop_spread_ms)`.
    pub pop_spread_ms: u64,
    /// Per-cubelet pop probability used when a face rotates to the front.
    pub pop_chance: f64,
    /// Seed for the pop RNG. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        EffectsConfig {
            pop_duration_ms: 100,
            pop_spread_ms: 1000,
            pop_chance: 0.1,
            seed: None,
        }
    }
}
