//! Data-driven game tuning
//!
//! Every process-wide tunable lives here. A `Tuning` is read once at startup
//! and handed by reference to whatever needs it.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Environment variable naming an optional JSON tuning file
pub const TUNING_ENV_VAR: &str = "TOWNWALK_TUNING";

/// Game tuning values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Display ===
    pub viewport_width: f32,
    pub viewport_height: f32,
    /// Frame rate cap (0 = uncapped)
    pub fps_cap: u32,

    // === World ===
    pub world_width: u32,
    pub world_height: u32,
    /// Houses requested from placement (best effort)
    pub house_count: usize,
    pub max_placement_attempts: u32,

    // === Character ===
    pub speed: f32,
    pub acceleration: f32,
    pub damage: u32,
    pub health: u32,

    /// Fixed world seed; a fresh one is drawn each start when unset
    pub seed: Option<u64>,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            viewport_width: VIEWPORT_WIDTH,
            viewport_height: VIEWPORT_HEIGHT,
            fps_cap: FPS,

            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
            house_count: HOUSE_COUNT,
            max_placement_attempts: MAX_PLACEMENT_ATTEMPTS,

            speed: SPEED,
            acceleration: ACCELERATION,
            damage: PLAYER_DAMAGE,
            health: HEALTH,

            seed: None,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load tuning from a JSON file, falling back to defaults on any failure
    pub fn load_from_path(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not read tuning file {}: {}", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path.display());
                tuning
            }
            Err(e) => {
                log::warn!("Invalid tuning file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load tuning from the file named by `TOWNWALK_TUNING`, if any
    pub fn load() -> Self {
        match std::env::var_os(TUNING_ENV_VAR) {
            Some(path) => Self::load_from_path(Path::new(&path)),
            None => {
                log::info!("Using default tuning");
                Self::default()
            }
        }
    }

    /// The configured seed, or a fresh random one
    pub fn seed_or_random(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }

    /// World size as a vector
    pub fn world_size(&self) -> glam::Vec2 {
        glam::Vec2::new(self.world_width as f32, self.world_height as f32)
    }

    /// Viewport size as a vector
    pub fn viewport_size(&self) -> glam::Vec2 {
        glam::Vec2::new(self.viewport_width, self.viewport_height)
    }
}
