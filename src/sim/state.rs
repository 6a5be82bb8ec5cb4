//! Session state
//!
//! Everything one run of the game owns: the tuning it started with, its RNG,
//! the current phase, and (once play starts) the character and map.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::character::{Character, Variant};
use super::map::Map;
use crate::tuning::Tuning;

/// Current phase of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Character selection
    Menu,
    /// Active gameplay
    Play,
    /// Gameplay suspended
    Pause,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    pub tuning: Tuning,
    /// World seed for this session
    pub seed: u64,
    pub rng: Pcg32,
    pub phase: GamePhase,
    /// Cleared when a quit is requested
    pub running: bool,
    pub character: Option<Character>,
    pub map: Option<Map>,
}

impl GameState {
    /// Create a session in the menu. The world seed comes from the tuning, or
    /// is drawn fresh.
    pub fn new(tuning: Tuning) -> Self {
        let seed = tuning.seed_or_random();
        Self::with_seed(tuning, seed)
    }

    pub fn with_seed(tuning: Tuning, seed: u64) -> Self {
        log::info!("Session seed: {}", seed);
        Self {
            tuning,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Menu,
            running: true,
            character: None,
            map: None,
        }
    }

    /// Spawn the chosen character and build the world if it does not exist yet
    pub fn start_play(&mut self, variant: Variant) {
        log::info!("Selected {}", variant.name());
        self.character = Some(Character::new(variant, &self.tuning));
        if self.map.is_none() {
            let map = Map::generate(&self.tuning, &mut self.rng);
            log::info!(
                "Generated {}x{} map with {} houses",
                map.width,
                map.height,
                map.houses().len()
            );
            self.map = Some(map);
        }
        self.phase = GamePhase::Play;
    }
}
