//! The world map: a bounded rectangle holding the houses

use glam::Vec2;
use rand::Rng;

use super::house::House;
use super::placement::generate_houses;
use crate::tuning::Tuning;

/// A fixed-size world and the houses scattered across it
#[derive(Debug, Clone)]
pub struct Map {
    pub width: f32,
    pub height: f32,
    houses: Vec<House>,
}

impl Map {
    /// Build a map from already-placed houses
    pub fn new(width: f32, height: f32, houses: Vec<House>) -> Self {
        Self {
            width,
            height,
            houses,
        }
    }

    /// Generate a fresh map. The house count is best effort (at most
    /// `tuning.house_count`).
    pub fn generate<R: Rng + ?Sized>(tuning: &Tuning, rng: &mut R) -> Self {
        let houses = generate_houses(
            rng,
            tuning.world_width,
            tuning.world_height,
            tuning.house_count,
            tuning.max_placement_attempts,
        );
        Self::new(
            tuning.world_width as f32,
            tuning.world_height as f32,
            houses,
        )
    }

    /// Houses for collision and drawing
    pub fn houses(&self) -> &[House] {
        &self.houses
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}
