//! The player character and its per-tick motion

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::CHARACTER_SIZE;
use crate::tuning::Tuning;

/// Playable character variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Variant {
    Archer,
    Warlock,
}

/// Per-variant adjustments to the base tuning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VariantConfig {
    /// Added to the base speed
    pub speed_delta: f32,
    /// Added to the base health
    pub health_delta: u32,
    /// Replaces the base damage
    pub damage: u32,
}

impl Variant {
    pub fn config(&self) -> VariantConfig {
        match self {
            Variant::Archer => VariantConfig {
                speed_delta: 30.0,
                health_delta: 0,
                damage: 5,
            },
            Variant::Warlock => VariantConfig {
                speed_delta: 0.0,
                health_delta: 20,
                damage: 10,
            },
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Variant::Archer => "Archer",
            Variant::Warlock => "Warlock",
        }
    }
}

/// Logical movement directions held this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Directions {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl Directions {
    /// Sum of the unit vectors of every held direction (y grows downward)
    pub fn raw_vector(&self) -> Vec2 {
        let mut v = Vec2::ZERO;
        if self.left {
            v.x -= 1.0;
        }
        if self.right {
            v.x += 1.0;
        }
        if self.up {
            v.y -= 1.0;
        }
        if self.down {
            v.y += 1.0;
        }
        v
    }
}

/// The one controllable character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    pub variant: Variant,
    /// Top-left of the bounding box
    pub pos: Vec2,
    pub vel: Vec2,
    /// Target speed when moving
    pub speed: f32,
    /// Velocity blend rate (1/s)
    pub acceleration: f32,
    // Health and damage are carried for the HUD; nothing applies them yet
    pub health: u32,
    pub damage: u32,
    /// World size the character is confined to
    world: Vec2,
}

impl Character {
    /// Spawn a character at the viewport center
    pub fn new(variant: Variant, tuning: &Tuning) -> Self {
        let cfg = variant.config();
        let world = tuning.world_size();
        let spawn = tuning.viewport_size() / 2.0;
        Self {
            variant,
            pos: spawn.min(max_position(world)).max(Vec2::ZERO),
            vel: Vec2::ZERO,
            speed: tuning.speed + cfg.speed_delta,
            acceleration: tuning.acceleration,
            health: tuning.health + cfg.health_delta,
            damage: cfg.damage,
            world,
        }
    }

    pub fn size() -> Vec2 {
        Vec2::splat(CHARACTER_SIZE)
    }

    /// Current bounding box
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, Self::size())
    }

    /// Velocity the character is steering toward for the given input
    pub fn target_velocity(&self, dirs: Directions) -> Vec2 {
        dirs.raw_vector().normalize_or_zero() * self.speed
    }

    /// Advance one tick: smooth velocity toward the input target, integrate,
    /// then clamp into the world. Obstacles are not consulted here.
    pub fn update(&mut self, dt: f32, dirs: Directions) {
        let target = self.target_velocity(dirs);
        self.vel += (target - self.vel) * (self.acceleration * dt);
        self.pos += self.vel * dt;
        self.pos = self.pos.min(max_position(self.world)).max(Vec2::ZERO);
    }
}

/// Largest top-left coordinate that keeps the box inside the world
fn max_position(world: Vec2) -> Vec2 {
    (world - Character::size()).max(Vec2::ZERO)
}
