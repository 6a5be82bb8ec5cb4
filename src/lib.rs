//! Townwalk - a top-down exploration prototype
//!
//! Core modules:
//! - `sim`: Simulation (house placement, character motion, collisions, game flow)
//! - `renderer`: Drawing seam and vertex tessellation
//! - `platform`: Input mapping and frame timing
//! - `tuning`: Data-driven configuration
//! - `ui`: Menu, pause and HUD text

pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use tuning::Tuning;

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    /// Viewport dimensions
    pub const VIEWPORT_WIDTH: f32 = 1280.0;
    pub const VIEWPORT_HEIGHT: f32 = 720.0;
    /// Frame rate cap
    pub const FPS: u32 = 60;

    /// World dimensions
    pub const WORLD_WIDTH: u32 = 2500;
    pub const WORLD_HEIGHT: u32 = 2500;

    /// Character defaults
    pub const SPEED: f32 = 400.0;
    /// Velocity blend rate (1/s)
    pub const ACCELERATION: f32 = 10.0;
    pub const PLAYER_DAMAGE: u32 = 20;
    pub const HEALTH: u32 = 100;
    /// Side of the square character bounding box
    pub const CHARACTER_SIZE: f32 = 25.0;

    /// House placement
    pub const HOUSE_COUNT: usize = 20;
    pub const MAX_PLACEMENT_ATTEMPTS: u32 = 1000;
    pub const HOUSE_MIN_SIZE: u32 = 150;
    pub const HOUSE_MAX_SIZE: u32 = 300;
    /// Minimum gap between any two houses
    pub const HOUSE_MIN_SPACING: f32 = 50.0;
    /// Thickness of walls and of the entrance slot
    pub const WALL_THICKNESS: f32 = 10.0;
}
