//! Platform abstraction layer
//!
//! Handles the boundary with whatever hosts the game:
//! - Raw keys to simulation input
//! - Frame timing

pub mod input;
pub mod time;

pub use input::{Key, KeyboardState, MOVEMENT_KEYS};
pub use time::FrameClock;
