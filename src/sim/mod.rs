//! Simulation module
//!
//! All gameplay logic lives here, free of rendering and platform concerns:
//! - House placement and the world map
//! - Character motion
//! - Collision resolution against houses
//! - The Menu/Play/Pause flow

pub mod character;
pub mod collision;
pub mod house;
pub mod map;
pub mod placement;
pub mod rect;
pub mod state;
pub mod tick;

pub use character::{Character, Directions, Variant, VariantConfig};
pub use collision::{Penetration, Push, resolve};
pub use house::{EntranceSide, House};
pub use map::Map;
pub use placement::generate_houses;
pub use rect::Rect;
pub use state::{GamePhase, GameState};
pub use tick::{InputEvent, TickInput, tick};
