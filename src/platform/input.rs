//! Keyboard mapping
//!
//! Two keys drive each movement direction (arrows and WASD). Discrete keys
//! map to simulation events; which of them matter depends on the phase.

use crate::sim::{Directions, InputEvent, TickInput, Variant};

/// Keys the game listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    A,
    D,
    W,
    S,
    Num1,
    Num2,
    P,
    R,
}

/// Logical direction a movement key drives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    Left,
    Right,
    Up,
    Down,
}

/// Movement key table
pub const MOVEMENT_KEYS: [(Key, Heading); 8] = [
    (Key::Left, Heading::Left),
    (Key::A, Heading::Left),
    (Key::Right, Heading::Right),
    (Key::D, Heading::Right),
    (Key::Up, Heading::Up),
    (Key::W, Heading::Up),
    (Key::Down, Heading::Down),
    (Key::S, Heading::Down),
];

impl Directions {
    /// OR-combine every held movement key into the four directions
    pub fn from_held(held: &[Key]) -> Self {
        let mut dirs = Directions::default();
        for (key, heading) in MOVEMENT_KEYS {
            if !held.contains(&key) {
                continue;
            }
            match heading {
                Heading::Left => dirs.left = true,
                Heading::Right => dirs.right = true,
                Heading::Up => dirs.up = true,
                Heading::Down => dirs.down = true,
            }
        }
        dirs
    }
}

impl Key {
    /// Event a key press produces, if any
    pub fn event(&self) -> Option<InputEvent> {
        match self {
            Key::Num1 => Some(InputEvent::SelectVariant(Variant::Archer)),
            Key::Num2 => Some(InputEvent::SelectVariant(Variant::Warlock)),
            Key::P => Some(InputEvent::Pause),
            Key::R => Some(InputEvent::Resume),
            _ => None,
        }
    }
}

/// Accumulates key state between ticks
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    held: Vec<Key>,
    events: Vec<InputEvent>,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: Key) {
        if !self.held.contains(&key) {
            self.held.push(key);
        }
        if let Some(event) = key.event() {
            self.events.push(event);
        }
    }

    pub fn key_up(&mut self, key: Key) {
        self.held.retain(|k| *k != key);
    }

    pub fn quit(&mut self) {
        self.events.push(InputEvent::Quit);
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    /// Snapshot for the next tick. Pending events are consumed; held keys stay.
    pub fn take_input(&mut self) -> TickInput {
        TickInput {
            held: Directions::from_held(&self.held),
            events: std::mem::take(&mut self.events),
        }
    }
}
