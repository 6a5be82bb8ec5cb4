//! Screen text: character menu, pause screen and the stats HUD
//!
//! Only the strings live here; fonts and layout belong to the host.

use crate::sim::{Character, GamePhase, GameState};

pub fn menu_lines() -> Vec<String> {
    vec![
        "Select Your Character".to_string(),
        "Press 1 for Archer".to_string(),
        "Press 2 for Warlock".to_string(),
    ]
}

pub fn pause_lines() -> Vec<String> {
    vec!["Game Paused".to_string(), "Press R to Resume".to_string()]
}

/// HUD readout, top to bottom
pub fn stats_lines(character: &Character, fps: u32) -> Vec<String> {
    vec![
        format!("X: {}", character.pos.x as i32),
        format!("Y: {}", character.pos.y as i32),
        format!("Health: {}", character.health),
        format!("Damage: {}", character.damage),
        format!("Speed: {}", character.speed),
        format!("FPS: {}", fps),
    ]
}

/// Text shown for the current phase
pub fn screen_lines(state: &GameState, fps: u32) -> Vec<String> {
    match state.phase {
        GamePhase::Menu => menu_lines(),
        GamePhase::Pause => pause_lines(),
        GamePhase::Play => state
            .character
            .as_ref()
            .map(|c| stats_lines(c, fps))
            .unwrap_or_default(),
    }
}
