//! Per-frame simulation tick
//!
//! Drives the Menu -> Play <-> Pause flow and, while playing, runs motion
//! followed by collision resolution exactly once per frame.

use super::character::{Directions, Variant};
use super::collision::resolve;
use super::state::{GamePhase, GameState};

/// Discrete input events for a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Window closed / quit requested
    Quit,
    /// Character chosen in the menu
    SelectVariant(Variant),
    /// Pause key
    Pause,
    /// Resume key
    Resume,
}

/// Input snapshot for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Movement directions currently held
    pub held: Directions,
    /// Events received since the previous tick, in order
    pub events: Vec<InputEvent>,
}

/// Advance the session by one frame of `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    // The simulation step is decided by the phase the frame started in
    let frame_phase = state.phase;

    for event in &input.events {
        handle_event(state, frame_phase, *event);
    }

    if frame_phase != GamePhase::Play || !state.running {
        return;
    }

    if let (Some(character), Some(map)) = (state.character.as_mut(), state.map.as_ref()) {
        character.update(dt, input.held);
        resolve(character, map.houses(), &mut state.rng);
    }
}

fn handle_event(state: &mut GameState, frame_phase: GamePhase, event: InputEvent) {
    match (frame_phase, event) {
        (_, InputEvent::Quit) => {
            log::info!("Quit requested");
            state.running = false;
        }
        (GamePhase::Menu, InputEvent::SelectVariant(variant)) => {
            if state.phase == GamePhase::Menu {
                state.start_play(variant);
            }
        }
        (GamePhase::Play, InputEvent::Pause) => {
            log::info!("Paused");
            state.phase = GamePhase::Pause;
        }
        (GamePhase::Pause, InputEvent::Resume) => {
            log::info!("Resumed");
            state.phase = GamePhase::Play;
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;
    use glam::Vec2;

    const DT: f32 = 1.0 / 60.0;

    fn new_state() -> GameState {
        GameState::with_seed(Tuning::default(), 12345)
    }

    fn events(events: &[InputEvent]) -> TickInput {
        TickInput {
            events: events.to_vec(),
            ..Default::default()
        }
    }

    fn moving_right() -> TickInput {
        TickInput {
            held: Directions {
                right: true,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_menu_to_play() {
        let mut state = new_state();
        assert_eq!(state.phase, GamePhase::Menu);
        assert!(state.character.is_none());
        assert!(state.map.is_none());

        // Movement in the menu does nothing
        tick(&mut state, &moving_right(), DT);
        assert_eq!(state.phase, GamePhase::Menu);

        tick(&mut state, &events(&[InputEvent::SelectVariant(Variant::Warlock)]), DT);
        assert_eq!(state.phase, GamePhase::Play);
        let character = state.character.as_ref().unwrap();
        assert_eq!(character.variant, Variant::Warlock);
        // No motion on the selecting frame
        assert_eq!(character.pos, Vec2::new(640.0, 360.0));
        assert!(!state.map.as_ref().unwrap().houses().is_empty());
    }

    #[test]
    fn test_pause_and_resume() {
        let mut state = new_state();
        tick(&mut state, &events(&[InputEvent::SelectVariant(Variant::Archer)]), DT);

        // Resume is meaningless while playing
        tick(&mut state, &events(&[InputEvent::Resume]), DT);
        assert_eq!(state.phase, GamePhase::Play);

        tick(&mut state, &events(&[InputEvent::Pause]), DT);
        assert_eq!(state.phase, GamePhase::Pause);

        // Frozen while paused
        let frozen = state.character.as_ref().unwrap().pos;
        for _ in 0..10 {
            tick(&mut state, &moving_right(), DT);
        }
        assert_eq!(state.character.as_ref().unwrap().pos, frozen);

        // Pause again does nothing, selecting a variant does nothing
        tick(
            &mut state,
            &events(&[InputEvent::Pause, InputEvent::SelectVariant(Variant::Warlock)]),
            DT,
        );
        assert_eq!(state.phase, GamePhase::Pause);
        assert_eq!(state.character.as_ref().unwrap().variant, Variant::Archer);

        tick(&mut state, &events(&[InputEvent::Resume]), DT);
        assert_eq!(state.phase, GamePhase::Play);
    }

    #[test]
    fn test_pause_frame_still_steps() {
        let mut state = new_state();
        state.tuning.house_count = 0;
        tick(&mut state, &events(&[InputEvent::SelectVariant(Variant::Archer)]), DT);

        let mut input = moving_right();
        input.events.push(InputEvent::Pause);
        tick(&mut state, &input, DT);
        assert_eq!(state.phase, GamePhase::Pause);
        assert!(state.character.as_ref().unwrap().pos.x > 640.0);
    }

    #[test]
    fn test_quit_from_any_phase() {
        let mut state = new_state();
        tick(&mut state, &events(&[InputEvent::Quit]), DT);
        assert!(!state.running);

        let mut state = new_state();
        tick(&mut state, &events(&[InputEvent::SelectVariant(Variant::Archer)]), DT);
        tick(&mut state, &events(&[InputEvent::Pause]), DT);
        tick(&mut state, &events(&[InputEvent::Quit]), DT);
        assert!(!state.running);
    }

    #[test]
    fn test_play_moves_within_world() {
        let mut state = new_state();
        tick(&mut state, &events(&[InputEvent::SelectVariant(Variant::Archer)]), DT);
        for _ in 0..600 {
            tick(&mut state, &moving_right(), DT);
            let c = state.character.as_ref().unwrap();
            assert!(c.pos.x >= 0.0 && c.pos.x <= 2475.0);
            assert!(c.pos.y >= 0.0 && c.pos.y <= 2475.0);
        }
        assert_ne!(state.character.as_ref().unwrap().pos, Vec2::new(640.0, 360.0));
    }

    #[test]
    fn test_determinism() {
        // Two sessions with the same seed produce identical worlds and paths
        let mut state1 = new_state();
        let mut state2 = new_state();

        let inputs = [
            events(&[InputEvent::SelectVariant(Variant::Archer)]),
            moving_right(),
            TickInput {
                held: Directions {
                    down: true,
                    left: true,
                    ..Default::default()
                },
                ..Default::default()
            },
            TickInput::default(),
        ];

        for input in &inputs {
            for _ in 0..30 {
                tick(&mut state1, input, DT);
                tick(&mut state2, input, DT);
            }
        }

        let houses1 = state1.map.as_ref().unwrap().houses();
        let houses2 = state2.map.as_ref().unwrap().houses();
        assert_eq!(houses1.len(), houses2.len());
        for (a, b) in houses1.iter().zip(houses2) {
            assert_eq!(a.rect, b.rect);
        }
        assert_eq!(
            state1.character.as_ref().unwrap().pos,
            state2.character.as_ref().unwrap().pos
        );
    }
}
