//! Townwalk entry point
//!
//! No window backend ships with the crate, so the native binary plays a short
//! scripted session headlessly: pick a character, walk around, pause, resume
//! and quit, logging what happens along the way.

use townwalk::Tuning;
use townwalk::platform::{FrameClock, Key, KeyboardState};
use townwalk::renderer::{VertexBatch, draw_frame};
use townwalk::sim::{GameState, tick};
use townwalk::ui::screen_lines;

/// Scripted key activity: (frame, key, pressed)
const SCRIPT: &[(u64, Key, bool)] = &[
    (10, Key::Num1, true),
    (11, Key::Num1, false),
    (20, Key::D, true),
    (80, Key::S, true),
    (140, Key::D, false),
    (160, Key::Left, true),
    (200, Key::P, true),
    (201, Key::P, false),
    (230, Key::R, true),
    (231, Key::R, false),
    (290, Key::Left, false),
    (290, Key::S, false),
];

/// Frame on which the script closes the game
const QUIT_FRAME: u64 = 330;

fn main() {
    env_logger::init();
    log::info!("Townwalk (headless) starting...");

    let tuning = Tuning::load();
    let mut clock = FrameClock::new(tuning.fps_cap);
    let mut state = GameState::new(tuning);
    let mut keyboard = KeyboardState::new();
    let mut batch = VertexBatch::new();

    let mut frame: u64 = 0;
    while state.running {
        let dt = clock.tick();

        for &(at, key, pressed) in SCRIPT.iter().filter(|(at, _, _)| *at == frame) {
            log::debug!("Frame {}: {:?} {}", at, key, if pressed { "down" } else { "up" });
            if pressed {
                keyboard.key_down(key);
            } else {
                keyboard.key_up(key);
            }
        }
        if frame == QUIT_FRAME {
            keyboard.quit();
        }

        let input = keyboard.take_input();
        tick(&mut state, &input, dt);

        batch.clear();
        draw_frame(&state, &mut batch);
        log::debug!("Frame {}: {} vertices", frame, batch.vertices.len());

        if frame % 60 == 0 {
            log::info!("{:?}: {}", state.phase, screen_lines(&state, clock.fps()).join(" | "));
        }

        frame += 1;
    }

    log::info!("Townwalk exiting after {} frames", frame);
}
