//! Frame timing
//!
//! A capped frame clock: each `tick` waits out the rest of the frame budget
//! and reports the real elapsed time, which the simulation consumes directly.

use std::time::{Duration, Instant};

/// Frames averaged for the FPS readout
const FPS_WINDOW: usize = 60;

/// Frame-rate limiter and FPS meter
#[derive(Debug, Clone)]
pub struct FrameClock {
    /// Minimum time per frame (zero = uncapped)
    budget: Duration,
    start: Instant,
    last: Instant,
    // FPS tracking
    frame_times: [f64; FPS_WINDOW],
    frame_index: usize,
    fps: u32,
}

impl FrameClock {
    pub fn new(fps_cap: u32) -> Self {
        let budget = if fps_cap == 0 {
            Duration::ZERO
        } else {
            Duration::from_secs_f64(1.0 / fps_cap as f64)
        };
        let now = Instant::now();
        Self {
            budget,
            start: now,
            last: now,
            frame_times: [0.0; FPS_WINDOW],
            frame_index: 0,
            fps: 0,
        }
    }

    /// Wait for the frame budget, then return seconds since the previous tick
    pub fn tick(&mut self) -> f32 {
        let elapsed = self.last.elapsed();
        if elapsed < self.budget {
            std::thread::sleep(self.budget - elapsed);
        }
        let now = Instant::now();
        let dt = now.duration_since(self.last).as_secs_f32();
        self.last = now;
        self.record_frame(now.duration_since(self.start).as_secs_f64());
        dt
    }

    /// Record a frame finishing at `time` seconds and refresh the FPS estimate
    pub fn record_frame(&mut self, time: f64) {
        self.frame_times[self.frame_index] = time;
        self.frame_index = (self.frame_index + 1) % FPS_WINDOW;

        // Oldest entry is the one about to be overwritten
        let oldest_time = self.frame_times[self.frame_index];
        if oldest_time > 0.0 {
            let elapsed = time - oldest_time;
            if elapsed > 0.0 {
                self.fps = ((FPS_WINDOW - 1) as f64 / elapsed).round() as u32;
            }
        }
    }

    /// Frames per second over the last window (0 until the window fills)
    pub fn fps(&self) -> u32 {
        self.fps
    }
}
