//! Random house placement
//!
//! Rejection sampling: draw a random house, keep it only if it stays clear of
//! every house kept so far. The attempt budget is bounded, so the result may
//! hold fewer houses than requested.

use rand::Rng;

use super::house::{EntranceSide, House};
use super::rect::Rect;
use crate::consts::{HOUSE_MAX_SIZE, HOUSE_MIN_SIZE, HOUSE_MIN_SPACING};

/// Place up to `target_count` houses inside a `world_width × world_height` world.
///
/// Each attempt samples an integer size in `[150, 300]` per axis, an integer
/// position keeping the house inside the world, and a uniform entrance side.
/// The candidate is kept when it overlaps no kept house and no kept house's
/// footprint inflated by the minimum spacing.
pub fn generate_houses<R: Rng + ?Sized>(
    rng: &mut R,
    world_width: u32,
    world_height: u32,
    target_count: usize,
    max_attempts: u32,
) -> Vec<House> {
    let mut houses: Vec<House> = Vec::with_capacity(target_count);
    let mut attempts = 0;

    while houses.len() < target_count && attempts < max_attempts {
        attempts += 1;

        let width = rng.random_range(HOUSE_MIN_SIZE..=HOUSE_MAX_SIZE);
        let height = rng.random_range(HOUSE_MIN_SIZE..=HOUSE_MAX_SIZE);
        // Too big for this world: burn the attempt
        let (Some(max_x), Some(max_y)) = (
            world_width.checked_sub(width),
            world_height.checked_sub(height),
        ) else {
            continue;
        };
        let x = rng.random_range(0..=max_x);
        let y = rng.random_range(0..=max_y);
        let side = EntranceSide::ALL[rng.random_range(0..EntranceSide::ALL.len())];

        let rect = Rect::new(x as f32, y as f32, width as f32, height as f32);
        if is_clear(&rect, &houses) {
            houses.push(House::new(rect, side));
        }
    }

    if houses.len() < target_count {
        log::warn!(
            "Placed only {}/{} houses after {} attempts",
            houses.len(),
            target_count,
            attempts
        );
    } else {
        log::info!("Placed {} houses in {} attempts", houses.len(), attempts);
    }

    houses
}

/// True when `candidate` keeps its distance from every house in `houses`
pub fn is_clear(candidate: &Rect, houses: &[House]) -> bool {
    houses.iter().all(|house| {
        !candidate.overlaps(&house.rect)
            && !candidate.overlaps(&house.rect.inflate(HOUSE_MIN_SPACING))
    })
}
