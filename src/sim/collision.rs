//! Collision detection and response against houses
//!
//! The character is pushed out of wall strips along the axis of least
//! penetration. Touching a house's entrance triggers the (placeholder)
//! enter-house behavior instead.

use glam::Vec2;
use rand::Rng;

use super::character::Character;
use super::house::House;
use super::rect::Rect;

/// Overlap depths of a moving box into a wall, one per push direction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Penetration {
    /// Distance to push the box out through the wall's left edge
    pub left: f32,
    /// ... through the wall's right edge
    pub right: f32,
    /// ... through the wall's top edge
    pub top: f32,
    /// ... through the wall's bottom edge
    pub bottom: f32,
}

/// Direction a correction moves the character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Push {
    Left,
    Right,
    Up,
    Down,
}

impl Penetration {
    pub fn between(mover: &Rect, wall: &Rect) -> Self {
        Self {
            left: mover.right() - wall.left(),
            right: wall.right() - mover.left(),
            top: mover.bottom() - wall.top(),
            bottom: wall.bottom() - mover.top(),
        }
    }

    /// The strictly smallest depth. A tie for the minimum yields `None`,
    /// and no correction is made.
    pub fn min_push(&self) -> Option<Push> {
        let Self {
            left,
            right,
            top,
            bottom,
        } = *self;
        if left < right && left < top && left < bottom {
            Some(Push::Left)
        } else if right < left && right < top && right < bottom {
            Some(Push::Right)
        } else if top < left && top < right && top < bottom {
            Some(Push::Up)
        } else if bottom < left && bottom < right && bottom < top {
            Some(Push::Down)
        } else {
            None
        }
    }
}

/// Resolve the character against every house it touches.
///
/// Overlap is tested against the bounding box the character had on entry,
/// and every overlapping wall applies its own correction in wall order.
pub fn resolve<R: Rng + ?Sized>(character: &mut Character, houses: &[House], rng: &mut R) {
    let rect = character.rect();
    for house in houses {
        if !rect.overlaps(&house.rect) {
            continue;
        }
        if rect.overlaps(&house.entrance) {
            enter_house(character, &rect, house, rng);
        } else {
            push_out_of_walls(character, &rect, house);
        }
    }
}

/// Apply the least-penetration correction for each wall of `house` that
/// `rect` overlaps
pub fn push_out_of_walls(character: &mut Character, rect: &Rect, house: &House) {
    let size = Character::size();
    for wall in &house.walls {
        if !rect.overlaps(wall) {
            continue;
        }
        match Penetration::between(rect, wall).min_push() {
            Some(Push::Left) => {
                character.pos.x = wall.left() - size.x;
                character.vel.x = 0.0;
            }
            Some(Push::Right) => {
                character.pos.x = wall.right();
                character.vel.x = 0.0;
            }
            Some(Push::Up) => {
                character.pos.y = wall.top() - size.y;
                character.vel.y = 0.0;
            }
            Some(Push::Down) => {
                character.pos.y = wall.bottom();
                character.vel.y = 0.0;
            }
            None => {}
        }
    }
}

/// Placeholder for walking through a door: there are no interiors yet, so the
/// character is moved to a random spot within its own bounding box (which,
/// for a box exactly the character's size, is where it already stands).
/// Velocity is left alone.
fn enter_house<R: Rng + ?Sized>(character: &mut Character, rect: &Rect, house: &House, rng: &mut R) {
    log::debug!(
        "Entrance hit on {} side of house at ({}, {}); house interiors not implemented",
        house.entrance_side.as_str(),
        house.rect.x,
        house.rect.y
    );
    let size = Character::size();
    character.pos = Vec2::new(
        sample_span(rng, rect.left(), rect.right() - size.x),
        sample_span(rng, rect.top(), rect.bottom() - size.y),
    );
}

fn sample_span<R: Rng + ?Sized>(rng: &mut R, lo: f32, hi: f32) -> f32 {
    if hi > lo { rng.random_range(lo..=hi) } else { lo }
}
