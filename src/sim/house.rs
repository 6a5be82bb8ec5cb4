//! Houses: static rectangular obstacles with one open side

use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::WALL_THICKNESS;

/// Side of a house carrying the entrance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntranceSide {
    Top,
    Bottom,
    Left,
    Right,
}

impl EntranceSide {
    pub const ALL: [EntranceSide; 4] = [
        EntranceSide::Top,
        EntranceSide::Bottom,
        EntranceSide::Left,
        EntranceSide::Right,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntranceSide::Top => "top",
            EntranceSide::Bottom => "bottom",
            EntranceSide::Left => "left",
            EntranceSide::Right => "right",
        }
    }
}

/// A house. Built once during map generation and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct House {
    /// Outer footprint
    pub rect: Rect,
    pub entrance_side: EntranceSide,
    /// Door slot, half the side's length, centered on the entrance side.
    /// It sits on top of that side's wall strip.
    pub entrance: Rect,
    /// Wall strips in order: top, left, right, bottom
    pub walls: [Rect; 4],
}

impl House {
    pub fn new(rect: Rect, entrance_side: EntranceSide) -> Self {
        Self {
            rect,
            entrance_side,
            entrance: entrance_rect(&rect, entrance_side),
            walls: wall_rects(&rect),
        }
    }
}

fn entrance_rect(rect: &Rect, side: EntranceSide) -> Rect {
    let t = WALL_THICKNESS;
    match side {
        EntranceSide::Top => Rect::new(rect.x + rect.w / 4.0, rect.y, rect.w / 2.0, t),
        EntranceSide::Bottom => {
            Rect::new(rect.x + rect.w / 4.0, rect.bottom() - t, rect.w / 2.0, t)
        }
        EntranceSide::Left => Rect::new(rect.x, rect.y + rect.h / 4.0, t, rect.h / 2.0),
        EntranceSide::Right => {
            Rect::new(rect.right() - t, rect.y + rect.h / 4.0, t, rect.h / 2.0)
        }
    }
}

fn wall_rects(rect: &Rect) -> [Rect; 4] {
    let t = WALL_THICKNESS;
    [
        Rect::new(rect.x, rect.y, rect.w, t),
        Rect::new(rect.x, rect.y, t, rect.h),
        Rect::new(rect.right() - t, rect.y, t, rect.h),
        Rect::new(rect.x, rect.bottom() - t, rect.w, t),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_entrance_and_walls() {
        let house = House::new(Rect::new(100.0, 100.0, 200.0, 200.0), EntranceSide::Top);
        assert_eq!(house.entrance, Rect::new(150.0, 100.0, 100.0, 10.0));
        assert_eq!(house.walls[0], Rect::new(100.0, 100.0, 200.0, 10.0));
        assert_eq!(house.walls[1], Rect::new(100.0, 100.0, 10.0, 200.0));
        assert_eq!(house.walls[2], Rect::new(290.0, 100.0, 10.0, 200.0));
        assert_eq!(house.walls[3], Rect::new(100.0, 290.0, 200.0, 10.0));
    }

    #[test]
    fn test_entrance_sits_on_its_side() {
        let rect = Rect::new(0.0, 0.0, 160.0, 240.0);

        let bottom = House::new(rect, EntranceSide::Bottom);
        assert_eq!(bottom.entrance, Rect::new(40.0, 230.0, 80.0, 10.0));

        let left = House::new(rect, EntranceSide::Left);
        assert_eq!(left.entrance, Rect::new(0.0, 60.0, 10.0, 120.0));

        let right = House::new(rect, EntranceSide::Right);
        assert_eq!(right.entrance, Rect::new(150.0, 60.0, 10.0, 120.0));
    }

    #[test]
    fn test_entrance_lies_within_its_wall() {
        let rect = Rect::new(37.0, 81.0, 151.0, 299.0);
        for (side, wall_idx) in [
            (EntranceSide::Top, 0),
            (EntranceSide::Left, 1),
            (EntranceSide::Right, 2),
            (EntranceSide::Bottom, 3),
        ] {
            let house = House::new(rect, side);
            assert!(house.walls[wall_idx].contains_rect(&house.entrance), "{side:?}");
            assert!(house.rect.contains_rect(&house.entrance));
        }
    }
}
