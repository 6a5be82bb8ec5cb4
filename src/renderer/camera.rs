//! Camera that follows the character across the world

use glam::Vec2;

/// A viewport scrolling over a larger world
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub viewport: Vec2,
    pub world: Vec2,
}

impl Camera {
    pub fn new(viewport: Vec2, world: Vec2) -> Self {
        Self { viewport, world }
    }

    /// World-space top-left of the viewport when centered on `focus`, kept
    /// inside the world. A world smaller than the viewport pins it at zero.
    pub fn scroll(&self, focus: Vec2) -> Vec2 {
        (focus - self.viewport / 2.0)
            .min(self.world - self.viewport)
            .max(Vec2::ZERO)
    }

    /// Translation to add to world-space geometry when drawing
    pub fn offset(&self, focus: Vec2) -> Vec2 {
        -self.scroll(focus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> Camera {
        Camera::new(Vec2::new(1280.0, 720.0), Vec2::new(2500.0, 2500.0))
    }

    #[test]
    fn test_centered_in_open_world() {
        let cam = camera();
        assert_eq!(cam.scroll(Vec2::new(1000.0, 1000.0)), Vec2::new(360.0, 640.0));
        assert_eq!(cam.offset(Vec2::new(1000.0, 1000.0)), Vec2::new(-360.0, -640.0));
    }

    #[test]
    fn test_clamped_at_world_edges() {
        let cam = camera();
        assert_eq!(cam.scroll(Vec2::new(10.0, 10.0)), Vec2::ZERO);
        assert_eq!(cam.scroll(Vec2::new(2475.0, 2475.0)), Vec2::new(1220.0, 1780.0));
    }

    #[test]
    fn test_world_smaller_than_viewport() {
        let cam = Camera::new(Vec2::new(1280.0, 720.0), Vec2::new(800.0, 600.0));
        assert_eq!(cam.scroll(Vec2::new(700.0, 500.0)), Vec2::ZERO);
    }
}
