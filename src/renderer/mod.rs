//! Rendering module
//!
//! The simulation never draws. Drawing goes through the [`Renderer`] trait,
//! and [`VertexBatch`] turns those calls into triangles a GPU backend can
//! upload as-is.

pub mod camera;
pub mod shapes;
pub mod vertex;

pub use camera::Camera;
pub use vertex::{Vertex, colors};

use glam::Vec2;

use crate::sim::{Character, GamePhase, GameState, Map, Rect, Variant};

/// House outline thickness
pub const HOUSE_BORDER: f32 = 10.0;

/// Drawing surface for viewport-space rectangles
pub trait Renderer {
    /// Fill `rect` with `color`
    fn fill_rect(&mut self, rect: Rect, color: [f32; 4]);
    /// Draw the outline of `rect`, `border` units thick, inside its edges
    fn stroke_rect(&mut self, rect: Rect, border: f32, color: [f32; 4]);
}

/// Renderer that tessellates into a triangle list
#[derive(Debug, Clone, Default)]
pub struct VertexBatch {
    pub vertices: Vec<Vertex>,
}

impl VertexBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    /// Raw bytes for a vertex buffer upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

impl Renderer for VertexBatch {
    fn fill_rect(&mut self, rect: Rect, color: [f32; 4]) {
        if !rect.is_empty() {
            self.vertices.extend_from_slice(&shapes::filled_rect(&rect, color));
        }
    }

    fn stroke_rect(&mut self, rect: Rect, border: f32, color: [f32; 4]) {
        self.vertices
            .extend(shapes::rect_outline(&rect, border, color));
    }
}

impl Map {
    /// Draw every house: outline first, then the entrance over it
    pub fn draw<R: Renderer + ?Sized>(&self, renderer: &mut R, camera_offset: Vec2) {
        for house in self.houses() {
            renderer.stroke_rect(house.rect.translate(camera_offset), HOUSE_BORDER, colors::HOUSE);
            renderer.fill_rect(house.entrance.translate(camera_offset), colors::ENTRANCE);
        }
    }
}

/// Draw color for a character variant
pub fn variant_color(variant: Variant) -> [f32; 4] {
    match variant {
        Variant::Archer => colors::ARCHER,
        Variant::Warlock => colors::WARLOCK,
    }
}

pub fn draw_character<R: Renderer + ?Sized>(
    renderer: &mut R,
    character: &Character,
    camera_offset: Vec2,
) {
    renderer.fill_rect(
        character.rect().translate(camera_offset),
        variant_color(character.variant),
    );
}

/// Draw the world geometry for the current phase. Menu and pause screens are
/// text only (see `ui`).
pub fn draw_frame<R: Renderer + ?Sized>(state: &GameState, renderer: &mut R) {
    if state.phase != GamePhase::Play {
        return;
    }
    let (Some(character), Some(map)) = (state.character.as_ref(), state.map.as_ref()) else {
        return;
    };

    let camera = Camera::new(state.tuning.viewport_size(), map.size());
    let offset = camera.offset(character.pos);
    map.draw(renderer, offset);
    draw_character(renderer, character, offset);
}
