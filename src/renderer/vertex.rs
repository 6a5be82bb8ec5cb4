//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for game elements
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const HOUSE: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
    /// Entrance is painted over the wall in the background color
    pub const ENTRANCE: [f32; 4] = BACKGROUND;
    pub const ARCHER: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
    pub const WARLOCK: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
    pub const MENU_TEXT: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
    pub const HUD_TEXT: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
}
