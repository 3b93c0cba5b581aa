//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
///
/// Scene vertices are in canvas pixels (y down); the pipeline maps them to
/// clip space right before upload.
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

/// `0xRRGGBB` to RGBA floats (sRGB encoded, like the CSS palette)
pub fn hex_to_rgba(hex: u32, alpha: f32) -> [f32; 4] {
    let channel = |shift: u32| ((hex >> shift) & 0xff) as f32 / 255.0;
    [channel(16), channel(8), channel(0), alpha]
}

/// Colors for game elements
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [0.0, 5.0 / 255.0, 20.0 / 255.0, 1.0];
    pub const STAR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const PLAYER: u32 = 0x4a9eff;
    pub const COCKPIT: u32 = 0x6ab8ff;
    pub const ENGINE_GLOW: u32 = 0xffaa00;
    pub const PLAYER_BULLET: u32 = 0x00ffff;
    pub const ENEMY_BULLET: u32 = 0xff5555;
    /// Glyph drawn inside a power-up
    pub const POWER_UP_MARK: [f32; 4] = [1.0, 1.0, 1.0, 0.9];
    pub const PAUSE_OVERLAY: [f32; 4] = [0.0, 0.0, 0.0, 0.7];
    pub const IDLE_OVERLAY: [f32; 4] = [0.0, 0.0, 0.0, 0.9];
    pub const GAME_OVER_OVERLAY: [f32; 4] = [0.25, 0.0, 0.0, 0.6];
    pub const OVERLAY_ICON: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_to_rgba() {
        assert_eq!(hex_to_rgba(0xff0000, 1.0), [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(hex_to_rgba(0x00ffff, 0.5), [0.0, 1.0, 1.0, 0.5]);
        let c = hex_to_rgba(0x4a9eff, 1.0);
        assert!((c[0] - 74.0 / 255.0).abs() < 1e-6);
        assert!((c[1] - 158.0 / 255.0).abs() < 1e-6);
    }
}
