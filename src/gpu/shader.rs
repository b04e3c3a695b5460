use bytemuck::{Pod, Zeroable};

pub const SPRITE_SHADER: &str = include_str!("sprite.wgsl");

/// Glow color, `rgba(255, 215, 0, 0.4)`.
pub const GLOW_COLOR: [f32; 4] = [1.0, 215.0 / 255.0, 0.0, 0.4];

/// Glow blur radius in pixels.
pub const GLOW_RADIUS: f32 = 20.0;

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
pub struct Uniforms {
    pub viewport: [f32; 2],
    pub glow_radius: f32,
    pub _padding: f32,
    pub glow_color: [f32; 4],
}

impl Uniforms {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            viewport: [width.max(1) as f32, height.max(1) as f32],
            glow_radius: GLOW_RADIUS,
            _padding: 0.0,
            glow_color: GLOW_COLOR,
        }
    }
}
