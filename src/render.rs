//! Drawing logos onto a surface.
//!
//! Rendering is split from the kinematics: [`draw_logo`] turns a [`Logo`]
//! into a self-contained [`SpriteInstance`] (center, pulsed size, rotation,
//! opacity) and hands it to a [`Canvas`]. Because every instance carries its
//! whole transform, nothing one logo sets up can leak into the next.
//!
//! The GPU renderer consumes a [`DrawList`]; tests use the same list to
//! inspect what a frame would have drawn.

use crate::particle::Logo;
use bytemuck::{Pod, Zeroable};

/// One logo as the renderer sees it.
///
/// Laid out for direct upload as a per-instance vertex buffer.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct SpriteInstance {
    /// Center in viewport pixels.
    pub center: [f32; 2],
    /// Side length of the square the image is stretched into.
    pub size: f32,
    /// Rotation in radians, clockwise on screen.
    pub rotation: f32,
    pub opacity: f32,
}

/// A surface logos can be drawn on.
pub trait Canvas {
    /// Erase everything drawn so far.
    fn clear(&mut self);

    /// Draw the logo image as described by `sprite`, over what is already
    /// there.
    fn draw_sprite(&mut self, sprite: &SpriteInstance);
}

/// Draw one logo with its current pulse applied.
pub fn draw_logo<C: Canvas + ?Sized>(logo: &Logo, canvas: &mut C) {
    canvas.draw_sprite(&SpriteInstance {
        center: logo.position.to_array(),
        size: logo.current_size(),
        rotation: logo.rotation,
        opacity: logo.opacity,
    });
}

/// A canvas that records sprites in draw order.
#[derive(Debug, Default, Clone)]
pub struct DrawList {
    sprites: Vec<SpriteInstance>,
    clears: u64,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sprites drawn since the last clear, back to front.
    pub fn sprites(&self) -> &[SpriteInstance] {
        &self.sprites
    }

    /// Number of times the list has been cleared.
    pub fn clears(&self) -> u64 {
        self.clears
    }
}

impl Canvas for DrawList {
    fn clear(&mut self) {
        self.sprites.clear();
        self.clears += 1;
    }

    fn draw_sprite(&mut self, sprite: &SpriteInstance) {
        self.sprites.push(*sprite);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_draw_logo_applies_pulse() {
        let logo = Logo {
            position: Vec2::new(30.0, 40.0),
            velocity: Vec2::ZERO,
            size: 100.0,
            rotation: 1.25,
            rotation_speed: 0.0,
            opacity: 0.6,
            pulse_phase: std::f32::consts::FRAC_PI_2,
        };

        let mut canvas = DrawList::new();
        draw_logo(&logo, &mut canvas);

        let sprite = canvas.sprites()[0];
        assert_eq!(sprite.center, [30.0, 40.0]);
        assert!((sprite.size - 110.0).abs() < 0.001);
        assert_eq!(sprite.rotation, 1.25);
        assert_eq!(sprite.opacity, 0.6);
    }

    #[test]
    fn test_clear_resets_sprites() {
        let mut canvas = DrawList::new();
        canvas.draw_sprite(&SpriteInstance::zeroed());
        canvas.clear();
        assert!(canvas.sprites().is_empty());
        assert_eq!(canvas.clears(), 1);
    }

    #[test]
    fn test_instance_layout() {
        assert_eq!(std::mem::size_of::<SpriteInstance>(), 20);
    }
}
