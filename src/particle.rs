//! The logo particle.
//!
//! A [`Logo`] is plain kinematic state. It knows how to advance itself by one
//! frame and how large it currently looks, but it never touches a rendering
//! surface; see [`render::draw_logo`](crate::render::draw_logo) for that.

use glam::Vec2;

/// Pulse phase advance per frame, in radians.
pub const PULSE_STEP: f32 = 0.02;

/// Relative amplitude of the size pulse.
pub const PULSE_AMPLITUDE: f32 = 0.1;

/// Width and height of the area logos bounce inside.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// One animated logo sprite.
///
/// Units are viewport pixels and frames: `velocity` is pixels per frame,
/// `rotation_speed` is radians per frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Logo {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Base rendered diameter before pulsing.
    pub size: f32,
    /// Current rotation in radians.
    pub rotation: f32,
    pub rotation_speed: f32,
    /// Fixed at creation, in `[0.3, 0.8)`.
    pub opacity: f32,
    /// Unbounded; only ever fed through `sin`.
    pub pulse_phase: f32,
}

impl Logo {
    /// Advance one frame.
    ///
    /// Moves by the velocity, spins by the rotation speed, then reflects any
    /// velocity component whose axis left `[-size, extent + size]`. The
    /// position is not clamped, so a logo may overshoot a little before it
    /// comes back.
    pub fn update(&mut self, bounds: Bounds) {
        self.position += self.velocity;
        self.rotation += self.rotation_speed;

        if self.position.x < -self.size || self.position.x > bounds.width + self.size {
            self.velocity.x = -self.velocity.x;
        }
        if self.position.y < -self.size || self.position.y > bounds.height + self.size {
            self.velocity.y = -self.velocity.y;
        }

        self.pulse_phase += PULSE_STEP;
    }

    /// Pulsing scale factor, `1 ± 0.1`.
    #[inline]
    pub fn pulse(&self) -> f32 {
        1.0 + PULSE_AMPLITUDE * self.pulse_phase.sin()
    }

    /// Diameter to draw this frame.
    #[inline]
    pub fn current_size(&self) -> f32 {
        self.size * self.pulse()
    }

    /// Multiply velocity and spin by `factor`.
    pub fn damp(&mut self, factor: f32) {
        self.velocity *= factor;
        self.rotation_speed *= factor;
    }
}
