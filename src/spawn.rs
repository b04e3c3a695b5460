//! Spawn context for logo creation.
//!
//! Holds the field's random number generator and knows the two creation
//! flavors: ambient logos scattered over the viewport while the page is
//! scrolled, and livelier logos dropped exactly where the pointer clicked.

use crate::particle::{Bounds, Logo};
use glam::Vec2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::TAU;

/// Smallest base diameter of a new logo.
pub const MIN_SIZE: f32 = 40.0;
/// Largest base diameter of a new logo (exclusive).
pub const MAX_SIZE: f32 = 120.0;

/// Random source and creation ranges for new logos.
///
/// ```ignore
/// let mut ctx = SpawnContext::seeded(7);
/// let logo = ctx.ambient(Bounds::new(1280.0, 720.0));
/// let clicked = ctx.at_pointer(Vec2::new(50.0, 50.0));
/// ```
#[derive(Debug, Clone)]
pub struct SpawnContext {
    rng: SmallRng,
}

impl SpawnContext {
    /// Create a context seeded from the wall clock, different each run.
    pub fn new() -> Self {
        let seed = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(42);
        Self::seeded(seed)
    }

    /// Create a reproducible context.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    // ========== Random primitives ==========

    /// Random f32 between 0.0 and 1.0.
    #[inline]
    pub fn random(&mut self) -> f32 {
        self.rng.gen()
    }

    /// Random f32 in `[min, max)`. Collapses to `min` for an empty range.
    #[inline]
    pub fn random_range(&mut self, min: f32, max: f32) -> f32 {
        if max > min {
            self.rng.gen_range(min..max)
        } else {
            min
        }
    }

    /// Random f32 in `[-half_width, half_width)`.
    #[inline]
    pub fn random_signed(&mut self, half_width: f32) -> f32 {
        self.random_range(-half_width, half_width)
    }

    // ========== Logo creation ==========

    /// A logo placed anywhere on the surface with gentle motion.
    pub fn ambient(&mut self, bounds: Bounds) -> Logo {
        let position = Vec2::new(
            self.random_range(0.0, bounds.width),
            self.random_range(0.0, bounds.height),
        );
        self.logo(position, 1.0, 0.01)
    }

    /// A logo at exactly `position`, with twice the ambient energy.
    pub fn at_pointer(&mut self, position: Vec2) -> Logo {
        self.logo(position, 2.0, 0.02)
    }

    fn logo(&mut self, position: Vec2, speed: f32, spin: f32) -> Logo {
        let size = self.random_range(MIN_SIZE, MAX_SIZE);
        let velocity = Vec2::new(self.random_signed(speed), self.random_signed(speed));
        let rotation = self.random_range(0.0, TAU);
        let rotation_speed = self.random_signed(spin);

        Logo {
            position,
            velocity,
            size,
            rotation,
            rotation_speed,
            opacity: self.random() * 0.5 + 0.3,
            pulse_phase: self.random_range(0.0, TAU),
        }
    }
}

impl Default for SpawnContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ambient_ranges() {
        let mut ctx = SpawnContext::seeded(1);
        let bounds = Bounds::new(1000.0, 800.0);
        for _ in 0..500 {
            let logo = ctx.ambient(bounds);
            assert!(logo.position.x >= 0.0 && logo.position.x < 1000.0);
            assert!(logo.position.y >= 0.0 && logo.position.y < 800.0);
            assert!(logo.size >= MIN_SIZE && logo.size < MAX_SIZE);
            assert!(logo.velocity.x.abs() <= 1.0 && logo.velocity.y.abs() <= 1.0);
            assert!(logo.rotation_speed.abs() <= 0.01);
            assert!(logo.opacity >= 0.3 && logo.opacity <= 0.8);
            assert!(logo.pulse_phase >= 0.0 && logo.pulse_phase < TAU);
        }
    }

    #[test]
    fn test_pointer_logo_position_is_exact() {
        let mut ctx = SpawnContext::seeded(2);
        let logo = ctx.at_pointer(Vec2::new(50.0, 50.0));
        assert_eq!(logo.position, Vec2::new(50.0, 50.0));
    }

    #[test]
    fn test_pointer_ranges_are_wider() {
        let mut ctx = SpawnContext::seeded(3);
        let mut fastest: f32 = 0.0;
        for _ in 0..500 {
            let logo = ctx.at_pointer(Vec2::ZERO);
            assert!(logo.velocity.x.abs() <= 2.0 && logo.velocity.y.abs() <= 2.0);
            assert!(logo.rotation_speed.abs() <= 0.02);
            fastest = fastest.max(logo.velocity.x.abs());
        }
        // 500 draws from [-2, 2) will exceed the ambient range
        assert!(fastest > 1.0);
    }

    #[test]
    fn test_zero_sized_surface() {
        let mut ctx = SpawnContext::seeded(4);
        let logo = ctx.ambient(Bounds::new(0.0, 0.0));
        assert_eq!(logo.position, Vec2::ZERO);
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let mut a = SpawnContext::seeded(99);
        let mut b = SpawnContext::seeded(99);
        let bounds = Bounds::new(640.0, 480.0);
        assert_eq!(a.ambient(bounds), b.ambient(bounds));
    }
}
