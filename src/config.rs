//! Tunable constants for the logo field.
//!
//! Every number that shapes the behavior of the field lives in
//! [`FieldConfig`]. The defaults reproduce the classic look: twenty logos
//! fading in once the page is scrolled, pushed around by scrolling and
//! repelled by the pointer.
//!
//! # Example
//!
//! ```ignore
//! use logo_field::FieldConfig;
//!
//! let config = FieldConfig {
//!     max_logos: 30,
//!     ..FieldConfig::default()
//! };
//! assert_eq!(config.pointer_cap(), 60);
//! ```

use std::time::Duration;

/// Configuration for a [`FieldAnimator`](crate::FieldAnimator).
#[derive(Debug, Clone, PartialEq)]
pub struct FieldConfig {
    /// Population cap for scroll-driven (ambient) creation.
    ///
    /// Pointer clicks may grow the field up to twice this value.
    pub max_logos: usize,
    /// Fraction of the viewport height the page must be scrolled past
    /// before ambient creation starts.
    pub growth_threshold: f32,
    /// Period of the ambient creation timer.
    pub growth_interval: Duration,
    /// Quiet time after the last scroll event before velocities decay.
    pub decay_delay: Duration,
    /// Multiplier applied to velocity and spin when the decay fires.
    pub decay_factor: f32,
    /// Horizontal (and absolute vertical) velocity added per scrolled unit.
    pub scroll_velocity: f32,
    /// Rotation speed added per scrolled unit.
    pub scroll_spin: f32,
    /// Radius around the pointer inside which logos are repelled.
    pub repel_radius: f32,
    /// Scale applied to the normalized repulsion force.
    pub repel_strength: f32,
}

impl FieldConfig {
    /// Population cap for pointer-driven creation.
    #[inline]
    pub fn pointer_cap(&self) -> usize {
        self.max_logos.saturating_mul(2)
    }

    /// Set the ambient population cap.
    pub fn with_max_logos(mut self, max_logos: usize) -> Self {
        self.max_logos = max_logos;
        self
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            max_logos: 20,
            growth_threshold: 0.3,
            growth_interval: Duration::from_millis(100),
            decay_delay: Duration::from_millis(150),
            decay_factor: 0.95,
            scroll_velocity: 0.01,
            scroll_spin: 0.0001,
            repel_radius: 200.0,
            repel_strength: 0.5,
        }
    }
}
