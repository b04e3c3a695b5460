//! The owned collection of logos and the forces that act on it.
//!
//! [`LogoField`] is the only place logos live. It enforces the two population
//! caps and implements the input-driven force model: scroll impulses, the
//! post-scroll decay, and pointer repulsion. It has no notion of time or of
//! rendering; the [`FieldAnimator`](crate::FieldAnimator) decides when each
//! operation runs.

use crate::config::FieldConfig;
use crate::particle::{Bounds, Logo};
use crate::render::{draw_logo, Canvas};
use crate::spawn::SpawnContext;
use glam::Vec2;

/// Upper bound on the logos reserved up front; the field still grows past it.
const RESERVE_LIMIT: usize = 1024;

/// Logos in creation order. Never shrinks.
#[derive(Debug, Clone)]
pub struct LogoField {
    logos: Vec<Logo>,
    config: FieldConfig,
}

impl LogoField {
    pub fn new(config: FieldConfig) -> Self {
        Self {
            logos: Vec::with_capacity(config.pointer_cap().min(RESERVE_LIMIT)),
            config,
        }
    }

    #[inline]
    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// Logos in insertion order (back to front).
    #[inline]
    pub fn logos(&self) -> &[Logo] {
        &self.logos
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.logos.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.logos.is_empty()
    }

    // ========== Creation ==========

    /// Add an ambient logo if the field is below the ambient cap.
    ///
    /// Returns `true` if a logo was added.
    pub fn spawn_ambient(&mut self, spawn: &mut SpawnContext, bounds: Bounds) -> bool {
        if self.logos.len() >= self.config.max_logos {
            return false;
        }
        self.logos.push(spawn.ambient(bounds));
        true
    }

    /// Add a logo at `position` if the field is below the pointer cap.
    ///
    /// Returns `true` if a logo was added.
    pub fn spawn_at(&mut self, spawn: &mut SpawnContext, position: Vec2) -> bool {
        if self.logos.len() >= self.config.pointer_cap() {
            return false;
        }
        self.logos.push(spawn.at_pointer(position));
        true
    }

    /// Insert a fully specified logo, subject to the pointer cap.
    pub fn push(&mut self, logo: Logo) -> bool {
        if self.logos.len() >= self.config.pointer_cap() {
            return false;
        }
        self.logos.push(logo);
        true
    }

    // ========== Forces ==========

    /// Inject the energy of a scroll step of `delta` pixels.
    ///
    /// Horizontal velocity and spin follow the scroll direction; vertical
    /// velocity always grows, whichever way the page moved.
    pub fn apply_scroll(&mut self, delta: f32) {
        let push = delta * self.config.scroll_velocity;
        let lift = delta.abs() * self.config.scroll_velocity;
        let spin = delta * self.config.scroll_spin;

        for logo in &mut self.logos {
            logo.velocity.x += push;
            logo.velocity.y += lift;
            logo.rotation_speed += spin;
        }
    }

    /// Damp every logo's velocity and spin once.
    pub fn decay(&mut self) {
        let factor = self.config.decay_factor;
        for logo in &mut self.logos {
            logo.damp(factor);
        }
    }

    /// Push logos near `pointer` away from it.
    ///
    /// The impulse falls off linearly from `repel_strength` at the pointer to
    /// zero at `repel_radius`. A logo centered exactly on the pointer has no
    /// direction to be pushed in and is left alone.
    pub fn repel(&mut self, pointer: Vec2) {
        let radius = self.config.repel_radius;
        let strength = self.config.repel_strength;

        for logo in &mut self.logos {
            let offset = pointer - logo.position;
            let distance = offset.length();

            if distance >= radius || distance <= f32::EPSILON {
                continue;
            }

            let force = (radius - distance) / radius;
            logo.velocity -= offset / distance * force * strength;
        }
    }

    // ========== Frame ==========

    /// Update then draw each logo in insertion order.
    pub fn step<C: Canvas + ?Sized>(&mut self, bounds: Bounds, canvas: &mut C) {
        for logo in &mut self.logos {
            logo.update(bounds);
            draw_logo(logo, canvas);
        }
    }
}
