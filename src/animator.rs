//! The field animator: loop lifecycle, event handling and the frame tick.
//!
//! [`FieldAnimator`] owns the [`LogoField`] and everything that decides when
//! the field changes:
//!
//! - the render loop, which stays [`LoopState::Unstarted`] until the logo
//!   image is available,
//! - the growth timer, armed once the page is scrolled past a fraction of the
//!   viewport,
//! - the decay debounce, restarted by every scroll event.
//!
//! Time is injected. Every call that can start or fire a timer takes `now`, a
//! [`Duration`] since the host's epoch, and [`FieldAnimator::advance`] fires
//! whatever has come due. Nothing here sleeps or reads a clock.
//!
//! ```ignore
//! let mut animator = FieldAnimator::new(FieldConfig::default(), Bounds::new(1000.0, 800.0));
//! animator.image_loaded();
//! animator.handle(FieldEvent::Scroll { offset: 400.0 }, now);
//!
//! // Each display refresh:
//! animator.advance(now);
//! animator.frame(&mut draw_list);
//! ```

use crate::config::FieldConfig;
use crate::field::LogoField;
use crate::particle::Bounds;
use crate::render::Canvas;
use crate::spawn::SpawnContext;
use crate::timers::{DecayTimer, GrowthTimer};
use glam::Vec2;
use std::time::Duration;

/// Render loop lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopState {
    /// Waiting for the logo image. Frames draw nothing and move nothing.
    #[default]
    Unstarted,
    /// Ticking every frame, forever.
    Running,
}

/// Input the field reacts to, in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldEvent {
    /// The viewport changed size.
    Resize { width: f32, height: f32 },
    /// The page scroll offset changed.
    Scroll { offset: f32 },
    /// The pointer moved over the surface.
    PointerMove { position: Vec2 },
    /// The surface was clicked.
    Click { position: Vec2 },
}

/// Owns the field and drives it from events, timers and frames.
#[derive(Debug, Clone)]
pub struct FieldAnimator {
    field: LogoField,
    spawn: SpawnContext,
    bounds: Bounds,
    state: LoopState,
    growth: GrowthTimer,
    decay: DecayTimer,
    last_scroll: f32,
}

impl FieldAnimator {
    pub fn new(config: FieldConfig, bounds: Bounds) -> Self {
        Self::with_spawn(config, bounds, SpawnContext::new())
    }

    /// Create an animator with a specific random source.
    pub fn with_spawn(config: FieldConfig, bounds: Bounds, spawn: SpawnContext) -> Self {
        Self {
            field: LogoField::new(config),
            spawn,
            bounds,
            state: LoopState::Unstarted,
            growth: GrowthTimer::Idle,
            decay: DecayTimer::Idle,
            last_scroll: 0.0,
        }
    }

    // ========== Queries ==========

    #[inline]
    pub fn field(&self) -> &LogoField {
        &self.field
    }

    #[inline]
    pub fn field_mut(&mut self) -> &mut LogoField {
        &mut self.field
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    #[inline]
    pub fn state(&self) -> LoopState {
        self.state
    }

    #[inline]
    pub fn growth(&self) -> GrowthTimer {
        self.growth
    }

    #[inline]
    pub fn decay(&self) -> DecayTimer {
        self.decay
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    /// Earliest pending timer deadline, if any.
    pub fn next_deadline(&self) -> Option<Duration> {
        match (self.growth.deadline(), self.decay.deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    // ========== Loop lifecycle ==========

    /// The logo image is ready: start the render loop.
    pub fn image_loaded(&mut self) {
        if self.state == LoopState::Unstarted {
            log::debug!("logo image ready, starting render loop");
            self.state = LoopState::Running;
        }
    }

    /// The logo image could not be loaded. The loop never starts.
    pub fn image_failed(&mut self) {
        log::debug!("logo image unavailable, render loop stays idle");
    }

    // ========== Events ==========

    /// React to one input event.
    pub fn handle(&mut self, event: FieldEvent, now: Duration) {
        match event {
            FieldEvent::Resize { width, height } => {
                self.bounds = Bounds::new(width, height);
            }
            FieldEvent::Scroll { offset } => self.scroll(offset, now),
            FieldEvent::PointerMove { position } => self.field.repel(position),
            FieldEvent::Click { position } => {
                self.field.spawn_at(&mut self.spawn, position);
            }
        }
    }

    fn scroll(&mut self, offset: f32, now: Duration) {
        let config = self.field.config();
        let threshold = self.bounds.height * config.growth_threshold;
        let interval = config.growth_interval;
        let delay = config.decay_delay;

        if offset > threshold && self.growth.arm(now, interval) {
            log::debug!("scrolled past {:.0}px, logo growth armed", threshold);
        }

        self.field.apply_scroll(offset - self.last_scroll);
        self.last_scroll = offset;

        self.decay.touch(now, delay);
    }

    // ========== Timers ==========

    /// Fire every timer that has come due at `now`, earliest deadline first.
    ///
    /// A single call that jumps past many deadlines leaves the field exactly
    /// as repeated calls at each deadline would. On a tie the growth tick
    /// fires first.
    pub fn advance(&mut self, now: Duration) {
        let config = self.field.config();
        let interval = config.growth_interval;
        let total = config.max_logos;

        loop {
            let growth_due = self.growth.deadline().filter(|due| *due <= now);
            let decay_due = self.decay.deadline().filter(|due| *due <= now);

            match (growth_due, decay_due) {
                (None, None) => break,
                (Some(tick), Some(due)) if due < tick => self.fire_decay(due),
                (Some(tick), _) => {
                    // Polling at the tick's own deadline fires at most that tick
                    if self.growth.poll(tick, interval, total) > 0 {
                        self.field.spawn_ambient(&mut self.spawn, self.bounds);
                        if self.growth.is_saturated() {
                            log::debug!("logo growth finished with {} logos", self.field.len());
                        }
                    }
                }
                (None, Some(due)) => self.fire_decay(due),
            }
        }
    }

    fn fire_decay(&mut self, due: Duration) {
        if self.decay.poll(due) {
            self.field.decay();
        }
    }

    // ========== Frame ==========

    /// Run one frame: clear, then update and draw each logo in order.
    ///
    /// Does nothing until the loop is running.
    pub fn frame<C: Canvas + ?Sized>(&mut self, canvas: &mut C) {
        if self.state != LoopState::Running {
            return;
        }
        canvas.clear();
        self.field.step(self.bounds, canvas);
    }
}
