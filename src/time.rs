//! Host clock.
//!
//! The field never reads a clock itself; the host does, through [`Clock`],
//! and passes timestamps down. A timestamp is the [`Duration`] since the
//! clock was created, which is what the field's timers expect.
//!
//! # Example
//!
//! ```ignore
//! let mut clock = Clock::new();
//!
//! // Once per rendered frame:
//! clock.tick();
//! animator.advance(clock.now());
//! println!("FPS: {:.1}", clock.fps());
//! ```

use std::time::{Duration, Instant};

/// Monotonic timestamps plus frame counting for the window title.
#[derive(Debug)]
pub struct Clock {
    /// When the clock was created.
    start: Instant,
    /// Total frames since start.
    frame_count: u64,
    /// Calculated FPS (updated periodically).
    fps: f32,
    /// Frame count at last FPS update.
    fps_frame_count: u64,
    /// Time of last FPS calculation.
    fps_update_time: Instant,
    /// How often to update FPS calculation.
    fps_update_interval: Duration,
}

impl Clock {
    /// Create a clock starting from now.
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            frame_count: 0,
            fps: 0.0,
            fps_frame_count: 0,
            fps_update_time: now,
            fps_update_interval: Duration::from_millis(500),
        }
    }

    /// Time since the clock was created.
    #[inline]
    pub fn now(&self) -> Duration {
        self.start.elapsed()
    }

    /// Convert a timestamp back to an instant, for scheduling wakeups.
    #[inline]
    pub fn instant_at(&self, at: Duration) -> Instant {
        self.start + at
    }

    /// Count a rendered frame.
    ///
    /// Returns `true` when the FPS estimate was refreshed.
    pub fn tick(&mut self) -> bool {
        self.frame_count += 1;

        let now = Instant::now();
        let fps_elapsed = now.duration_since(self.fps_update_time);
        if fps_elapsed < self.fps_update_interval {
            return false;
        }

        let frames_since = self.frame_count - self.fps_frame_count;
        self.fps = frames_since as f32 / fps_elapsed.as_secs_f32();
        self.fps_frame_count = self.frame_count;
        self.fps_update_time = now;
        true
    }

    /// Total frames since start.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame_count
    }

    /// Calculated frames per second.
    #[inline]
    pub fn fps(&self) -> f32 {
        self.fps
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_clock_new() {
        let clock = Clock::new();
        assert_eq!(clock.frame(), 0);
        assert_eq!(clock.fps(), 0.0);
    }

    #[test]
    fn test_now_is_monotonic() {
        let clock = Clock::new();
        let a = clock.now();
        thread::sleep(Duration::from_millis(5));
        let b = clock.now();
        assert!(b > a);
        assert!(clock.instant_at(b) > clock.instant_at(a));
    }

    #[test]
    fn test_tick_counts_frames() {
        let mut clock = Clock::new();
        clock.tick();
        clock.tick();
        assert_eq!(clock.frame(), 2);
    }

    #[test]
    fn test_fps_refresh() {
        let mut clock = Clock::new();
        thread::sleep(Duration::from_millis(510));
        assert!(clock.tick());
        assert!(clock.fps() > 0.0);
        assert!(!clock.tick());
    }
}
