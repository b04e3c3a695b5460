//! Virtual page scrolling.
//!
//! The window is a viewport onto a taller virtual page. [`PageScroll`] keeps
//! the page offset, turns mouse-wheel input into new offsets, and runs the
//! eased smooth scroll used by the scroll indicator.

/// Pixels scrolled per wheel line.
pub const LINE_HEIGHT: f32 = 40.0;

/// Fraction of the remaining distance covered per smooth-scroll step.
const SMOOTH_EASE: f32 = 0.15;

/// Remaining distance below which a smooth scroll snaps to its target.
const SMOOTH_SNAP: f32 = 0.5;

/// Scroll position of the virtual page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageScroll {
    offset: f32,
    /// Page height in multiples of the viewport height.
    page_height: f32,
    viewport_height: f32,
    smooth_target: Option<f32>,
}

impl PageScroll {
    pub fn new(page_height: f32, viewport_height: f32) -> Self {
        Self {
            offset: 0.0,
            page_height: page_height.max(1.0),
            viewport_height: viewport_height.max(0.0),
            smooth_target: None,
        }
    }

    /// Current scroll offset from the top of the page.
    #[inline]
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Largest reachable offset.
    #[inline]
    pub fn max_offset(&self) -> f32 {
        (self.page_height - 1.0) * self.viewport_height
    }

    #[inline]
    pub fn is_smooth_scrolling(&self) -> bool {
        self.smooth_target.is_some()
    }

    /// Track a new viewport height.
    ///
    /// Returns the new offset if it had to be clamped into the shorter page.
    pub fn set_viewport_height(&mut self, height: f32) -> Option<f32> {
        self.viewport_height = height.max(0.0);
        if let Some(target) = self.smooth_target {
            self.smooth_target = Some(target.min(self.max_offset()));
        }
        self.move_to(self.offset)
    }

    /// Scroll by `pixels` (positive scrolls down the page).
    ///
    /// Manual scrolling cancels any smooth scroll in progress. Returns the new
    /// offset if it changed.
    pub fn scroll_by(&mut self, pixels: f32) -> Option<f32> {
        self.smooth_target = None;
        self.move_to(self.offset + pixels)
    }

    /// Begin an eased scroll toward `target`.
    pub fn smooth_scroll_to(&mut self, target: f32) {
        self.smooth_target = Some(target.clamp(0.0, self.max_offset()));
    }

    /// Advance a smooth scroll by one frame.
    ///
    /// Returns the new offset if it changed.
    pub fn step(&mut self) -> Option<f32> {
        let target = self.smooth_target?;
        let remaining = target - self.offset;

        let next = if remaining.abs() <= SMOOTH_SNAP {
            self.smooth_target = None;
            target
        } else {
            self.offset + remaining * SMOOTH_EASE
        };
        self.move_to(next)
    }

    fn move_to(&mut self, offset: f32) -> Option<f32> {
        let clamped = offset.clamp(0.0, self.max_offset());
        if clamped == self.offset {
            return None;
        }
        self.offset = clamped;
        Some(clamped)
    }
}
