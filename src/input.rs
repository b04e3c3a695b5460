//! Translating window input into field events.
//!
//! [`FieldInput`] sits between winit and the [`FieldAnimator`]. It tracks the
//! cursor and the virtual page scroll, and queues [`FieldEvent`]s for the
//! animator to consume:
//!
//! | Window input | Field event |
//! |--------------|-------------|
//! | resize | `Resize` (and `Scroll` if the page had to clamp) |
//! | mouse wheel | `Scroll` with the new page offset |
//! | cursor moved | `PointerMove` |
//! | left click | `Click` at the last cursor position |
//! | `Enter` | smooth scroll to one viewport down, if the indicator is enabled |
//!
//! [`FieldAnimator`]: crate::FieldAnimator

use crate::animator::FieldEvent;
use crate::scroll::{PageScroll, LINE_HEIGHT};
use glam::Vec2;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Input state for one window.
#[derive(Debug)]
pub struct FieldInput {
    cursor: Vec2,
    viewport: Vec2,
    page: PageScroll,
    scroll_indicator: bool,
    events: Vec<FieldEvent>,
}

impl FieldInput {
    /// Create input state for a viewport of `width` x `height` onto a page
    /// `page_height` viewports tall.
    pub fn new(width: f32, height: f32, page_height: f32, scroll_indicator: bool) -> Self {
        Self {
            cursor: Vec2::ZERO,
            viewport: Vec2::new(width, height),
            page: PageScroll::new(page_height, height),
            scroll_indicator,
            events: Vec::new(),
        }
    }

    // ========== Queries ==========

    #[inline]
    pub fn page(&self) -> &PageScroll {
        &self.page
    }

    /// Whether a smooth scroll still needs [`step`](Self::step) calls.
    #[inline]
    pub fn is_smooth_scrolling(&self) -> bool {
        self.page.is_smooth_scrolling()
    }

    /// Take every queued event, oldest first.
    pub fn drain(&mut self) -> std::vec::Drain<'_, FieldEvent> {
        self.events.drain(..)
    }

    // ========== Input ==========

    /// The viewport changed size. Zero sizes (minimized windows) are ignored.
    pub fn resize(&mut self, width: f32, height: f32) {
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        self.viewport = Vec2::new(width, height);
        self.events.push(FieldEvent::Resize { width, height });
        if let Some(offset) = self.page.set_viewport_height(height) {
            self.events.push(FieldEvent::Scroll { offset });
        }
    }

    /// The cursor moved to `position`.
    pub fn cursor_moved(&mut self, position: Vec2) {
        self.cursor = position;
        self.events.push(FieldEvent::PointerMove { position });
    }

    /// The primary button was clicked at the current cursor position.
    pub fn click(&mut self) {
        self.events.push(FieldEvent::Click {
            position: self.cursor,
        });
    }

    /// Scroll the page by a wheel delta.
    ///
    /// Positive winit deltas move content down, which scrolls the page up.
    pub fn wheel(&mut self, delta: MouseScrollDelta) {
        let pixels = match delta {
            MouseScrollDelta::LineDelta(_, y) => -y * LINE_HEIGHT,
            MouseScrollDelta::PixelDelta(pos) => -pos.y as f32,
        };
        if let Some(offset) = self.page.scroll_by(pixels) {
            self.events.push(FieldEvent::Scroll { offset });
        }
    }

    /// Activate the scroll indicator. A no-op when the window has none.
    pub fn trigger_scroll_indicator(&mut self) {
        if !self.scroll_indicator {
            return;
        }
        self.page.smooth_scroll_to(self.viewport.y);
    }

    /// Advance any smooth scroll by one frame.
    pub fn step(&mut self) {
        if let Some(offset) = self.page.step() {
            self.events.push(FieldEvent::Scroll { offset });
        }
    }

    /// Process a winit window event.
    pub(crate) fn handle_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::Resized(size) => {
                self.resize(size.width as f32, size.height as f32);
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_moved(Vec2::new(position.x as f32, position.y as f32));
            }

            // A click completes on release, like a browser click
            WindowEvent::MouseInput {
                state: ElementState::Released,
                button: MouseButton::Left,
                ..
            } => self.click(),

            WindowEvent::MouseWheel { delta, .. } => self.wheel(*delta),

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed
                    && !event.repeat
                    && event.physical_key == PhysicalKey::Code(KeyCode::Enter)
                {
                    self.trigger_scroll_indicator();
                }
            }

            _ => {}
        }
    }
}
