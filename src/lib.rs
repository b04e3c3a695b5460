//! # logo-field
//!
//! A decorative field of rotating, pulsing logo sprites that reacts to
//! scrolling and to the pointer.
//!
//! The crate is split in two layers:
//!
//! - a pure simulation core ([`FieldAnimator`], [`LogoField`], [`Logo`]) that
//!   takes input events and timestamps and draws onto any [`Canvas`], and
//! - a native host ([`LogoFieldApp`]) that runs the core in a winit window
//!   with a wgpu sprite renderer.
//!
//! ## Quick Start
//!
//! ```ignore
//! use logo_field::prelude::*;
//!
//! fn main() -> Result<(), AppError> {
//!     LogoFieldApp::new()
//!         .with_image("logo.jpeg")
//!         .with_config(FieldConfig::default().with_max_logos(20))
//!         .run()
//! }
//! ```
//!
//! ## Behavior
//!
//! | Trigger | Effect |
//! |---------|--------|
//! | Scroll past 30% of the viewport | One logo appears every 100 ms, up to 20 |
//! | Any scroll | Logos drift with the scroll and spin; 150 ms later they slow by 5% |
//! | Pointer within 200 px | Logos are pushed away |
//! | Click | A lively logo appears at the pointer, up to 40 in total |
//! | `Enter` | Smooth scroll one viewport down |
//!
//! ## Driving the core yourself
//!
//! ```ignore
//! let mut animator = FieldAnimator::new(FieldConfig::default(), Bounds::new(1000.0, 800.0));
//! let mut canvas = DrawList::new();
//!
//! animator.image_loaded();
//! animator.handle(FieldEvent::Scroll { offset: 400.0 }, Duration::ZERO);
//! animator.advance(Duration::from_millis(2000));
//! animator.frame(&mut canvas);
//! assert_eq!(canvas.sprites().len(), 20);
//! ```

mod animator;
mod app;
pub mod config;
pub mod error;
mod field;
mod gpu;
pub mod input;
pub mod particle;
pub mod render;
pub mod scroll;
pub mod spawn;
pub mod textures;
pub mod time;
pub mod timers;

pub use animator::{FieldAnimator, FieldEvent, LoopState};
pub use app::LogoFieldApp;
pub use config::FieldConfig;
pub use error::{AppError, GpuError, TextureError};
pub use field::LogoField;
pub use glam::Vec2;
pub use particle::{Bounds, Logo};
pub use render::{draw_logo, Canvas, DrawList, SpriteInstance};
pub use spawn::SpawnContext;
pub use textures::{FilterMode, LogoImage};

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use logo_field::prelude::*;
/// ```
pub mod prelude {
    pub use crate::animator::{FieldAnimator, FieldEvent, LoopState};
    pub use crate::app::LogoFieldApp;
    pub use crate::config::FieldConfig;
    pub use crate::error::{AppError, TextureError};
    pub use crate::field::LogoField;
    pub use crate::particle::{Bounds, Logo};
    pub use crate::render::{Canvas, DrawList, SpriteInstance};
    pub use crate::spawn::SpawnContext;
    pub use crate::textures::LogoImage;
    pub use crate::time::Clock;
    pub use crate::Vec2;
}
