//! The logo image.
//!
//! The field draws a single image. [`LogoImage`] holds it as RGBA8 pixels
//! ready for upload, loaded from a PNG or JPEG file or built from raw data.
//!
//! # Supported Formats
//!
//! - PNG
//! - JPEG

use crate::error::TextureError;
use std::path::Path;

/// Filter mode used when the logo is scaled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    /// Smooth linear filtering (default).
    #[default]
    Linear,
    /// Sharp nearest-neighbor filtering. Good for pixel art logos.
    Nearest,
}

/// Decoded logo pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct LogoImage {
    /// Raw RGBA pixel data (width * height * 4 bytes).
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub filter: FilterMode,
}

impl LogoImage {
    /// Wrap raw RGBA data.
    ///
    /// # Example
    ///
    /// ```ignore
    /// // 1x2 image: white over black
    /// let img = LogoImage::from_rgba(vec![255, 255, 255, 255, 0, 0, 0, 255], 1, 2)?;
    /// ```
    pub fn from_rgba(data: Vec<u8>, width: u32, height: u32) -> Result<Self, TextureError> {
        let expected = width as usize * height as usize * 4;
        if width == 0 || height == 0 || data.len() != expected {
            return Err(TextureError::SizeMismatch {
                width,
                height,
                len: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
            filter: FilterMode::Linear,
        })
    }

    /// Decode an image file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, TextureError> {
        let bytes = std::fs::read(path.as_ref())?;
        Self::from_bytes(&bytes)
    }

    /// Decode an in-memory PNG or JPEG.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TextureError> {
        let img = image::load_from_memory(bytes)?.into_rgba8();
        let (width, height) = img.dimensions();
        Self::from_rgba(img.into_raw(), width, height)
    }

    /// Set the filter mode.
    pub fn with_filter(mut self, filter: FilterMode) -> Self {
        self.filter = filter;
        self
    }

    /// Bytes per row of pixel data.
    #[inline]
    pub fn row_bytes(&self) -> u32 {
        self.width * 4
    }
}
