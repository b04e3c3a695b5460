//! Error types for logo-field.
//!
//! This module provides error types for GPU initialization, logo image
//! loading, and running the windowed app.

use thiserror::Error;

/// Errors that can occur during GPU initialization.
#[derive(Debug, Error)]
pub enum GpuError {
    /// Failed to create a surface for rendering.
    #[error("Failed to create GPU surface: {0}")]
    SurfaceCreation(#[from] wgpu::CreateSurfaceError),
    /// No compatible GPU adapter found.
    #[error("No compatible GPU adapter found. Ensure your system has a GPU with WebGPU/Vulkan/Metal/DX12 support.")]
    NoAdapter,
    /// Failed to create GPU device.
    #[error("Failed to create GPU device: {0}")]
    DeviceCreation(#[from] wgpu::RequestDeviceError),
}

/// Errors that can occur while loading the logo image.
#[derive(Debug, Error)]
pub enum TextureError {
    /// The image could not be decoded.
    #[error("Failed to load image: {0}")]
    Image(#[from] image::ImageError),
    /// The image file could not be read.
    #[error("Failed to read image file: {0}")]
    Io(#[from] std::io::Error),
    /// Pixel data does not match the stated dimensions.
    #[error("RGBA data size mismatch: {width}x{height} image with {len} bytes")]
    SizeMismatch { width: u32, height: u32, len: usize },
}

/// Errors that can occur when running the windowed app.
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to create event loop.
    #[error("Failed to create event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    /// Failed to create window.
    #[error("Failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
    /// GPU initialization failed.
    #[error("GPU error: {0}")]
    Gpu(#[from] GpuError),
}
