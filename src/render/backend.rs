//! Render backend trait for pluggable rendering implementations.
//!
//! This module defines the `RenderBackend` trait that abstracts rendering
//! operations, allowing different backends (Canvas 2D, plain text) to
//! paint the same [`Frame`].

use super::Frame;
use crate::error::Result;

/// Trait for render backends
///
/// Implementations paint a frame in this order: background, selection fill,
/// grid lines, header bands and labels, cell text, selection border.
pub trait RenderBackend {
    /// Initialize the backend
    fn init(&mut self) -> Result<()>;

    /// Resize the render surface
    fn resize(&mut self, width: u32, height: u32, dpr: f32);

    /// Render a frame
    fn render(&mut self, frame: &Frame) -> Result<()>;

    /// Get the current width
    fn width(&self) -> u32;

    /// Get the current height
    fn height(&self) -> u32;
}
