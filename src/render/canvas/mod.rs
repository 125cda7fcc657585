//! Canvas 2D rendering backend.
//!
//! Paints grid frames with the HTML Canvas 2D API via web-sys: rectangles,
//! lines and text are all a grid needs.

pub mod headers;
mod renderer;
mod text_width;

pub use renderer::CanvasRenderer;
