//! Rendering with pluggable backends.
//!
//! This module provides:
//! - [`Frame`], the backend-agnostic description of one painted frame
//! - Selection overlay geometry, clipped to the cell body
//! - Canvas 2D backend (browser) and a plain-text backend (CLI, tests)

pub mod backend;
pub mod canvas;
pub mod frame;
pub mod selection;
pub mod text;

pub use backend::RenderBackend;
pub use canvas::CanvasRenderer;
pub use frame::{CellText, Frame, HeaderLabel};
pub use selection::{selection_overlay, SelectionOverlay};
pub use text::TextRenderer;
