//! Layout engine for visible-range computation and coordinate mapping.
//!
//! This module handles:
//! - Windowing each axis into the indices visible at the current scroll offset
//! - Mapping pointer pixels to cells and cells back to pixels
//! - Extrapolating pixel positions for cells scrolled out of view

mod axis;
mod viewport;

pub use axis::AxisWindow;
pub use viewport::{PixelRect, Viewport};
