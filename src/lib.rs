//! gridview - virtualized infinite text grid for the web
//!
//! Renders an effectively unbounded grid of text cells into a single canvas
//! via WebAssembly and Canvas 2D:
//! - Only the visible rows and columns are laid out and painted
//! - Rectangular drag selection in any direction
//! - In-place cell editing through an input overlay
//! - Copy/paste of rectangular blocks, re-anchored at the target selection
//! - A scroll area that keeps growing as the user scrolls
//!
//! The interaction engine ([`engine::Engine`]) is platform independent; the
//! browser binding lives in [`viewer::GridView`].
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { GridView } from 'gridview';
//! await init();
//! const grid = new GridView(container, { cellWidth: 100 });
//! grid.load_rows([["1", "2"], ["3", "4"]]);
//! grid.set_on_change((batch) => console.log(batch));
//! ```

pub mod cell_ref;
mod editor;
pub mod engine;
pub mod error;
pub mod layout;
pub mod logging;
pub mod render;
pub mod store;
pub mod types;
pub mod viewer;

use wasm_bindgen::prelude::*;

// Re-export the main view struct
pub use viewer::GridView;

pub use engine::{Engine, InputEvent, Outcome};
pub use error::GridError;
pub use store::{GridStore, SparseGrid};
pub use types::*;

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
