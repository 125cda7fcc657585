//! Data types shared by the layout, engine and render modules.

mod cell;
mod config;
mod selection;

pub use cell::*;
pub use config::*;
pub use selection::*;
