//! Cell editing surface for the browser shell.
//!
//! The edit session itself lives in [`crate::engine::EditSession`]; this module
//! only owns the DOM `<input>` that mirrors it.

#[cfg(target_arch = "wasm32")]
pub(crate) mod input;
