//! Input events consumed by [`Engine::handle`](super::Engine::handle).
//!
//! Host-specific event capture (DOM listeners, terminal input, tests)
//! translates raw events into these variants; coordinates are surface pixels.

/// The closed set of inputs the interaction engine understands.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Primary button pressed over the surface.
    PointerDown { x: f64, y: f64 },
    /// Pointer moved; only meaningful while a selection drag is active.
    PointerMove { x: f64, y: f64 },
    /// Primary button released.
    PointerUp,
    /// Activate the cell under the pointer for editing.
    DoubleClick { x: f64, y: f64 },
    /// Raw scroll position of the scroll container, in pixels.
    Scroll { left: f64, top: f64 },
    /// Drawing surface resized, in pixels.
    Resize { width: f64, height: f64 },
    /// New contents of the edit overlay.
    EditInput(String),
    /// Commit the edit buffer (Enter).
    EditConfirm,
    /// Discard the edit buffer (Escape).
    EditCancel,
    /// Serialize the current selection for the clipboard.
    Copy,
    /// Clipboard text to paste at the current selection.
    Paste(String),
}

impl InputEvent {
    /// Map a key pressed inside the edit overlay to an edit event.
    pub fn from_edit_key(key: &str) -> Option<Self> {
        match key {
            "Enter" => Some(Self::EditConfirm),
            "Escape" | "Esc" => Some(Self::EditCancel),
            _ => None,
        }
    }
}
