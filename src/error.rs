//! Structured error types for gridview.
//!
//! Every interaction failure in the engine degrades to a logged no-op, so these
//! errors surface mostly through diagnostics and the wasm API boundary.

/// All errors that can occur while handling grid input or rendering.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    /// Clipboard text was not a serialized selection rectangle.
    #[error("Malformed clipboard payload: {0}")]
    ClipboardPayload(#[from] serde_json::Error),

    /// Copy or paste was requested without an active selection.
    #[error("No active selection")]
    NothingSelected,

    /// The pasted block would extend past the addressable grid.
    #[error("Paste destination out of range")]
    PasteOutOfRange,

    /// The pasted block is larger than the configured cell limit.
    #[error("Paste of {cells} cells exceeds limit of {limit}")]
    PasteTooLarge { cells: u64, limit: u64 },

    /// A clipboard read resolved after its paste was cancelled.
    #[error("Paste was cancelled before the clipboard read resolved")]
    StalePaste,

    /// Invalid grid configuration.
    #[error("Invalid config: {0}")]
    Config(String),

    /// Rendering error.
    #[error("Render error: {0}")]
    Render(String),

    /// Catch-all for string errors.
    #[error("{0}")]
    Other(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GridError>;

impl From<String> for GridError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for GridError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<GridError> for wasm_bindgen::JsValue {
    fn from(e: GridError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
