use serde::{Deserialize, Serialize};

/// A cell address: `x` is the column index, `y` the row index (both 0-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CellPos {
    pub x: u32,
    pub y: u32,
}

impl CellPos {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// One entry of a write batch emitted by an edit commit or a paste.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellWrite {
    pub x: u32,
    pub y: u32,
    pub value: String,
}

impl CellWrite {
    pub fn new(x: u32, y: u32, value: impl Into<String>) -> Self {
        Self {
            x,
            y,
            value: value.into(),
        }
    }

    pub fn pos(&self) -> CellPos {
        CellPos::new(self.x, self.y)
    }
}
