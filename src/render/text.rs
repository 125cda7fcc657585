//! Plain-text backend.
//!
//! Paints a [`Frame`] as a fixed-width character grid. Used by the CLI and by
//! tests that want to look at a whole frame at once.

use std::fmt::Write as _;

use super::{Frame, RenderBackend};
use crate::error::Result;

const DEFAULT_CELL_CHARS: usize = 10;
const DEFAULT_HEADER_CHARS: usize = 5;

/// Renders frames into a `String`, one text line per visible row.
///
/// Selected cells are prefixed with `*`; everything else with a space.
#[derive(Debug, Clone)]
pub struct TextRenderer {
    width: u32,
    height: u32,
    cell_chars: usize,
    header_chars: usize,
    output: String,
}

impl TextRenderer {
    pub fn new() -> Self {
        Self::with_widths(DEFAULT_CELL_CHARS, DEFAULT_HEADER_CHARS)
    }

    /// Renderer with `cell_chars` characters per column (marker included)
    /// and `header_chars` for the row header.
    pub fn with_widths(cell_chars: usize, header_chars: usize) -> Self {
        Self {
            width: 0,
            height: 0,
            cell_chars: cell_chars.max(2),
            header_chars: header_chars.max(1),
            output: String::new(),
        }
    }

    /// Text of the last rendered frame.
    pub fn output(&self) -> &str {
        &self.output
    }

    fn push_field(&mut self, marker: char, text: &str) {
        let room = self.cell_chars - 1;
        self.output.push('|');
        self.output.push(marker);
        let mut used = 0;
        for ch in text.chars().take(room) {
            self.output.push(ch);
            used += 1;
        }
        for _ in used..room {
            self.output.push(' ');
        }
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderBackend for TextRenderer {
    fn init(&mut self) -> Result<()> {
        self.output.clear();
        Ok(())
    }

    fn resize(&mut self, width: u32, height: u32, _dpr: f32) {
        self.width = width;
        self.height = height;
    }

    fn render(&mut self, frame: &Frame) -> Result<()> {
        self.output.clear();

        let _ = write!(self.output, "{:width$}", "", width = self.header_chars);
        for col in &frame.columns {
            self.push_field(' ', &col.label);
        }
        self.output.push('\n');

        // Texts are row-major, so one forward pass pairs them with cells.
        let mut texts = frame.texts.iter().peekable();
        for row in &frame.rows {
            let _ = write!(
                self.output,
                "{:>width$}",
                row.label,
                width = self.header_chars
            );
            for col in &frame.columns {
                let text = match texts.peek() {
                    Some(t) if t.row == row.index && t.col == col.index => {
                        texts.next().map_or("", |t| t.text.as_str())
                    }
                    _ => "",
                };
                let marker = if frame.is_selected(col.index, row.index) {
                    '*'
                } else {
                    ' '
                };
                self.push_field(marker, text);
            }
            self.output.push('\n');
        }
        Ok(())
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }
}
