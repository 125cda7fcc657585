use serde::Deserialize;

use crate::error::{GridError, Result};

/// Geometry and behaviour of a grid view.
///
/// Deserializes from a partial camelCase object (e.g. a JS config passed to
/// the wasm constructor); missing fields keep their defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GridConfig {
    /// Width of every column in pixels
    pub cell_width: f64,
    /// Height of every row in pixels
    pub cell_height: f64,
    /// Width of the row-number band on the left
    pub row_header_width: f64,
    /// Height of the column-letter band on top
    pub col_header_height: f64,
    /// Initial virtual scrollable extent per axis (pixels)
    pub initial_scroll_bound: f64,
    /// Extra spacer length past the scroll bound so the user can reach it
    pub scroll_padding: f64,
    /// Left padding of cell text
    pub text_padding: f64,
    /// CSS font used for headers and cells
    pub font: String,
    /// Largest block a single paste may write
    pub max_paste_cells: u64,
    pub colors: GridColors,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cell_width: 100.0,
            cell_height: 22.0,
            row_header_width: 50.0,
            col_header_height: 22.0,
            initial_scroll_bound: 5000.0,
            scroll_padding: 2000.0,
            text_padding: 5.0,
            font: "13px sans-serif".to_string(),
            max_paste_cells: 1_000_000,
            colors: GridColors::default(),
        }
    }
}

impl GridConfig {
    /// Reject geometry that would make windowing or scrolling degenerate.
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("cellWidth", self.cell_width),
            ("cellHeight", self.cell_height),
            ("initialScrollBound", self.initial_scroll_bound),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(GridError::Config(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        let non_negative = [
            ("rowHeaderWidth", self.row_header_width),
            ("colHeaderHeight", self.col_header_height),
            ("scrollPadding", self.scroll_padding),
            ("textPadding", self.text_padding),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(GridError::Config(format!(
                    "{name} must not be negative, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Palette used by the canvas backend.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GridColors {
    pub background: String,
    pub header: String,
    pub grid_line: String,
    pub header_text: String,
    pub cell_text: String,
    pub selection_fill: String,
    pub selection_border: String,
}

impl Default for GridColors {
    fn default() -> Self {
        Self {
            background: "#ffffff".to_string(),
            header: "#f8f9fa".to_string(),
            grid_line: "#e2e3e3".to_string(),
            header_text: "#666666".to_string(),
            cell_text: "#000000".to_string(),
            selection_fill: "#e9f0fd".to_string(),
            selection_border: "#1b73e7".to_string(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(GridConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config: GridConfig =
            serde_json::from_str(r##"{"cellWidth": 80, "colors": {"gridLine": "#ccc"}}"##).unwrap();
        assert_eq!(config.cell_width, 80.0);
        assert_eq!(config.cell_height, 22.0);
        assert_eq!(config.colors.grid_line, "#ccc");
        assert_eq!(config.colors.header, "#f8f9fa");
    }

    #[test]
    fn rejects_degenerate_sizes() {
        let config = GridConfig {
            cell_height: 0.0,
            ..GridConfig::default()
        };
        assert!(matches!(config.validate(), Err(GridError::Config(_))));

        let config = GridConfig {
            row_header_width: f64::NAN,
            ..GridConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
