//! Measured text widths for the renderer's font.
//!
//! Cell text repeats across frames while scrolling, and `measureText` is the
//! slowest call in the text pass. Widths live in two generations: when the
//! current one fills up it becomes the previous one and a fresh map starts.
//! Hits in the previous generation move forward, so text still on screen
//! survives a rotation and stale text ages out after two.

use std::collections::HashMap;

pub(super) struct WidthCache {
    current: HashMap<String, f64>,
    previous: HashMap<String, f64>,
    generation_cap: usize,
}

impl WidthCache {
    pub(super) fn new(generation_cap: usize) -> Self {
        Self {
            current: HashMap::new(),
            previous: HashMap::new(),
            generation_cap,
        }
    }

    /// Width of `text`, measuring it with `measure` on a miss.
    pub(super) fn width_of(&mut self, text: &str, measure: impl FnOnce(&str) -> f64) -> f64 {
        if let Some(&width) = self.current.get(text) {
            return width;
        }
        let width = match self.previous.remove(text) {
            Some(width) => width,
            None => measure(text),
        };
        if self.generation_cap > 0 {
            if self.current.len() >= self.generation_cap {
                self.previous = std::mem::take(&mut self.current);
            }
            self.current.insert(text.to_string(), width);
        }
        width
    }

    /// Forget every width (the backing store changed scale).
    pub(super) fn clear(&mut self) {
        self.current.clear();
        self.previous.clear();
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.current.len() + self.previous.len()
    }
}
