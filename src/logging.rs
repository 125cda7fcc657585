//! Diagnostics sink.
//!
//! The engine reports recovered failures (bad clipboard text, nothing
//! selected, stale pastes) with `tracing`. [`ConsoleLayer`] turns each event
//! at or above a level into one line and hands it to a sink: the browser
//! console in the wasm view, stderr in the CLI, a buffer in tests.

use std::fmt::{self, Write as _};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::Layer;

/// Collects an event's message and fields.
#[derive(Default)]
struct LineVisitor {
    message: String,
    fields: String,
}

impl Visit for LineVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            let _ = write!(self.fields, " {}={}", field.name(), value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{value:?}");
        } else {
            let _ = write!(self.fields, " {}={:?}", field.name(), value);
        }
    }
}

/// Render `event` as `[gridview] LEVEL message key=value ...`.
pub fn format_event(event: &Event<'_>) -> String {
    let mut visitor = LineVisitor::default();
    event.record(&mut visitor);
    format!(
        "[gridview] {} {}{}",
        event.metadata().level(),
        visitor.message,
        visitor.fields
    )
}

/// A layer forwarding events at or above `max_level` severity to `sink`.
pub struct ConsoleLayer<F> {
    max_level: Level,
    sink: F,
}

impl<F> ConsoleLayer<F>
where
    F: Fn(Level, &str) + 'static,
{
    pub fn new(max_level: Level, sink: F) -> Self {
        Self { max_level, sink }
    }
}

impl<S, F> Layer<S> for ConsoleLayer<F>
where
    S: Subscriber,
    F: Fn(Level, &str) + 'static,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        // More verbose levels compare greater.
        let level = *event.metadata().level();
        if level > self.max_level {
            return;
        }
        (self.sink)(level, &format_event(event));
    }
}

#[cfg(target_arch = "wasm32")]
fn browser_console(level: Level, line: &str) {
    let line = wasm_bindgen::JsValue::from_str(line);
    if level == Level::ERROR {
        web_sys::console::error_1(&line);
    } else if level == Level::WARN {
        web_sys::console::warn_1(&line);
    } else {
        web_sys::console::log_1(&line);
    }
}

/// Send warnings and errors to the browser console. Installs once per page;
/// a subscriber the host already set up is left alone.
#[cfg(target_arch = "wasm32")]
pub fn init_console_logging() {
    use tracing_subscriber::layer::SubscriberExt;

    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        let subscriber =
            tracing_subscriber::registry().with(ConsoleLayer::new(Level::WARN, browser_console));
        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::layer::SubscriberExt;

    fn capture<F: FnOnce()>(max_level: Level, f: F) -> Vec<(Level, String)> {
        let lines = Arc::new(Mutex::new(Vec::new()));
        let sink_lines = Arc::clone(&lines);
        let layer = ConsoleLayer::new(max_level, move |level, line: &str| {
            sink_lines.lock().unwrap().push((level, line.to_string()));
        });
        tracing::subscriber::with_default(tracing_subscriber::registry().with(layer), f);
        let captured = lines.lock().unwrap().clone();
        captured
    }

    #[test]
    fn formats_message_and_fields() {
        let lines = capture(Level::WARN, || {
            tracing::warn!(cells = 4, error = %"bad payload", "grid input ignored");
        });
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].0, Level::WARN);
        assert_eq!(
            lines[0].1,
            "[gridview] WARN grid input ignored cells=4 error=bad payload"
        );
    }

    #[test]
    fn drops_events_below_the_level() {
        let lines = capture(Level::WARN, || {
            tracing::debug!("scroll area grew");
            tracing::info!("ready");
            tracing::error!("render failed");
        });
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].0, Level::ERROR);
    }
}
