//! Browser Console Logging
//!
//! A tracing Layer that forwards events to `console.*`, so `tracing` calls in
//! the UI and in `habit_client` show up in the browser devtools.

use std::fmt::Write as FmtWrite;

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::Layer;

/// Writes each event as `[LEVEL target] message key=value ...`.
pub struct ConsoleLayer;

impl<S: Subscriber> Layer<S> for ConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let mut visitor = ConsoleVisitor::default();
        event.record(&mut visitor);

        let line = format!(
            "[{} {}] {}{}",
            metadata.level(),
            metadata.target(),
            visitor.message,
            visitor.fields
        );
        let line = wasm_bindgen::JsValue::from_str(&line);

        match *metadata.level() {
            Level::ERROR => web_sys::console::error_1(&line),
            Level::WARN => web_sys::console::warn_1(&line),
            Level::INFO => web_sys::console::info_1(&line),
            _ => web_sys::console::debug_1(&line),
        }
    }
}

#[derive(Default)]
struct ConsoleVisitor {
    message: String,
    fields: String,
}

impl Visit for ConsoleVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{:?}", value);
        } else {
            let _ = write!(self.fields, " {}={:?}", field.name(), value);
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            let _ = write!(self.fields, " {}={}", field.name(), value);
        }
    }
}

/// Install the console layer as the global subscriber. Debug builds log at
/// `DEBUG`, release builds at `INFO`.
pub fn init() {
    let level = if cfg!(debug_assertions) {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    let subscriber = tracing_subscriber::registry().with(ConsoleLayer.with_filter(level));
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        web_sys::console::warn_1(&"[logging] subscriber already installed".into());
    }
}
