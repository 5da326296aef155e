//! `tracing` integration.
//!
//! [`TintLayer`] forwards `tracing` events to a [`Logger`], so code
//! instrumented with `tracing::info!` and friends gets the same labels and
//! prefix as direct logger calls.
//!
//! ```no_run
//! use tintlog::{Logger, TintLayer};
//! use tracing_subscriber::layer::SubscriberExt as _;
//!
//! let subscriber = tracing_subscriber::registry().with(TintLayer::new(Logger::new()));
//! tracing::subscriber::set_global_default(subscriber).ok();
//! tracing::info!(port = 8080, "listening");
//! ```

use std::fmt;

use serde_json::{Map, Value};
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::Layer;
use tracing_subscriber::layer::Context;

use crate::arg::Arg;
use crate::level::Level;
use crate::logger::Logger;

/// Layer that renders events through a [`Logger`].
#[derive(Debug)]
pub struct TintLayer {
    logger: Logger,
}

impl TintLayer {
    #[must_use]
    pub fn new(logger: Logger) -> Self {
        Self { logger }
    }

    #[must_use]
    pub fn logger(&self) -> &Logger {
        &self.logger
    }
}

/// TRACE→debug, DEBUG→verbose, INFO→info, WARN→warn, ERROR→error.
#[must_use]
pub fn level_for(level: tracing::Level) -> Level {
    match level {
        tracing::Level::TRACE => Level::Debug,
        tracing::Level::DEBUG => Level::Verbose,
        tracing::Level::INFO => Level::Info,
        tracing::Level::WARN => Level::Warn,
        _ => Level::Error,
    }
}

impl<S: Subscriber> Layer<S> for TintLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let level = level_for(*event.metadata().level());
        if !self.logger.enabled(level) {
            return;
        }

        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);

        let mut args = Vec::with_capacity(2);
        if let Some(message) = visitor.message {
            args.push(Arg::Text(message));
        }
        if !visitor.fields.is_empty() {
            args.push(Arg::Value(Value::Object(visitor.fields)));
        }

        // layers have no error channel; a failed stderr write is dropped
        let _ = self.logger.log(level, args);
    }
}

/// Collects the `message` field as text and every other field as JSON.
#[derive(Default)]
struct FieldVisitor {
    message: Option<String>,
    fields: Map<String, Value>,
}

impl FieldVisitor {
    fn record(&mut self, field: &Field, value: Value) {
        if field.name() == "message" {
            self.message = Some(match value {
                Value::String(text) => text,
                other => other.to_string(),
            });
        } else {
            self.fields.insert(field.name().to_string(), value);
        }
    }
}

impl Visit for FieldVisitor {
    fn record_f64(&mut self, field: &Field, value: f64) {
        self.record(field, Value::from(value));
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record(field, Value::from(value));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.record(field, Value::from(value));
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.record(field, Value::from(value));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.record(field, Value::from(value));
    }

    fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
        self.record(field, Value::from(value.to_string()));
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.record(field, Value::from(format!("{value:?}")));
    }
}
