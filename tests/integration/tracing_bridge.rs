//! `tracing` events rendered through `TintLayer`.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::sync::Arc;

use tintlog::sink::MemorySink;
use tintlog::{Logger, Output, TintLayer};
use tracing_subscriber::layer::SubscriberExt as _;

const RESET: &str = "\x1b[0m";

fn capture(threshold: i64, emit: impl FnOnce()) -> Vec<String> {
    let sink = Arc::new(MemorySink::new());
    let mut logger = Logger::with_sink(Output::Terminal, sink.clone());
    logger.set_level(threshold);
    let subscriber = tracing_subscriber::registry().with(TintLayer::new(logger));
    tracing::subscriber::with_default(subscriber, emit);
    sink.lines()
}

#[test]
fn message_and_fields_render_after_label() {
    let lines = capture(0, || {
        tracing::warn!(user = "ada", attempts = 3, "login failed");
    });
    assert_eq!(
        lines,
        vec![format!(
            "\x1b[0;30;43;1mWARN{RESET}{RESET} {RESET}login failed {{ user: 'ada', attempts: 3 }}{RESET}\n"
        )]
    );
}

#[test]
fn trace_maps_to_debug_label() {
    let lines = capture(0, || tracing::trace!("fine detail"));
    assert_eq!(
        lines,
        vec![format!("\x1b[0;37;40mdebug{RESET}{RESET} {RESET}fine detail{RESET}\n")]
    );
}

#[test]
fn events_below_threshold_are_dropped() {
    let lines = capture(3000, || {
        tracing::debug!("hidden");
        tracing::info!("shown");
    });
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("shown"));
}

#[test]
fn formatted_messages_are_plain_text() {
    let lines = capture(0, || tracing::error!("code {}", 42));
    assert!(lines[0].contains("code 42"));
    assert!(lines[0].starts_with("\x1b[0;31;40;1mERR!"));
}
