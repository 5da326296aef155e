//! Tests for `Logger` call assembly, filtering and routing.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::io;
use std::sync::Arc;

use serde_json::json;
use tintlog::render::{ConsoleArg, ConsoleMethod};
use tintlog::sink::{MemorySink, Record};
use tintlog::{
    Color, Error, Format, Level, Logger, LoggerConfig, Output, PrefixSegment, Threshold, args,
};

use crate::helpers::{BrokenPipeSink, RESET, console_logger, terminal_logger};

// ── Labels ───────────────────────────────────────────────────────────────────

#[test]
fn test_debug_label_is_white_on_black() {
    let (mut log, sink) = terminal_logger();
    log.set_level(0);
    log.debug(args!["meow"]).unwrap();
    assert_eq!(
        sink.lines(),
        vec![format!("\x1b[0;37;40mdebug{RESET}{RESET} {RESET}meow{RESET}\n")]
    );
}

#[test]
fn test_verbose_label_is_blue_info() {
    let (mut log, sink) = terminal_logger();
    log.set_level(0);
    log.verbose(args!["woof"]).unwrap();
    assert_eq!(
        sink.lines(),
        vec![format!("\x1b[0;34;40minfo{RESET}{RESET} {RESET}woof{RESET}\n")]
    );
}

#[test]
fn test_error_label_is_bold_red_on_black() {
    let (log, sink) = terminal_logger();
    log.error(args![":3"]).unwrap();
    assert_eq!(
        sink.lines(),
        vec![format!("\x1b[0;31;40;1mERR!{RESET}{RESET} {RESET}:3{RESET}\n")]
    );
}

// ── Arguments ────────────────────────────────────────────────────────────────

#[test]
fn test_inline_formats_and_objects() {
    let (log, sink) = terminal_logger();
    log.info(args![
        Format::new().foreground(Color::MAGENTA),
        "Fancy formatting",
        Format::RESET,
        json!({ "computer": true }),
        "Combined with other features",
    ])
    .unwrap();
    assert_eq!(
        sink.lines(),
        vec![format!(
            "\x1b[0;32minfo{RESET}{RESET}{RESET} \x1b[0;35mFancy formatting{RESET} {RESET}{{ computer: true }} Combined with other features{RESET}\n"
        )]
    );
}

#[test]
fn test_colored_sink_colors_inspected_values() {
    let sink = Arc::new(MemorySink::with_colors());
    let log = Logger::with_sink(Output::Terminal, sink.clone());
    log.info(args![json!(1)]).unwrap();
    assert!(sink.lines()[0].contains("\x1b[33m1\x1b[39m"));
}

#[test]
fn test_anyhow_errors_log_their_chain() {
    let (log, sink) = terminal_logger();
    let err = anyhow::anyhow!("connection refused").context("cannot reach daemon");
    log.error(args!["Stacktrace printing:", err]).unwrap();
    let line = &sink.lines()[0];
    assert!(line.contains("Stacktrace printing: cannot reach daemon"));
    assert!(line.contains("connection refused"));
}

// ── Prefix ───────────────────────────────────────────────────────────────────

#[test]
fn test_set_prefix_replaces_previous_prefix() {
    let (mut log, sink) = terminal_logger();
    log.set_prefix(args!["[one]"]);
    log.set_prefix(args!["[two]"]);
    log.info(args!["x"]).unwrap();
    let line = &sink.lines()[0];
    assert!(line.contains("[two]"));
    assert!(!line.contains("[one]"));
}

#[test]
fn test_prefix_applies_to_every_leveled_call() {
    let (mut log, sink) = terminal_logger();
    log.set_level(0);
    log.set_prefix(args!["[wp]"]);
    log.debug(args!["a"]).unwrap();
    log.info(args!["b"]).unwrap();
    log.raw(args!["c"]).unwrap();
    let lines = sink.lines();
    assert!(lines[0].contains("[wp]"));
    assert!(lines[1].contains("[wp]"));
    assert_eq!(lines[2], format!("c{RESET}\n"));
}

// ── Filtering ────────────────────────────────────────────────────────────────

#[test]
fn test_threshold_between_levels() {
    let (mut log, sink) = terminal_logger();
    log.set_level(3500);
    log.info(args!["hidden"]).unwrap();
    log.warn(args!["shown"]).unwrap();
    assert_eq!(sink.lines().len(), 1);
    assert!(sink.lines()[0].contains("shown"));
}

#[test]
fn test_raw_ignores_threshold() {
    let (mut log, sink) = terminal_logger();
    log.set_level(i64::MAX);
    log.error(args!["hidden"]).unwrap();
    log.raw(args!["log raw"]).unwrap();
    assert_eq!(sink.lines(), vec![format!("log raw{RESET}\n")]);
}

#[test]
fn test_log_dispatches_by_level() {
    let (log, sink) = terminal_logger();
    log.log(Level::Warn, args!["x"]).unwrap();
    assert!(sink.lines()[0].starts_with("\x1b[0;30;43;1mWARN"));
}

// ── Errors ───────────────────────────────────────────────────────────────────

#[test]
fn test_write_failure_propagates() {
    let log = Logger::with_sink(Output::Terminal, Arc::new(BrokenPipeSink));
    let err = log.info(args!["x"]).unwrap_err();
    assert!(matches!(err, Error::Io(ref e) if e.kind() == io::ErrorKind::BrokenPipe));
}

#[test]
fn test_filtered_call_never_reaches_sink() {
    let log = Logger::with_sink(Output::Terminal, Arc::new(BrokenPipeSink));
    assert!(log.debug(args!["x"]).is_ok());
}

// ── Console routing ──────────────────────────────────────────────────────────

#[test]
fn test_console_warn_with_prefix() {
    let (mut log, sink) = console_logger();
    log.set_prefix(args![Format::new().foreground(Color::MAGENTA), "[tag]"]);
    log.warn(args!["y"]).unwrap();

    let records = sink.records();
    let [Record::Console(call)] = records.as_slice() else {
        panic!("expected one console call, got {records:?}");
    };
    assert_eq!(call.method, ConsoleMethod::Warn);
    assert_eq!(call.template, "%c%s%c%c %c%s%c %c%s");

    let style = |css: &str| ConsoleArg::Style(css.to_string());
    let text = |t: &str| ConsoleArg::Text(t.to_string());
    assert_eq!(
        call.args,
        vec![
            style("color: #0c0c0c;background-color: #c19c00;font-weight: 700;"),
            text("WARN"),
            style(""),
            style(""),
            style("color: #881798;"),
            text("[tag]"),
            style(""),
            style(""),
            text("y"),
        ]
    );
}

#[test]
fn test_console_info_uses_log_method() {
    let (log, sink) = console_logger();
    log.info(args!["x"]).unwrap();
    let records = sink.records();
    assert!(matches!(
        records.as_slice(),
        [Record::Console(call)] if call.method == ConsoleMethod::Log
    ));
}

// ── Config ───────────────────────────────────────────────────────────────────

#[test]
fn test_apply_config_sets_level_and_prefix() {
    let (mut log, sink) = terminal_logger();
    let config = LoggerConfig {
        level: Threshold::Named(Level::Debug),
        prefix: vec![PrefixSegment::Text("[cfg]".into())],
    };
    log.apply_config(&config);
    assert_eq!(log.level(), 0);
    log.debug(args!["x"]).unwrap();
    assert!(sink.lines()[0].contains("[cfg]"));
}
