//! Property-based tests for level filtering and separator placement.
//!
//! Uses `proptest` to verify invariants across many random inputs.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use proptest::prelude::*;

use tintlog::render::terminal;
use tintlog::{Arg, Color, Format, Level};

use crate::helpers::{RESET, terminal_logger};

fn any_level() -> impl Strategy<Value = Level> {
    prop_oneof![
        Just(Level::Debug),
        Just(Level::Verbose),
        Just(Level::Info),
        Just(Level::Warn),
        Just(Level::Error),
        Just(Level::Raw),
    ]
}

fn any_format() -> impl Strategy<Value = Format> {
    (0usize..8, any::<bool>()).prop_map(|(color, bold)| {
        let colors = [
            Color::BLACK,
            Color::RED,
            Color::GREEN,
            Color::YELLOW,
            Color::BLUE,
            Color::MAGENTA,
            Color::CYAN,
            Color::WHITE,
        ];
        Format::new().foreground(colors[color].clone()).bold(bold)
    })
}

proptest! {
    /// Calls below the threshold write nothing; calls at or above write once.
    #[test]
    fn prop_threshold_gates_output(level in any_level(), threshold in -10_000i64..10_000) {
        let (mut log, sink) = terminal_logger();
        log.set_level(threshold);
        log.log(level, [Arg::from("message")]).unwrap();

        let lines = sink.lines();
        if level.value() < threshold {
            prop_assert!(lines.is_empty(), "wrote below threshold: {lines:?}");
        } else {
            prop_assert_eq!(lines.len(), 1);
            let tail = format!("{RESET}\n");
            prop_assert!(lines[0].ends_with(&tail));
        }
    }

    /// Plain words are joined by single spaces with no trailing space.
    #[test]
    fn prop_plain_values_join_with_single_spaces(words in prop::collection::vec("[a-z0-9]{1,8}", 0..8)) {
        let args: Vec<Arg> = words.iter().map(Arg::from).collect();
        let out = terminal::render(&args, false);
        prop_assert_eq!(out, format!("{}{RESET}\n", words.join(" ")));
    }

    /// A run of markers before any text never produces a separator.
    #[test]
    fn prop_leading_markers_never_add_spaces(formats in prop::collection::vec(any_format(), 1..5)) {
        let mut args: Vec<Arg> = formats.iter().cloned().map(Arg::from).collect();
        args.push(Arg::from("x"));
        let out = terminal::render(&args, false);
        let escapes: String = formats.iter().map(Format::ansi_escape).collect();
        prop_assert_eq!(out, format!("{escapes}x{RESET}\n"));
    }

    /// Every rendered call is exactly one line.
    #[test]
    fn prop_one_newline_per_call(words in prop::collection::vec("[a-z ]{0,8}", 0..6), level in any_level()) {
        let (mut log, sink) = terminal_logger();
        log.set_level(i64::MIN);
        log.log(level, words.iter().map(Arg::from)).unwrap();
        let lines = sink.lines();
        prop_assert_eq!(lines.len(), 1);
        prop_assert_eq!(lines[0].matches('\n').count(), 1);
    }
}
