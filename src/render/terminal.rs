//! ANSI terminal rendering.

use crate::arg::{Arg, is_format_at};
use crate::inspect::{DEFAULT_DEPTH, inspect};
use crate::style::Format;

/// Render a call as one line, terminated by a reset escape and `\n`.
///
/// A style marker that follows plain text is preceded by a reset and a
/// space, unless another marker comes straight after it. Markers ahead of
/// the first plain value never get one. Plain values get a trailing space
/// unless they are last or followed by a marker.
#[must_use]
pub fn render(args: &[Arg], colors: bool) -> String {
    let reset = Format::RESET.ansi_escape();
    let mut out = String::new();
    let mut text_seen = false;

    for (index, arg) in args.iter().enumerate() {
        let next_is_format = is_format_at(args, index + 1);

        match arg {
            Arg::Format(format) => {
                if text_seen && !next_is_format {
                    out.push_str(&reset);
                    out.push(' ');
                }
                out.push_str(&format.ansi_escape());
                continue;
            }
            Arg::Text(text) => out.push_str(text),
            Arg::Error(report) => out.push_str(report.as_str()),
            Arg::Value(value) => out.push_str(&inspect(value, DEFAULT_DEPTH, colors)),
        }
        text_seen = true;

        if !next_is_format && index + 1 != args.len() {
            out.push(' ');
        }
    }

    out.push_str(&reset);
    out.push('\n');
    out
}
