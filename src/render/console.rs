//! Browser-style console rendering.
//!
//! The host console does the styling: this module only produces a printf-like
//! template (`%c` for CSS, `%s` for strings, `%o` for objects) and the
//! matching argument list.

use serde_json::Value;

use crate::arg::{Arg, is_format_at};
use crate::inspect::{DEFAULT_DEPTH, inspect};
use crate::level::Level;

/// Which console function receives the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConsoleMethod {
    Log,
    Warn,
    Error,
}

impl ConsoleMethod {
    /// `error` from 5000 up, `warn` from 4000 up, `log` below.
    #[must_use]
    pub const fn for_level(level: i64) -> Self {
        if level >= Level::Error.value() {
            Self::Error
        } else if level >= Level::Warn.value() {
            Self::Warn
        } else {
            Self::Log
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Log => "log",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// A value substituted into the template.
#[derive(Debug, Clone, PartialEq)]
pub enum ConsoleArg {
    /// CSS for a `%c` slot.
    Style(String),
    /// String for a `%s` slot.
    Text(String),
    /// Object for a `%o` slot.
    Object(Value),
}

/// A fully prepared console call.
#[derive(Debug, Clone, PartialEq)]
pub struct ConsoleCall {
    pub method: ConsoleMethod,
    pub template: String,
    pub args: Vec<ConsoleArg>,
}

/// Build the console call for `args` logged at `level`.
#[must_use]
pub fn render(level: i64, args: &[Arg]) -> ConsoleCall {
    let mut template = String::new();
    let mut values = Vec::with_capacity(args.len());
    let mut text_seen = false;

    for (index, arg) in args.iter().enumerate() {
        let next_is_format = is_format_at(args, index + 1);

        let (slot, value) = match arg {
            Arg::Format(format) => {
                if !text_seen || next_is_format {
                    template.push_str("%c");
                } else {
                    // empty style slot so the separating space renders unstyled
                    template.push_str("%c %c");
                    values.push(ConsoleArg::Style(String::new()));
                }
                values.push(ConsoleArg::Style(format.css_text()));
                continue;
            }
            Arg::Text(text) => ("%s", ConsoleArg::Text(text.clone())),
            Arg::Error(report) => ("%s", ConsoleArg::Text(report.as_str().to_string())),
            Arg::Value(value) => ("%o", ConsoleArg::Object(value.clone())),
        };

        text_seen = true;
        template.push_str(slot);
        if !next_is_format && index + 1 != args.len() {
            template.push(' ');
        }
        values.push(value);
    }

    ConsoleCall {
        method: ConsoleMethod::for_level(level),
        template,
        args: values,
    }
}

impl ConsoleCall {
    /// Substitute the arguments into the template as plain text.
    ///
    /// `%c` slots are dropped and objects are inspected without colors. Used
    /// where no real console exists to apply the CSS.
    #[must_use]
    pub fn flatten(&self) -> String {
        let mut out = String::with_capacity(self.template.len());
        let mut args = self.args.iter();
        let mut chars = self.template.chars().peekable();

        while let Some(c) = chars.next() {
            if c != '%' {
                out.push(c);
                continue;
            }
            match chars.peek() {
                Some('c' | 's' | 'o') => {
                    chars.next();
                    match args.next() {
                        Some(ConsoleArg::Text(text)) => out.push_str(text),
                        Some(ConsoleArg::Object(value)) => {
                            out.push_str(&inspect(value, DEFAULT_DEPTH, false));
                        }
                        Some(ConsoleArg::Style(_)) | None => {}
                    }
                }
                _ => out.push(c),
            }
        }
        out
    }
}
