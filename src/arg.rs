//! Log call arguments.
//!
//! A log call is a flat sequence of style markers and values. `Arg` is the
//! element type; the [`args!`](crate::args) macro converts a heterogeneous
//! list into a `Vec<Arg>`.

use std::backtrace::{Backtrace, BacktraceStatus};
use std::error::Error as StdError;
use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::style::Format;

/// One element of a log call.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    /// Style marker applied to everything after it.
    Format(Format),
    /// Plain text, printed as-is.
    Text(String),
    /// An error with its cause chain and, when captured, a backtrace.
    Error(ErrorReport),
    /// Structured data, printed through structural inspection.
    Value(Value),
}

impl Arg {
    /// Serialize any value into a structured argument.
    ///
    /// Values that fail to serialize still log: they become a bracketed
    /// note instead of failing the call.
    pub fn structured<T: Serialize + ?Sized>(value: &T) -> Self {
        match serde_json::to_value(value) {
            Ok(value) => Self::Value(value),
            Err(e) => Self::Text(format!("[unserializable value: {e}]")),
        }
    }

    /// Capture an error report for logging.
    #[must_use]
    pub fn error(err: &(dyn StdError + 'static)) -> Self {
        Self::Error(ErrorReport::new(err))
    }

    #[must_use]
    pub const fn is_format(&self) -> bool {
        matches!(self, Self::Format(_))
    }
}

/// Whether `args[index]` exists and is a style marker.
pub(crate) fn is_format_at(args: &[Arg], index: usize) -> bool {
    args.get(index).is_some_and(Arg::is_format)
}

/// Rendered error: message, numbered causes, then the backtrace if one was
/// captured (`RUST_BACKTRACE` / `RUST_LIB_BACKTRACE`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorReport {
    text: String,
}

impl ErrorReport {
    #[must_use]
    pub fn new(err: &(dyn StdError + 'static)) -> Self {
        let mut text = err.to_string();

        let mut source = err.source();
        if source.is_some() {
            text.push_str("\n\nCaused by:");
        }
        let mut depth = 0;
        while let Some(cause) = source {
            text.push_str(&format!("\n    {depth}: {cause}"));
            depth += 1;
            source = cause.source();
        }

        let backtrace = Backtrace::capture();
        if backtrace.status() == BacktraceStatus::Captured {
            text.push_str(&format!("\n\nStack backtrace:\n{backtrace}"));
        }

        Self { text }
    }

    /// Build a report from already-rendered text.
    #[must_use]
    pub fn from_text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<Format> for Arg {
    fn from(format: Format) -> Self {
        Self::Format(format)
    }
}

impl From<&Format> for Arg {
    fn from(format: &Format) -> Self {
        Self::Format(format.clone())
    }
}

impl From<&str> for Arg {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Arg {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&String> for Arg {
    fn from(text: &String) -> Self {
        Self::Text(text.clone())
    }
}

impl From<Value> for Arg {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<ErrorReport> for Arg {
    fn from(report: ErrorReport) -> Self {
        Self::Error(report)
    }
}

impl From<anyhow::Error> for Arg {
    fn from(err: anyhow::Error) -> Self {
        // anyhow's Debug output already carries the cause chain and backtrace
        Self::Error(ErrorReport::from_text(format!("{err:?}")))
    }
}

macro_rules! impl_from_scalar {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Arg {
                fn from(value: $ty) -> Self {
                    Self::Value(Value::from(value))
                }
            }
        )*
    };
}

impl_from_scalar!(bool, i32, i64, u32, u64, f64, usize);

/// Build a `Vec<Arg>` from a heterogeneous list.
///
/// ```
/// use tintlog::{args, Color, Format};
///
/// let call = args![Format::new().foreground(Color::MAGENTA), "ready", 42];
/// assert_eq!(call.len(), 3);
/// ```
#[macro_export]
macro_rules! args {
    () => {
        ::std::vec::Vec::<$crate::Arg>::new()
    };
    ($($arg:expr),+ $(,)?) => {
        ::std::vec![$($crate::Arg::from($arg)),+]
    };
}
