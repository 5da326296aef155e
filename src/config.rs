//! Serde-deserializable logger settings: threshold and prefix.

use serde::Deserialize;

use crate::arg::Arg;
use crate::level::{DEFAULT_THRESHOLD, Level};
use crate::style::Format;

/// Logger settings, deserializable from any serde format.
///
/// ```yaml
/// level: verbose
/// prefix:
///   - foreground: magenta
///   - "[worker]"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggerConfig {
    /// Minimum level that produces output (default: 3000 / info)
    pub level: Threshold,

    /// Persistent prefix printed after the label
    pub prefix: Vec<PrefixSegment>,
}

/// A threshold given as a raw number or a level name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Threshold {
    Numeric(i64),
    Named(Level),
}

impl Threshold {
    #[must_use]
    pub const fn value(self) -> i64 {
        match self {
            Self::Numeric(value) => value,
            Self::Named(level) => level.value(),
        }
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self::Numeric(DEFAULT_THRESHOLD)
    }
}

/// One prefix element: literal text or a style map.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum PrefixSegment {
    Text(String),
    Format(Format),
}

impl From<PrefixSegment> for Arg {
    fn from(segment: PrefixSegment) -> Self {
        match segment {
            PrefixSegment::Text(text) => Self::Text(text),
            PrefixSegment::Format(format) => Self::Format(format),
        }
    }
}
