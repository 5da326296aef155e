//! Severity levels and their label styling.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::Error;
use crate::style::{Color, Format};

/// Threshold a fresh `Logger` starts with: `info` and above.
pub const DEFAULT_THRESHOLD: i64 = Level::Info.value();

/// Named severity levels.
///
/// Levels map to sparse numeric values so callers can set thresholds between
/// them. `Raw` sits above every threshold and is never filtered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Debug,
    Verbose,
    Info,
    Warn,
    Error,
    #[serde(skip)]
    Raw,
}

impl Level {
    /// Numeric severity compared against a logger's threshold.
    #[must_use]
    pub const fn value(self) -> i64 {
        match self {
            Self::Debug => 0,
            Self::Verbose => 1000,
            Self::Info => 3000,
            Self::Warn => 4000,
            Self::Error => 5000,
            Self::Raw => i64::MAX,
        }
    }

    /// Label style and text printed ahead of a message, `None` for `Raw`.
    ///
    /// A new `Format` is built on every call; labels never share a marker.
    #[must_use]
    pub fn label(self) -> Option<(Format, &'static str)> {
        let label = match self {
            Self::Debug => (
                Format::new().foreground(Color::WHITE).background(Color::BLACK),
                "debug",
            ),
            // verbose shares the "info" label text with info, only the color differs
            Self::Verbose => (
                Format::new().foreground(Color::BLUE).background(Color::BLACK),
                "info",
            ),
            Self::Info => (Format::new().foreground(Color::GREEN), "info"),
            Self::Warn => (
                Format::new()
                    .foreground(Color::BLACK)
                    .background(Color::YELLOW)
                    .bold(true),
                "WARN",
            ),
            Self::Error => (
                Format::new()
                    .foreground(Color::RED)
                    .background(Color::BLACK)
                    .bold(true),
                "ERR!",
            ),
            Self::Raw => return None,
        };
        Some(label)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Verbose => "verbose",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
            Self::Raw => "raw",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "verbose" => Ok(Self::Verbose),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(Error::UnknownLevel(s.to_string())),
        }
    }
}
