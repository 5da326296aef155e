//! Rendering strategies and environment selection.
//!
//! A log call is rendered either as a single ANSI-escaped line for a text
//! terminal, or as a `%c`/`%s`/`%o` template for a browser-style console.
//! Which one applies is decided once per process by [`Output::detect`].

pub mod console;
pub mod terminal;

use std::sync::OnceLock;

pub use console::{ConsoleArg, ConsoleCall, ConsoleMethod};

/// Where log output goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Output {
    /// ANSI text on stderr.
    Terminal,
    /// Templated calls to a host console with CSS styling.
    Console,
}

static DETECTED: OnceLock<Output> = OnceLock::new();

impl Output {
    /// The strategy for this process. Resolved on first call and fixed after.
    #[must_use]
    pub fn detect() -> Self {
        *DETECTED.get_or_init(|| {
            if cfg!(all(target_arch = "wasm32", target_os = "unknown")) {
                Self::Console
            } else {
                Self::Terminal
            }
        })
    }
}
