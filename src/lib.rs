//! Leveled, styled console logging.
//!
//! Messages are sequences of [`Format`] markers and values. On native targets
//! they render as ANSI-escaped lines on stderr; in the browser they become
//! `%c`-templated `console` calls styled with CSS.
//!
//! ```
//! use std::sync::Arc;
//! use tintlog::{Color, Format, Logger, Output, args};
//! use tintlog::sink::MemorySink;
//!
//! let sink = Arc::new(MemorySink::new());
//! let mut log = Logger::with_sink(Output::Terminal, sink.clone());
//! log.set_prefix(args![Format::new().foreground(Color::MAGENTA), "[worker]"]);
//! log.warn(args!["queue is", 97, "% full"]).unwrap();
//! assert!(sink.lines()[0].contains("[worker]"));
//! ```

#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]

pub mod arg;
pub mod config;
pub mod error;
pub mod inspect;
pub mod layer;
pub mod level;
pub mod logger;
pub mod render;
pub mod sink;
pub mod style;

pub use arg::{Arg, ErrorReport};
pub use config::{LoggerConfig, PrefixSegment, Threshold};
pub use error::{Error, Result};
pub use layer::TintLayer;
pub use level::Level;
pub use logger::Logger;
pub use render::Output;
pub use style::{Color, Format, TerminalColor};
