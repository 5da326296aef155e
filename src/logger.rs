//! The leveled logger.

use std::fmt;
use std::sync::Arc;

use crate::arg::Arg;
use crate::config::LoggerConfig;
use crate::error::Result;
use crate::level::{DEFAULT_THRESHOLD, Level};
use crate::render::{Output, console, terminal};
use crate::sink::{NativeSink, Sink};
use crate::style::Format;

/// A logger with a severity threshold and an optional persistent prefix.
///
/// Each call below the threshold returns immediately without rendering.
/// Calls at or above it are assembled as
/// `[label style, label, reset, ...prefix, reset, ...args]` and written with
/// exactly one sink call.
///
/// ```
/// use std::sync::Arc;
/// use tintlog::{Logger, Output, args};
/// use tintlog::sink::MemorySink;
///
/// let sink = Arc::new(MemorySink::new());
/// let mut log = Logger::with_sink(Output::Terminal, sink.clone());
/// log.set_level(0);
/// log.info(args!["hello"]).unwrap();
/// assert_eq!(sink.lines().len(), 1);
/// ```
pub struct Logger {
    level: i64,
    prefix: Vec<Arg>,
    output: Output,
    sink: Arc<dyn Sink>,
}

impl Logger {
    /// Logger writing to the host with the process's detected output.
    #[must_use]
    pub fn new() -> Self {
        Self::with_sink(Output::detect(), Arc::new(NativeSink::capture()))
    }

    /// Logger with an explicit strategy and destination.
    #[must_use]
    pub fn with_sink(output: Output, sink: Arc<dyn Sink>) -> Self {
        Self {
            level: DEFAULT_THRESHOLD,
            prefix: Vec::new(),
            output,
            sink,
        }
    }

    /// Logger writing to the host, configured from `config`.
    #[must_use]
    pub fn from_config(config: &LoggerConfig) -> Self {
        let mut logger = Self::new();
        logger.apply_config(config);
        logger
    }

    /// Replace threshold and prefix with the configured ones.
    pub fn apply_config(&mut self, config: &LoggerConfig) {
        self.set_level(config.level.value());
        self.set_prefix(config.prefix.iter().cloned());
    }

    /// Set the minimum numeric level that produces output.
    pub fn set_level(&mut self, threshold: i64) {
        self.level = threshold;
    }

    #[must_use]
    pub const fn level(&self) -> i64 {
        self.level
    }

    /// Set the sequence printed after the label on every non-raw call.
    pub fn set_prefix<I>(&mut self, prefix: I)
    where
        I: IntoIterator,
        I::Item: Into<Arg>,
    {
        self.prefix = prefix.into_iter().map(Into::into).collect();
    }

    #[must_use]
    pub fn prefix(&self) -> &[Arg] {
        &self.prefix
    }

    #[must_use]
    pub const fn output(&self) -> Output {
        self.output
    }

    /// Whether a call at `level` would produce output.
    #[must_use]
    pub const fn enabled(&self, level: Level) -> bool {
        level.value() >= self.level
    }

    /// Log `args` at `level`.
    ///
    /// # Errors
    ///
    /// Returns the sink's error if the write fails.
    pub fn log<I>(&self, level: Level, args: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<Arg>,
    {
        if !self.enabled(level) {
            return Ok(());
        }

        let mut merged = Vec::with_capacity(self.prefix.len() + 5);
        if let Some((format, label)) = level.label() {
            merged.push(Arg::Format(format));
            merged.push(Arg::Text(label.to_string()));
            merged.push(Arg::Format(Format::RESET));
            merged.extend(self.prefix.iter().cloned());
            merged.push(Arg::Format(Format::RESET));
        }
        merged.extend(args.into_iter().map(Into::into));

        match self.output {
            Output::Terminal => self
                .sink
                .write_terminal(&terminal::render(&merged, self.sink.colors())),
            Output::Console => self
                .sink
                .call_console(&console::render(level.value(), &merged)),
        }
    }

    /// Log at level 0 with a white-on-black `debug` label.
    ///
    /// # Errors
    ///
    /// Returns the sink's error if the write fails.
    pub fn debug<I>(&self, args: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<Arg>,
    {
        self.log(Level::Debug, args)
    }

    /// Log at level 1000 with a blue-on-black `info` label.
    ///
    /// # Errors
    ///
    /// Returns the sink's error if the write fails.
    pub fn verbose<I>(&self, args: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<Arg>,
    {
        self.log(Level::Verbose, args)
    }

    /// Log at level 3000 with a green `info` label.
    ///
    /// # Errors
    ///
    /// Returns the sink's error if the write fails.
    pub fn info<I>(&self, args: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<Arg>,
    {
        self.log(Level::Info, args)
    }

    /// Log at level 4000 with a bold black-on-yellow `WARN` label.
    ///
    /// # Errors
    ///
    /// Returns the sink's error if the write fails.
    pub fn warn<I>(&self, args: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<Arg>,
    {
        self.log(Level::Warn, args)
    }

    /// Log at level 5000 with a bold red-on-black `ERR!` label.
    ///
    /// # Errors
    ///
    /// Returns the sink's error if the write fails.
    pub fn error<I>(&self, args: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<Arg>,
    {
        self.log(Level::Error, args)
    }

    /// Log `args` exactly as given: never filtered, no label, no prefix.
    ///
    /// # Errors
    ///
    /// Returns the sink's error if the write fails.
    pub fn raw<I>(&self, args: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<Arg>,
    {
        self.log(Level::Raw, args)
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level)
            .field("prefix", &self.prefix)
            .field("output", &self.output)
            .finish_non_exhaustive()
    }
}
