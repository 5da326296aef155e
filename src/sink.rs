//! Output boundary.
//!
//! A [`Sink`] receives finished output: a rendered terminal line or a prepared
//! console call. [`NativeSink`] writes to the host; its handles are captured
//! once, on first use, so later reassignment of the host's console functions
//! does not reroute our output.

use std::sync::{Mutex, PoisonError};
#[cfg(not(all(target_arch = "wasm32", target_os = "unknown")))]
use std::sync::OnceLock;

use crate::error::Result;
use crate::render::ConsoleCall;

/// Destination for rendered log output.
pub trait Sink: Send + Sync {
    /// Write one rendered terminal line, newline included.
    fn write_terminal(&self, line: &str) -> Result<()>;

    /// Deliver a templated console call.
    fn call_console(&self, call: &ConsoleCall) -> Result<()>;

    /// Whether inspected values should carry ANSI colors.
    fn colors(&self) -> bool {
        false
    }
}

/// The process's real output: unbuffered stderr on native targets, the
/// captured `console` functions in the browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeSink;

impl NativeSink {
    /// Capture the host handles now if that has not happened yet.
    #[must_use]
    pub fn capture() -> Self {
        native::init();
        Self
    }
}

impl Sink for NativeSink {
    fn write_terminal(&self, line: &str) -> Result<()> {
        native::write_terminal(line)
    }

    fn call_console(&self, call: &ConsoleCall) -> Result<()> {
        native::call_console(call)
    }

    fn colors(&self) -> bool {
        native::is_term()
    }
}

#[cfg(not(all(target_arch = "wasm32", target_os = "unknown")))]
mod native {
    use super::{ConsoleCall, OnceLock, Result};
    use console::Term;

    static STDERR: OnceLock<Term> = OnceLock::new();

    fn stderr() -> &'static Term {
        STDERR.get_or_init(Term::stderr)
    }

    pub(super) fn init() {
        stderr();
    }

    pub(super) fn is_term() -> bool {
        stderr().is_term()
    }

    pub(super) fn write_terminal(line: &str) -> Result<()> {
        stderr().write_str(line)?;
        Ok(())
    }

    pub(super) fn call_console(call: &ConsoleCall) -> Result<()> {
        let mut line = call.flatten();
        line.push('\n');
        write_terminal(&line)
    }
}

#[cfg(all(target_arch = "wasm32", target_os = "unknown"))]
mod native {
    use js_sys::{Array, Function, JSON, Reflect};
    use wasm_bindgen::{JsCast, JsValue};

    use super::{ConsoleCall, Result};
    use crate::error::Error;
    use crate::render::{ConsoleArg, ConsoleMethod};

    struct CapturedConsole {
        console: JsValue,
        log: Function,
        warn: Function,
        error: Function,
    }

    impl CapturedConsole {
        fn capture() -> Option<Self> {
            let console = Reflect::get(&js_sys::global(), &JsValue::from_str("console")).ok()?;
            let function = |name: &str| {
                Reflect::get(&console, &JsValue::from_str(name))
                    .ok()?
                    .dyn_into::<Function>()
                    .ok()
            };
            Some(Self {
                log: function("log")?,
                warn: function("warn")?,
                error: function("error")?,
                console,
            })
        }

        fn function(&self, method: ConsoleMethod) -> &Function {
            match method {
                ConsoleMethod::Log => &self.log,
                ConsoleMethod::Warn => &self.warn,
                ConsoleMethod::Error => &self.error,
            }
        }
    }

    thread_local! {
        static CAPTURED: Option<CapturedConsole> = CapturedConsole::capture();
    }

    pub(super) fn init() {
        CAPTURED.with(|_| {});
    }

    pub(super) fn is_term() -> bool {
        false
    }

    pub(super) fn write_terminal(line: &str) -> Result<()> {
        let args = Array::of1(&JsValue::from_str(line.trim_end_matches('\n')));
        apply(ConsoleMethod::Log, &args)
    }

    pub(super) fn call_console(call: &ConsoleCall) -> Result<()> {
        let args = Array::new();
        args.push(&JsValue::from_str(&call.template));
        for arg in &call.args {
            let value = match arg {
                ConsoleArg::Style(css) => JsValue::from_str(css),
                ConsoleArg::Text(text) => JsValue::from_str(text),
                ConsoleArg::Object(object) => serde_json::to_string(object)
                    .ok()
                    .and_then(|json| JSON::parse(&json).ok())
                    .unwrap_or(JsValue::NULL),
            };
            args.push(&value);
        }
        apply(call.method, &args)
    }

    fn apply(method: ConsoleMethod, args: &Array) -> Result<()> {
        CAPTURED.with(|captured| {
            // no console object at all: nothing to write to
            let Some(captured) = captured else {
                return Ok(());
            };
            captured
                .function(method)
                .apply(&captured.console, args)
                .map(drop)
                .map_err(|e| Error::Console(format!("{e:?}")))
        })
    }
}

/// One delivery recorded by [`MemorySink`].
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    Terminal(String),
    Console(ConsoleCall),
}

/// Sink that keeps everything in memory. Useful for asserting on log output.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<Record>>,
    colors: bool,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A memory sink that asks for colored inspection.
    #[must_use]
    pub fn with_colors() -> Self {
        Self {
            records: Mutex::default(),
            colors: true,
        }
    }

    /// Everything delivered so far, oldest first.
    #[must_use]
    pub fn records(&self) -> Vec<Record> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Only the terminal lines delivered so far.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.records()
            .into_iter()
            .filter_map(|record| match record {
                Record::Terminal(line) => Some(line),
                Record::Console(_) => None,
            })
            .collect()
    }

    fn push(&self, record: Record) {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(record);
    }
}

impl Sink for MemorySink {
    fn write_terminal(&self, line: &str) -> Result<()> {
        self.push(Record::Terminal(line.to_string()));
        Ok(())
    }

    fn call_console(&self, call: &ConsoleCall) -> Result<()> {
        self.push(Record::Console(call.clone()));
        Ok(())
    }

    fn colors(&self) -> bool {
        self.colors
    }
}
