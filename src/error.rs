//! Crate error type.
//!
//! Logging itself has no expected failure modes. The variants here cover the
//! write primitive underneath a sink and the name lookups used by
//! configuration.

use thiserror::Error;

/// Errors returned by `tintlog`.
#[derive(Debug, Error)]
pub enum Error {
    /// The underlying output stream rejected the write.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Unknown color '{0}'. Valid colors: black, red, green, yellow, blue, magenta, cyan, white, their bright_ variants, or reset")]
    UnknownColor(String),

    #[error("Unknown log level '{0}'. Valid levels: debug, verbose, info, warn, error")]
    UnknownLevel(String),

    /// The host console threw while being called.
    #[error("Console call failed: {0}")]
    Console(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
