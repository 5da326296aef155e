//! Style model: colors and the formats built from them.

pub mod color;
pub mod format;

pub use color::{Color, TerminalColor};
pub use format::Format;
