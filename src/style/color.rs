//! Dual-encoded colors: an ANSI palette index plus an optional CSS value.

use std::borrow::Cow;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::Error;

const FOREGROUND_OFFSET: u8 = 30;
const BACKGROUND_OFFSET: u8 = 40;

/// ANSI palette index. Adding 30 gives the foreground SGR code, 40 the
/// background code; the bright range sits 60 above the standard one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TerminalColor {
    Black = 0,
    Red = 1,
    Green = 2,
    Yellow = 3,
    Blue = 4,
    Magenta = 5,
    Cyan = 6,
    White = 7,
    /// Terminal default (`39` / `49`).
    Reset = 9,
    BrightBlack = 60,
    BrightRed = 61,
    BrightGreen = 62,
    BrightYellow = 63,
    BrightBlue = 64,
    BrightMagenta = 65,
    BrightCyan = 66,
    BrightWhite = 67,
}

/// A color usable by both rendering paths.
///
/// Immutable once built. The predefined constants follow the Campbell
/// palette so terminal and browser output look alike.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct Color {
    terminal: TerminalColor,
    css: Option<Cow<'static, str>>,
}

impl Color {
    pub const BLACK: Color = Color::preset(TerminalColor::Black, "#0c0c0c");
    pub const RED: Color = Color::preset(TerminalColor::Red, "#c50f1f");
    pub const GREEN: Color = Color::preset(TerminalColor::Green, "#13a10e");
    pub const YELLOW: Color = Color::preset(TerminalColor::Yellow, "#c19c00");
    pub const BLUE: Color = Color::preset(TerminalColor::Blue, "#0037da");
    pub const MAGENTA: Color = Color::preset(TerminalColor::Magenta, "#881798");
    pub const CYAN: Color = Color::preset(TerminalColor::Cyan, "#3a96dd");
    pub const WHITE: Color = Color::preset(TerminalColor::White, "#cccccc");

    pub const BRIGHT_BLACK: Color = Color::preset(TerminalColor::BrightBlack, "#767676");
    pub const BRIGHT_RED: Color = Color::preset(TerminalColor::BrightRed, "#e74856");
    pub const BRIGHT_GREEN: Color = Color::preset(TerminalColor::BrightGreen, "#16c60c");
    pub const BRIGHT_YELLOW: Color = Color::preset(TerminalColor::BrightYellow, "#f9f1a5");
    pub const BRIGHT_BLUE: Color = Color::preset(TerminalColor::BrightBlue, "#3b78ff");
    pub const BRIGHT_MAGENTA: Color = Color::preset(TerminalColor::BrightMagenta, "#b4009e");
    pub const BRIGHT_CYAN: Color = Color::preset(TerminalColor::BrightCyan, "#61d6d6");
    pub const BRIGHT_WHITE: Color = Color::preset(TerminalColor::BrightWhite, "#f2f2f2");

    /// Sentinel that restores the terminal default and has no CSS value.
    pub const RESET: Color = Color {
        terminal: TerminalColor::Reset,
        css: None,
    };

    const fn preset(terminal: TerminalColor, css: &'static str) -> Self {
        Self {
            terminal,
            css: Some(Cow::Borrowed(css)),
        }
    }

    /// Create a color with a custom CSS value, e.g. `"rebeccapurple"`.
    #[must_use]
    pub fn new(terminal: TerminalColor, css: impl Into<Cow<'static, str>>) -> Self {
        Self {
            terminal,
            css: Some(css.into()),
        }
    }

    /// Create a color that only renders on terminals.
    #[must_use]
    pub const fn terminal_only(terminal: TerminalColor) -> Self {
        Self {
            terminal,
            css: None,
        }
    }

    #[must_use]
    pub const fn terminal_color(&self) -> TerminalColor {
        self.terminal
    }

    #[must_use]
    pub fn css(&self) -> Option<&str> {
        self.css.as_deref()
    }

    /// SGR parameter for this color: palette index + 30, or + 40 for backgrounds.
    #[must_use]
    pub const fn terminal_code(&self, background: bool) -> u8 {
        let offset = if background {
            BACKGROUND_OFFSET
        } else {
            FOREGROUND_OFFSET
        };
        self.terminal as u8 + offset
    }

    /// CSS declaration for this color, or `None` when no CSS value is set.
    #[must_use]
    pub fn css_declaration(&self, background: bool) -> Option<String> {
        let css = self.css.as_deref()?;
        let property = if background {
            "background-color"
        } else {
            "color"
        };
        Some(format!("{property}: {css};"))
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        let color = match name.as_str() {
            "black" => Self::BLACK,
            "red" => Self::RED,
            "green" => Self::GREEN,
            "yellow" => Self::YELLOW,
            "blue" => Self::BLUE,
            "magenta" => Self::MAGENTA,
            "cyan" => Self::CYAN,
            "white" => Self::WHITE,
            "bright_black" | "gray" | "grey" => Self::BRIGHT_BLACK,
            "bright_red" => Self::BRIGHT_RED,
            "bright_green" => Self::BRIGHT_GREEN,
            "bright_yellow" => Self::BRIGHT_YELLOW,
            "bright_blue" => Self::BRIGHT_BLUE,
            "bright_magenta" => Self::BRIGHT_MAGENTA,
            "bright_cyan" => Self::BRIGHT_CYAN,
            "bright_white" => Self::BRIGHT_WHITE,
            "reset" | "default" => Self::RESET,
            _ => return Err(Error::UnknownColor(s.to_string())),
        };
        Ok(color)
    }
}

impl TryFrom<String> for Color {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
