//! Composite text formats rendered as ANSI escapes or CSS.

use serde::Deserialize;

use super::Color;

/// SGR parameter that clears every attribute.
const SGR_RESET: u8 = 0;
/// SGR parameter for bold text.
const SGR_BOLD: u8 = 1;

/// A style marker placed between log arguments.
///
/// `italic` is carried for callers that inspect the format but neither
/// rendering path emits it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Format {
    pub foreground: Option<Color>,
    pub background: Option<Color>,
    pub bold: bool,
    pub italic: bool,
}

impl Format {
    /// The empty format. Terminates any open styling.
    pub const RESET: Format = Format::new();

    #[must_use]
    pub const fn new() -> Self {
        Self {
            foreground: None,
            background: None,
            bold: false,
            italic: false,
        }
    }

    #[must_use]
    pub fn foreground(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    #[must_use]
    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    #[must_use]
    pub const fn bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    #[must_use]
    pub const fn italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }

    /// Whether this format sets nothing.
    #[must_use]
    pub fn is_reset(&self) -> bool {
        self.foreground.is_none() && self.background.is_none() && !self.bold
    }

    /// Terminal escape for this format.
    ///
    /// Always starts with `0` so each escape clears whatever styling came
    /// before it: `ESC[0;<fg>;<bg>;1m`, with the optional parts omitted.
    #[must_use]
    pub fn ansi_escape(&self) -> String {
        let mut codes = vec![SGR_RESET];
        if let Some(fg) = &self.foreground {
            codes.push(fg.terminal_code(false));
        }
        if let Some(bg) = &self.background {
            codes.push(bg.terminal_code(true));
        }
        if self.bold {
            codes.push(SGR_BOLD);
        }

        let codes: Vec<String> = codes.iter().map(u8::to_string).collect();
        format!("\x1b[{}m", codes.join(";"))
    }

    /// CSS declarations for this format, empty when nothing is set.
    #[must_use]
    pub fn css_text(&self) -> String {
        let mut css = String::new();
        if let Some(decl) = self.foreground.as_ref().and_then(|c| c.css_declaration(false)) {
            css.push_str(&decl);
        }
        if let Some(decl) = self.background.as_ref().and_then(|c| c.css_declaration(true)) {
            css.push_str(&decl);
        }
        if self.bold {
            css.push_str("font-weight: 700;");
        }
        css
    }
}
