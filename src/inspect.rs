//! Structural inspection of JSON values, in the style of a browser console.
//!
//! Nesting is capped: containers deeper than the requested depth collapse to
//! `[Object]` / `[Array]`, which also bounds the size of the output.

use owo_colors::OwoColorize as _;
use serde_json::{Map, Value};

/// Depth used by the terminal renderer.
pub const DEFAULT_DEPTH: usize = 3;

/// Containers wider than this are split one entry per line.
const BREAK_LENGTH: usize = 80;

/// Render `value` for humans.
///
/// `depth` is the number of nested container levels shown below the top
/// level. With `colors`, strings are green, numbers and booleans yellow,
/// `null` bold and collapsed containers cyan.
#[must_use]
pub fn inspect(value: &Value, depth: usize, colors: bool) -> String {
    Inspector { depth, colors }.render(value, 0, 0).text
}

#[derive(Clone, Copy)]
enum Paint {
    String,
    Number,
    Null,
    Special,
}

/// A rendered node plus the width it occupies without escape codes.
struct Piece {
    text: String,
    width: usize,
    multiline: bool,
}

struct Inspector {
    depth: usize,
    colors: bool,
}

impl Inspector {
    fn render(&self, value: &Value, level: usize, indent: usize) -> Piece {
        match value {
            Value::Null => self.scalar("null", Paint::Null),
            Value::Bool(b) => self.scalar(&b.to_string(), Paint::Number),
            Value::Number(n) => self.scalar(&n.to_string(), Paint::Number),
            Value::String(s) => self.scalar(&quote(s), Paint::String),
            Value::Array(items) => {
                if level > self.depth {
                    return self.scalar("[Array]", Paint::Special);
                }
                let entries = items
                    .iter()
                    .map(|item| self.render(item, level + 1, indent + 2))
                    .collect();
                group(entries, '[', ']', indent)
            }
            Value::Object(map) => {
                if level > self.depth {
                    return self.scalar("[Object]", Paint::Special);
                }
                let entries = ordered_entries(map)
                    .into_iter()
                    .map(|(key, item)| {
                        let key = self.key(key);
                        let item = self.render(item, level + 1, indent + 2);
                        Piece {
                            text: format!("{}: {}", key.text, item.text),
                            width: key.width + 2 + item.width,
                            multiline: item.multiline,
                        }
                    })
                    .collect();
                group(entries, '{', '}', indent)
            }
        }
    }

    fn key(&self, key: &str) -> Piece {
        if is_identifier(key) {
            Piece {
                text: key.to_string(),
                width: key.chars().count(),
                multiline: false,
            }
        } else {
            self.scalar(&quote(key), Paint::String)
        }
    }

    fn scalar(&self, text: &str, paint: Paint) -> Piece {
        Piece {
            text: self.paint(text, paint),
            width: text.chars().count(),
            multiline: false,
        }
    }

    fn paint(&self, text: &str, paint: Paint) -> String {
        if !self.colors {
            return text.to_string();
        }
        match paint {
            Paint::String => text.green().to_string(),
            Paint::Number => text.yellow().to_string(),
            Paint::Null => text.bold().to_string(),
            Paint::Special => text.cyan().to_string(),
        }
    }
}

fn group(entries: Vec<Piece>, open: char, close: char, indent: usize) -> Piece {
    if entries.is_empty() {
        return Piece {
            text: format!("{open}{close}"),
            width: 2,
            multiline: false,
        };
    }

    // "{ " + entries joined by ", " + " }"
    let width = 4 + entries.iter().map(|e| e.width).sum::<usize>() + 2 * (entries.len() - 1);
    let fits = indent + width <= BREAK_LENGTH && !entries.iter().any(|e| e.multiline);

    let texts: Vec<String> = entries.into_iter().map(|e| e.text).collect();
    if fits {
        return Piece {
            text: format!("{open} {} {close}", texts.join(", ")),
            width,
            multiline: false,
        };
    }

    let pad = " ".repeat(indent + 2);
    let body: Vec<String> = texts.iter().map(|t| format!("{pad}{t}")).collect();
    let text = format!(
        "{open}\n{}\n{}{close}",
        body.join(",\n"),
        " ".repeat(indent)
    );
    Piece {
        width: text.chars().count(),
        text,
        multiline: true,
    }
}

/// Insertion order, except that array-index keys come first in ascending
/// numeric order, the way a JavaScript object enumerates its properties.
fn ordered_entries(map: &Map<String, Value>) -> Vec<(&String, &Value)> {
    let mut entries: Vec<(&String, &Value)> = map.iter().collect();
    // stable, so non-index keys keep insertion order
    entries.sort_by_key(|(key, _)| array_index(key).map_or((1, 0), |i| (0, i)));
    entries
}

/// Canonical decimal below `u32::MAX`, with no sign and no leading zeros.
fn array_index(key: &str) -> Option<u32> {
    if key.len() > 1 && key.starts_with('0') {
        return None;
    }
    key.parse::<u32>()
        .ok()
        .filter(|index| *index != u32::MAX && key.bytes().all(|b| b.is_ascii_digit()))
}

fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Single-quote a string, switching to double quotes when that avoids
/// escaping.
fn quote(s: &str) -> String {
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };
    let mut out = String::with_capacity(s.len() + 2);
    out.push(quote);
    for c in s.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\\' => out.push_str("\\\\"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}
