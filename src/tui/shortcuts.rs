//! Centralized keyboard shortcuts.
//!
//! Complete reference:
//!
//! | Action         | Keys                          |
//! |----------------|-------------------------------|
//! | Spoiler        | Alt+P, Esc+p                  |
//! | Bold           | Alt+B, Esc+b                  |
//! | Italic         | Alt+I, Esc+i                  |
//! | Strikethrough  | Alt+S, Esc+s                  |
//! | Monospace      | Alt+M, Esc+m                  |
//! | Load example   | Alt+1..Alt+9, Esc+1..Esc+9    |
//! | Copy           | Alt+C, Esc+c                  |
//! | Clear input    | Ctrl+U                        |
//! | Newline        | Enter                         |
//! | Scroll preview | ↑ ↓ PageUp PageDown           |
//! | Quit           | Ctrl+C                        |
//!
//! On macOS, Option+key sends Esc+key when the terminal has "Use option as meta
//! key" enabled. In normal mode it sends characters like ß or ç, which are typed
//! as text, so the Esc+key form is the portable one.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::marker::FormatKind;

/// Detected shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// Wrap the whole input in a marker
    Format(FormatKind),
    /// Load the example at this zero-based index
    Example(usize),
    /// Copy the formatted text
    Copy,
    /// Clear the input (Ctrl+U)
    Clear,
    /// Quit (Ctrl+C)
    Quit,
}

/// Shortcut reached with Alt (or after Esc) and the given letter/digit.
fn meta_shortcut(c: char) -> Option<Shortcut> {
    match c.to_ascii_lowercase() {
        'p' => Some(Shortcut::Format(FormatKind::Spoiler)),
        'b' => Some(Shortcut::Format(FormatKind::Bold)),
        'i' => Some(Shortcut::Format(FormatKind::Italic)),
        's' => Some(Shortcut::Format(FormatKind::Strike)),
        'm' => Some(Shortcut::Format(FormatKind::Mono)),
        'c' => Some(Shortcut::Copy),
        '1'..='9' => c.to_digit(10).map(|d| Shortcut::Example(d as usize - 1)),
        _ => None,
    }
}

impl Shortcut {
    /// Returns the shortcut if the key matches. Handles Esc+key sequence when terminal
    /// sends Option as Meta (e.g. macOS "Use option as meta key").
    pub fn match_key(key: &KeyEvent, escape_pending: bool) -> Option<Shortcut> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        if escape_pending {
            return match key.code {
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    meta_shortcut(c)
                }
                _ => None,
            };
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Shortcut::Quit)
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Shortcut::Clear)
            }
            KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::ALT) => meta_shortcut(c),
            _ => None,
        }
    }

    /// True if key is Escape (start of Option+key sequence on some terminals).
    pub fn is_escape(key: &KeyEvent) -> bool {
        key.kind == KeyEventKind::Press && key.code == KeyCode::Esc
    }
}

/// Key hint shown next to each quick-format caption.
pub fn format_key(kind: FormatKind) -> &'static str {
    match kind {
        FormatKind::Spoiler => "Alt+P",
        FormatKind::Bold => "Alt+B",
        FormatKind::Italic => "Alt+I",
        FormatKind::Strike => "Alt+S",
        FormatKind::Mono => "Alt+M",
    }
}


/// Labels for the bottom bar.
pub mod labels {
    use ratatui::style::Color;
    use ratatui::text::{Line, Span, Text};

    const DIM: Color = Color::DarkGray;

    pub fn bottom_bar() -> Text<'static> {
        Text::from(vec![
            Line::from(vec![
                Span::styled("Enter ", DIM),
                Span::raw("newline"),
                Span::styled("  Ctrl+U ", DIM),
                Span::raw("clear"),
                Span::styled("  ↑↓ ", DIM),
                Span::raw("scroll preview"),
            ]),
            Line::from(vec![
                Span::styled("Alt+1..3 ", DIM),
                Span::raw("example"),
                Span::styled("  Alt+C ", DIM),
                Span::raw("copy"),
                Span::styled("  Esc+key ", DIM),
                Span::raw("= Alt+key"),
                Span::styled("  Ctrl+C ", DIM),
                Span::raw("quit"),
            ]),
        ])
    }
}
