//! Editing session: the input text and its formatted projection.
//!
//! The formatted text has no life of its own. Every mutator ends with `refresh()`,
//! so readers always see `transform(input)`.

use crate::core::formatter;
use crate::core::marker::{self, FormatKind};
use crate::core::presets;

#[derive(Debug, Default, Clone)]
pub struct Session {
    input: String,
    formatted: String,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Session seeded with `input` (formatted text computed immediately).
    pub fn with_input(input: impl Into<String>) -> Self {
        let mut session = Self::new();
        session.set_input(input);
        session
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn formatted(&self) -> &str {
        &self.formatted
    }

    /// Replace the whole input.
    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
        self.refresh();
    }

    pub fn insert_char(&mut self, c: char) {
        self.input.push(c);
        self.refresh();
    }

    pub fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    /// Remove the last character. Returns false when the input was already empty.
    pub fn backspace(&mut self) -> bool {
        let removed = self.input.pop().is_some();
        if removed {
            self.refresh();
        }
        removed
    }

    pub fn clear(&mut self) {
        self.input.clear();
        self.refresh();
    }

    /// Wrap the whole input in `kind`. Returns false (and changes nothing) on blank input.
    pub fn apply_format(&mut self, kind: FormatKind) -> bool {
        if !self.can_apply_format() {
            log::debug!("ignoring {} on blank input", kind);
            return false;
        }
        let wrapped = marker::apply_whole_text_format(&self.input, kind);
        log::debug!("applied {} to {} chars", kind, self.char_count());
        self.set_input(wrapped);
        true
    }

    /// Overwrite the input with a built-in example. Returns false for an unknown index.
    pub fn load_example(&mut self, index: usize) -> bool {
        match presets::example(index) {
            Some(example) => {
                self.set_input(example.text.as_str());
                true
            }
            None => false,
        }
    }

    /// Number of characters (Unicode scalar values) in the input.
    pub fn char_count(&self) -> usize {
        self.input.chars().count()
    }

    /// Display counter, e.g. "42/1000". Never truncates.
    pub fn counter_label(&self, max_chars: usize) -> String {
        format!("{}/{}", self.char_count(), max_chars)
    }

    pub fn over_limit(&self, max_chars: usize) -> bool {
        self.char_count() > max_chars
    }

    pub fn can_apply_format(&self) -> bool {
        marker::can_apply(&self.input)
    }

    pub fn can_copy(&self) -> bool {
        !self.formatted.is_empty()
    }

    fn refresh(&mut self) {
        self.formatted = formatter::transform(&self.input);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_is_empty() {
        let s = Session::new();
        assert_eq!(s.input(), "");
        assert_eq!(s.formatted(), "");
        assert!(!s.can_copy());
        assert!(!s.can_apply_format());
    }

    #[test]
    fn typing_recomputes_preview() {
        let mut s = Session::new();
        for c in "`x`".chars() {
            s.insert_char(c);
        }
        assert_eq!(s.formatted(), "```x```");
        s.backspace();
        assert_eq!(s.input(), "`x");
        assert_eq!(s.formatted(), "`x");
    }

    #[test]
    fn backspace_on_empty() {
        let mut s = Session::new();
        assert!(!s.backspace());
    }

    #[test]
    fn apply_format_rewraps_input_and_preview() {
        let mut s = Session::with_input("hello");
        assert!(s.apply_format(FormatKind::Mono));
        assert_eq!(s.input(), "`hello`");
        assert_eq!(s.formatted(), "```hello```");
    }

    #[test]
    fn apply_format_blank_is_noop() {
        let mut s = Session::with_input("   ");
        assert!(!s.apply_format(FormatKind::Bold));
        assert_eq!(s.input(), "   ");
    }

    #[test]
    fn spoiler_format_preview_keeps_tag() {
        let mut s = Session::with_input("hi");
        assert!(s.apply_format(FormatKind::Spoiler));
        assert!(s.formatted().starts_with("[SPOILER]"));
        assert!(s.formatted().ends_with("hi[SPOILER]"));
        assert_eq!(s.char_count(), 2 + 4000 + 2 * "[SPOILER]".len());
    }

    #[test]
    fn load_example_overwrites_input() {
        let mut s = Session::with_input("draft");
        assert!(s.load_example(0));
        assert_eq!(s.input(), "The movie ending: ||The butler did it||");
        assert_eq!(s.formatted(), "The movie ending:  The butler did it ");
        assert!(!s.load_example(42));
    }

    #[test]
    fn clear_resets_both_texts() {
        let mut s = Session::with_input("*a*");
        s.clear();
        assert_eq!(s.input(), "");
        assert_eq!(s.formatted(), "");
    }

    #[test]
    fn counter_counts_chars_not_bytes() {
        let s = Session::with_input("héllo👋");
        assert_eq!(s.char_count(), 6);
        assert_eq!(s.counter_label(1000), "6/1000");
        assert!(!s.over_limit(1000));
        assert!(s.over_limit(5));
    }

    #[test]
    fn newline_is_kept() {
        let mut s = Session::with_input("a");
        s.insert_newline();
        s.insert_char('b');
        assert_eq!(s.input(), "a\nb");
    }
}
