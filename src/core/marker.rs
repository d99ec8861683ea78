//! Whole-text formats: wrap the entire input in a marker.

/// Literal written before and after the text by the spoiler format.
pub const SPOILER_TAG: &str = "[SPOILER]";

/// Zero-width spaces prepended by the spoiler format. Pushes the visible text past
/// WhatsApp's "Read more" fold.
pub const SPOILER_PADDING_LEN: usize = 4000;

const ZERO_WIDTH_SPACE: char = '\u{200B}';

/// One of the five quick formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum FormatKind {
    Bold,
    Italic,
    Strike,
    Mono,
    Spoiler,
}

impl FormatKind {
    /// In the order the quick-format bar shows them.
    pub const ALL: [FormatKind; 5] = [
        FormatKind::Spoiler,
        FormatKind::Bold,
        FormatKind::Italic,
        FormatKind::Strike,
        FormatKind::Mono,
    ];

    /// Single-character delimiter, or `None` for the structural spoiler format.
    pub fn delimiter(self) -> Option<char> {
        match self {
            FormatKind::Bold => Some('*'),
            FormatKind::Italic => Some('_'),
            FormatKind::Strike => Some('~'),
            FormatKind::Mono => Some('`'),
            FormatKind::Spoiler => None,
        }
    }

    /// Short button caption, e.g. "*B*".
    pub fn caption(self) -> &'static str {
        match self {
            FormatKind::Bold => "*B*",
            FormatKind::Italic => "_I_",
            FormatKind::Strike => "~S~",
            FormatKind::Mono => "`M`",
            FormatKind::Spoiler => "|| 🔒 ||",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            FormatKind::Bold => "bold",
            FormatKind::Italic => "italic",
            FormatKind::Strike => "strike",
            FormatKind::Mono => "mono",
            FormatKind::Spoiler => "spoiler",
        }
    }
}

impl std::fmt::Display for FormatKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Whitespace as web text fields trim it: Unicode `White_Space` plus the byte-order
/// mark, minus NEL.
fn is_blank_char(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{0085}')
}

/// True when a whole-text format would do something (input has a non-whitespace char).
pub fn can_apply(text: &str) -> bool {
    !text.chars().all(is_blank_char)
}

/// Wrap the whole `text` in `kind`'s marker. Empty or whitespace-only text is returned unchanged.
pub fn apply_whole_text_format(text: &str, kind: FormatKind) -> String {
    if !can_apply(text) {
        return text.to_string();
    }
    match kind.delimiter() {
        Some(d) => {
            let mut out = String::with_capacity(text.len() + 2);
            out.push(d);
            out.push_str(text);
            out.push(d);
            out
        }
        None => {
            let padding = ZERO_WIDTH_SPACE.len_utf8() * SPOILER_PADDING_LEN;
            let mut out = String::with_capacity(text.len() + padding + 2 * SPOILER_TAG.len());
            out.push_str(SPOILER_TAG);
            out.extend(std::iter::repeat_n(ZERO_WIDTH_SPACE, SPOILER_PADDING_LEN));
            out.push_str(text);
            out.push_str(SPOILER_TAG);
            out
        }
    }
}
