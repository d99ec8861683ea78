//! WhatsApp markup rewriting: the five ordered substitutions applied on every edit.
//!
//! Each step scans the output of the previous one. Span content never contains the
//! step's own delimiter, so same-type markers cannot nest. Unbalanced delimiters
//! simply do not match and stay in the text as literals.

use std::ops::Range;
use std::sync::OnceLock;

use regex::Regex;

static BOLD: OnceLock<Regex> = OnceLock::new();
static ITALIC: OnceLock<Regex> = OnceLock::new();
static STRIKE: OnceLock<Regex> = OnceLock::new();
static MONO: OnceLock<Regex> = OnceLock::new();
static SPOILER: OnceLock<Regex> = OnceLock::new();

fn compiled(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).expect("formatter patterns are valid"))
}

fn bold_re() -> &'static Regex {
    compiled(&BOLD, r"\*([^*]+)\*")
}

fn italic_re() -> &'static Regex {
    compiled(&ITALIC, r"_([^_]+)_")
}

fn strike_re() -> &'static Regex {
    compiled(&STRIKE, r"~([^~]+)~")
}

fn mono_re() -> &'static Regex {
    compiled(&MONO, r"`([^`]+)`")
}

fn spoiler_re() -> &'static Regex {
    compiled(&SPOILER, r"\|\|([^|]+)\|\|")
}

/// Rewrite `text` into WhatsApp-ready markup.
///
/// Order: bold, italic, strikethrough, monospace, spoiler.
pub fn transform(text: &str) -> String {
    let result = bold(text);
    let result = italic(&result);
    let result = strike(&result);
    let result = mono(&result);
    spoiler(&result)
}

/// `*text*` stays `*text*`.
pub fn bold(text: &str) -> String {
    bold_re().replace_all(text, "*${1}*").into_owned()
}

/// `_text_` stays `_text_`, skipping spans glued to an asterisk on either side.
pub fn italic(text: &str) -> String {
    let spans = italic_spans(text);
    if spans.is_empty() {
        return text.to_string();
    }
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for span in spans {
        out.push_str(&text[last..span.start]);
        out.push('_');
        out.push_str(&text[span.start + 1..span.end - 1]);
        out.push('_');
        last = span.end;
    }
    out.push_str(&text[last..]);
    out
}

/// Byte ranges of the `_…_` spans the italic step rewrites.
///
/// The `regex` crate has no lookaround, so the `*` guards are checked by hand. A
/// rejected candidate resumes the search one byte after its opening `_`, which is
/// where a backtracking engine would retry.
pub(crate) fn italic_spans(text: &str) -> Vec<Range<usize>> {
    let re = italic_re();
    let mut spans = Vec::new();
    let mut pos = 0;
    while let Some(m) = re.find_at(text, pos) {
        let after_star = text[..m.start()].ends_with('*');
        let before_star = text[m.end()..].starts_with('*');
        if after_star || before_star {
            pos = m.start() + 1;
            continue;
        }
        spans.push(m.range());
        pos = m.end();
    }
    spans
}

/// `~text~` stays `~text~`.
pub fn strike(text: &str) -> String {
    strike_re().replace_all(text, "~${1}~").into_owned()
}

/// `` `text` `` becomes ` ```text``` `.
pub fn mono(text: &str) -> String {
    mono_re().replace_all(text, "```${1}```").into_owned()
}

/// `||text||` becomes ` text ` (WhatsApp has no spoiler token; the pipes are dropped).
pub fn spoiler(text: &str) -> String {
    spoiler_re().replace_all(text, " ${1} ").into_owned()
}
