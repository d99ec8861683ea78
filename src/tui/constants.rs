//! TUI constants: colors, timing, and layout sizes.

use ratatui::style::Color;

/// Accent green color (#98FB98).
pub(super) const ACCENT: Color = Color::Rgb(152, 251, 152);

/// Secondary accent, soft cyan (#7EC8E3). Used for the preview border and monospace.
pub(super) const ACCENT_SECONDARY: Color = Color::Rgb(126, 200, 227);

/// Event poll timeout in milliseconds (main loop). Also bounds how late the
/// "Copied!" caption can reset.
pub(crate) const EVENT_POLL_TIMEOUT_MS: u64 = 100;

/// Scroll amount for arrow keys.
pub(crate) const SCROLL_LINES_SMALL: u16 = 3;

/// Scroll amount for PageUp/PageDown.
pub(crate) const SCROLL_LINES_PAGE: u16 = 10;

/// Input textarea height (inner lines, block borders excluded).
pub(crate) const INPUT_LINES: u16 = 6;

/// Minimalist logo in the header.
pub(super) const LOGO: &str = "◆";

/// Shown in an empty input field.
pub(super) const INPUT_PLACEHOLDER: &str =
    "Type here... Use ||text|| for spoilers, *bold*, _italic_, ~strike~, `mono`";

/// Shown in an empty preview.
pub(super) const PREVIEW_PLACEHOLDER: &str = "Your formatted text will appear here...";
