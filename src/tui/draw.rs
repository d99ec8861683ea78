//! TUI rendering: header, input, quick-format bar, preview, copy trigger, examples.

use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::core::app;
use crate::core::indicator::CopyStatus;
use crate::core::marker::FormatKind;
use crate::core::presets;

use super::app::App;
use super::constants::{
    ACCENT, ACCENT_SECONDARY, INPUT_LINES, INPUT_PLACEHOLDER, LOGO, PREVIEW_PLACEHOLDER,
};
use super::shortcuts;

const DIM: Color = Color::DarkGray;

const CURSOR: &str = "█";

/// Split `text` at newlines, then word-wrap each line to `width` columns.
/// Rendering these rows unwrapped keeps the scroll math exact.
pub(crate) fn wrap_lines(text: &str, width: u16) -> Vec<String> {
    let width = usize::from(width);
    let mut out = Vec::new();
    for line in text.split('\n') {
        if width == 0 || line.is_empty() {
            out.push(line.to_string());
            continue;
        }
        let wrapped = textwrap::wrap(line, width);
        if wrapped.is_empty() {
            out.push(String::new());
        }
        out.extend(wrapped.into_iter().map(|cow| cow.into_owned()));
    }
    out
}

fn row_count(rows: &[String]) -> u16 {
    u16::try_from(rows.len()).unwrap_or(u16::MAX)
}

pub(super) fn draw(f: &mut Frame, app: &mut App, area: Rect, now: Instant) {
    let examples_height = presets::examples().len() as u16 + 2;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(INPUT_LINES + 2),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(examples_height),
            Constraint::Length(2),
        ])
        .split(area);

    draw_header(f, chunks[0]);
    draw_input(f, app, chunks[1]);
    draw_format_bar(f, app, chunks[2]);
    draw_markup_legend(f, chunks[3]);
    draw_preview(f, app, chunks[4]);
    draw_copy_button(f, app, chunks[5], now);
    draw_examples(f, chunks[6]);
    f.render_widget(
        Paragraph::new(shortcuts::labels::bottom_bar()).alignment(Alignment::Right),
        chunks[7],
    );
}

fn draw_header(f: &mut Frame, area: Rect) {
    let line = Line::from(vec![
        Span::styled(format!(" {} ", LOGO), Style::default().fg(ACCENT)),
        Span::styled(
            "WA Formatter",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  v{}", app::VERSION), Style::default().fg(DIM)),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn draw_input(f: &mut Frame, app: &App, area: Rect) {
    let counter_style = if app.session.over_limit(app.max_chars) {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(DIM)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT))
        .title(" Type your message ")
        .title(
            Line::from(Span::styled(
                format!(" {} ", app.session.counter_label(app.max_chars)),
                counter_style,
            ))
            .alignment(Alignment::Right),
        );
    let inner = block.inner(area);

    let input = app.session.input();
    if input.is_empty() {
        let line = Line::from(vec![
            Span::styled(CURSOR, Style::default().fg(ACCENT)),
            Span::styled(INPUT_PLACEHOLDER, Style::default().fg(DIM)),
        ]);
        f.render_widget(
            Paragraph::new(line).block(block).wrap(Wrap { trim: false }),
            area,
        );
        return;
    }

    // The cursor is wrapped with the text so it lands on the row typing happens in.
    let rows = wrap_lines(&format!("{input}{CURSOR}"), inner.width);
    let scroll = row_count(&rows).saturating_sub(inner.height);
    let last = rows.len().saturating_sub(1);
    let lines: Vec<Line> = rows
        .into_iter()
        .enumerate()
        .map(|(i, row)| {
            if i == last
                && let Some(body) = row.strip_suffix(CURSOR)
            {
                return Line::from(vec![
                    Span::raw(body.to_string()),
                    Span::styled(CURSOR, Style::default().fg(ACCENT)),
                ]);
            }
            Line::raw(row)
        })
        .collect();
    f.render_widget(
        Paragraph::new(lines).block(block).scroll((scroll, 0)),
        area,
    );
}

fn caption_style(kind: FormatKind) -> Style {
    let base = Style::default().fg(Color::White);
    match kind {
        FormatKind::Bold => base.add_modifier(Modifier::BOLD),
        FormatKind::Italic => base.add_modifier(Modifier::ITALIC),
        FormatKind::Strike => base.add_modifier(Modifier::CROSSED_OUT),
        FormatKind::Mono => base.fg(ACCENT_SECONDARY),
        FormatKind::Spoiler => base.fg(Color::LightRed),
    }
}

fn draw_format_bar(f: &mut Frame, app: &App, area: Rect) {
    let enabled = app.session.can_apply_format();
    let mut spans = vec![Span::styled(" Quick format ", Style::default().fg(DIM))];
    for kind in FormatKind::ALL {
        spans.push(Span::styled(
            format!(" {} ", shortcuts::format_key(kind)),
            Style::default().fg(DIM),
        ));
        let style = if enabled {
            caption_style(kind)
        } else {
            Style::default().fg(DIM)
        };
        spans.push(Span::styled(kind.caption(), style));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// One-line cheat sheet: each markup sample drawn the way WhatsApp shows it.
fn draw_markup_legend(f: &mut Frame, area: Rect) {
    let samples = [
        ("*bold*", caption_style(FormatKind::Bold)),
        ("_italic_", caption_style(FormatKind::Italic)),
        ("~strike~", caption_style(FormatKind::Strike)),
        ("`mono`", caption_style(FormatKind::Mono)),
        ("||spoiler||", caption_style(FormatKind::Spoiler)),
    ];
    let mut spans = vec![Span::styled(" Markup ", Style::default().fg(DIM))];
    for (sample, style) in samples {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(sample, style));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_preview(f: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT_SECONDARY))
        .title(" Formatted for WhatsApp ");
    let inner = block.inner(area);
    let formatted = app.session.formatted();

    let para = if formatted.is_empty() {
        app.last_preview_max_scroll = 0;
        Paragraph::new(Span::styled(
            PREVIEW_PLACEHOLDER,
            Style::default().fg(DIM).add_modifier(Modifier::ITALIC),
        ))
    } else {
        let rows = wrap_lines(formatted, inner.width);
        app.last_preview_max_scroll = row_count(&rows).saturating_sub(inner.height);
        Paragraph::new(rows.into_iter().map(Line::raw).collect::<Vec<_>>())
    };
    app.preview_scroll = app.preview_scroll.min(app.last_preview_max_scroll);
    f.render_widget(para.block(block).scroll((app.preview_scroll, 0)), area);
}

fn draw_copy_button(f: &mut Frame, app: &App, area: Rect, now: Instant) {
    let label = format!(" [Alt+C] {} ", app.indicator.label(now));
    let style = if !app.session.can_copy() {
        Style::default().fg(DIM)
    } else {
        match app.indicator.status(now) {
            CopyStatus::Copied => Style::default()
                .fg(Color::Black)
                .bg(ACCENT)
                .add_modifier(Modifier::BOLD),
            CopyStatus::Failed => Style::default()
                .fg(Color::White)
                .bg(Color::Red)
                .add_modifier(Modifier::BOLD),
            CopyStatus::Idle => Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        }
    };
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(label, style))).alignment(Alignment::Center),
        area,
    );
}

fn draw_examples(f: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DIM))
        .title(" Quick examples ");
    let lines: Vec<Line> = presets::examples()
        .iter()
        .enumerate()
        .map(|(i, example)| {
            Line::from(vec![
                Span::styled(format!("Alt+{} ", i + 1), Style::default().fg(DIM)),
                Span::styled(
                    format!("{}: ", example.label),
                    Style::default().fg(ACCENT_SECONDARY),
                ),
                Span::raw(example.text.as_str()),
            ])
        })
        .collect();
    f.render_widget(Paragraph::new(lines).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clipboard::testing::copier;
    use crate::core::config::Config;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buf = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn long_message() -> String {
        let mut words: Vec<String> = (0..40).map(|i| format!("wordnum{i:02}x")).collect();
        words.push("LASTWORD".to_string());
        words.join(" ")
    }

    #[test]
    fn wrap_lines_breaks_at_words() {
        assert_eq!(wrap_lines("", 10), [""]);
        assert_eq!(wrap_lines("abc", 10), ["abc"]);
        assert_eq!(wrap_lines("aaaa bbbb", 6), ["aaaa", "bbbb"]);
        assert_eq!(wrap_lines("a\n\nc", 10), ["a", "", "c"]);
        assert_eq!(wrap_lines("abcdefghijk", 10).len(), 2);
    }

    #[test]
    fn wrap_lines_ignores_zero_width_padding() {
        let padded = format!("{}hi", "\u{200B}".repeat(4000));
        assert_eq!(wrap_lines(&padded, 20).len(), 1);
    }

    #[test]
    fn end_of_long_text_is_reachable() {
        let (c, _, _) = copier(false, false);
        let mut app = App::new(&Config::default(), c);
        app.session.set_input(&long_message());
        let mut terminal = Terminal::new(TestBackend::new(30, 24)).unwrap();
        let now = Instant::now();
        terminal.draw(|f| draw(f, &mut app, f.area(), now)).unwrap();
        let screen = buffer_text(&terminal);
        // Only the input shows it before the preview is scrolled.
        assert_eq!(screen.matches("LASTWORD").count(), 1, "screen:\n{screen}");
        assert!(screen.contains("LASTWORD█"), "screen:\n{screen}");

        app.scroll_down(u16::MAX);
        terminal.draw(|f| draw(f, &mut app, f.area(), now)).unwrap();
        let screen = buffer_text(&terminal);
        assert!(app.preview_scroll > 0);
        assert_eq!(screen.matches("LASTWORD").count(), 2, "screen:\n{screen}");
    }

    #[test]
    fn renders_markup_legend() {
        let (c, _, _) = copier(false, false);
        let mut app = App::new(&Config::default(), c);
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal
            .draw(|f| draw(f, &mut app, f.area(), Instant::now()))
            .unwrap();
        let screen = buffer_text(&terminal);
        assert!(screen.contains("Markup  *bold* _italic_ ~strike~ `mono` ||spoiler||"));
    }

    #[test]
    fn renders_preview_counter_and_copy_label() {
        let (c, _, _) = copier(false, false);
        let mut app = App::new(&Config::default(), c);
        app.session.set_input("`code`");
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        let now = Instant::now();
        terminal.draw(|f| draw(f, &mut app, f.area(), now)).unwrap();
        let screen = buffer_text(&terminal);
        assert!(screen.contains("```code```"), "screen:\n{screen}");
        assert!(screen.contains("6/1000"));
        assert!(screen.contains("Copy to Clipboard"));
        assert!(screen.contains("The movie ending"));
    }

    #[test]
    fn renders_placeholder_and_copied_state() {
        let (c, _, _) = copier(false, false);
        let mut app = App::new(&Config::default(), c);
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        let now = Instant::now();
        terminal.draw(|f| draw(f, &mut app, f.area(), now)).unwrap();
        assert!(buffer_text(&terminal).contains(PREVIEW_PLACEHOLDER));

        app.session.set_input("hi");
        assert!(app.copy(now));
        terminal.draw(|f| draw(f, &mut app, f.area(), now)).unwrap();
        assert!(buffer_text(&terminal).contains("Copied!"));
    }
}
