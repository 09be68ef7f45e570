//! Rendering for the brief form.

use std::time::Instant;

use brief_rs::logging::{LogLevel, LogLine};
use brief_rs::{Field, FormSection};
use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::app::{App, InputMode};

// ── Public Utilities ──────────────────────────────────────────────────

/// Truncate to at most `max` characters, appending "..." if truncated.
pub fn truncate_str(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let head: String = s.chars().take(max).collect();
        format!("{head}...")
    } else {
        s.to_string()
    }
}

/// Map a log level to a ratatui [`Style`].
pub fn log_level_style(level: LogLevel) -> Style {
    match level {
        LogLevel::Trace => Style::default().fg(Color::DarkGray),
        LogLevel::Debug => Style::default().fg(Color::Cyan),
        LogLevel::Info => Style::default().fg(Color::Green),
        LogLevel::Warn => Style::default().fg(Color::Yellow),
        LogLevel::Error => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    }
}

/// Top line needed to keep `line` visible in a pane of `height` lines.
fn follow_scroll(line: usize, height: usize) -> usize {
    if height == 0 {
        line
    } else {
        (line + 1).saturating_sub(height)
    }
}

// ── Root Render ───────────────────────────────────────────────────────

pub(crate) fn render(frame: &mut Frame, app: &App, now: Instant) {
    let area = frame.area();

    // Outer layout: [3] header | [flex] middle | [3] input bar.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(6),
            Constraint::Length(3),
        ])
        .split(area);

    render_header(frame, chunks[0], app, now);
    render_input(frame, chunks[2], app);

    let middle = if app.show_logs {
        let split = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(chunks[1]);
        render_logs(frame, split[1], &app.logs, app.log_scroll);
        split[0]
    } else {
        chunks[1]
    };

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(middle);
    render_form(frame, columns[0], app);

    let preview = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(3)])
        .split(columns[1]);
    render_concise(frame, preview[0], app);
    render_full(frame, preview[1], app);
}

// ── Header ────────────────────────────────────────────────────────────

fn render_header(frame: &mut Frame, area: Rect, app: &App, now: Instant) {
    let mut spans = vec![
        Span::styled("Export: ", Style::default().fg(Color::DarkGray)),
        Span::raw(app.session.export_filename()),
    ];

    if app.session.copied_visible(now) {
        spans.push(Span::raw("   "));
        spans.push(Span::styled(
            "\u{2714} Copied",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta))
        .title(" Creative Brief \u{b7} GET \u{b7} WHO \u{b7} TO \u{b7} BY ");

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

// ── Form Pane ─────────────────────────────────────────────────────────

fn render_form(frame: &mut Frame, area: Rect, app: &App) {
    let inner_height = area.height.saturating_sub(2) as usize;
    let value_max = area.width.saturating_sub(6).max(10) as usize;

    let section_style = Style::default()
        .fg(Color::Magenta)
        .add_modifier(Modifier::BOLD);
    let label_style = Style::default().fg(Color::DarkGray);
    let hint_style = Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC);
    let selected_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let record = app.session.record();
    let selected = app.selected_field();
    let mut lines: Vec<Line> = Vec::new();
    let mut selected_line = 0usize;
    let mut section: Option<FormSection> = None;

    for field in Field::ALL {
        if section != Some(field.section()) {
            if section.is_some() {
                lines.push(Line::from(""));
            }
            section = Some(field.section());
            lines.push(Line::from(Span::styled(field.section().title(), section_style)));
        }

        let is_selected = field == selected;
        if is_selected {
            selected_line = lines.len();
        }
        let marker = if is_selected { "> " } else { "  " };
        let value = record.get(field);
        let value_span = if value.is_empty() {
            Span::styled(truncate_str(field.hint(), value_max), hint_style)
        } else if field.choices().is_some() {
            Span::raw(format!("\u{25c2} {value} \u{25b8}"))
        } else {
            Span::raw(truncate_str(value, value_max))
        };

        lines.push(Line::from(vec![
            Span::styled(
                format!("{marker}{}: ", field.label()),
                if is_selected { selected_style } else { label_style },
            ),
            value_span,
        ]));
    }

    let scroll = follow_scroll(selected_line, inner_height);
    let border_color = if app.input_mode == InputMode::Editing {
        Color::Yellow
    } else {
        Color::Cyan
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(" Brief ");

    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((scroll_offset(scroll), 0));
    frame.render_widget(paragraph, area);
}

/// Paragraph scroll offsets are `u16`; larger offsets pin to the end.
fn scroll_offset(lines: usize) -> u16 {
    u16::try_from(lines).unwrap_or(u16::MAX)
}

// ── Preview Panes ─────────────────────────────────────────────────────

fn render_concise(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta))
        .title(" Succinct Brief ");

    let paragraph = Paragraph::new(app.session.concise())
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

/// Full-brief lines with the section headings in bold.
fn full_lines(full: &str) -> Vec<Line<'_>> {
    let heading_style = Style::default().add_modifier(Modifier::BOLD);
    full.lines()
        .map(|line| {
            if brief_rs::format::full_headings().any(|heading| heading == line) {
                Line::from(Span::styled(line, heading_style))
            } else {
                Line::from(line)
            }
        })
        .collect()
}

fn render_full(frame: &mut Frame, area: Rect, app: &App) {
    let full = app.session.full();
    let lines = full_lines(&full);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Full Creative Brief [PgUp/PgDn] ");

    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((scroll_offset(app.preview_scroll), 0))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

// ── Log Pane ──────────────────────────────────────────────────────────

fn render_logs(frame: &mut Frame, area: Rect, logs: &[LogLine], log_scroll: usize) {
    let inner_height = area.height.saturating_sub(2) as usize;

    let lines: Vec<Line> = logs
        .iter()
        .filter(|log| !matches!(log.level, LogLevel::Trace))
        .map(|log| {
            Line::from(vec![
                Span::styled(format!("{} ", log.time), Style::default().fg(Color::DarkGray)),
                Span::styled(format!("{} ", log.level.label()), log_level_style(log.level)),
                Span::raw(log.message.as_str()),
            ])
        })
        .collect();

    let scroll = lines
        .len()
        .saturating_sub(inner_height)
        .saturating_sub(log_scroll);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Log [ / ] ");

    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((scroll_offset(scroll), 0))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

// ── Input Bar ─────────────────────────────────────────────────────────

fn render_input(frame: &mut Frame, area: Rect, app: &App) {
    let field = app.selected_field();
    let (title, style, text) = match app.input_mode {
        InputMode::Normal => {
            let hint = app.status_message.clone().unwrap_or_else(|| {
                "[Enter] edit  [c] copy  [x] export  [r] reset  [,] logs  [q] quit".to_string()
            });
            (
                format!(" {hint} "),
                Style::default().fg(Color::DarkGray),
                field.hint().to_string(),
            )
        }
        InputMode::Editing => (
            format!(
                " {} \u{2014} [Enter] keep  [Esc] revert ",
                field.label()
            ),
            Style::default().fg(Color::Yellow),
            format!("> {}\u{2588}", app.input_buffer),
        ),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(style)
        .title(title);

    frame.render_widget(Paragraph::new(text).block(block), area);
}

// ── Tests ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use brief_rs::{BriefSession, MemoryClipboard};
    use ratatui::backend::TestBackend;

    use super::*;

    fn draw(app: &App, now: Instant) -> String {
        let mut terminal = Terminal::new(TestBackend::new(140, 48)).unwrap();
        terminal.draw(|frame| render(frame, app, now)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn app() -> App {
        App::new(BriefSession::default(), Box::new(MemoryClipboard::default()))
    }

    #[test]
    fn truncate_str_short() {
        assert_eq!(truncate_str("hello", 10), "hello");
    }

    #[test]
    fn truncate_str_counts_chars() {
        assert_eq!(truncate_str("\u{2014}\u{2014}\u{2014}", 2), "\u{2014}\u{2014}...");
    }

    #[test]
    fn follow_scroll_keeps_line_visible() {
        assert_eq!(follow_scroll(3, 10), 0);
        assert_eq!(follow_scroll(12, 10), 3);
        assert_eq!(follow_scroll(5, 0), 5);
    }

    #[test]
    fn scroll_offset_saturates() {
        assert_eq!(scroll_offset(7), 7);
        assert_eq!(scroll_offset(usize::from(u16::MAX)), u16::MAX);
        assert_eq!(scroll_offset(70_000), u16::MAX);
    }

    #[test]
    fn only_section_headings_are_bold() {
        let session = {
            let mut session = BriefSession::default();
            session.edit("background", "ASA / CAP");
            session.edit("brand", "ACME");
            session
        };
        let full = session.full();
        let lines = full_lines(&full);
        let bold: Vec<String> = lines
            .iter()
            .filter(|line| {
                line.spans
                    .iter()
                    .any(|span| span.style.add_modifier.contains(Modifier::BOLD))
            })
            .map(|line| line.to_string())
            .collect();
        let headings: Vec<String> = brief_rs::format::full_headings()
            .map(str::to_string)
            .collect();
        assert_eq!(bold, headings);
        assert!(!bold.iter().any(|line| line == "ASA / CAP"));
    }

    #[test]
    fn draws_form_and_preview() {
        let screen = draw(&app(), Instant::now());
        assert!(screen.contains("Project overview"));
        assert!(screen.contains("Succinct Brief"));
        assert!(screen.contains("creative-brief.txt"));
        assert!(!screen.contains("Copied"));
    }

    #[test]
    fn shows_copied_flash() {
        let mut app = app();
        let now = Instant::now();
        app.copy(now);
        assert!(draw(&app, now).contains("Copied"));
        assert!(!draw(&app, now + Duration::from_secs(2)).contains("Copied"));
    }

    #[test]
    fn shows_edit_buffer() {
        let mut app = app();
        app.begin_edit();
        app.push_char('Q');
        app.push_char('3');
        let screen = draw(&app, Instant::now());
        assert!(screen.contains("> Q3"));
        assert!(screen.contains("Q3.txt"));
    }
}
