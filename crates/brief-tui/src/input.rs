//! Key handling for the brief form.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{App, InputMode};

pub(crate) fn handle_key_event(key: KeyEvent, app: &mut App, now: Instant) {
    // Windows reports key releases too.
    if key.kind == KeyEventKind::Release {
        return;
    }

    // Ctrl+C always quits.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return;
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_key(key, app, now),
        InputMode::Editing => handle_edit_key(key, app),
    }
}

fn handle_normal_key(key: KeyEvent, app: &mut App, now: Instant) {
    match key.code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => app.select_prev(),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => app.select_next(),
        KeyCode::Home => app.selected = 0,
        KeyCode::Left => app.cycle_choice(false),
        KeyCode::Right => app.cycle_choice(true),
        KeyCode::Enter | KeyCode::Char('e') => {
            if app.selected_field().choices().is_some() {
                app.cycle_choice(true);
            } else {
                app.begin_edit();
            }
        }
        KeyCode::Char('c') => app.copy(now),
        KeyCode::Char('x') => app.export(),
        KeyCode::Char('r') => app.reset(),
        KeyCode::Char(',') => app.show_logs = !app.show_logs,
        KeyCode::PageUp => app.preview_scroll = app.preview_scroll.saturating_sub(10),
        KeyCode::PageDown => {
            let last_line = app.session.full().lines().count().saturating_sub(1);
            app.preview_scroll = app.preview_scroll.saturating_add(10).min(last_line);
        }
        KeyCode::Char('[') => app.log_scroll = app.log_scroll.saturating_add(3),
        KeyCode::Char(']') => app.log_scroll = app.log_scroll.saturating_sub(3),
        _ => {}
    }
}

fn handle_edit_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Enter => app.commit_edit(),
        KeyCode::Esc => app.cancel_edit(),
        KeyCode::Backspace => app.pop_char(),
        KeyCode::Char(c) => app.push_char(c),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use brief_rs::logging::{LogCaptureLayer, LogLevel};
    use brief_rs::{BriefConfig, BriefRecord, BriefSession, Field, MemoryClipboard};
    use tracing_subscriber::layer::SubscriberExt;

    use super::*;

    fn app() -> App {
        App::new(BriefSession::default(), Box::new(MemoryClipboard::default()))
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key_event(KeyEvent::new(code, KeyModifiers::NONE), app, Instant::now());
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn select(app: &mut App, field: Field) {
        app.selected = Field::ALL.iter().position(|f| *f == field).unwrap();
    }

    #[test]
    fn typing_updates_only_selected_field() {
        let mut app = app();
        select(&mut app, Field::Audience);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input_mode, InputMode::Editing);

        type_str(&mut app, "new parents");
        let expected = BriefRecord::default().updated("audience", "new parents");
        assert_eq!(app.session.record(), &expected);
        assert!(app.session.concise().starts_with("Get New parents who"));

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.session.record(), &expected);
    }

    #[test]
    fn quit_keys_are_text_while_editing() {
        let mut app = app();
        press(&mut app, KeyCode::Char('e'));
        type_str(&mut app, "qcrx");
        assert!(!app.should_quit);
        assert_eq!(app.session.record().project_title, "qcrx");
    }

    #[test]
    fn backspace_removes_last_char() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        type_str(&mut app, "abc");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.session.record().project_title, "ab");
    }

    #[test]
    fn esc_restores_previous_value() {
        let mut app = app();
        app.session.edit("brand", "Acme");
        select(&mut app, Field::Brand);
        press(&mut app, KeyCode::Enter);
        type_str(&mut app, " Corp");
        assert_eq!(app.session.record().brand, "Acme Corp");

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.session.record().brand, "Acme");
        assert_eq!(app.input_mode, InputMode::Normal);
    }

    #[test]
    fn arrows_cycle_enumerated_fields() {
        let mut app = app();
        select(&mut app, Field::ProjectType);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.session.record().project_type, "Brand");
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.session.record().project_type, "Production");

        select(&mut app, Field::ToneOfVoice);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.session.record().tone_of_voice, "Playful and bold");
    }

    #[test]
    fn arrows_ignore_free_text_fields() {
        let mut app = app();
        select(&mut app, Field::Brand);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.session.record(), &BriefRecord::default());
    }

    #[test]
    fn navigation_is_clamped() {
        let mut app = app();
        press(&mut app, KeyCode::Up);
        assert_eq!(app.selected, 0);
        for _ in 0..100 {
            press(&mut app, KeyCode::Down);
        }
        assert_eq!(app.selected_field(), Field::Legal);
    }

    #[test]
    fn copy_then_reset() {
        let mut app = app();
        app.session.edit("projectType", "Social");
        let now = Instant::now();
        handle_key_event(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE),
            &mut app,
            now,
        );
        assert!(app.session.copied_visible(now));

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.session.record(), &BriefRecord::default());
        assert!(!app.session.copied_visible(now));
        assert_eq!(app.status_message.as_deref(), Some("Form reset."));
    }

    #[test]
    fn copy_failure_sets_status() {
        let mut app = App::new(
            BriefSession::default(),
            Box::new(MemoryClipboard::rejecting("denied")),
        );
        press(&mut app, KeyCode::Char('c'));
        assert!(!app.should_quit);
        assert!(app.status_message.unwrap().starts_with("Copy failed"));
    }

    #[test]
    fn export_key_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let session = BriefSession::new(BriefConfig::default().with_export_dir(dir.path()));
        let mut app = App::new(session, Box::new(MemoryClipboard::default()));
        app.session.edit("projectTitle", "Spring Launch");

        press(&mut app, KeyCode::Char('x'));
        let path = dir.path().join("Spring Launch.txt");
        assert_eq!(std::fs::read_to_string(&path).unwrap(), app.session.payload());
        assert!(app.status_message.unwrap().starts_with("Exported to "));
    }

    #[test]
    fn export_failure_is_reported_and_logged() {
        let dir = tempfile::tempdir().unwrap();
        let config = BriefConfig::default().with_export_dir(dir.path().join("missing"));
        let mut app = App::new(BriefSession::new(config), Box::new(MemoryClipboard::default()));

        let (layer, buffer) = LogCaptureLayer::new();
        let subscriber = tracing_subscriber::registry().with(layer);
        tracing::subscriber::with_default(subscriber, || {
            press(&mut app, KeyCode::Char('x'));
            press(&mut app, KeyCode::Char('q'));
        });

        assert!(app.status_message.unwrap().starts_with("Export failed: "));
        assert!(app.should_quit);
        let logs = buffer.drain();
        assert!(
            logs.iter()
                .any(|l| l.level == LogLevel::Warn && l.message.contains("Export failed"))
        );
        assert!(logs.iter().any(|l| l.message.contains("Quit requested")));
    }

    #[test]
    fn preview_scroll_stops_at_last_line() {
        let mut app = app();
        for _ in 0..1000 {
            press(&mut app, KeyCode::PageDown);
        }
        let last_line = app.session.full().lines().count() - 1;
        assert_eq!(app.preview_scroll, last_line);

        press(&mut app, KeyCode::PageUp);
        assert_eq!(app.preview_scroll, last_line - 10);
    }

    #[test]
    fn ctrl_c_quits_in_any_mode() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        handle_key_event(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            &mut app,
            Instant::now(),
        );
        assert!(app.should_quit);
    }
}
