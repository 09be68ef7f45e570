//! TUI-local state: the brief session plus cursor, edit buffer and panes.

use std::time::Instant;

use brief_rs::logging::LogLine;
use brief_rs::{BriefSession, ClipboardSink, Field};

/// Input mode for the TUI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum InputMode {
    /// Arrow keys move between fields; single-key commands are active.
    Normal,
    /// Keystrokes edit the selected field live. Enter keeps, Esc reverts.
    Editing,
}

pub(crate) struct App {
    pub(crate) session: BriefSession,
    pub(crate) clipboard: Box<dyn ClipboardSink>,
    pub(crate) input_mode: InputMode,
    pub(crate) input_buffer: String,
    /// Value of the field when editing started, restored on Esc.
    pub(crate) edit_original: String,
    /// Index into [`Field::ALL`].
    pub(crate) selected: usize,
    /// Top line of the full-brief preview.
    pub(crate) preview_scroll: usize,
    /// Offset from the bottom of the log (0 = follow tail).
    pub(crate) log_scroll: usize,
    /// Whether the logs pane is visible (toggled with `,`).
    pub(crate) show_logs: bool,
    pub(crate) logs: Vec<LogLine>,
    /// Status messages shown at the bottom until the next command.
    pub(crate) status_message: Option<String>,
    pub(crate) should_quit: bool,
}

impl App {
    pub(crate) fn new(session: BriefSession, clipboard: Box<dyn ClipboardSink>) -> Self {
        Self {
            session,
            clipboard,
            input_mode: InputMode::Normal,
            input_buffer: String::new(),
            edit_original: String::new(),
            selected: 0,
            preview_scroll: 0,
            log_scroll: 0,
            show_logs: false,
            logs: Vec::new(),
            status_message: None,
            should_quit: false,
        }
    }

    pub(crate) fn selected_field(&self) -> Field {
        Field::ALL[self.selected.min(Field::ALL.len() - 1)]
    }

    pub(crate) fn select_next(&mut self) {
        if self.selected + 1 < Field::ALL.len() {
            self.selected += 1;
        }
    }

    pub(crate) fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    // ── Editing ──

    pub(crate) fn begin_edit(&mut self) {
        let current = self.session.record().get(self.selected_field()).to_string();
        self.edit_original = current.clone();
        self.input_buffer = current;
        self.input_mode = InputMode::Editing;
        self.status_message = None;
    }

    /// Push the edit buffer into the record; one field update per keystroke.
    fn sync_buffer(&mut self) {
        let field = self.selected_field();
        self.session.set(field, self.input_buffer.clone());
    }

    pub(crate) fn push_char(&mut self, c: char) {
        self.input_buffer.push(c);
        self.sync_buffer();
    }

    pub(crate) fn pop_char(&mut self) {
        if self.input_buffer.pop().is_some() {
            self.sync_buffer();
        }
    }

    pub(crate) fn commit_edit(&mut self) {
        self.input_buffer.clear();
        self.edit_original.clear();
        self.input_mode = InputMode::Normal;
    }

    pub(crate) fn cancel_edit(&mut self) {
        let field = self.selected_field();
        let original = std::mem::take(&mut self.edit_original);
        if self.session.record().get(field) != original {
            self.session.set(field, original);
        }
        self.input_buffer.clear();
        self.input_mode = InputMode::Normal;
        self.status_message = Some("Edit reverted.".into());
        tracing::debug!(field = field.key(), "Edit reverted");
    }

    /// Step through the option list of an enumerated field.
    ///
    /// A value outside the list moves to the first (or last) option.
    pub(crate) fn cycle_choice(&mut self, forward: bool) {
        let field = self.selected_field();
        let Some(choices) = field.choices() else {
            return;
        };
        let current = self.session.record().get(field);
        let next = match choices.iter().position(|c| *c == current) {
            Some(i) if forward => (i + 1) % choices.len(),
            Some(i) => (i + choices.len() - 1) % choices.len(),
            None if forward => 0,
            None => choices.len() - 1,
        };
        self.session.set(field, choices[next]);
    }

    // ── Commands ──

    pub(crate) fn copy(&mut self, now: Instant) {
        self.status_message = if self.session.copy(self.clipboard.as_mut(), now) {
            None
        } else {
            Some("Copy failed \u{2014} see log [,].".into())
        };
    }

    pub(crate) fn export(&mut self) {
        self.status_message = Some(match self.session.export() {
            Ok(path) => format!("Exported to {}", path.display()),
            Err(e) => {
                tracing::warn!(error = %e, "Export failed");
                format!("Export failed: {e}")
            }
        });
    }

    pub(crate) fn quit(&mut self) {
        tracing::info!("Quit requested");
        self.should_quit = true;
    }

    pub(crate) fn reset(&mut self) {
        self.session.reset();
        self.preview_scroll = 0;
        self.status_message = Some("Form reset.".into());
    }
}
