//! Terminal form for filling in creative briefs.
//!
//! Renders every field of a [`BriefSession`] as an editable form next to a
//! live preview of the concise and full brief (ratatui + crossterm). Each
//! keystroke is one field update and the preview is recomputed every frame.
//!
//! # Quick start
//!
//! ```ignore
//! use brief_rs::{BriefConfig, BriefSession};
//! use brief_tui::{TuiConfig, run_tui};
//!
//! let session = BriefSession::new(BriefConfig::default());
//! let finished = run_tui(session, TuiConfig::default())?;
//! println!("{}", finished.concise());
//! ```

use std::io;
use std::time::{Duration, Instant};

use brief_rs::logging::LogBuffer;
use brief_rs::{BriefSession, ClipboardSink, SystemClipboard};
use crossterm::event::{self, Event};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use crossterm::{cursor, execute};
use ratatui::prelude::*;

mod app;
mod input;
mod render;

pub use render::{log_level_style, truncate_str};

use app::App;
use input::handle_key_event;
use render::render;

/// Configuration for the TUI.
pub struct TuiConfig {
    /// Where copied text goes.
    pub clipboard: Box<dyn ClipboardSink>,
    /// Optional log buffer from [`brief_rs::logging::LogCaptureLayer`].
    ///
    /// When set, the TUI drains pending log lines once per frame into its
    /// log pane.
    pub log_buffer: Option<LogBuffer>,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            clipboard: Box::new(SystemClipboard::new()),
            log_buffer: None,
        }
    }
}

/// Run the form event loop (blocking) until the user quits.
///
/// Returns the session as it was when the user quit.
pub fn run_tui(session: BriefSession, config: TuiConfig) -> io::Result<BriefSession> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, cursor::Hide)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    let mut app = App::new(session, config.clipboard);

    let result = event_loop(&mut terminal, &mut app, config.log_buffer.as_ref());

    // Restore terminal even if the loop failed.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, cursor::Show)?;
    terminal.show_cursor()?;

    result.map(|()| app.session)
}

fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    log_buffer: Option<&LogBuffer>,
) -> io::Result<()> {
    while !app.should_quit {
        if let Some(buf) = log_buffer {
            buf.flush_into(&mut app.logs);
        }

        let now = Instant::now();
        terminal.draw(|frame| render(frame, app, now))?;

        // Poll with a short timeout so the copied flash clears on time.
        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
        {
            handle_key_event(key, app, Instant::now());
        }
    }
    Ok(())
}
