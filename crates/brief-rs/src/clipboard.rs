//! Clipboard output and the transient "copied" indicator.
//!
//! Writes go through the [`ClipboardSink`] trait so frontends can use the
//! real system clipboard ([`SystemClipboard`]) while tests and headless runs
//! use [`MemoryClipboard`].

use std::time::{Duration, Instant};

/// How long the "copied" indicator stays visible after a successful copy.
pub const COPIED_FLASH: Duration = Duration::from_millis(1600);

/// Destination for copied brief text.
pub trait ClipboardSink {
    /// Replace the clipboard contents with `text`.
    fn set_text(&mut self, text: &str) -> Result<(), String>;
}

/// The OS clipboard, via `arboard`.
///
/// The handle is opened lazily on first use and kept for the lifetime of the
/// sink; on X11/Wayland the copied text is only served while it is alive.
/// Short-lived processes should use [`SystemClipboard::until_replaced`].
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
    wait_until_replaced: bool,
}

impl SystemClipboard {
    /// Non-blocking sink for long-running frontends.
    pub fn new() -> Self {
        Self::default()
    }

    /// On Linux, each write blocks until another application takes
    /// ownership of the clipboard, so the text outlives this process once a
    /// paste has happened. Elsewhere this behaves like [`SystemClipboard::new`].
    pub fn until_replaced() -> Self {
        Self {
            inner: None,
            wait_until_replaced: true,
        }
    }

    pub fn waits_until_replaced(&self) -> bool {
        self.wait_until_replaced
    }
}

#[cfg(target_os = "linux")]
fn write_text(
    clipboard: &mut arboard::Clipboard,
    text: &str,
    wait: bool,
) -> Result<(), arboard::Error> {
    use arboard::SetExtLinux;

    if wait {
        clipboard.set().wait().text(text.to_owned())
    } else {
        clipboard.set_text(text.to_owned())
    }
}

#[cfg(not(target_os = "linux"))]
fn write_text(
    clipboard: &mut arboard::Clipboard,
    text: &str,
    _wait: bool,
) -> Result<(), arboard::Error> {
    clipboard.set_text(text.to_owned())
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), String> {
        if self.inner.is_none() {
            let c =
                arboard::Clipboard::new().map_err(|e| format!("clipboard unavailable: {e}"))?;
            self.inner = Some(c);
        }
        let Some(clipboard) = self.inner.as_mut() else {
            return Err("clipboard unavailable".into());
        };
        write_text(clipboard, text, self.wait_until_replaced)
            .map_err(|e| format!("clipboard write rejected: {e}"))
    }
}

/// In-memory clipboard. Optionally rejects every write.
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    pub contents: Option<String>,
    /// When set, every write fails with this message.
    pub reject_with: Option<String>,
}

impl MemoryClipboard {
    /// A sink that rejects writes, e.g. to simulate a permission denial.
    pub fn rejecting(reason: &str) -> Self {
        Self {
            contents: None,
            reject_with: Some(reason.to_string()),
        }
    }
}

impl ClipboardSink for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), String> {
        if let Some(ref reason) = self.reject_with {
            return Err(reason.clone());
        }
        self.contents = Some(text.to_string());
        Ok(())
    }
}

// ── Copied indicator ──────────────────────────────────────────────────

/// Success flag that reverts on its own after a fixed interval.
///
/// Stored as a deadline and checked at render time, so no timer is needed.
#[derive(Debug, Default, Clone, Copy)]
pub struct CopiedIndicator {
    until: Option<Instant>,
}

impl CopiedIndicator {
    /// Show the indicator from `now` for `flash`.
    pub fn show(&mut self, now: Instant, flash: Duration) {
        self.until = Some(now + flash);
    }

    pub fn clear(&mut self) {
        self.until = None;
    }

    pub fn is_visible(&self, now: Instant) -> bool {
        self.until.is_some_and(|until| now < until)
    }
}
