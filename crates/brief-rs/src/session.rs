//! The single live brief and the edit / reset / copy / export triggers.
//!
//! Derived text is never cached: [`BriefSession::concise`],
//! [`BriefSession::full`] and [`BriefSession::payload`] recompute from the
//! current record on every call.

use std::path::PathBuf;
use std::time::Instant;

use crate::clipboard::{ClipboardSink, CopiedIndicator};
use crate::config::BriefConfig;
use crate::export::{export_filename, export_payload, write_export};
use crate::format::{format_concise, format_full};
use crate::record::{BriefRecord, Field};

/// Form state for one run of a frontend.
#[derive(Debug, Clone, Default)]
pub struct BriefSession {
    record: BriefRecord,
    copied: CopiedIndicator,
    config: BriefConfig,
}

impl BriefSession {
    pub fn new(config: BriefConfig) -> Self {
        Self {
            record: BriefRecord::default(),
            copied: CopiedIndicator::default(),
            config,
        }
    }

    pub fn record(&self) -> &BriefRecord {
        &self.record
    }

    // ── Edits ──

    /// Update the field named `name`. Unknown names are ignored.
    pub fn edit(&mut self, name: &str, value: impl Into<String>) -> bool {
        let applied = self.record.update(name, value);
        if applied {
            tracing::debug!(field = name, "Field updated");
        } else {
            tracing::debug!(field = name, "Ignoring unknown field");
        }
        applied
    }

    /// Typed form of [`edit`](Self::edit).
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.record.set(field, value);
        tracing::debug!(field = field.key(), "Field updated");
    }

    /// Replace the whole record, e.g. with one read from JSON.
    pub fn load(&mut self, record: BriefRecord) {
        self.record = record;
        tracing::info!("Brief loaded");
    }

    /// Return every field to its default and drop the copied indicator.
    pub fn reset(&mut self) {
        self.record.reset();
        self.copied.clear();
        tracing::info!("Form reset");
    }

    // ── Derived text ──

    pub fn concise(&self) -> String {
        format_concise(&self.record)
    }

    pub fn full(&self) -> String {
        format_full(&self.record)
    }

    /// Export / clipboard text.
    pub fn payload(&self) -> String {
        export_payload(&self.record)
    }

    pub fn export_filename(&self) -> String {
        export_filename(&self.record, &self.config.default_file_stem)
    }

    // ── Outputs ──

    /// Write the payload into the configured export directory.
    pub fn export(&self) -> Result<PathBuf, String> {
        write_export(
            &self.record,
            &self.config.export_dir,
            &self.config.default_file_stem,
        )
    }

    /// Copy the payload to `sink`.
    ///
    /// A rejected write is logged and reported as `false`; the copied
    /// indicator only shows on success.
    pub fn copy(&mut self, sink: &mut dyn ClipboardSink, now: Instant) -> bool {
        match sink.set_text(&self.payload()) {
            Ok(()) => {
                self.copied.show(now, self.config.copied_flash);
                tracing::info!("Brief copied to clipboard");
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "Clipboard write failed");
                false
            }
        }
    }

    pub fn copied_visible(&self, now: Instant) -> bool {
        self.copied.is_visible(now)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::clipboard::MemoryClipboard;

    #[test]
    fn edit_recomputes_derived_text() {
        let mut session = BriefSession::default();
        let before = session.concise();
        assert!(session.edit("audience", "dog owners"));
        assert_ne!(session.concise(), before);
        assert!(session.concise().starts_with("Get Dog owners who "));
        assert!(session.full().contains("Primary: dog owners\n"));
    }

    #[test]
    fn edit_unknown_is_noop() {
        let mut session = BriefSession::default();
        assert!(!session.edit("colour", "red"));
        assert_eq!(session.record(), &BriefRecord::default());
    }

    #[test]
    fn load_replaces_whole_record() {
        let mut session = BriefSession::default();
        session.edit("brand", "Acme");
        let loaded = BriefRecord::default().updated("audience", "gamers");
        session.load(loaded.clone());
        assert_eq!(session.record(), &loaded);
    }

    #[test]
    fn copy_shows_indicator_for_flash() {
        let mut session = BriefSession::default();
        session.edit("brand", "Acme");
        let mut sink = MemoryClipboard::default();
        let now = Instant::now();

        assert!(session.copy(&mut sink, now));
        assert_eq!(sink.contents, Some(session.payload()));
        assert!(session.copied_visible(now + Duration::from_millis(100)));
        assert!(!session.copied_visible(now + Duration::from_millis(1600)));
    }

    #[test]
    fn copy_failure_is_swallowed() {
        let mut session = BriefSession::default();
        let mut sink = MemoryClipboard::rejecting("permission denied");
        let now = Instant::now();

        assert!(!session.copy(&mut sink, now));
        assert!(!session.copied_visible(now));
    }

    #[test]
    fn reset_clears_record_and_indicator() {
        let mut session = BriefSession::default();
        session.edit("projectType", "Digital");
        let now = Instant::now();
        session.copy(&mut MemoryClipboard::default(), now);

        session.reset();
        assert_eq!(session.record(), &BriefRecord::default());
        assert!(!session.copied_visible(now));
    }

    #[test]
    fn export_writes_to_configured_dir() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = BriefSession::new(
            BriefConfig::default()
                .with_export_dir(dir.path())
                .with_default_file_stem("fallback"),
        );
        assert_eq!(session.export_filename(), "fallback.txt");

        session.edit("projectTitle", "Spring Launch");
        let path = session.export().unwrap();
        assert_eq!(path, dir.path().join("Spring Launch.txt"));
        assert_eq!(std::fs::read_to_string(path).unwrap(), session.payload());
    }

    #[test]
    fn custom_flash_duration() {
        let mut session =
            BriefSession::new(BriefConfig::default().with_copied_flash(Duration::from_secs(5)));
        let now = Instant::now();
        session.copy(&mut MemoryClipboard::default(), now);
        assert!(session.copied_visible(now + Duration::from_secs(4)));
    }
}
