//! Runtime settings for a brief session.
//!
//! [`BriefConfig`] has working defaults; frontends override individual
//! settings from their command-line flags with the `with_*` builders.
//!
//! ```ignore
//! let config = BriefConfig::default()
//!     .with_export_dir("out")
//!     .with_default_file_stem("q3-brief");
//! ```

use std::path::PathBuf;
use std::time::Duration;

use crate::clipboard::COPIED_FLASH;
use crate::export::DEFAULT_FILE_STEM;

/// Settings shared by the CLI and the terminal form.
#[derive(Debug, Clone)]
pub struct BriefConfig {
    /// Directory export files are written into. Default: `"."`.
    pub export_dir: PathBuf,
    /// File stem used when the project title is empty. Default: `"creative-brief"`.
    pub default_file_stem: String,
    /// How long the "copied" indicator stays up. Default: 1.6s.
    pub copied_flash: Duration,
}

impl Default for BriefConfig {
    fn default() -> Self {
        Self {
            export_dir: PathBuf::from("."),
            default_file_stem: DEFAULT_FILE_STEM.to_string(),
            copied_flash: COPIED_FLASH,
        }
    }
}

impl BriefConfig {
    pub fn with_export_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.export_dir = dir.into();
        self
    }

    /// Set the fallback file stem. An empty stem keeps the current one.
    pub fn with_default_file_stem(mut self, stem: impl Into<String>) -> Self {
        let stem = stem.into();
        if !stem.is_empty() {
            self.default_file_stem = stem;
        }
        self
    }

    pub fn with_copied_flash(mut self, flash: Duration) -> Self {
        self.copied_flash = flash;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = BriefConfig::default();
        assert_eq!(config.export_dir, PathBuf::from("."));
        assert_eq!(config.default_file_stem, "creative-brief");
        assert_eq!(config.copied_flash, Duration::from_millis(1600));
    }

    #[test]
    fn builders_override() {
        let config = BriefConfig::default()
            .with_export_dir("/tmp/briefs")
            .with_default_file_stem("q3")
            .with_copied_flash(Duration::from_secs(3));
        assert_eq!(config.export_dir, PathBuf::from("/tmp/briefs"));
        assert_eq!(config.default_file_stem, "q3");
        assert_eq!(config.copied_flash, Duration::from_secs(3));
    }

    #[test]
    fn empty_stem_is_ignored() {
        let config = BriefConfig::default().with_default_file_stem("");
        assert_eq!(config.default_file_stem, "creative-brief");
    }
}
