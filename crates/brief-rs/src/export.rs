//! The export artifact: payload, filename, and writing it to disk.
//!
//! The clipboard receives the same [`export_payload`] text, so the two
//! output paths never drift apart.

use std::path::{Path, PathBuf};

use crate::format::{format_concise, format_full};
use crate::record::BriefRecord;

/// File stem used when the project title is empty.
pub const DEFAULT_FILE_STEM: &str = "creative-brief";
/// Extension of the export file.
pub const EXPORT_EXTENSION: &str = "txt";

/// Concise sentence, a blank line, then the full brief.
pub fn export_payload(record: &BriefRecord) -> String {
    format!("{}\n\n{}", format_concise(record), format_full(record))
}

/// `{projectTitle}.txt`, or `{default_stem}.txt` when the title is empty.
///
/// Path separators and NUL in the title become `-` so the file stays in the
/// export directory; the title is otherwise used as-is.
pub fn export_filename(record: &BriefRecord, default_stem: &str) -> String {
    let stem = if record.project_title.is_empty() {
        default_stem.to_string()
    } else {
        record
            .project_title
            .chars()
            .map(|c| if matches!(c, '/' | '\\' | '\0') { '-' } else { c })
            .collect()
    };
    format!("{stem}.{EXPORT_EXTENSION}")
}

/// Write the export payload into `dir`, returning the file path.
pub fn write_export(record: &BriefRecord, dir: &Path, default_stem: &str) -> Result<PathBuf, String> {
    let path = dir.join(export_filename(record, default_stem));
    std::fs::write(&path, export_payload(record))
        .map_err(|e| format!("failed to write {}: {e}", path.display()))?;
    tracing::info!(path = %path.display(), "Brief exported");
    Ok(path)
}
