//! Creative brief model and GET / WHO / TO / BY formatter.
//!
//! A brief is a flat record of named text fields ([`BriefRecord`]). Two pure
//! projections turn it into shareable text:
//!
//! - [`format_concise`]: one sentence,
//!   `Get {WHO} who {INSIGHT} to {TO} by {BY}.`
//! - [`format_full`]: a sectioned plain-text document.
//!
//! [`BriefSession`] wraps the single live record together with the edit,
//! reset, copy and export triggers that frontends call.
//!
//! # Quick start
//!
//! ```
//! use brief_rs::{BriefRecord, format_concise};
//!
//! let record = BriefRecord::default()
//!     .updated("audience", "new parents")
//!     .updated("audienceInsight", "feel overwhelmed by choice")
//!     .updated("desiredBehaviour", "try the starter bundle")
//!     .updated("singleMindedProp", "one box, everything sorted");
//!
//! assert_eq!(
//!     format_concise(&record),
//!     "Get New parents who feel overwhelmed by choice to Try the starter bundle by One box, everything sorted."
//! );
//! ```

pub mod clipboard;
pub mod config;
pub mod export;
pub mod format;
pub mod logging;
pub mod record;
pub mod session;

pub use clipboard::{ClipboardSink, CopiedIndicator, MemoryClipboard, SystemClipboard};
pub use config::BriefConfig;
pub use export::{export_filename, export_payload, write_export};
pub use format::{format_concise, format_full, tidy};
pub use record::{BriefRecord, Field, FormSection};
pub use session::BriefSession;
