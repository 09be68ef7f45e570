//! Interactive creative brief form.
//!
//! # Examples
//!
//! ```sh
//! # Start from an empty form, exporting into ./briefs
//! brief-form --out-dir briefs
//!
//! # Continue from a saved JSON record
//! brief-form --input brief.json
//! ```

use std::path::PathBuf;
use std::process;

use brief_rs::logging::LogCaptureLayer;
use brief_rs::{BriefConfig, BriefRecord, BriefSession};
use brief_tui::{TuiConfig, run_tui};
use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Interactive creative brief form.
#[derive(Parser)]
#[command(name = "brief-form")]
struct Cli {
    /// JSON file with initial field values keyed by camelCase field name
    #[arg(long)]
    input: Option<PathBuf>,

    /// Directory exports are written into
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// File stem used when the project title is empty
    #[arg(long, default_value = brief_rs::export::DEFAULT_FILE_STEM)]
    default_name: String,
}

fn main() {
    let cli = Cli::parse();

    let record = match &cli.input {
        Some(path) => match std::fs::read_to_string(path)
            .map_err(|e| format!("failed to read {}: {e}", path.display()))
            .and_then(|raw| BriefRecord::from_json(&raw))
        {
            Ok(record) => record,
            Err(e) => {
                eprintln!("Error: {e}");
                process::exit(1);
            }
        },
        None => BriefRecord::default(),
    };

    // Route tracing into the TUI log pane instead of the terminal.
    let (layer, log_buffer) = LogCaptureLayer::new();
    tracing_subscriber::registry().with(layer).init();

    let config = BriefConfig::default()
        .with_export_dir(cli.out_dir)
        .with_default_file_stem(cli.default_name);
    let mut session = BriefSession::new(config);
    session.load(record);

    let tui_config = TuiConfig {
        log_buffer: Some(log_buffer),
        ..Default::default()
    };

    if let Err(e) = run_tui(session, tui_config) {
        eprintln!("TUI error: {e}");
        process::exit(1);
    }
}
