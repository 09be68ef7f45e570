//! Render, export or copy a creative brief from the command line.
//!
//! Fields come from an optional JSON file (camelCase keys) and any number of
//! `--set key=value` overrides, applied in order.
//!
//! # Examples
//!
//! ```sh
//! # Print the concise sentence and the full brief
//! brief render --set audience="new parents" --set brand=Acme
//!
//! # Only the one-line brief
//! brief render --input brief.json --only concise
//!
//! # Write "<project title>.txt" into ./out
//! brief export --input brief.json --out-dir out
//!
//! # Copy to the system clipboard
//! brief copy --input brief.json
//!
//! # List the field vocabulary
//! brief fields
//! ```

use std::path::PathBuf;
use std::process;
use std::time::Instant;

use brief_rs::{BriefConfig, BriefRecord, BriefSession, Field, SystemClipboard};
use clap::{Args, Parser, Subcommand, ValueEnum};

/// Render, export or copy a creative brief.
#[derive(Parser)]
#[command(name = "brief")]
struct Cli {
    /// Log debug detail to stderr
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the brief to stdout
    Render {
        #[command(flatten)]
        fields: FieldArgs,

        /// Print only one part of the brief
        #[arg(long, value_enum)]
        only: Option<Part>,
    },
    /// Write the brief to "<project title>.txt"
    Export {
        #[command(flatten)]
        fields: FieldArgs,

        /// Directory to write into
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,

        /// File stem used when the project title is empty
        #[arg(long, default_value = brief_rs::export::DEFAULT_FILE_STEM)]
        default_name: String,
    },
    /// Copy the brief to the system clipboard. On Linux this waits until
    /// another application takes the clipboard over.
    Copy {
        #[command(flatten)]
        fields: FieldArgs,
    },
    /// List every field key with its section, label and default
    Fields,
}

#[derive(Args)]
struct FieldArgs {
    /// JSON file with field values keyed by camelCase field name
    #[arg(long)]
    input: Option<PathBuf>,

    /// Set one field, e.g. --set projectTitle="Spring Launch"
    #[arg(long = "set", value_name = "KEY=VALUE")]
    sets: Vec<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Part {
    Concise,
    Full,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<(), String> {
    match command {
        Command::Render { fields, only } => {
            let session = build_session(&fields, BriefConfig::default())?;
            match only {
                Some(Part::Concise) => println!("{}", session.concise()),
                Some(Part::Full) => print!("{}", session.full()),
                None => print!("{}", session.payload()),
            }
        }
        Command::Export {
            fields,
            out_dir,
            default_name,
        } => {
            let config = BriefConfig::default()
                .with_export_dir(out_dir)
                .with_default_file_stem(default_name);
            let session = build_session(&fields, config)?;
            let path = session.export()?;
            println!("{}", path.display());
        }
        Command::Copy { fields } => {
            let mut session = build_session(&fields, BriefConfig::default())?;
            // The process exits right after; on X11/Wayland the text is
            // only served while the owner lives, so hold it until replaced.
            let mut clipboard = SystemClipboard::until_replaced();
            if cfg!(target_os = "linux") {
                eprintln!("Holding the clipboard until it is pasted or replaced...");
            }
            if !session.copy(&mut clipboard, Instant::now()) {
                return Err("could not write to the clipboard".into());
            }
            println!("Copied");
        }
        Command::Fields => {
            for field in Field::ALL {
                let default = field.default_value();
                println!(
                    "{:<20} {:<24} {}{}",
                    field.key(),
                    field.section().title(),
                    field.label(),
                    if default.is_empty() {
                        String::new()
                    } else {
                        format!(" [default: {default}]")
                    }
                );
            }
        }
    }
    Ok(())
}

/// Load the JSON input (if any), then apply `--set` overrides in order.
fn build_session(args: &FieldArgs, config: BriefConfig) -> Result<BriefSession, String> {
    let record = match &args.input {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
            BriefRecord::from_json(&raw)?
        }
        None => BriefRecord::default(),
    };

    let mut session = BriefSession::new(config);
    session.load(record);
    for assignment in &args.sets {
        let (key, value) = parse_assignment(assignment)?;
        if !session.edit(key, value) {
            tracing::warn!(field = key, "Unknown field ignored");
        }
    }
    Ok(session)
}

fn parse_assignment(raw: &str) -> Result<(&str, &str), String> {
    raw.split_once('=')
        .map(|(k, v)| (k.trim(), v))
        .filter(|(k, _)| !k.is_empty())
        .ok_or_else(|| format!("expected KEY=VALUE, got '{raw}'"))
}
