//! `find-meeting` CLI — find meeting slots in a day's schedule from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Find slots for a schedule document (stdin → stdout)
//! cat schedule.json | find-meeting query
//!
//! # From file to file, pretty-printed
//! find-meeting query -i schedule.json -o slots.json --pretty
//!
//! # Merge a JSON array of ranges into disjoint busy ranges
//! echo '[{"start":100,"end":200},{"start":150,"end":250}]' | find-meeting merge
//!
//! # Show which attendee set was used, as JSON log lines on stderr
//! find-meeting -v --log-json query -i schedule.json
//! ```
//!
//! A schedule document looks like:
//!
//! ```json
//! {
//!   "events": [{"title": "Standup", "when": {"start": 600, "duration": 60}, "attendees": ["A"]}],
//!   "request": {"duration": 30, "attendees": ["A"], "optional_attendees": ["B"]}
//! }
//! ```

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use meeting_query::{Schedule, TimeRange};
use serde_json::Value;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(
    name = "find-meeting",
    version,
    about = "Find every slot in a day where a meeting fits"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log scheduling decisions to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Write logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Find meeting slots for a schedule document
    Query(Io),
    /// Merge a JSON array of time ranges into disjoint busy ranges
    Merge(Io),
}

/// Where a subcommand reads its document and writes its JSON result.
#[derive(Args)]
struct Io {
    /// Input file (reads from stdin if omitted)
    #[arg(short, long)]
    input: Option<PathBuf>,
    /// Output file (writes to stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

impl Io {
    fn read_document(&self) -> Result<String> {
        match &self.input {
            Some(path) => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read file: {}", path.display())),
            None => io::read_to_string(io::stdin()).context("Failed to read from stdin"),
        }
    }

    fn emit(&self, value: &Value) -> Result<()> {
        let mut text = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        text.push('\n');

        match &self.output {
            Some(path) => std::fs::write(path, text)
                .with_context(|| format!("Failed to write file: {}", path.display())),
            None => io::stdout()
                .lock()
                .write_all(text.as_bytes())
                .context("Failed to write to stdout"),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.log_json);

    match cli.command {
        Commands::Query(args) => {
            let schedule: Schedule = serde_json::from_str(&args.read_document()?)
                .context("Failed to parse schedule document")?;
            tracing::info!(
                events = schedule.events.len(),
                duration = schedule.request.duration,
                "finding meeting slots"
            );

            let result = meeting_query::query_with_attendance(&schedule.events, &schedule.request);
            args.emit(&serde_json::to_value(&result).context("Failed to serialize slots")?)?;
        }
        Commands::Merge(args) => {
            let ranges: Vec<TimeRange> = serde_json::from_str(&args.read_document()?)
                .context("Failed to parse time ranges")?;

            let merged = meeting_query::merge_ranges(ranges);
            args.emit(&serde_json::to_value(&merged).context("Failed to serialize ranges")?)?;
        }
    }

    Ok(())
}

/// Install a stderr subscriber. `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool, json: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init();
    }
}
