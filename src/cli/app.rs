//! Main CLI application structure

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::output::{Output, OutputFormat};
use super::schedule_cmd::ExclusionArgs;
use super::session::Session;
use super::{chart_cmd, schedule_cmd};

#[derive(Parser)]
#[command(name = "roadmap")]
#[command(author, version, about = "Deliverable scheduling for roadmap items")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Configuration file (defaults to .roadmap/config.toml, then the user config)
    #[arg(long, global = true, env = "ROADMAP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Holiday list: JSON array or one YYYY-MM-DD per line
    #[arg(long, global = true, env = "ROADMAP_HOLIDAYS")]
    pub holidays: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Project the end date of a start date plus working days
    Project {
        /// Start date (YYYY-MM-DD)
        start: String,

        /// Duration in working days
        #[arg(allow_negative_numbers = true)]
        days: i64,

        #[command(flatten)]
        exclusions: ExclusionArgs,
    },

    /// Show the span enclosing a roadmap item's deliverables
    Span {
        /// Roadmap snapshot (JSON or YAML)
        snapshot: PathBuf,
    },

    /// Suggest a start date for the next deliverable
    NextStart {
        /// Roadmap snapshot (JSON or YAML)
        snapshot: PathBuf,

        /// Date used when there are no deliverables (defaults to today)
        #[arg(long)]
        today: Option<String>,
    },

    /// Check whether a date range overlaps existing deliverables
    Occupied {
        /// Roadmap snapshot (JSON or YAML)
        snapshot: PathBuf,

        /// Candidate start date (YYYY-MM-DD)
        start: String,

        /// Candidate duration in working days
        #[arg(allow_negative_numbers = true)]
        days: i64,

        /// Skip this deliverable (the one being edited)
        #[arg(long)]
        exclude_id: Option<String>,

        #[command(flatten)]
        exclusions: ExclusionArgs,
    },

    /// Show status counts and percentages
    Stats {
        /// Roadmap snapshot (JSON or YAML)
        snapshot: PathBuf,
    },

    /// Lay out the status donut chart
    Chart {
        /// Roadmap snapshot (JSON or YAML)
        snapshot: PathBuf,

        /// Print an SVG document instead of segment data
        #[arg(long)]
        svg: bool,
    },
}

/// Installs the stderr log subscriber; RUST_LOG overrides the level
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    // A subscriber may already be set (tests); keep it
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let output = Output::new(cli.format, cli.verbose);

    output.verbose("Roadmap CLI starting");
    let session = Session::open(cli.config.as_deref(), cli.holidays.as_deref(), &output)?;

    match cli.command {
        Commands::Project { start, days, exclusions } => {
            schedule_cmd::project(&session, &output, &start, days, &exclusions)?
        }

        Commands::Span { snapshot } => schedule_cmd::span(&session, &output, &snapshot)?,

        Commands::NextStart { snapshot, today } => {
            schedule_cmd::next_start(&session, &output, &snapshot, today.as_deref())?
        }

        Commands::Occupied { snapshot, start, days, exclude_id, exclusions } => {
            schedule_cmd::occupied(
                &session,
                &output,
                &snapshot,
                &start,
                days,
                exclude_id.as_deref(),
                &exclusions,
            )?
        }

        Commands::Stats { snapshot } => chart_cmd::stats(&output, &snapshot)?,

        Commands::Chart { snapshot, svg } => chart_cmd::chart(&session, &output, &snapshot, svg)?,
    }

    output.verbose("Command completed successfully");
    Ok(())
}
