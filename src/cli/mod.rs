//! # Command-Line Interface
//!
//! A thin front end over the scheduling library. Every command reads a
//! roadmap snapshot (or plain arguments) and prints what the library
//! computes; nothing is written back.
//!
//! ## Commands
//!
//! | Command | Purpose |
//! |---------|---------|
//! | `project` | End date of a start date plus working days |
//! | `span` | Span enclosing a roadmap item's deliverables |
//! | `next-start` | Suggested start for the next deliverable |
//! | `occupied` | Overlap check for a candidate date range |
//! | `stats` | Status counts and percentages |
//! | `chart` | Donut chart layout, as data or SVG |
//!
//! ## Output Formats
//!
//! All commands support `--format text|json`. `--verbose` prints debug
//! lines and raises the log level to `debug` (`RUST_LOG` overrides).
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod chart_cmd;
mod output;
mod schedule_cmd;
mod session;

pub use app::{run, Cli, Commands};
pub use output::{Output, OutputFormat};
