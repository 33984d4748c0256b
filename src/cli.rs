//! Command-line interface implementation for wikicoord.
//! Provides argument parsing and help text formatting using clap.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// How extracted coordinates are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `lat,lon` per input
    Plain,
    /// One JSON object per input
    Json,
}

/// Command-line arguments structure for wikicoord.
#[derive(Parser, Debug)]
#[command(author, version, about = "wikicoord: extract {{coord}} coordinates from wiki markup", long_about = None)]
pub struct Args {
    /// Files holding wiki text; reads stdin when empty or `-`
    #[arg(value_name = "FILES")]
    pub files: Vec<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    pub format: OutputFormat,

    /// Print out-of-range coordinates with a warning instead of failing.
    #[arg(long)]
    pub allow_invalid: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With clap's default error handling for argument errors
pub fn get_args() -> Args {
    Args::parse()
}
