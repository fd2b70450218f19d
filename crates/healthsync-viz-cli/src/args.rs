//! Command-line argument definitions.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control the output directory, dataset and
//! configuration file selection, and logging verbosity.

use clap::{Parser, Subcommand};

/// Command-line arguments for the HealthSync collateral generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory where output files are written
    #[arg(short, long, default_value = ".")]
    pub output_dir: String,

    /// Path to a TOML dataset file replacing the built-in HealthSync data
    #[arg(short, long)]
    pub dataset: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Which outputs to produce; all of them when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// The individual outputs.
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Render the architecture diagram
    Architecture,
    /// Render the user-journey flowchart
    Journey,
    /// Write the CSV reports and print the analysis summary
    Reports,
}
