//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tally: survey satisfaction analysis
#[derive(Parser)]
#[command(name = "tally")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a survey export and summarize satisfaction by department
    Analyze {
        /// Path to the survey file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Write the full analysis as JSON to this path
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the full analysis as JSON instead of a summary
        #[arg(long, conflicts_with = "output")]
        json: bool,

        /// Answer text that marks a skipped question
        #[arg(long, default_value = "No answer")]
        no_answer: String,
    },

    /// Rank departments by dissatisfaction
    Rank {
        /// Path to the survey file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
