//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Conference schedule inspector.
///
/// Reads session lists exported as JSON, renders them the way a schedule
/// view would, and reports what changed between two imports.
#[derive(Debug, Parser)]
#[command(name = "fahrplan", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show sessions with derived times and descriptions.
    Show {
        /// JSON file with a list of sessions.
        file: PathBuf,

        /// Only show the session with this ID.
        #[arg(long)]
        session: Option<String>,
    },

    /// Compare two imports and list new, canceled and changed sessions.
    Diff {
        /// JSON file with the previous import.
        old: PathBuf,

        /// JSON file with the new import.
        new: PathBuf,

        /// Output the flagged session list as JSON.
        #[arg(long)]
        json: bool,
    },
}
