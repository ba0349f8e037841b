//! CLI argument definitions for clause.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use clause::config::OutputFormat;

#[derive(Parser)]
#[command(name = "clause")]
#[command(version)]
#[command(about = "Check documents against part contracts", long_about = None)]
#[command(
    after_help = "GETTING STARTED:\n    clause check --contract essay.md --document draft.yaml\n\n    Every requirement of the contract is checked; all violations are reported together."
)]
pub struct Cli {
    /// Suppress all non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check a document against a contract
    ///
    /// Exits with status 1 when any violation is found.
    Check {
        /// Contract definition file (defaults to `defaults.contract` from config)
        #[arg(long, short, value_name = "PATH")]
        contract: Option<PathBuf>,
        /// Document to check (YAML with a `parts` list)
        #[arg(long, short, value_name = "PATH")]
        document: PathBuf,
        /// Output format (defaults to `defaults.format` from config)
        #[arg(long, value_enum, value_name = "FORMAT")]
        format: Option<OutputFormat>,
    },
    /// Show version information
    Version {
        /// Also show the build stamp and the configuration in effect
        #[arg(long, short)]
        verbose: bool,
    },
    /// Generate shell completion script
    Completion {
        /// Shell to generate completion for
        #[arg(value_enum)]
        shell: Shell,
    },
    /// Generate man pages for clause and each subcommand
    Man {
        /// Output directory for the man pages
        #[arg(long, value_name = "DIR", default_value = ".")]
        out_dir: PathBuf,
    },
}
