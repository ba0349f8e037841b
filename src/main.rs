//! CLI entry point and command dispatch for clause.

mod cli;
mod cmd;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use clause::ui::QUIET_ENV;
use cli::{Cli, Commands};

fn main() {
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{} {:#}", "Error:".red(), err);
            std::process::exit(2);
        }
    }
}

/// Run the CLI and return the process exit code.
fn run() -> Result<i32> {
    let cli = Cli::parse();

    if cli.quiet {
        std::env::set_var(QUIET_ENV, "1");
    }

    match cli.command {
        Commands::Check {
            contract,
            document,
            format,
        } => cmd::check::cmd_check(contract.as_deref(), &document, format),
        Commands::Version { verbose } => cmd::util::cmd_version(verbose).map(|_| 0),
        Commands::Completion { shell } => {
            cmd::util::cmd_completion(shell, &mut std::io::stdout().lock()).map(|_| 0)
        }
        Commands::Man { out_dir } => cmd::util::cmd_man(&out_dir).map(|_| 0),
    }
}
