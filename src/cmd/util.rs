//! `clause version`, `clause man` and `clause completion`.

use anyhow::{Context, Result};
use clap::CommandFactory;
use clap_complete::{generate, Shell};
use clap_mangen::Man;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use clause::config::{global_config_path, Config};
use clause::paths::PROJECT_CONFIG;
use clause::ui::{self, colors, format};

use crate::cli::Cli;

const BIN_NAME: &str = "clause";

/// Print the version; with `verbose`, also the build stamp and the
/// configuration `clause check` would run with from the current directory.
pub fn cmd_version(verbose: bool) -> Result<()> {
    println!("{} {}", BIN_NAME, env!("CARGO_PKG_VERSION"));

    if !verbose {
        return Ok(());
    }

    println!("commit: {}", env!("GIT_SHA"));
    println!("built: {}", env!("BUILD_DATE"));

    let config = Config::load()?;
    let global = global_config_path()
        .filter(|p| p.exists())
        .map(|p| p.display().to_string());
    let project = Path::new(PROJECT_CONFIG)
        .exists()
        .then(|| PROJECT_CONFIG.to_string());

    println!("global config: {}", global.as_deref().unwrap_or("(none)"));
    println!("project config: {}", project.as_deref().unwrap_or("(none)"));
    println!("format: {}", config.defaults.format);
    println!(
        "contract: {}",
        config
            .defaults
            .contract
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(none)".to_string())
    );

    Ok(())
}

/// Write `clause.1` and one `clause-<command>.1` page per subcommand into
/// `out_dir`, returning the written paths.
pub fn cmd_man(out_dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    let cli = Cli::command();
    let mut pages = vec![(BIN_NAME.to_string(), Man::new(cli.clone()))];
    for sub in cli.get_subcommands() {
        let title = format!("{}-{}", BIN_NAME, sub.get_name());
        pages.push((title.clone(), Man::new(sub.clone()).title(title)));
    }

    let mut written = Vec::with_capacity(pages.len());
    for (title, man) in pages {
        let mut buffer = Vec::new();
        man.render(&mut buffer)?;

        let path = out_dir.join(format!("{}.1", title));
        fs::write(&path, buffer)
            .with_context(|| format!("Failed to write man page {}", path.display()))?;
        written.push(path);
    }

    ui::status(&format!(
        "Wrote {} to {}",
        format::count(written.len(), "man page", "man pages"),
        colors::identifier(&out_dir.display().to_string())
    ));

    Ok(written)
}

/// Write the completion script for `shell` to `out`.
pub fn cmd_completion(shell: Shell, out: &mut dyn Write) -> Result<()> {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, BIN_NAME, out);
    out.flush().context("Failed to write completion script")
}
