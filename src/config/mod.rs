//! Configuration for the clause tool.
//!
//! Tool settings live in markdown files with YAML frontmatter, a global one in
//! the user's config directory and a project one in `.clause/config.md`. Both
//! are optional; project values override global ones.
//!
//! Contract definitions are loaded by [`contract`].

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::frontmatter::split_frontmatter;
use crate::paths::PROJECT_CONFIG;

pub mod contract;
pub mod defaults;

pub use contract::{load_contract, ConstraintConfig, ContractFile, RequirementConfig};
pub use defaults::*;

/// Effective tool configuration after merging
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub defaults: DefaultsConfig,
}

impl Config {
    /// Load configuration with full merge semantics.
    /// Merge order (later overrides earlier):
    /// 1. Global config (<config_dir>/clause/config.md)
    /// 2. Project config (.clause/config.md)
    pub fn load() -> Result<Self> {
        Self::load_merged_from(global_config_path().as_deref(), Path::new(PROJECT_CONFIG))
    }

    /// Load merged configuration from the given global and project config paths.
    /// Missing files are skipped.
    pub fn load_merged_from(global_path: Option<&Path>, project_path: &Path) -> Result<Self> {
        let global_config = global_path
            .filter(|p| p.exists())
            .map(PartialConfig::load_from)
            .transpose()?
            .unwrap_or_default();

        let project_config = Some(project_path)
            .filter(|p| p.exists())
            .map(PartialConfig::load_from)
            .transpose()?
            .unwrap_or_default();

        Ok(global_config.merge_with(project_config))
    }
}

/// Returns the path to the global config file, e.g. ~/.config/clause/config.md
pub fn global_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("clause").join("config.md"))
}

/// Partial config for merging - all fields optional
#[derive(Debug, Deserialize, Default)]
struct PartialConfig {
    pub defaults: Option<PartialDefaultsConfig>,
}

#[derive(Debug, Deserialize, Default)]
struct PartialDefaultsConfig {
    pub format: Option<OutputFormat>,
    pub contract: Option<PathBuf>,
}

impl PartialConfig {
    fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        Self::parse(&content).with_context(|| format!("Invalid config {}", path.display()))
    }

    fn parse(content: &str) -> Result<Self> {
        let (frontmatter, _body) = split_frontmatter(content);
        let frontmatter = frontmatter.context("Failed to extract frontmatter from config")?;

        serde_yaml::from_str(&frontmatter).context("Failed to parse config frontmatter")
    }

    /// Merge this global config with a project config, returning the merged result.
    /// Values from the project config take precedence over global.
    fn merge_with(self, project: PartialConfig) -> Config {
        let global_defaults = self.defaults.unwrap_or_default();
        let project_defaults = project.defaults.unwrap_or_default();

        Config {
            defaults: DefaultsConfig {
                format: project_defaults
                    .format
                    .or(global_defaults.format)
                    .unwrap_or_default(),
                contract: project_defaults.contract.or(global_defaults.contract),
            },
        }
    }
}
