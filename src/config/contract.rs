//! Contract definition files.
//!
//! A contract is declared in YAML, either as the frontmatter of a markdown
//! file or as a plain YAML document:
//!
//! ```yaml
//! ---
//! name: essay
//! requirements:
//!   - part: Introduction
//!     constraint: { type: size_limit, max: 20 }
//!   - part: Body
//!     constraint:
//!       type: all_of
//!       constraints:
//!         - { type: size_limit, max: 500 }
//!         - { type: pattern, regex: "\\." }
//! ---
//! ```
//!
//! Constraint parameters are checked while the [`Contract`] is built, so each
//! constraint (and each regex) is constructed exactly once per load.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::constraint::{AllOf, Constraint, Pattern, SizeLimit};
use crate::contract::{Contract, PartRequirement};
use crate::frontmatter::split_frontmatter;

/// Declarative form of a constraint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ConstraintConfig {
    /// Fewer than `max` words
    SizeLimit {
        /// Exclusive upper bound on word count
        max: usize,
    },
    /// Content matches a regular expression
    Pattern {
        /// Regular expression searched for in the content
        regex: String,
    },
    /// Every nested constraint holds
    AllOf {
        /// Nested constraints, each reported on its own
        constraints: Vec<ConstraintConfig>,
    },
}

impl ConstraintConfig {
    /// Build the runtime constraint this definition describes, rejecting
    /// parameters no document could meet.
    pub fn build(&self) -> Result<Arc<dyn Constraint>> {
        let constraint: Arc<dyn Constraint> = match self {
            ConstraintConfig::SizeLimit { max } => {
                if *max == 0 {
                    anyhow::bail!("size_limit.max must be greater than 0");
                }
                Arc::new(SizeLimit::new(*max))
            }
            ConstraintConfig::Pattern { regex } => Arc::new(
                Pattern::new(regex)
                    .with_context(|| format!("pattern.regex is not a valid regex: {}", regex))?,
            ),
            ConstraintConfig::AllOf { constraints } => {
                if constraints.is_empty() {
                    anyhow::bail!("all_of.constraints must not be empty");
                }
                let children = constraints
                    .iter()
                    .map(Self::build)
                    .collect::<Result<Vec<_>>>()?;
                Arc::new(AllOf::new(children))
            }
        };
        Ok(constraint)
    }
}

/// One requirement entry of a contract file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementConfig {
    /// Name of the required part
    pub part: String,
    /// Constraint the part's content must meet
    pub constraint: ConstraintConfig,
}

/// A parsed contract file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractFile {
    /// Optional human-readable contract name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub requirements: Vec<RequirementConfig>,
}

impl RequirementConfig {
    /// Build the runtime requirement; `idx` locates it in error messages.
    fn build(&self, idx: usize) -> Result<PartRequirement> {
        if self.part.trim().is_empty() {
            anyhow::bail!("requirements[{}].part must not be empty", idx);
        }
        let constraint = self.constraint.build().with_context(|| {
            format!(
                "requirements[{}] (part '{}') has an invalid constraint",
                idx, self.part
            )
        })?;
        Ok(PartRequirement::with_shared(self.part.clone(), constraint))
    }
}

impl ContractFile {
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read contract from {}", path.display()))?;

        Self::parse(&content).with_context(|| format!("Invalid contract {}", path.display()))
    }

    /// Parse the definition. Constraint parameters are checked by
    /// [`ContractFile::to_contract`].
    pub fn parse(content: &str) -> Result<Self> {
        let (frontmatter, body) = split_frontmatter(content);
        let yaml = frontmatter.unwrap_or_else(|| body.to_string());

        serde_yaml::from_str(&yaml).context("Failed to parse contract definition")
    }

    /// Build the runtime contract, failing on the first invalid requirement.
    pub fn to_contract(&self) -> Result<Contract> {
        self.requirements
            .iter()
            .enumerate()
            .map(|(idx, r)| r.build(idx))
            .collect()
    }
}

/// Load a contract file and build the contract it declares.
pub fn load_contract(path: &Path) -> Result<Contract> {
    ContractFile::load_from(path)?
        .to_contract()
        .with_context(|| format!("Invalid contract {}", path.display()))
}
