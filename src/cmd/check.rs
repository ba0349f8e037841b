//! `clause check`: validate a document file against a contract file.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};

use clause::config::{load_contract, Config, OutputFormat};
use clause::ui::{self, colors, format};
use clause::{engine, Contract, ContractViolation, Document, ViolationKind};

/// Outcome of checking one document against one contract
#[derive(Debug)]
pub struct CheckReport {
    /// Number of requirements the contract holds
    pub requirements: usize,
    /// Every violation found
    pub violations: Vec<ContractViolation>,
}

impl CheckReport {
    pub fn new(document: &Document, contract: &Contract) -> Self {
        Self {
            requirements: contract.len(),
            violations: engine::validate(document, contract),
        }
    }

    /// Check if the document met every requirement
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    fn count(&self, kind: ViolationKind) -> usize {
        self.violations.iter().filter(|v| v.kind == kind).count()
    }

    pub fn missing_count(&self) -> usize {
        self.count(ViolationKind::PartMissing)
    }

    pub fn constraint_count(&self) -> usize {
        self.count(ViolationKind::ConstraintViolation)
    }

    /// Print one line per violation
    pub fn display(&self) {
        for violation in &self.violations {
            println!(
                "  {} {}: {}",
                ui::violation_icon(violation.kind),
                colors::identifier(violation.kind.as_str()),
                violation.message
            );
        }
    }

    /// Display a summary of the check
    pub fn display_summary(&self) {
        println!();
        println!("{}", format::separator(60).cyan());

        let status_icon = if self.is_valid() {
            "✓".green()
        } else {
            "✗".red()
        };

        print!(
            "{} {} checked: ",
            status_icon,
            format::count(self.requirements, "requirement", "requirements")
        );

        if self.is_valid() {
            println!("{}", colors::success("all satisfied"));
        } else {
            println!(
                "{} ({} missing, {} failed)",
                colors::error(&format::count(
                    self.violations.len(),
                    "violation",
                    "violations"
                )),
                self.missing_count(),
                self.constraint_count()
            );
        }

        println!("{}", format::separator(60).cyan());
    }

    /// Violations as a JSON array
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.violations).context("Failed to serialize violations")
    }
}

/// Pick the contract path from the command line or the configured default.
fn resolve_contract_path(contract: Option<&Path>, config: &Config) -> Result<PathBuf> {
    if let Some(path) = contract {
        return Ok(path.to_path_buf());
    }

    config.defaults.contract.clone().context(
        "No contract given. Pass --contract <PATH> or set defaults.contract in .clause/config.md",
    )
}

/// Run the check command and return the process exit code (0 valid, 1 violations).
pub fn cmd_check(
    contract: Option<&Path>,
    document: &Path,
    format: Option<OutputFormat>,
) -> Result<i32> {
    let config = Config::load()?;
    let format = format.unwrap_or(config.defaults.format);

    let contract_path = resolve_contract_path(contract, &config)?;
    let contract = load_contract(&contract_path)?;
    let document_data = Document::load(document)?;

    if contract.is_empty() {
        ui::warn(&format!(
            "Contract {} has no requirements",
            contract_path.display()
        ));
    }

    ui::status(&format!(
        "Checking {} against {}",
        colors::identifier(&document.display().to_string()),
        colors::identifier(&contract_path.display().to_string())
    ));

    let report = CheckReport::new(&document_data, &contract);

    match format {
        OutputFormat::Json => println!("{}", report.to_json()?),
        OutputFormat::Text => {
            report.display();
            if !ui::is_quiet() {
                report.display_summary();
            }
        }
    }

    Ok(if report.is_valid() { 0 } else { 1 })
}
