//! Centralized UI formatting and color utilities
//!
//! This module provides the icons, colors and status messages used by the
//! clause CLI. Status messages respect quiet mode; violations are always
//! printed by the caller.

use colored::{ColoredString, Colorize};

use crate::violation::ViolationKind;

/// Environment variable that enables quiet mode
pub const QUIET_ENV: &str = "CLAUSE_QUIET";

/// Check if quiet mode is enabled via environment variable or --quiet flag
pub fn is_quiet() -> bool {
    std::env::var(QUIET_ENV)
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

/// Print a status message to stderr unless quiet mode is on.
pub fn status(message: &str) {
    if !is_quiet() {
        eprintln!("{} {}", "→".cyan(), message);
    }
}

/// Print a warning to stderr unless quiet mode is on.
pub fn warn(message: &str) {
    if !is_quiet() {
        eprintln!("{} {}", "⚠".yellow(), message);
    }
}

/// Returns a colored icon for the given violation kind.
///
/// Icons:
/// - PartMissing: ∅ (red)
/// - ConstraintViolation: ✗ (yellow)
pub fn violation_icon(kind: ViolationKind) -> ColoredString {
    match kind {
        ViolationKind::PartMissing => "∅".red(),
        ViolationKind::ConstraintViolation => "✗".yellow(),
    }
}

/// Color scheme for status-related text output
pub mod colors {
    use colored::{ColoredString, Colorize};

    /// Green for success
    pub fn success(text: &str) -> ColoredString {
        text.green()
    }

    /// Red for errors/failures
    pub fn error(text: &str) -> ColoredString {
        text.red()
    }

    /// Cyan for identifiers (part names, paths)
    pub fn identifier(text: &str) -> ColoredString {
        text.cyan()
    }
}

/// Common text formatting patterns
pub mod format {
    /// Pair `count` with the singular or plural noun, e.g. `3 violations`
    pub fn count(count: usize, singular: &str, plural: &str) -> String {
        if count == 1 {
            format!("{} {}", count, singular)
        } else {
            format!("{} {}", count, plural)
        }
    }

    /// Format a separator line for sections
    pub fn separator(width: usize) -> String {
        "━".repeat(width)
    }
}
