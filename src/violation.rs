//! Contract violation values.
//!
//! A violation is plain data. Missing parts and failed constraints both end up
//! here as ordinary values; nothing in the validation path signals failure any
//! other way.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Discriminator downstream consumers branch on.
///
/// Serialized and displayed as `PART_MISSING` / `CONSTRAINT_VIOLATION`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ViolationKind {
    /// The document has no part with the required name
    PartMissing,
    /// The part exists but its constraint is not satisfied
    ConstraintViolation,
}

impl ViolationKind {
    /// The literal wire value of this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            ViolationKind::PartMissing => "PART_MISSING",
            ViolationKind::ConstraintViolation => "CONSTRAINT_VIOLATION",
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One failed requirement.
///
/// Equality is structural. Two equal violations may both appear in a single
/// result (for example when a contract repeats a requirement).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContractViolation {
    pub kind: ViolationKind,
    pub message: String,
}

impl ContractViolation {
    pub fn new(kind: ViolationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Violation for a required part the document does not contain.
    pub fn part_missing(part_name: &str) -> Self {
        Self::new(
            ViolationKind::PartMissing,
            format!(
                "document does not contain part '{}' required by contract",
                part_name
            ),
        )
    }

    /// Violation for a part whose content fails `constraint`.
    pub fn constraint_violation(part_name: &str, constraint: impl fmt::Display) -> Self {
        Self::new(
            ViolationKind::ConstraintViolation,
            format!(
                "part '{}' not valid according to constraint {}",
                part_name, constraint
            ),
        )
    }

    pub fn is_missing(&self) -> bool {
        self.kind == ViolationKind::PartMissing
    }

    pub fn is_constraint_violation(&self) -> bool {
        self.kind == ViolationKind::ConstraintViolation
    }
}

impl fmt::Display for ContractViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)
    }
}
