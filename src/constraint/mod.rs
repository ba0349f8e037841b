//! Constraints a document part can be judged against.
//!
//! A [`Constraint`] answers two questions about a [`Part`]: whether it is
//! satisfactory, and which violations describe it if not. The default
//! [`Constraint::evaluate`] derives the second from the first, so a variant
//! only has to override it when it reports more than one violation.

use std::fmt;

use crate::document::Part;
use crate::violation::ContractViolation;

pub mod all_of;
pub mod pattern;
pub mod size_limit;

pub use all_of::AllOf;
pub use pattern::Pattern;
pub use size_limit::SizeLimit;

/// A rule capable of judging one document part.
///
/// Implementations must be pure: no side effects, and `evaluate` returns an
/// empty list exactly when `is_satisfied` returns `true`.
pub trait Constraint: fmt::Debug + fmt::Display + Send + Sync {
    /// Whether `part` satisfies this constraint.
    fn is_satisfied(&self, part: &Part) -> bool;

    /// Violations describing why `part` fails this constraint, if it does.
    fn evaluate(&self, part: &Part) -> Vec<ContractViolation> {
        if self.is_satisfied(part) {
            Vec::new()
        } else {
            vec![ContractViolation::constraint_violation(&part.name, self)]
        }
    }
}

/// Number of whitespace-delimited words in `text`.
///
/// Runs of whitespace count as one separator and leading or trailing
/// whitespace never produces empty words.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
