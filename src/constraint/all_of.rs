//! Composite constraint over several independent checks.

use std::fmt;
use std::sync::Arc;

use super::Constraint;
use crate::document::Part;
use crate::violation::ContractViolation;

/// Satisfied when every child constraint is satisfied.
///
/// Children are judged independently. `evaluate` reports the violations of
/// every failing child, so one part can produce several violations.
#[derive(Debug, Clone)]
pub struct AllOf {
    constraints: Vec<Arc<dyn Constraint>>,
}

impl AllOf {
    pub fn new(constraints: Vec<Arc<dyn Constraint>>) -> Self {
        Self { constraints }
    }

    pub fn constraints(&self) -> &[Arc<dyn Constraint>] {
        &self.constraints
    }
}

impl fmt::Display for AllOf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "all of [")?;
        for (idx, constraint) in self.constraints.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", constraint)?;
        }
        write!(f, "]")
    }
}

impl Constraint for AllOf {
    fn is_satisfied(&self, part: &Part) -> bool {
        self.constraints.iter().all(|c| c.is_satisfied(part))
    }

    fn evaluate(&self, part: &Part) -> Vec<ContractViolation> {
        self.constraints
            .iter()
            .flat_map(|c| c.evaluate(part))
            .collect()
    }
}
