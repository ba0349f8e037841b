//! Contracts: the set of part requirements a document must meet.

use std::fmt;
use std::sync::Arc;

use crate::constraint::Constraint;
use crate::document::Part;

/// A required part name paired with the constraint its content must meet.
#[derive(Debug, Clone)]
pub struct PartRequirement {
    pub part_name: String,
    pub constraint: Arc<dyn Constraint>,
}

impl PartRequirement {
    pub fn new(part_name: impl Into<String>, constraint: impl Constraint + 'static) -> Self {
        Self {
            part_name: part_name.into(),
            constraint: Arc::new(constraint),
        }
    }

    /// Build a requirement around an already shared constraint.
    pub fn with_shared(part_name: impl Into<String>, constraint: Arc<dyn Constraint>) -> Self {
        Self {
            part_name: part_name.into(),
            constraint,
        }
    }

    /// Whether `part` is the one this requirement is about.
    pub fn matches(&self, part: &Part) -> bool {
        part.name == self.part_name
    }
}

impl fmt::Display for PartRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.part_name, self.constraint)
    }
}

/// An unordered collection of part requirements.
///
/// Requirement names are expected to be unique but duplicates are accepted;
/// each duplicate is evaluated on its own.
#[derive(Debug, Clone, Default)]
pub struct Contract {
    pub requirements: Vec<PartRequirement>,
}

impl Contract {
    pub fn new(requirements: impl IntoIterator<Item = PartRequirement>) -> Self {
        Self {
            requirements: requirements.into_iter().collect(),
        }
    }

    /// Part names this contract requires, in storage order.
    pub fn part_names(&self) -> Vec<&str> {
        self.requirements
            .iter()
            .map(|r| r.part_name.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.requirements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requirements.is_empty()
    }
}

impl FromIterator<PartRequirement> for Contract {
    fn from_iter<I: IntoIterator<Item = PartRequirement>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraint::SizeLimit;

    #[test]
    fn test_requirement_matches_by_name() {
        let requirement = PartRequirement::new("Body", SizeLimit::new(10));
        assert!(requirement.matches(&Part::new("Body", "")));
        assert!(!requirement.matches(&Part::new("body", "")));
        assert!(!requirement.matches(&Part::new("Introduction", "")));
    }

    #[test]
    fn test_requirement_display() {
        let requirement = PartRequirement::new("Body", SizeLimit::new(10));
        assert_eq!(requirement.to_string(), "Body: size limit < 10 words");
    }

    #[test]
    fn test_contract_accepts_duplicates() {
        let contract = Contract::new([
            PartRequirement::new("Body", SizeLimit::new(10)),
            PartRequirement::new("Body", SizeLimit::new(10)),
        ]);
        assert_eq!(contract.len(), 2);
        assert_eq!(contract.part_names(), vec!["Body", "Body"]);
    }

    #[test]
    fn test_empty_contract() {
        let contract = Contract::default();
        assert!(contract.is_empty());
        assert!(contract.part_names().is_empty());
    }

    #[test]
    fn test_shared_constraint() {
        let limit: Arc<dyn Constraint> = Arc::new(SizeLimit::new(3));
        let contract: Contract = ["a", "b"]
            .into_iter()
            .map(|name| PartRequirement::with_shared(name, Arc::clone(&limit)))
            .collect();
        assert_eq!(contract.len(), 2);
        assert_eq!(Arc::strong_count(&limit), 3);
    }
}
