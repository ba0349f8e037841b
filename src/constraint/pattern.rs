//! Regular-expression constraint on a part's content.

use regex::Regex;
use std::fmt;

use super::Constraint;
use crate::document::Part;

/// Satisfied when the regex matches somewhere in the part's content.
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
}

impl Pattern {
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(pattern)?,
        })
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pattern /{}/", self.regex.as_str())
    }
}

impl Constraint for Pattern {
    fn is_satisfied(&self, part: &Part) -> bool {
        self.regex.is_match(&part.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matching_content() {
        let pattern = Pattern::new(r"\.\s*$").unwrap();
        let part = Part::new("Body", "Ends with a period. ");
        assert!(pattern.is_satisfied(&part));
        assert!(pattern.evaluate(&part).is_empty());
    }

    #[test]
    fn test_non_matching_content() {
        let pattern = Pattern::new(r"^Lorem").unwrap();
        let part = Part::new("Body", "Sollicitudin tempor");
        let violations = pattern.evaluate(&part);

        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("pattern /^Lorem/"));
    }

    #[test]
    fn test_invalid_regex() {
        assert!(Pattern::new("(unclosed").is_err());
    }
}
