//! Word-count bound on a part's content.

use std::fmt;

use super::{word_count, Constraint};
use crate::document::Part;

/// Satisfied when the part has strictly fewer than `max` words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SizeLimit {
    pub max: usize,
}

impl SizeLimit {
    pub fn new(max: usize) -> Self {
        Self { max }
    }
}

impl fmt::Display for SizeLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "size limit < {} words", self.max)
    }
}

impl Constraint for SizeLimit {
    fn is_satisfied(&self, part: &Part) -> bool {
        word_count(&part.content) < self.max
    }
}
