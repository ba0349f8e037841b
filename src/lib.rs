//! # Clause - document contracts
//!
//! Clause checks a structured document against a contract made of independent
//! per-part requirements and reports every violation it finds. A missing part
//! never hides a failing constraint elsewhere, and vice versa.
//!
//! ## Core Concepts
//!
//! - **Parts**: named pieces of content that make up a [`document::Document`]
//! - **Constraints**: rules judging a part, see [`constraint::Constraint`]
//! - **Contracts**: required part names, each paired with a constraint
//! - **Violations**: `PART_MISSING` or `CONSTRAINT_VIOLATION` records
//!
//! ## Modules
//!
//! - [`document`] - Parts, documents and part lookup
//! - [`constraint`] - The constraint trait and its variants
//! - [`contract`] - Part requirements and contracts
//! - [`engine`] - Validation of a document against a contract
//! - [`violation`] - Violation values
//! - [`config`] - Tool configuration and contract definition files
//!
//! ## Example
//!
//! ```
//! use clause::constraint::SizeLimit;
//! use clause::contract::{Contract, PartRequirement};
//! use clause::document::{Document, Part};
//! use clause::engine::validate;
//!
//! let document = Document::new([
//!     Part::new("Introduction", "Lorem ipsum dolor sit amet."),
//!     Part::new("Body", "Sollicitudin tempor id eu nisl nunc mi."),
//! ]);
//! let contract = Contract::new([
//!     PartRequirement::new("Introduction", SizeLimit::new(20)),
//!     PartRequirement::new("Body", SizeLimit::new(5)),
//!     PartRequirement::new("Conclusion", SizeLimit::new(20)),
//! ]);
//!
//! let violations = validate(&document, &contract);
//! assert_eq!(violations.len(), 2);
//! assert!(violations.iter().any(|v| v.is_missing()));
//! assert!(violations.iter().any(|v| v.is_constraint_violation()));
//! ```

pub mod config;
pub mod constraint;
pub mod contract;
pub mod document;
pub mod engine;
pub mod frontmatter;
pub mod ui;
pub mod violation;

pub use constraint::Constraint;
pub use contract::{Contract, PartRequirement};
pub use document::{Document, Part};
pub use engine::validate;
pub use violation::{ContractViolation, ViolationKind};

/// Default path constants for the clause directory structure.
pub mod paths {
    /// Project configuration file: `.clause/config.md`
    pub const PROJECT_CONFIG: &str = ".clause/config.md";
}
