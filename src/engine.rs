//! Validation of a document against a contract.
//!
//! Every requirement is checked on its own by [`check_requirement`], a total
//! function from requirement to a (possibly empty) list of violations. The
//! results are concatenated. A missing part is just another violation, so no
//! requirement can cut short the evaluation of the others.

use crate::contract::{Contract, PartRequirement};
use crate::document::Document;
use crate::violation::ContractViolation;

/// Check one requirement against `document`.
///
/// Yields a single `PART_MISSING` violation when the document has no part of
/// the required name, and otherwise whatever the requirement's constraint
/// reports for that part (zero, one or many violations).
pub fn check_requirement(
    document: &Document,
    requirement: &PartRequirement,
) -> Vec<ContractViolation> {
    match document.find_part(&requirement.part_name) {
        Some(part) => requirement.constraint.evaluate(part),
        None => vec![ContractViolation::part_missing(&requirement.part_name)],
    }
}

/// Lazily check every requirement of `contract` against `document`.
///
/// Each requirement is evaluated exactly once, when the iterator reaches it.
/// Consuming the iterator fully yields the same violations as [`validate`].
/// Stopping early yields only the violations of the requirements reached so
/// far, which is not a representative result.
pub fn violations<'a>(
    document: &'a Document,
    contract: &'a Contract,
) -> impl Iterator<Item = ContractViolation> + 'a {
    contract
        .requirements
        .iter()
        .flat_map(move |requirement| check_requirement(document, requirement))
}

/// Check every requirement of `contract` against `document`.
///
/// Returns all violations found. The order of the result follows the order of
/// the contract's requirements but carries no meaning; compare results as
/// multisets.
pub fn validate(document: &Document, contract: &Contract) -> Vec<ContractViolation> {
    violations(document, contract).collect()
}

/// Whether `document` meets every requirement of `contract`.
pub fn is_valid(document: &Document, contract: &Contract) -> bool {
    violations(document, contract).next().is_none()
}
