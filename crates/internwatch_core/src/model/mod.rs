//! Applicant domain model.
//!
//! # Responsibility
//! - Define validated value objects and the `Applicant` aggregate.
//! - Keep identity (name) and full equality rules in one place.
//!
//! # Invariants
//! - Every value reachable from an `Applicant` has passed validation.
//! - Applicants are immutable; edits produce new values.

pub mod applicant;
pub mod builder;
pub mod fields;
