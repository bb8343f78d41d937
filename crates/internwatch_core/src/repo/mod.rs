//! Collection store for applicants.
//!
//! # Responsibility
//! - Hold the canonical applicant list behind a duplicate-rejecting API.
//! - Expose full-state read and bulk replace for persistence.
//!
//! # Invariants
//! - Store APIs return semantic errors (`DuplicateApplicant`, `ApplicantNotFound`)
//!   instead of silently ignoring conflicting writes.

pub mod applicant_book;
