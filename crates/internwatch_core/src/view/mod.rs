//! Filtered, observable projection of the applicant book.
//!
//! # Responsibility
//! - Derive the visible applicant list from the book and an active filter.
//! - Offer an explicit listener interface for presentation layers.
//!
//! # Invariants
//! - The view is derived state; it never owns canonical applicant data.

pub mod filtered;
pub mod predicate;
