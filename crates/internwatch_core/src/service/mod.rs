//! Core use-case services.
//!
//! # Responsibility
//! - Compose book, view and history into the model consumed by commands.
//! - Keep presentation and storage layers decoupled from model internals.

pub mod model;
