//! Core domain logic for InternWatch.
//! This crate is the single source of truth for applicant invariants.

pub mod command;
pub mod config;
pub mod history;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod storage;
pub mod view;

pub use command::{
    AddCommand, ClearCommand, Command, CommandError, CommandOutcome, CommandResult,
    DeleteCommand, DisplayIndex, EditApplicantDescriptor, EditCommand, FindCommand, ListCommand,
    RedoCommand, UndoCommand, ViewCommand,
};
pub use config::{AppConfig, ConfigError};
pub use history::undo::{HistoryError, Snapshot, UndoManager, DEFAULT_HISTORY_LIMIT};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::applicant::Applicant;
pub use model::builder::ApplicantBuilder;
pub use model::fields::{
    ApplicationStatus, Course, Email, FieldKind, FieldValidationError, Grade,
    GraduationYearMonth, Institution, Name, Phone, Skill,
};
pub use repo::applicant_book::{ApplicantBook, BookError, BookResult};
pub use service::model::Model;
pub use storage::{JsonApplicantStorage, StorageError, StorageResult};
pub use view::filtered::{FilteredView, ListenerId};
pub use view::predicate::ApplicantPredicate;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
