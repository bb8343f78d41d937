//! Adds one applicant.

use super::{Command, CommandError, CommandOutcome, CommandResult};
use crate::model::applicant::Applicant;
use crate::service::model::Model;
use log::debug;

pub const MESSAGE_SUCCESS: &str = "New applicant added";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddCommand {
    to_add: Applicant,
}

impl AddCommand {
    pub fn new(to_add: Applicant) -> Self {
        Self { to_add }
    }
}

impl Command for AddCommand {
    fn execute(&self, model: &mut Model) -> CommandOutcome {
        if model.has_applicant(&self.to_add) {
            debug!("event=command_execute module=command command=add status=error reason=duplicate");
            return Err(CommandError::DuplicateApplicant);
        }

        model.commit();
        model.add_applicant(self.to_add.clone())?;
        Ok(CommandResult::new(format!("{MESSAGE_SUCCESS}: {}", self.to_add)))
    }
}
