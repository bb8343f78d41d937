//! Shows every applicant.

use super::{Command, CommandOutcome, CommandResult};
use crate::service::model::Model;

pub const MESSAGE_SUCCESS: &str = "Listed all applicants";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListCommand;

impl Command for ListCommand {
    fn execute(&self, model: &mut Model) -> CommandOutcome {
        model.show_all_applicants();
        Ok(CommandResult::new(MESSAGE_SUCCESS))
    }
}
