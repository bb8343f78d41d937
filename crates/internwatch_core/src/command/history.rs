//! Undo and redo commands.

use super::{Command, CommandOutcome, CommandResult};
use crate::service::model::Model;

pub const MESSAGE_UNDO_SUCCESS: &str = "Undo success!";
pub const MESSAGE_REDO_SUCCESS: &str = "Redo success!";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UndoCommand;

impl Command for UndoCommand {
    fn execute(&self, model: &mut Model) -> CommandOutcome {
        model.undo()?;
        Ok(CommandResult::new(MESSAGE_UNDO_SUCCESS))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RedoCommand;

impl Command for RedoCommand {
    fn execute(&self, model: &mut Model) -> CommandOutcome {
        model.redo()?;
        Ok(CommandResult::new(MESSAGE_REDO_SUCCESS))
    }
}
