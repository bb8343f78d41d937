//! Edits the applicant at a displayed index.
//!
//! # Invariants
//! - Unset descriptor fields keep the applicant's existing values.
//! - A rename may not collide with a different stored applicant.

use super::{resolve_visible, Command, CommandError, CommandOutcome, CommandResult, DisplayIndex};
use crate::model::applicant::Applicant;
use crate::model::fields::{
    ApplicationStatus, Course, Email, Grade, GraduationYearMonth, Institution, Name, Phone, Skill,
};
use crate::service::model::Model;
use log::debug;
use std::collections::BTreeSet;

pub const MESSAGE_EDIT_APPLICANT_SUCCESS: &str = "Edited Applicant";

/// Sparse set of field overrides. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditApplicantDescriptor {
    pub name: Option<Name>,
    pub phone: Option<Phone>,
    pub email: Option<Email>,
    pub grade: Option<Grade>,
    pub institution: Option<Institution>,
    pub course: Option<Course>,
    pub graduation_year_month: Option<GraduationYearMonth>,
    pub status: Option<ApplicationStatus>,
    /// Replaces the whole skill set when present.
    pub skills: Option<BTreeSet<Skill>>,
}

impl EditApplicantDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.phone.is_some()
            || self.email.is_some()
            || self.grade.is_some()
            || self.institution.is_some()
            || self.course.is_some()
            || self.graduation_year_month.is_some()
            || self.status.is_some()
            || self.skills.is_some()
    }

    /// Builds a new applicant from `original` with every override applied.
    pub fn apply_to(&self, original: &Applicant) -> Applicant {
        Applicant::with_status(
            self.name.clone().unwrap_or_else(|| original.name().clone()),
            self.phone.clone().unwrap_or_else(|| original.phone().clone()),
            self.email.clone().unwrap_or_else(|| original.email().clone()),
            self.grade.clone().unwrap_or_else(|| original.grade().clone()),
            self.institution
                .clone()
                .unwrap_or_else(|| original.institution().clone()),
            self.course.clone().unwrap_or_else(|| original.course().clone()),
            self.graduation_year_month
                .unwrap_or_else(|| original.graduation_year_month()),
            self.status.unwrap_or_else(|| original.status()),
            self.skills
                .clone()
                .unwrap_or_else(|| original.skills().clone()),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditCommand {
    index: DisplayIndex,
    descriptor: EditApplicantDescriptor,
}

impl EditCommand {
    pub fn new(index: DisplayIndex, descriptor: EditApplicantDescriptor) -> Self {
        Self { index, descriptor }
    }
}

impl Command for EditCommand {
    fn execute(&self, model: &mut Model) -> CommandOutcome {
        let target = resolve_visible(model, self.index)?;
        if !self.descriptor.is_any_field_edited() {
            debug!("event=command_execute module=command command=edit status=error reason=no_fields_edited");
            return Err(CommandError::NoFieldsEdited);
        }

        let edited = self.descriptor.apply_to(&target);
        if !target.is_same_applicant(&edited) && model.has_applicant(&edited) {
            debug!("event=command_execute module=command command=edit status=error reason=duplicate");
            return Err(CommandError::DuplicateApplicant);
        }

        model.commit();
        model.set_applicant(&target, edited.clone())?;
        Ok(CommandResult::new(format!(
            "{MESSAGE_EDIT_APPLICANT_SUCCESS}: {edited}"
        )))
    }
}
