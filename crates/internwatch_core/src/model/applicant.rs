//! Applicant aggregate.
//!
//! # Responsibility
//! - Compose validated field values into one immutable applicant record.
//! - Define the weak ("same applicant") and strong (full) equality notions.
//!
//! # Invariants
//! - An applicant is never mutated after construction; edits build a new value.
//! - Skills have set semantics: duplicates collapse, iteration order is sorted.
//! - Two applicants are the same applicant iff their names are equal.

use crate::model::fields::{
    ApplicationStatus, Course, Email, Grade, GraduationYearMonth, Institution, Name, Phone, Skill,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};

/// One internship applicant.
///
/// `PartialEq` is the strong notion of equality: every attribute, including
/// the skill set, must match. Use [`Applicant::is_same_applicant`] for
/// identity checks.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Applicant {
    name: Name,
    phone: Phone,
    email: Email,
    grade: Grade,
    institution: Institution,
    course: Course,
    graduation_year_month: GraduationYearMonth,
    #[serde(default)]
    status: ApplicationStatus,
    #[serde(default)]
    skills: BTreeSet<Skill>,
}

impl Applicant {
    /// Creates an applicant with the default `Applied` status.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: Name,
        phone: Phone,
        email: Email,
        grade: Grade,
        institution: Institution,
        course: Course,
        graduation_year_month: GraduationYearMonth,
        skills: impl IntoIterator<Item = Skill>,
    ) -> Self {
        Self::with_status(
            name,
            phone,
            email,
            grade,
            institution,
            course,
            graduation_year_month,
            ApplicationStatus::default(),
            skills,
        )
    }

    /// Creates an applicant with an explicit status.
    #[allow(clippy::too_many_arguments)]
    pub fn with_status(
        name: Name,
        phone: Phone,
        email: Email,
        grade: Grade,
        institution: Institution,
        course: Course,
        graduation_year_month: GraduationYearMonth,
        status: ApplicationStatus,
        skills: impl IntoIterator<Item = Skill>,
    ) -> Self {
        Self {
            name,
            phone,
            email,
            grade,
            institution,
            course,
            graduation_year_month,
            status,
            skills: skills.into_iter().collect(),
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn grade(&self) -> &Grade {
        &self.grade
    }

    pub fn institution(&self) -> &Institution {
        &self.institution
    }

    pub fn course(&self) -> &Course {
        &self.course
    }

    pub fn graduation_year_month(&self) -> GraduationYearMonth {
        self.graduation_year_month
    }

    pub fn status(&self) -> ApplicationStatus {
        self.status
    }

    /// Skill tags in sorted order.
    pub fn skills(&self) -> &BTreeSet<Skill> {
        &self.skills
    }

    /// Institution, course, graduation year-month and grade, in display order.
    pub fn academics(&self) -> [String; 4] {
        [
            self.institution.to_string(),
            self.course.to_string(),
            self.graduation_year_month.to_string(),
            self.grade.to_string(),
        ]
    }

    /// Weak equality: true when both records have the same name.
    pub fn is_same_applicant(&self, other: &Applicant) -> bool {
        self.name == other.name
    }
}

impl Display for Applicant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}; Status: {}; Phone: {}; Email: {}; Grade: {}; Institution: {}; Course: {}; Graduation Year Month: {}",
            self.name,
            self.status,
            self.phone,
            self.email,
            self.grade,
            self.institution,
            self.course,
            self.graduation_year_month
        )?;
        if !self.skills.is_empty() {
            f.write_str("; Skills: ")?;
            for skill in &self.skills {
                write!(f, "[{skill}]")?;
            }
        }
        Ok(())
    }
}
