//! Text-driven builder for applicants, used by tests and sample data.

use crate::model::applicant::Applicant;
use crate::model::fields::{
    ApplicationStatus, Course, Email, FieldValidationError, Grade, GraduationYearMonth,
    Institution, Name, Phone, Skill,
};

pub const DEFAULT_NAME: &str = "Amy Bee";
pub const DEFAULT_PHONE: &str = "85355255";
pub const DEFAULT_EMAIL: &str = "amy@gmail.com";
pub const DEFAULT_GRADE: &str = "4.50";
pub const DEFAULT_INSTITUTION: &str = "NTU";
pub const DEFAULT_COURSE: &str = "Computer Science";
pub const DEFAULT_GRADUATION_YEAR_MONTH: &str = "06/2024";

/// Collects raw field text and validates everything in [`ApplicantBuilder::build`].
#[derive(Debug, Clone)]
pub struct ApplicantBuilder {
    name: String,
    phone: String,
    email: String,
    grade: String,
    institution: String,
    course: String,
    graduation_year_month: String,
    status: String,
    skills: Vec<String>,
}

impl Default for ApplicantBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ApplicantBuilder {
    /// Starts from the default applicant (`Amy Bee`).
    pub fn new() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            phone: DEFAULT_PHONE.to_string(),
            email: DEFAULT_EMAIL.to_string(),
            grade: DEFAULT_GRADE.to_string(),
            institution: DEFAULT_INSTITUTION.to_string(),
            course: DEFAULT_COURSE.to_string(),
            graduation_year_month: DEFAULT_GRADUATION_YEAR_MONTH.to_string(),
            status: ApplicationStatus::default().as_str().to_string(),
            skills: Vec::new(),
        }
    }

    /// Starts from the values of an existing applicant.
    pub fn from_applicant(applicant: &Applicant) -> Self {
        Self {
            name: applicant.name().to_string(),
            phone: applicant.phone().to_string(),
            email: applicant.email().to_string(),
            grade: applicant.grade().to_string(),
            institution: applicant.institution().to_string(),
            course: applicant.course().to_string(),
            graduation_year_month: applicant.graduation_year_month().to_string(),
            status: applicant.status().as_str().to_string(),
            skills: applicant.skills().iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn with_phone(mut self, phone: &str) -> Self {
        self.phone = phone.to_string();
        self
    }

    pub fn with_email(mut self, email: &str) -> Self {
        self.email = email.to_string();
        self
    }

    pub fn with_grade(mut self, grade: &str) -> Self {
        self.grade = grade.to_string();
        self
    }

    pub fn with_institution(mut self, institution: &str) -> Self {
        self.institution = institution.to_string();
        self
    }

    pub fn with_course(mut self, course: &str) -> Self {
        self.course = course.to_string();
        self
    }

    pub fn with_graduation_year_month(mut self, graduation_year_month: &str) -> Self {
        self.graduation_year_month = graduation_year_month.to_string();
        self
    }

    pub fn with_status(mut self, status: &str) -> Self {
        self.status = status.to_string();
        self
    }

    /// Replaces the whole skill set.
    pub fn with_skills(mut self, skills: &[&str]) -> Self {
        self.skills = skills.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Validates every field and builds the applicant.
    pub fn build(&self) -> Result<Applicant, FieldValidationError> {
        let skills = self
            .skills
            .iter()
            .map(|skill| Skill::parse(skill))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Applicant::with_status(
            Name::parse(&self.name)?,
            Phone::parse(&self.phone)?,
            Email::parse(&self.email)?,
            Grade::parse(&self.grade)?,
            Institution::parse(&self.institution)?,
            Course::parse(&self.course)?,
            GraduationYearMonth::parse(&self.graduation_year_month)?,
            ApplicationStatus::parse(&self.status)?,
            skills,
        ))
    }
}
