//! Validated value objects that make up an applicant record.
//!
//! # Responsibility
//! - Validate raw user/persisted text once, at construction.
//! - Serialize every field as a plain JSON string.
//!
//! # Invariants
//! - A constructed field value always satisfies its validation rule.
//! - Deserialization goes through the same validation as `parse`.

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 ]*$").expect("valid name regex"));
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{3,}$").expect("valid phone regex"));
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9](?:[A-Za-z0-9+_.-]*[A-Za-z0-9])?@(?:[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?\.)*[A-Za-z0-9][A-Za-z0-9-]*[A-Za-z0-9]$",
    )
    .expect("valid email regex")
});
static GRADE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9](?:\.[0-9]{1,2})?$").expect("valid grade regex"));
static ACADEMIC_TEXT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 &().,'-]*$").expect("valid academic text regex")
});
static YEAR_MONTH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]{2})/([0-9]{4})$").expect("valid year-month regex"));
static SKILL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9+#.-]+$").expect("valid skill regex"));

const MAX_GRADE: f64 = 5.0;
const MIN_GRADUATION_YEAR: i32 = 1900;
const MAX_GRADUATION_YEAR: i32 = 2100;

/// Which applicant field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Name,
    Phone,
    Email,
    Grade,
    Institution,
    Course,
    GraduationYearMonth,
    ApplicationStatus,
    Skill,
}

impl FieldKind {
    fn constraint(self) -> &'static str {
        match self {
            Self::Name => "names should only contain alphanumeric characters and spaces, and it should not be blank",
            Self::Phone => "phone numbers should only contain digits, and it should be at least 3 digits long",
            Self::Email => "emails should be of the format local-part@domain",
            Self::Grade => "grades should be a number between 0 and 5 with at most two decimal places",
            Self::Institution => "institutions should not be blank and may only contain alphanumerics, spaces and &().,'-",
            Self::Course => "courses should not be blank and may only contain alphanumerics, spaces and &().,'-",
            Self::GraduationYearMonth => "graduation year-month should be of the format MM/YYYY",
            Self::ApplicationStatus => "status should be one of applied|shortlisted|interviewed|offered|accepted|rejected",
            Self::Skill => "skills should be a single word of alphanumerics and +#.-",
        }
    }
}

/// Validation failure for one field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldValidationError {
    pub kind: FieldKind,
    pub value: String,
}

impl FieldValidationError {
    fn new(kind: FieldKind, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

impl Display for FieldValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid value `{}`: {}", self.value, self.kind.constraint())
    }
}

impl Error for FieldValidationError {}

/// Declares a trimmed, regex-validated string field.
macro_rules! text_field {
    ($(#[$meta:meta])* $name:ident, $kind:expr, $is_valid:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Parses and validates raw text. Surrounding whitespace is ignored.
            pub fn parse(value: &str) -> Result<Self, FieldValidationError> {
                let trimmed = value.trim();
                let is_valid: fn(&str) -> bool = $is_valid;
                if is_valid(trimmed) {
                    Ok(Self(trimmed.to_string()))
                } else {
                    Err(FieldValidationError::new($kind, value))
                }
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = FieldValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::parse(&value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl FromStr for $name {
            type Err = FieldValidationError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                Self::parse(value)
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

text_field!(
    /// Applicant full name. Also the identity key for duplicate detection.
    Name,
    FieldKind::Name,
    |value| NAME_RE.is_match(value)
);

text_field!(Phone, FieldKind::Phone, |value| PHONE_RE.is_match(value));

text_field!(Email, FieldKind::Email, |value| EMAIL_RE.is_match(value));

text_field!(
    /// Academic grade, kept in the text form it was entered with (e.g. `4.50`).
    Grade,
    FieldKind::Grade,
    |value| GRADE_RE.is_match(value)
        && value
            .parse::<f64>()
            .map(|grade| (0.0..=MAX_GRADE).contains(&grade))
            .unwrap_or(false)
);

text_field!(
    Institution,
    FieldKind::Institution,
    |value| ACADEMIC_TEXT_RE.is_match(value)
);

text_field!(Course, FieldKind::Course, |value| ACADEMIC_TEXT_RE.is_match(value));

text_field!(
    /// Skill tag. Tags are compared by exact text.
    Skill,
    FieldKind::Skill,
    |value| SKILL_RE.is_match(value)
);

impl Grade {
    /// Numeric value of the grade.
    pub fn value(&self) -> f64 {
        // Validated on construction.
        self.0.parse().unwrap_or_default()
    }
}

/// Expected graduation month, written as `MM/YYYY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GraduationYearMonth(NaiveDate);

impl GraduationYearMonth {
    pub fn parse(value: &str) -> Result<Self, FieldValidationError> {
        let invalid = || FieldValidationError::new(FieldKind::GraduationYearMonth, value);
        let captures = YEAR_MONTH_RE.captures(value.trim()).ok_or_else(invalid)?;
        let month: u32 = captures[1].parse().map_err(|_| invalid())?;
        let year: i32 = captures[2].parse().map_err(|_| invalid())?;
        if !(MIN_GRADUATION_YEAR..=MAX_GRADUATION_YEAR).contains(&year) {
            return Err(invalid());
        }
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(Self)
            .ok_or_else(invalid)
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }
}

impl TryFrom<String> for GraduationYearMonth {
    type Error = FieldValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<GraduationYearMonth> for String {
    fn from(value: GraduationYearMonth) -> Self {
        value.to_string()
    }
}

impl FromStr for GraduationYearMonth {
    type Err = FieldValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl Display for GraduationYearMonth {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}/{:04}", self.month(), self.year())
    }
}

/// Where an applicant currently stands in the hiring pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    /// Initial status of every new applicant.
    #[default]
    Applied,
    Shortlisted,
    Interviewed,
    Offered,
    Accepted,
    Rejected,
}

impl ApplicationStatus {
    pub fn parse(value: &str) -> Result<Self, FieldValidationError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "applied" => Ok(Self::Applied),
            "shortlisted" => Ok(Self::Shortlisted),
            "interviewed" => Ok(Self::Interviewed),
            "offered" => Ok(Self::Offered),
            "accepted" => Ok(Self::Accepted),
            "rejected" => Ok(Self::Rejected),
            _ => Err(FieldValidationError::new(
                FieldKind::ApplicationStatus,
                value,
            )),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Applied => "Applied",
            Self::Shortlisted => "Shortlisted",
            Self::Interviewed => "Interviewed",
            Self::Offered => "Offered",
            Self::Accepted => "Accepted",
            Self::Rejected => "Rejected",
        }
    }
}

impl FromStr for ApplicationStatus {
    type Err = FieldValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl Display for ApplicationStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
