//! Search predicates used by find/list commands.

use crate::model::applicant::Applicant;
use crate::model::fields::{ApplicationStatus, Grade, Skill};

/// Declarative applicant filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ApplicantPredicate {
    /// Matches every applicant.
    #[default]
    All,
    /// Any keyword equals a whole word of the name, ignoring case.
    NameContainsKeywords(Vec<String>),
    /// Applicant has at least one of the skills, ignoring case.
    HasAnySkill(Vec<Skill>),
    StatusIs(ApplicationStatus),
    /// Grade is at least the given value.
    GradeAtLeast(Grade),
    /// Every inner predicate matches. An empty list matches everything.
    AllOf(Vec<ApplicantPredicate>),
}

impl ApplicantPredicate {
    pub fn matches(&self, applicant: &Applicant) -> bool {
        match self {
            Self::All => true,
            Self::NameContainsKeywords(keywords) => keywords.iter().any(|keyword| {
                applicant
                    .name()
                    .as_str()
                    .split_whitespace()
                    .any(|word| word.eq_ignore_ascii_case(keyword.trim()))
            }),
            Self::HasAnySkill(skills) => skills.iter().any(|wanted| {
                applicant
                    .skills()
                    .iter()
                    .any(|skill| skill.as_str().eq_ignore_ascii_case(wanted.as_str()))
            }),
            Self::StatusIs(status) => applicant.status() == *status,
            Self::GradeAtLeast(minimum) => applicant.grade().value() >= minimum.value(),
            Self::AllOf(predicates) => predicates.iter().all(|inner| inner.matches(applicant)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ApplicantPredicate;
    use crate::model::builder::ApplicantBuilder;
    use crate::model::fields::{ApplicationStatus, Grade, Skill};

    #[test]
    fn name_keywords_match_whole_words_only() {
        let applicant = ApplicantBuilder::new()
            .with_name("Alice Pauline")
            .build()
            .unwrap();
        let hit = ApplicantPredicate::NameContainsKeywords(vec!["PAULINE".to_string()]);
        let partial = ApplicantPredicate::NameContainsKeywords(vec!["Paul".to_string()]);
        assert!(hit.matches(&applicant));
        assert!(!partial.matches(&applicant));
        assert!(!ApplicantPredicate::NameContainsKeywords(Vec::new()).matches(&applicant));
    }

    #[test]
    fn combined_predicate_requires_all_parts() {
        let applicant = ApplicantBuilder::new()
            .with_status("interviewed")
            .with_skills(&["rust"])
            .build()
            .unwrap();
        let predicate = ApplicantPredicate::AllOf(vec![
            ApplicantPredicate::HasAnySkill(vec![Skill::parse("Rust").unwrap()]),
            ApplicantPredicate::StatusIs(ApplicationStatus::Interviewed),
        ]);
        assert!(predicate.matches(&applicant));

        let wrong_status = ApplicantPredicate::AllOf(vec![
            ApplicantPredicate::HasAnySkill(vec![Skill::parse("Rust").unwrap()]),
            ApplicantPredicate::StatusIs(ApplicationStatus::Rejected),
        ]);
        assert!(!wrong_status.matches(&applicant));
    }

    #[test]
    fn grade_threshold_compares_numerically() {
        let applicant = ApplicantBuilder::new().with_grade("4.5").build().unwrap();
        let at_threshold = ApplicantPredicate::GradeAtLeast(Grade::parse("4.50").unwrap());
        let above = ApplicantPredicate::GradeAtLeast(Grade::parse("4.51").unwrap());
        assert!(at_threshold.matches(&applicant));
        assert!(!above.matches(&applicant));
    }
}
