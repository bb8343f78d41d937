#![allow(dead_code)]

use internwatch_core::{Applicant, ApplicantBook, ApplicantBuilder, Model};

pub fn applicant(name: &str) -> Applicant {
    ApplicantBuilder::new().with_name(name).build().unwrap()
}

/// Seven applicants with distinct names, skills and statuses.
pub fn typical_applicants() -> Vec<Applicant> {
    vec![
        ApplicantBuilder::new()
            .with_name("Alice Pauline")
            .with_phone("94351253")
            .with_email("alice@example.com")
            .with_skills(&["Java"])
            .build()
            .unwrap(),
        ApplicantBuilder::new()
            .with_name("Benson Meier")
            .with_phone("98765432")
            .with_email("johnd@example.com")
            .with_institution("NUS")
            .with_status("interviewed")
            .with_skills(&["Python", "Java"])
            .build()
            .unwrap(),
        ApplicantBuilder::new()
            .with_name("Carl Kurz")
            .with_phone("95352563")
            .with_email("heinz@example.com")
            .with_grade("3.80")
            .build()
            .unwrap(),
        ApplicantBuilder::new()
            .with_name("Daniel Meier")
            .with_phone("87652533")
            .with_email("cornelia@example.com")
            .with_status("offered")
            .with_skills(&["Rust"])
            .build()
            .unwrap(),
        ApplicantBuilder::new()
            .with_name("Elle Meyer")
            .with_phone("9482224")
            .with_email("werner@example.com")
            .with_course("Information Systems")
            .build()
            .unwrap(),
        ApplicantBuilder::new()
            .with_name("Fiona Kunz")
            .with_phone("9482427")
            .with_email("lydia@example.com")
            .with_graduation_year_month("12/2025")
            .with_skills(&["Rust", "Go"])
            .build()
            .unwrap(),
        ApplicantBuilder::new()
            .with_name("George Best")
            .with_phone("9482442")
            .with_email("anna@example.com")
            .with_status("rejected")
            .build()
            .unwrap(),
    ]
}

pub fn typical_book() -> ApplicantBook {
    ApplicantBook::try_from_applicants(typical_applicants()).unwrap()
}

pub fn typical_model() -> Model {
    Model::new(typical_book(), 8)
}
