mod common;

use common::typical_book;
use internwatch_core::{ApplicantBook, JsonApplicantStorage, StorageError};
use serde_json::Value;
use std::fs;

#[test]
fn saved_book_reads_back_equal() {
    let dir = tempfile::tempdir().unwrap();
    let storage = JsonApplicantStorage::new(dir.path().join("nested").join("applicants.json"));

    storage.save(&typical_book()).unwrap();
    let loaded = storage.read().unwrap().unwrap();
    assert_eq!(loaded, typical_book());
}

#[test]
fn empty_book_is_saved_as_empty_list() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("applicants.json");
    JsonApplicantStorage::new(&path)
        .save(&ApplicantBook::new())
        .unwrap();

    let document: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(document["applicants"], Value::Array(Vec::new()));
}

#[test]
fn document_uses_plain_string_fields() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("applicants.json");
    JsonApplicantStorage::new(&path)
        .save(&typical_book())
        .unwrap();

    let document: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let benson = &document["applicants"][1];
    assert_eq!(benson["name"], "Benson Meier");
    assert_eq!(benson["grade"], "4.50");
    assert_eq!(benson["graduation_year_month"], "06/2024");
    assert_eq!(benson["status"], "interviewed");
    assert_eq!(benson["skills"], serde_json::json!(["Java", "Python"]));
}

#[test]
fn duplicate_names_on_disk_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("applicants.json");
    let record = r#"{"name":"Amy Bee","phone":"85355255","email":"amy@gmail.com","grade":"4.50",
        "institution":"NTU","course":"Computer Science","graduation_year_month":"06/2024"}"#;
    fs::write(&path, format!(r#"{{"applicants":[{record},{record}]}}"#)).unwrap();

    let err = JsonApplicantStorage::new(path).read().unwrap_err();
    assert!(matches!(err, StorageError::InvalidBook(_)), "unexpected: {err}");
}

#[test]
fn missing_status_and_skills_take_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("applicants.json");
    fs::write(
        &path,
        r#"{"applicants":[{"name":"Amy Bee","phone":"85355255","email":"amy@gmail.com",
        "grade":"4.50","institution":"NTU","course":"Computer Science",
        "graduation_year_month":"06/2024"}]}"#,
    )
    .unwrap();

    let book = JsonApplicantStorage::new(path).read().unwrap().unwrap();
    let amy = book.get(0).unwrap();
    assert_eq!(amy.status().as_str(), "Applied");
    assert!(amy.skills().is_empty());
}

#[test]
fn malformed_json_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("applicants.json");
    fs::write(&path, "{ not json").unwrap();

    let err = JsonApplicantStorage::new(path).read().unwrap_err();
    assert!(matches!(err, StorageError::Json(_)));
}
