//! JSON file storage for the applicant book.
//!
//! # Responsibility
//! - Load the full book from a JSON file and save it back.
//! - Write atomically so readers never observe a partial file.
//!
//! # Invariants
//! - Loaded data goes through field validation and duplicate rejection.
//! - A missing file is reported as `Ok(None)`, not an error.

use super::{StorageError, StorageResult};
use crate::model::applicant::Applicant;
use crate::repo::applicant_book::ApplicantBook;
use log::{error, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tempfile::NamedTempFile;

/// On-disk document shape: `{ "applicants": [...] }`.
#[derive(Debug, Default, Serialize, Deserialize)]
struct SerializableApplicantBook {
    #[serde(default)]
    applicants: Vec<Applicant>,
}

/// Whole-book JSON persistence at a fixed path.
#[derive(Debug, Clone)]
pub struct JsonApplicantStorage {
    path: PathBuf,
}

impl JsonApplicantStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the book from disk.
    ///
    /// # Errors
    /// - `Io` when the file exists but cannot be read.
    /// - `Json` when the document is malformed or a field fails validation.
    /// - `InvalidBook` when two stored records share a name.
    pub fn read(&self) -> StorageResult<Option<ApplicantBook>> {
        let started_at = Instant::now();
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!("event=storage_read module=storage status=missing");
                return Ok(None);
            }
            Err(err) => {
                error!(
                    "event=storage_read module=storage status=error error_code=io error={}",
                    err
                );
                return Err(err.into());
            }
        };

        let document: SerializableApplicantBook = serde_json::from_str(&raw).map_err(|err| {
            error!(
                "event=storage_read module=storage status=error error_code=invalid_json error={}",
                err
            );
            StorageError::from(err)
        })?;
        let book = ApplicantBook::try_from_applicants(document.applicants)?;

        info!(
            "event=storage_read module=storage status=ok applicants={} duration_ms={}",
            book.len(),
            started_at.elapsed().as_millis()
        );
        Ok(Some(book))
    }

    /// Writes the full book, replacing any previous file.
    ///
    /// # Side effects
    /// - Creates missing parent directories.
    pub fn save(&self, book: &ApplicantBook) -> StorageResult<()> {
        let started_at = Instant::now();
        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&parent)?;

        let document = SerializableApplicantBook {
            applicants: book.applicants().to_vec(),
        };
        let mut temp_file = NamedTempFile::new_in(&parent)?;
        serde_json::to_writer_pretty(&mut temp_file, &document)?;
        temp_file.write_all(b"\n")?;
        temp_file.flush()?;
        temp_file.persist(&self.path).map_err(|err| {
            error!(
                "event=storage_save module=storage status=error error_code=persist_failed error={}",
                err
            );
            StorageError::Io(err.error)
        })?;

        info!(
            "event=storage_save module=storage status=ok applicants={} duration_ms={}",
            book.len(),
            started_at.elapsed().as_millis()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::JsonApplicantStorage;
    use crate::storage::StorageError;
    use std::fs;

    #[test]
    fn missing_file_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonApplicantStorage::new(dir.path().join("absent.json"));
        assert!(storage.read().unwrap().is_none());
    }

    #[test]
    fn invalid_field_is_reported_as_json_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(
            &path,
            r#"{"applicants":[{"name":"Amy","phone":"x","email":"amy@gmail.com","grade":"4.00",
            "institution":"NTU","course":"CS","graduation_year_month":"06/2024"}]}"#,
        )
        .unwrap();

        let err = JsonApplicantStorage::new(path).read().unwrap_err();
        assert!(matches!(err, StorageError::Json(_)), "unexpected: {err}");
    }
}
