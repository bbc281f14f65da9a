#![deny(missing_docs)]

//! # Document Writer
//!
//! Persists an [`OpenApiDocument`] as `<dir>/swagger.json`, honoring the
//! overwrite policy.

use crate::document::OpenApiDocument;
use crate::error::{AppError, AppResult};
use std::fs;
use std::path::{Path, PathBuf};

/// Fixed name of the written document.
pub const SWAGGER_FILE_NAME: &str = "swagger.json";

/// What a write call did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The file was created or truncated and rewritten.
    Written(PathBuf),
    /// The file existed and overwriting was disabled; it was left untouched.
    Skipped(PathBuf),
}

impl WriteOutcome {
    /// The destination path.
    pub fn path(&self) -> &Path {
        match self {
            Self::Written(p) | Self::Skipped(p) => p,
        }
    }

    /// Whether the file was written.
    pub fn is_written(&self) -> bool {
        matches!(self, Self::Written(_))
    }
}

/// Destination path for a document written into `dir`.
pub fn output_path(dir: &Path) -> PathBuf {
    dir.join(SWAGGER_FILE_NAME)
}

/// Writes `document` into `dir`.
///
/// Missing directories (including parents) are created first. An existing
/// file with `overwrite == false` is skipped with a warning, not an error.
/// Directory creation, serialization and write failures are logged and
/// returned as [`AppError::FileGeneration`] with the cause attached.
pub fn write_document(
    document: &OpenApiDocument,
    dir: &Path,
    overwrite: bool,
) -> AppResult<WriteOutcome> {
    let file_path = output_path(dir);

    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| file_error(&file_path, e))?;
    }

    if file_path.exists() && !overwrite {
        tracing::warn!(
            path = %file_path.display(),
            "file already exists, skipping file generation as overwrite is disabled"
        );
        return Ok(WriteOutcome::Skipped(file_path));
    }

    let content = document
        .to_json_pretty()
        .map_err(|e| file_error(&file_path, e))?;
    fs::write(&file_path, content).map_err(|e| file_error(&file_path, e))?;

    tracing::info!(path = %file_path.display(), "swagger file generated");
    Ok(WriteOutcome::Written(file_path))
}

fn file_error<E>(path: &Path, cause: E) -> AppError
where
    E: std::error::Error + Send + Sync + 'static,
{
    tracing::error!(path = %path.display(), error = %cause, "error generating swagger file");
    AppError::file_generation(path, cause)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::assemble_document;
    use crate::options::ResolvedOptions;
    use crate::schema_generator::ComponentSchemaMap;
    use tempfile::tempdir;

    fn empty_doc() -> OpenApiDocument {
        assemble_document(ComponentSchemaMap::new(), &ResolvedOptions::default())
    }

    #[test]
    fn test_writes_into_existing_dir() {
        let dir = tempdir().unwrap();
        let outcome = write_document(&empty_doc(), dir.path(), true).unwrap();

        assert_eq!(outcome, WriteOutcome::Written(dir.path().join("swagger.json")));
        let content = fs::read_to_string(outcome.path()).unwrap();
        assert_eq!(content, empty_doc().to_json_pretty().unwrap());
    }

    #[test]
    fn test_creates_nested_dirs() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a").join("b").join("c");

        let outcome = write_document(&empty_doc(), &nested, true).unwrap();
        assert!(outcome.is_written());
        assert!(nested.join(SWAGGER_FILE_NAME).is_file());
    }

    #[test]
    fn test_skip_on_conflict_leaves_file_untouched() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(SWAGGER_FILE_NAME);
        fs::write(&path, "original").unwrap();

        let outcome = write_document(&empty_doc(), dir.path(), false).unwrap();
        assert_eq!(outcome, WriteOutcome::Skipped(path.clone()));
        assert_eq!(fs::read_to_string(&path).unwrap(), "original");
    }

    #[test]
    fn test_overwrite_truncates_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(SWAGGER_FILE_NAME);
        fs::write(&path, "x".repeat(10_000)).unwrap();

        write_document(&empty_doc(), dir.path(), true).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            empty_doc().to_json_pretty().unwrap()
        );
    }

    #[test]
    fn test_no_overwrite_still_writes_fresh_file() {
        let dir = tempdir().unwrap();
        let outcome = write_document(&empty_doc(), dir.path(), false).unwrap();
        assert!(outcome.is_written());
    }

    #[test]
    fn test_dir_blocked_by_file_is_file_generation_error() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "not a dir").unwrap();

        let err = write_document(&empty_doc(), &blocker.join("out"), true).unwrap_err();
        match err {
            AppError::FileGeneration { path, .. } => {
                assert!(path.ends_with("out/swagger.json"));
            }
            other => panic!("Expected file generation error, got {other:?}"),
        }
    }
}
