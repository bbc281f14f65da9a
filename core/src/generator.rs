#![deny(missing_docs)]

//! # Swagger Generator
//!
//! Ties a [`ModelSource`] to an output directory and runs the linear flow:
//! load models, map fields, assemble the document, check the destination,
//! write or skip.

use crate::dmmf::DmmfSource;
use crate::document::{assemble_document, OpenApiDocument};
use crate::error::AppResult;
use crate::options::{GeneratorOptions, ResolvedOptions};
use crate::schema_generator::generate_schemas_from_source;
use crate::source::ModelSource;
use crate::writer::{output_path, write_document, WriteOutcome};
use std::path::{Path, PathBuf};

/// Output directory used when none is configured.
pub const DEFAULT_OUTPUT_DIR: &str = "./swagger";

/// Generates `swagger.json` from the models of a [`ModelSource`].
#[derive(Debug, Clone)]
pub struct SwaggerGenerator<S> {
    source: S,
    output_dir: PathBuf,
}

impl<S: ModelSource> SwaggerGenerator<S> {
    /// Creates a generator writing into [`DEFAULT_OUTPUT_DIR`].
    pub fn new(source: S) -> Self {
        Self {
            source,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }

    /// Sets the output directory.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// The configured output directory.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Full path of the file `generate` writes.
    pub fn output_path(&self) -> PathBuf {
        output_path(&self.output_dir)
    }

    /// Maps the models and assembles the document without touching the filesystem.
    pub fn build_document(&self, options: &ResolvedOptions) -> AppResult<OpenApiDocument> {
        let schemas = generate_schemas_from_source(&self.source)?;
        Ok(assemble_document(schemas, options))
    }

    /// Generates the document and writes it to `<output_dir>/swagger.json`.
    ///
    /// Runs synchronously with no locking. Two runs against the same directory
    /// race: the last writer wins, and the overwrite check sees whatever file
    /// exists at the moment it runs.
    pub fn generate(&self, options: GeneratorOptions) -> AppResult<WriteOutcome> {
        let options = options.resolve();
        let document = self.build_document(&options)?;
        write_document(&document, &self.output_dir, options.overwrite)
    }
}

impl SwaggerGenerator<DmmfSource> {
    /// Creates a generator over a DMMF dump on disk.
    pub fn from_dmmf_path(path: impl AsRef<Path>) -> AppResult<Self> {
        Ok(Self::new(DmmfSource::from_path(path)?))
    }
}
