#![deny(missing_docs)]

//! # Generate Command
//!
//! Reads a DMMF dump and writes `<output>/swagger.json`.

use crate::document_args::DocumentArgs;
use crate::error::CliResult;
use std::path::PathBuf;
use swagger_gen_core::{SwaggerGenerator, WriteOutcome, DEFAULT_OUTPUT_DIR};

/// Arguments for the generate command.
#[derive(clap::Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Path to the DMMF JSON dump describing the data model.
    #[clap(long, env = "SWAGGER_GEN_SCHEMA")]
    pub schema: PathBuf,

    /// Directory receiving `swagger.json`.
    #[clap(long, env = "SWAGGER_GEN_OUTPUT_DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// Keep an existing `swagger.json` instead of replacing it.
    #[clap(long)]
    pub no_overwrite: bool,

    #[clap(flatten)]
    pub document: DocumentArgs,
}

/// Executes the generation.
///
/// # Arguments
///
/// * `args` - Command arguments.
pub fn execute(args: &GenerateArgs) -> CliResult<WriteOutcome> {
    let mut options = args.document.to_options()?;
    if args.no_overwrite {
        options.overwrite = Some(false);
    }

    let generator = SwaggerGenerator::from_dmmf_path(&args.schema)?.with_output_dir(&args.output);
    Ok(generator.generate(options)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use std::fs;
    use swagger_gen_core::AppError;
    use tempfile::tempdir;

    const DMMF: &str = r#"{ "datamodel": { "models": [ { "name": "User", "fields": [
        { "name": "id", "kind": "scalar", "type": "Int", "isRequired": true }
    ] } ], "enums": [] } }"#;

    fn args_in(dir: &std::path::Path) -> GenerateArgs {
        let schema = dir.join("dmmf.json");
        fs::write(&schema, DMMF).unwrap();
        GenerateArgs {
            schema,
            output: dir.join("out"),
            no_overwrite: false,
            document: DocumentArgs::default(),
        }
    }

    #[test]
    fn test_generate_writes_file() {
        let dir = tempdir().unwrap();
        let args = args_in(dir.path());

        let outcome = execute(&args).unwrap();
        assert!(outcome.is_written());

        let content = fs::read_to_string(dir.path().join("out/swagger.json")).unwrap();
        assert!(content.contains("\"title\": \"API Documentation\""));
        assert!(content.contains("\"User\""));
    }

    #[test]
    fn test_no_overwrite_flag_skips_existing() {
        let dir = tempdir().unwrap();
        let mut args = args_in(dir.path());
        fs::create_dir_all(&args.output).unwrap();
        fs::write(args.output.join("swagger.json"), "keep").unwrap();
        args.no_overwrite = true;

        let outcome = execute(&args).unwrap();
        assert!(!outcome.is_written());
        assert_eq!(fs::read_to_string(outcome.path()).unwrap(), "keep");
    }

    #[test]
    fn test_missing_schema_is_configuration_error() {
        let dir = tempdir().unwrap();
        let mut args = args_in(dir.path());
        args.schema = dir.path().join("missing.json");

        match execute(&args).unwrap_err() {
            CliError::Core(AppError::Configuration(msg)) => assert!(msg.contains("missing.json")),
            other => panic!("Wrong error type: {other:?}"),
        }
    }
}
