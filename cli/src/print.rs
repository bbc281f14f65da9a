#![deny(missing_docs)]

//! # Print Command
//!
//! Builds the document from a DMMF dump and writes it to stdout instead of disk.

use crate::document_args::DocumentArgs;
use crate::error::{CliError, CliResult};
use std::io::Write;
use std::path::PathBuf;
use swagger_gen_core::SwaggerGenerator;

/// Arguments for the print command.
#[derive(clap::Args, Debug, Clone)]
pub struct PrintArgs {
    /// Path to the DMMF JSON dump describing the data model.
    #[clap(long, env = "SWAGGER_GEN_SCHEMA")]
    pub schema: PathBuf,

    #[clap(flatten)]
    pub document: DocumentArgs,
}

/// Executes the print command, writing the document to `out`.
pub fn execute(args: &PrintArgs, out: &mut impl Write) -> CliResult<()> {
    let options = args.document.to_options()?.resolve();
    let document = SwaggerGenerator::from_dmmf_path(&args.schema)?.build_document(&options)?;

    let json = document
        .to_json_pretty()
        .map_err(|e| CliError::General(format!("JSON serialization failed: {}", e)))?;
    writeln!(out, "{}", json)?;
    Ok(())
}
