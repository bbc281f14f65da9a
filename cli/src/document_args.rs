#![deny(missing_docs)]

//! # Document Arguments
//!
//! Flags shared by every command that builds a document. Flags override the
//! options file, which overrides the library defaults.

use crate::error::CliResult;
use std::path::PathBuf;
use swagger_gen_core::{GeneratorOptions, Server};

/// Arguments describing the document metadata.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct DocumentArgs {
    /// JSON options file (`title`, `version`, `description`, `servers`, `overwrite`).
    #[clap(long, env = "SWAGGER_GEN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Title of the API documentation.
    #[clap(long)]
    pub title: Option<String>,

    /// Version of the API.
    #[clap(long)]
    pub api_version: Option<String>,

    /// Description of the API.
    #[clap(long)]
    pub description: Option<String>,

    /// Server entry, repeatable.
    /// Format: `"URL"` or `"URL=DESCRIPTION"`.
    /// Example: `"--server http://localhost:3000=Development server"`
    #[clap(long = "server", value_parser = parse_server)]
    pub servers: Vec<Server>,
}

impl DocumentArgs {
    /// Builds the partial options: options file first, flags layered on top.
    pub fn to_options(&self) -> CliResult<GeneratorOptions> {
        let base = match &self.config {
            Some(path) => GeneratorOptions::from_path(path)?,
            None => GeneratorOptions::default(),
        };

        let flags = GeneratorOptions {
            title: self.title.clone(),
            version: self.api_version.clone(),
            description: self.description.clone(),
            servers: (!self.servers.is_empty()).then(|| self.servers.clone()),
            overwrite: None,
        };

        Ok(base.merge(flags))
    }
}

/// Helper to parse "url=description" arguments.
fn parse_server(s: &str) -> Result<Server, String> {
    let (url, description) = match s.split_once('=') {
        Some((url, desc)) => (url.trim(), Some(desc.trim())),
        None => (s.trim(), None),
    };

    if url.is_empty() {
        return Err(format!("invalid server `{}`: URL is empty", s));
    }

    let server = Server::new(url);
    Ok(match description {
        Some(desc) if !desc.is_empty() => server.with_description(desc),
        _ => server,
    })
}
