#![deny(missing_docs)]

//! # Swagger Gen CLI
//!
//! Command Line Interface turning an ORM data model dump into `swagger.json`.
//!
//! Supported Commands:
//! - `generate`: DMMF -> component schemas -> `<output>/swagger.json`.
//! - `print`: same document, written to stdout.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::CliResult;

mod document_args;
mod error;
mod generate;
mod print;

#[derive(Parser, Debug)]
#[clap(author, version, about = "ORM data model to OpenAPI generator")]
struct Cli {
    /// Log filter (e.g. `info`, `debug`, `swagger_gen_core=trace`).
    #[clap(long, global = true, env = "RUST_LOG", default_value = "info")]
    log_level: String,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate `swagger.json` from a DMMF dump.
    Generate(generate::GenerateArgs),
    /// Print the generated document to stdout.
    Print(print::PrintArgs),
}

fn init_logging(filter: &str) {
    // Logs go to stderr so `print` output stays clean
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> CliResult<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_logging(&cli.log_level);
    tracing::debug!(command = ?cli.command, "parsed arguments");

    match &cli.command {
        Commands::Generate(args) => {
            generate::execute(args)?;
        }
        Commands::Print(args) => {
            print::execute(args, &mut std::io::stdout().lock())?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli_structure() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate_flags() {
        let cli = Cli::try_parse_from([
            "swagger-gen",
            "generate",
            "--schema",
            "dmmf.json",
            "--output",
            "docs",
            "--title",
            "Test API",
            "--server",
            "http://localhost:3000=Development server",
            "--no-overwrite",
        ])
        .unwrap();

        match cli.command {
            Commands::Generate(args) => {
                assert_eq!(args.output, std::path::PathBuf::from("docs"));
                assert!(args.no_overwrite);
                assert_eq!(args.document.title.as_deref(), Some("Test API"));
                assert_eq!(args.document.servers.len(), 1);
            }
            Commands::Print(_) => panic!("expected generate"),
        }
    }
}
