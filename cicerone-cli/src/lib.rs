//! Command-line interface for the Cicerone tour packaging engine.
#![forbid(unsafe_code)]

use camino::Utf8Path;
use clap::{Parser, Subcommand};

mod error;
mod import;
mod package;
mod regions;

pub use error::CliError;

use import::{ImportArgs, run_import};
use package::{PackageArgs, run_package};
use regions::{RegionsArgs, run_regions};

const ARG_CATALOG_DB: &str = "catalog-db";
const ARG_CATALOG_JSON: &str = "catalog-json";
const ARG_REGION: &str = "region";
const ARG_MAX_DAYS: &str = "max-days";
const ARG_MAX_BUDGET: &str = "max-budget";
const ENV_IMPORT_CATALOG_JSON: &str = "CICERONE_CMDS_IMPORT_CATALOG_JSON";
const ENV_PACKAGE_REGION: &str = "CICERONE_CMDS_PACKAGE_REGION";

/// Database location used when `--catalog-db` is not configured.
const DEFAULT_CATALOG_DB: &str = "catalog.db";

/// Run the Cicerone CLI with the current process arguments and environment.
///
/// Command output is written to standard output as JSON.
///
/// # Errors
/// Returns [`CliError`] when argument parsing, configuration merging, input
/// validation, catalog access or writing the output fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Regions(args) => run_regions(args),
        Command::Package(args) => run_package(args),
        Command::Import(args) => run_import(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "cicerone",
    about = "Assemble value-maximising tour packages from a regional catalog",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the regions stored in a catalog database.
    Regions(RegionsArgs),
    /// Compute the best package of tours for a region.
    Package(PackageArgs),
    /// Load a JSON catalog document into a catalog database.
    Import(ImportArgs),
}

/// Check that `path` names an existing regular file.
fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match cicerone_fs::is_regular_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Write `value` to `writer` as pretty-printed JSON followed by a newline.
fn write_json<T: serde::Serialize + ?Sized>(
    writer: &mut dyn std::io::Write,
    value: &T,
) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerializeOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
mod tests;
