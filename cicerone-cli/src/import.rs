//! Import command implementation for the Cicerone CLI.

use camino::Utf8PathBuf;
use cicerone_data::{CatalogDocument, persist_catalog_to_sqlite, read_catalog_document};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::{
    ARG_CATALOG_DB, ARG_CATALOG_JSON, CliError, DEFAULT_CATALOG_DB, ENV_IMPORT_CATALOG_JSON,
    require_existing, write_json,
};

/// CLI arguments for the `import` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "import",
    long_about = "Read a JSON catalog document listing regions, tours, \
                 attractions and their links, and store it in a SQLite \
                 catalog database. Any catalog already in the database is \
                 replaced.",
    about = "Import a JSON catalog into a catalog database"
)]
#[ortho_config(prefix = "CICERONE")]
pub(crate) struct ImportArgs {
    /// Path to the JSON catalog document.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) catalog_json: Option<Utf8PathBuf>,
    /// Destination SQLite catalog database (defaults to `catalog.db`).
    #[arg(long = ARG_CATALOG_DB, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog_db: Option<Utf8PathBuf>,
}

impl ImportArgs {
    pub(crate) fn into_config(self) -> Result<ImportConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ImportConfig::try_from(merged)
    }
}

/// Resolved `import` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ImportConfig {
    /// Path to the JSON catalog document.
    pub(crate) catalog_json: Utf8PathBuf,
    /// Destination SQLite catalog database.
    pub(crate) catalog_db: Utf8PathBuf,
}

impl TryFrom<ImportArgs> for ImportConfig {
    type Error = CliError;

    fn try_from(args: ImportArgs) -> Result<Self, Self::Error> {
        let catalog_json = args.catalog_json.ok_or(CliError::MissingArgument {
            field: ARG_CATALOG_JSON,
            env: ENV_IMPORT_CATALOG_JSON,
        })?;
        let catalog_db = args
            .catalog_db
            .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_CATALOG_DB));
        Ok(Self {
            catalog_json,
            catalog_db,
        })
    }
}

/// Counts of the records written by an import.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct ImportSummary {
    pub(crate) catalog_db: Utf8PathBuf,
    pub(crate) regions: usize,
    pub(crate) tours: usize,
    pub(crate) attractions: usize,
    pub(crate) links: usize,
}

impl ImportSummary {
    fn new(catalog_db: Utf8PathBuf, document: &CatalogDocument) -> Self {
        Self {
            catalog_db,
            regions: document.regions.len(),
            tours: document.tours.len(),
            attractions: document.attractions.len(),
            links: document.links.len(),
        }
    }
}

pub(crate) fn run_import(args: ImportArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_import_with(args, &mut stdout)
}

pub(crate) fn run_import_with(args: ImportArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    require_existing(&config.catalog_json, ARG_CATALOG_JSON)?;

    let document = read_catalog_document(&config.catalog_json)?;
    persist_catalog_to_sqlite(&config.catalog_db, &document).map_err(|source| {
        CliError::PersistCatalog {
            path: config.catalog_db.clone(),
            source,
        }
    })?;
    write_json(writer, &ImportSummary::new(config.catalog_db, &document))
}
