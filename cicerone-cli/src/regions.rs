//! Regions command implementation for the Cicerone CLI.

use camino::Utf8PathBuf;
use cicerone_core::{CatalogSource, RegionRecord};
use cicerone_data::SqliteCatalogSource;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::{ARG_CATALOG_DB, CliError, DEFAULT_CATALOG_DB, require_existing, write_json};

/// CLI arguments for the `regions` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(name = "regions", about = "List the regions stored in a catalog database")]
#[ortho_config(prefix = "CICERONE")]
pub(crate) struct RegionsArgs {
    /// Path to the SQLite catalog database (defaults to `catalog.db`).
    #[arg(long = ARG_CATALOG_DB, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog_db: Option<Utf8PathBuf>,
}

impl RegionsArgs {
    fn into_catalog_db(self) -> Result<Utf8PathBuf, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        Ok(merged
            .catalog_db
            .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_CATALOG_DB)))
    }
}

pub(crate) fn run_regions(args: RegionsArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_regions_with(args, &mut stdout)
}

pub(crate) fn run_regions_with(args: RegionsArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let catalog_db = args.into_catalog_db()?;
    require_existing(&catalog_db, ARG_CATALOG_DB)?;
    let regions: Vec<RegionRecord> = SqliteCatalogSource::open(&catalog_db)?.fetch_regions()?;
    write_json(writer, &regions)
}
