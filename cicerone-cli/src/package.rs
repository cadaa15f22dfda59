//! Package command implementation for the Cicerone CLI.

use camino::Utf8PathBuf;
use cicerone_core::{CatalogGraph, Optimizer, Package, PackageRequest};
use cicerone_data::SqliteCatalogSource;
use clap::Parser;
use log::debug;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::{
    ARG_CATALOG_DB, ARG_MAX_BUDGET, ARG_MAX_DAYS, ARG_REGION, CliError,
    DEFAULT_CATALOG_DB, ENV_PACKAGE_REGION, require_existing, write_json,
};

/// CLI arguments for the `package` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "package",
    long_about = "Select the set of tours in a region with the highest total \
                 cultural value. Tours in a package never share an \
                 attraction, and the optional day and budget limits bound \
                 the summed durations and costs.",
    about = "Compute the best tour package for a region"
)]
#[ortho_config(prefix = "CICERONE")]
pub(crate) struct PackageArgs {
    /// Region identifier whose tours are candidates.
    #[arg(value_name = "region")]
    #[serde(default)]
    pub(crate) region: Option<String>,
    /// Upper bound on the summed tour durations, in days.
    #[arg(long = ARG_MAX_DAYS, value_name = "days")]
    #[serde(default)]
    pub(crate) max_days: Option<u32>,
    /// Upper bound on the summed tour costs.
    #[arg(long = ARG_MAX_BUDGET, value_name = "amount")]
    #[serde(default)]
    pub(crate) max_budget: Option<f64>,
    /// Path to the SQLite catalog database (defaults to `catalog.db`).
    #[arg(long = ARG_CATALOG_DB, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog_db: Option<Utf8PathBuf>,
}

impl PackageArgs {
    pub(crate) fn into_config(self) -> Result<PackageConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        PackageConfig::try_from(merged)
    }
}

/// Resolved `package` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PackageConfig {
    /// Region, day and budget limits for the search.
    pub(crate) request: PackageRequest,
    /// Path to the SQLite catalog database.
    pub(crate) catalog_db: Utf8PathBuf,
}

impl PackageConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.catalog_db, ARG_CATALOG_DB)
    }
}

impl TryFrom<PackageArgs> for PackageConfig {
    type Error = CliError;

    fn try_from(args: PackageArgs) -> Result<Self, Self::Error> {
        let region = args.region.ok_or(CliError::MissingArgument {
            field: ARG_REGION,
            env: ENV_PACKAGE_REGION,
        })?;
        let request = PackageRequest {
            region_id: region,
            max_days: args.max_days,
            max_budget: args.max_budget,
        };
        let catalog_db = args
            .catalog_db
            .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_CATALOG_DB));

        Ok(Self {
            request,
            catalog_db,
        })
    }
}

/// Builds an optimizer instance for the current package invocation.
pub(crate) trait PackageOptimizerBuilder {
    fn build(&self, config: &PackageConfig) -> Result<Box<dyn Optimizer>, CliError>;
}

pub(crate) struct DefaultPackageOptimizerBuilder;

impl PackageOptimizerBuilder for DefaultPackageOptimizerBuilder {
    #[cfg(feature = "solver-bnb")]
    fn build(&self, _config: &PackageConfig) -> Result<Box<dyn Optimizer>, CliError> {
        use cicerone_solver_bnb::PackageOptimizer;

        Ok(Box::new(PackageOptimizer::new()))
    }

    #[cfg(not(feature = "solver-bnb"))]
    fn build(&self, _config: &PackageConfig) -> Result<Box<dyn Optimizer>, CliError> {
        Err(CliError::MissingFeature {
            feature: "solver-bnb",
            action: "computing a package",
        })
    }
}

pub(crate) fn run_package(args: PackageArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    let builder = DefaultPackageOptimizerBuilder;
    run_package_with(args, &builder, &mut stdout)
}

pub(crate) fn run_package_with(
    args: PackageArgs,
    builder: &dyn PackageOptimizerBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let package = execute_package(args, builder)?;
    write_json(writer, &package)
}

fn execute_package(
    args: PackageArgs,
    builder: &dyn PackageOptimizerBuilder,
) -> Result<Package, CliError> {
    let config = resolve_package_config(args)?;
    config.request.validate()?;
    let optimizer = builder.build(&config)?;

    let source = SqliteCatalogSource::open(&config.catalog_db)?;
    let catalog = CatalogGraph::from_source(&source)?;
    debug!(
        "loaded {} tours from {} for region {}",
        catalog.tour_count(),
        config.catalog_db,
        config.request.region_id
    );
    Ok(optimizer.generate_package(&catalog, &config.request))
}

fn resolve_package_config(args: PackageArgs) -> Result<PackageConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<PackageConfig, CliError> {
    let merged = PackageArgs::merge_from_layers(layers).map_err(CliError::from)?;
    PackageConfig::try_from(merged)
}
