//! Error types emitted by the Cicerone CLI.
//!
//! Keep this error type reasonably small, as every command helper returns
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use cicerone_core::PackageRequestValidationError;
use cicerone_data::{CatalogDocumentError, PersistCatalogError, SqliteCatalogError};
use thiserror::Error;

/// Errors emitted by the Cicerone CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// The requested operation requires a missing compile-time feature.
    #[error("{action} requires the `{feature}` feature to be enabled")]
    MissingFeature {
        feature: &'static str,
        action: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The package request limits were rejected.
    #[error("invalid package request: {0}")]
    InvalidRequest(#[from] PackageRequestValidationError),
    /// Reading the catalog database failed.
    #[error(transparent)]
    Catalog(#[from] SqliteCatalogError),
    /// Reading the JSON catalog document failed.
    #[error(transparent)]
    CatalogDocument(#[from] CatalogDocumentError),
    /// Persisting the catalog to SQLite failed.
    #[error("failed to import catalog into {path:?}: {source}")]
    PersistCatalog {
        path: Utf8PathBuf,
        #[source]
        source: PersistCatalogError,
    },
    /// Serializing command output failed.
    #[error("failed to serialize output: {0}")]
    SerializeOutput(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
