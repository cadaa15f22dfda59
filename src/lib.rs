//! Facade crate for the Cicerone tour packaging engine.
//!
//! This crate re-exports the core domain types and exposes the optional
//! optimizer and SQLite catalog store behind feature flags.

#![forbid(unsafe_code)]

pub use cicerone_core::{
    Attraction, AttractionRecord, CatalogGraph, CatalogSource, Optimizer, Package, PackageRequest,
    PackageRequestValidationError, RegionRecord, Tour, TourAttractionLink, TourRecord,
};

#[cfg(feature = "store-sqlite")]
pub use cicerone_data::{
    CatalogDocument, CatalogDocumentError, PersistCatalogError, SqliteCatalogError,
    SqliteCatalogSource, persist_catalog_to_sqlite, read_catalog_document,
};

#[cfg(feature = "solver-bnb")]
pub use cicerone_solver_bnb::PackageOptimizer;
