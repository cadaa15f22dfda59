//! Catalog storage for Cicerone.
//!
//! Responsibilities:
//! - Read catalogs from SQLite through [`SqliteCatalogSource`].
//! - Persist catalogs to SQLite with [`persist_catalog_to_sqlite`].
//! - Define the JSON interchange shape, [`CatalogDocument`].
//!
//! Boundaries:
//! - Do not encode domain rules (live in `cicerone-core`).
//! - Row order is load order; nothing here sorts or filters records.

#![forbid(unsafe_code)]

mod document;
mod persist;
mod schema;
mod sqlite;

pub use document::{CatalogDocument, CatalogDocumentError, read_catalog_document};
pub use persist::{PersistCatalogError, persist_catalog_to_sqlite};
pub use sqlite::{SqliteCatalogError, SqliteCatalogSource};

#[cfg(test)]
mod test_support;
