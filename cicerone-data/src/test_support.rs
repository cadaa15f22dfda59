//! Fixtures shared by the unit tests of this crate.

use camino::Utf8PathBuf;
use cicerone_core::test_support::sample_records;
use rstest::fixture;
use tempfile::TempDir;

use crate::{CatalogDocument, persist_catalog_to_sqlite};

/// The reference catalog as a document.
pub(crate) fn sample_document() -> CatalogDocument {
    let records = sample_records();
    CatalogDocument {
        regions: records.regions,
        tours: records.tours,
        attractions: records.attractions,
        links: records.links,
    }
}

/// A database holding [`sample_document`], removed on drop.
pub(crate) struct TempCatalog {
    _dir: TempDir,
    pub(crate) path: Utf8PathBuf,
}

#[fixture]
pub(crate) fn temp_catalog() -> TempCatalog {
    let dir = TempDir::new().expect("create temp dir");
    let path =
        Utf8PathBuf::from_path_buf(dir.path().join("catalog.db")).expect("temp path is UTF-8");
    persist_catalog_to_sqlite(&path, &sample_document()).expect("persist sample catalog");
    TempCatalog { _dir: dir, path }
}
