//! Test helpers for staging catalog files on disk.

use camino::{Utf8Path, Utf8PathBuf};
use cicerone_core::test_support::sample_records;
use cicerone_data::{CatalogDocument, persist_catalog_to_sqlite};
use tempfile::TempDir;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write fixture file");
}

/// The reference catalog as a JSON interchange document.
pub(super) fn sample_document() -> CatalogDocument {
    let records = sample_records();
    CatalogDocument {
        regions: records.regions,
        tours: records.tours,
        attractions: records.attractions,
        links: records.links,
    }
}

/// A temporary directory for catalog files, removed on drop.
#[derive(Debug)]
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    /// Persist the reference catalog to `catalog.db` and return its path.
    pub(super) fn seeded_catalog(&self) -> Utf8PathBuf {
        let path = self.path("catalog.db");
        persist_catalog_to_sqlite(&path, &sample_document()).expect("persist sample catalog");
        path
    }

    /// Write the reference catalog as JSON to `catalog.json` and return its path.
    pub(super) fn sample_document_file(&self) -> Utf8PathBuf {
        let path = self.path("catalog.json");
        let payload = serde_json::to_string_pretty(&sample_document()).expect("serialize catalog");
        write_utf8(&path, payload.as_bytes());
        path
    }
}
