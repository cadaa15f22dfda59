//! JSON interchange format for whole catalogs.

use std::convert::Infallible;

use camino::{Utf8Path, Utf8PathBuf};
use cicerone_core::{
    AttractionRecord, CatalogSource, RegionRecord, TourAttractionLink, TourRecord,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A complete catalog as a single serde document.
///
/// Every list defaults to empty when absent, so a document listing only
/// tours is accepted.
///
/// # Examples
/// ```
/// use cicerone_data::CatalogDocument;
///
/// let document: CatalogDocument = serde_json::from_str(
///     r#"{"regions": [{"id": "R1", "name": "Lazio"}]}"#,
/// )
/// .expect("valid document");
/// assert_eq!(document.regions.len(), 1);
/// assert!(document.tours.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogDocument {
    /// Regions tours can belong to.
    pub regions: Vec<RegionRecord>,
    /// Tours in load order.
    pub tours: Vec<TourRecord>,
    /// Attractions tours can cover.
    pub attractions: Vec<AttractionRecord>,
    /// Tour to attraction relations.
    pub links: Vec<TourAttractionLink>,
}

/// Error raised when reading a [`CatalogDocument`] from disk.
#[derive(Debug, Error)]
pub enum CatalogDocumentError {
    /// The file could not be read.
    #[error("failed to read catalog document {path}: {source}")]
    Read {
        /// Location of the document.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The file is not a valid catalog document.
    #[error("failed to parse catalog document {path}: {source}")]
    Parse {
        /// Location of the document.
        path: Utf8PathBuf,
        /// JSON decoding failure.
        #[source]
        source: serde_json::Error,
    },
}

/// Read and parse the JSON catalog document at `path`.
///
/// # Errors
/// Returns [`CatalogDocumentError`] when the file cannot be read or parsed.
pub fn read_catalog_document(path: &Utf8Path) -> Result<CatalogDocument, CatalogDocumentError> {
    let contents =
        cicerone_fs::read_to_string(path).map_err(|source| CatalogDocumentError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    serde_json::from_str(&contents).map_err(|source| CatalogDocumentError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

impl CatalogSource for CatalogDocument {
    type Error = Infallible;

    fn fetch_regions(&self) -> Result<Vec<RegionRecord>, Self::Error> {
        Ok(self.regions.clone())
    }

    fn fetch_tours(&self) -> Result<Vec<TourRecord>, Self::Error> {
        Ok(self.tours.clone())
    }

    fn fetch_attractions(&self) -> Result<Vec<AttractionRecord>, Self::Error> {
        Ok(self.attractions.clone())
    }

    fn fetch_tour_attraction_links(&self) -> Result<Vec<TourAttractionLink>, Self::Error> {
        Ok(self.links.clone())
    }
}
