//! Data access traits for catalog records.
//!
//! The `CatalogSource` trait defines the read-only interface external
//! loaders implement to hand raw records to [`CatalogGraph`]. Stores
//! backed by SQLite, JSON documents or in-memory fixtures all sit behind
//! it.
//!
//! [`CatalogGraph`]: crate::CatalogGraph

use crate::{AttractionRecord, RegionRecord, TourAttractionLink, TourRecord};

/// Read-only access to persisted catalog records.
///
/// Implementations must return records in a stable order: the order of
/// [`fetch_tours`](Self::fetch_tours) becomes the load order of the
/// catalog, which in turn decides which of several equally valuable
/// packages an optimizer reports.
///
/// # Examples
///
/// ```rust
/// use std::convert::Infallible;
/// use cicerone_core::{
///     AttractionRecord, CatalogGraph, CatalogSource, RegionRecord, TourAttractionLink,
///     TourRecord,
/// };
///
/// struct SingleTour;
///
/// impl CatalogSource for SingleTour {
///     type Error = Infallible;
///
///     fn fetch_regions(&self) -> Result<Vec<RegionRecord>, Self::Error> {
///         Ok(vec![RegionRecord { id: "R1".into(), name: "Lazio".into() }])
///     }
///
///     fn fetch_tours(&self) -> Result<Vec<TourRecord>, Self::Error> {
///         Ok(vec![TourRecord {
///             id: "t1".into(),
///             region_id: "R1".into(),
///             duration_days: 1,
///             cost: 10.0,
///         }])
///     }
///
///     fn fetch_attractions(&self) -> Result<Vec<AttractionRecord>, Self::Error> {
///         Ok(Vec::new())
///     }
///
///     fn fetch_tour_attraction_links(&self) -> Result<Vec<TourAttractionLink>, Self::Error> {
///         Ok(Vec::new())
///     }
/// }
///
/// let catalog = CatalogGraph::from_source(&SingleTour).unwrap_or_default();
/// assert_eq!(catalog.tour_count(), 1);
/// ```
pub trait CatalogSource {
    /// Error raised when records cannot be read.
    type Error;

    /// Return every region. Only used for listing choices to callers.
    ///
    /// # Errors
    /// Returns [`Self::Error`] when the backing store cannot be read.
    fn fetch_regions(&self) -> Result<Vec<RegionRecord>, Self::Error>;

    /// Return every tour, in load order.
    ///
    /// # Errors
    /// Returns [`Self::Error`] when the backing store cannot be read.
    fn fetch_tours(&self) -> Result<Vec<TourRecord>, Self::Error>;

    /// Return every attraction.
    ///
    /// # Errors
    /// Returns [`Self::Error`] when the backing store cannot be read.
    fn fetch_attractions(&self) -> Result<Vec<AttractionRecord>, Self::Error>;

    /// Return every tour/attraction pair.
    ///
    /// # Errors
    /// Returns [`Self::Error`] when the backing store cannot be read.
    fn fetch_tour_attraction_links(&self) -> Result<Vec<TourAttractionLink>, Self::Error>;
}
