//! Test-only, in-memory `CatalogSource` implementation and fixture data
//! used by unit and behaviour tests.

use std::convert::Infallible;

use crate::{
    AttractionRecord, CatalogGraph, CatalogSource, RegionRecord, TourAttractionLink, TourRecord,
};

/// Raw records making up a catalog, grouped for convenience.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogRecords {
    /// Region rows.
    pub regions: Vec<RegionRecord>,
    /// Tour rows, in load order.
    pub tours: Vec<TourRecord>,
    /// Attraction rows.
    pub attractions: Vec<AttractionRecord>,
    /// Relation rows.
    pub links: Vec<TourAttractionLink>,
}

impl CatalogRecords {
    /// Build a [`CatalogGraph`] from the records.
    #[must_use]
    pub fn into_catalog(self) -> CatalogGraph {
        CatalogGraph::load(self.tours, self.attractions, self.links)
    }
}

/// In-memory `CatalogSource` implementation used in tests.
#[derive(Default, Debug, Clone)]
pub struct MemoryCatalogSource {
    records: CatalogRecords,
}

impl MemoryCatalogSource {
    /// Create a source serving the given records.
    #[must_use]
    pub const fn from_records(records: CatalogRecords) -> Self {
        Self { records }
    }
}

impl CatalogSource for MemoryCatalogSource {
    type Error = Infallible;

    fn fetch_regions(&self) -> Result<Vec<RegionRecord>, Self::Error> {
        Ok(self.records.regions.clone())
    }

    fn fetch_tours(&self) -> Result<Vec<TourRecord>, Self::Error> {
        Ok(self.records.tours.clone())
    }

    fn fetch_attractions(&self) -> Result<Vec<AttractionRecord>, Self::Error> {
        Ok(self.records.attractions.clone())
    }

    fn fetch_tour_attraction_links(&self) -> Result<Vec<TourAttractionLink>, Self::Error> {
        Ok(self.records.links.clone())
    }
}

/// Shorthand for a [`TourRecord`].
#[must_use]
pub fn tour_record(id: &str, region_id: &str, duration_days: u32, cost: f64) -> TourRecord {
    TourRecord {
        id: id.to_owned(),
        region_id: region_id.to_owned(),
        duration_days,
        cost,
    }
}

/// Shorthand for an [`AttractionRecord`].
#[must_use]
pub fn attraction_record(id: &str, cultural_value: u32) -> AttractionRecord {
    AttractionRecord {
        id: id.to_owned(),
        cultural_value,
    }
}

/// The reference catalog.
///
/// Region `R1` holds tour `A` (2 days, cost 10, attraction `X` worth 5),
/// tour `B` (3 days, cost 20, attraction `Y` worth 8) and tour `C` (1 day,
/// cost 5, attraction `X`). Region `R2` exists but has no tours.
#[must_use]
pub fn sample_records() -> CatalogRecords {
    CatalogRecords {
        regions: vec![
            RegionRecord {
                id: "R1".to_owned(),
                name: "Lazio".to_owned(),
            },
            RegionRecord {
                id: "R2".to_owned(),
                name: "Molise".to_owned(),
            },
        ],
        tours: vec![
            tour_record("A", "R1", 2, 10.0),
            tour_record("B", "R1", 3, 20.0),
            tour_record("C", "R1", 1, 5.0),
        ],
        attractions: vec![attraction_record("X", 5), attraction_record("Y", 8)],
        links: vec![
            TourAttractionLink::new("A", "X"),
            TourAttractionLink::new("B", "Y"),
            TourAttractionLink::new("C", "X"),
        ],
    }
}

/// [`sample_records`] loaded into a [`CatalogGraph`].
#[must_use]
pub fn sample_catalog() -> CatalogGraph {
    sample_records().into_catalog()
}
