//! Flat records produced by catalog loaders.
//!
//! These mirror the rows a persistent store hands back before any wiring
//! happens. [`crate::CatalogGraph::load`] turns them into linked entities.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A region that partitions the tour catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RegionRecord {
    /// Region code used to filter tours.
    pub id: String,
    /// Human-readable region name.
    pub name: String,
}

/// A purchasable tour before its attractions are attached.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TourRecord {
    /// Tour identifier.
    pub id: String,
    /// Region the tour belongs to.
    pub region_id: String,
    /// Length of the tour in days.
    pub duration_days: u32,
    /// Price of the tour.
    pub cost: f64,
}

/// An attraction row.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AttractionRecord {
    /// Attraction identifier.
    pub id: String,
    /// Cultural value of the site.
    pub cultural_value: u32,
}

/// One edge of the tour/attraction relation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TourAttractionLink {
    /// Tour side of the edge.
    pub tour_id: String,
    /// Attraction side of the edge.
    pub attraction_id: String,
}

impl TourAttractionLink {
    /// Build a link between a tour and an attraction.
    pub fn new(tour_id: impl Into<String>, attraction_id: impl Into<String>) -> Self {
        Self {
            tour_id: tour_id.into(),
            attraction_id: attraction_id.into(),
        }
    }
}
