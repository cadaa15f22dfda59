//! Touring offers and the attractions they include.

use std::cmp::Ordering;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{Attraction, TourRecord};

/// A purchasable touring offer.
///
/// The attraction set is fixed once the owning
/// [`CatalogGraph`](crate::CatalogGraph) finishes loading. It is kept sorted by
/// attraction identifier so iteration order is deterministic and membership
/// checks are logarithmic.
///
/// # Examples
/// ```
/// use cicerone_core::Tour;
///
/// let tour = Tour::new("t1", "lazio", 2, 150.0);
/// assert_eq!(tour.region_id, "lazio");
/// assert!(tour.attractions().is_empty());
/// assert_eq!(tour.cultural_value(), 0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Tour {
    /// Tour identifier, unique within a catalog.
    pub id: String,
    /// Region the tour belongs to.
    pub region_id: String,
    /// Length of the tour in days.
    pub duration_days: u32,
    /// Price of the tour.
    pub cost: f64,
    attractions: Vec<Attraction>,
}

impl Tour {
    /// Construct a tour with no attractions.
    pub fn new(
        id: impl Into<String>,
        region_id: impl Into<String>,
        duration_days: u32,
        cost: f64,
    ) -> Self {
        Self {
            id: id.into(),
            region_id: region_id.into(),
            duration_days,
            cost,
            attractions: Vec::new(),
        }
    }

    /// Attractions included in the tour, ordered by identifier.
    #[must_use]
    pub fn attractions(&self) -> &[Attraction] {
        &self.attractions
    }

    /// Identifiers of the included attractions, ordered.
    pub fn attraction_ids(&self) -> impl Iterator<Item = &str> {
        self.attractions.iter().map(|attraction| attraction.id.as_str())
    }

    /// Report whether the tour includes the attraction with `attraction_id`.
    #[must_use]
    pub fn includes(&self, attraction_id: &str) -> bool {
        self.position_of(attraction_id).is_ok()
    }

    /// Sum of the cultural values of the included attractions.
    #[must_use]
    pub fn cultural_value(&self) -> u64 {
        self.attractions
            .iter()
            .map(|attraction| u64::from(attraction.cultural_value))
            .sum()
    }

    /// Report whether the two tours have at least one attraction in common.
    ///
    /// Two tours that share an attraction can never appear in the same
    /// package.
    #[must_use]
    pub fn shares_attraction_with(&self, other: &Self) -> bool {
        let mut lhs = self.attractions.iter().peekable();
        let mut rhs = other.attractions.iter().peekable();
        while let (Some(left), Some(right)) = (lhs.peek(), rhs.peek()) {
            match left.id.cmp(&right.id) {
                Ordering::Less => {
                    lhs.next();
                }
                Ordering::Greater => {
                    rhs.next();
                }
                Ordering::Equal => return true,
            }
        }
        false
    }

    /// Add an attraction unless one with the same identifier is present.
    ///
    /// Returns `true` when the set grew.
    pub(crate) fn include(&mut self, attraction: Attraction) -> bool {
        match self.position_of(&attraction.id) {
            Ok(_) => false,
            Err(position) => {
                self.attractions.insert(position, attraction);
                true
            }
        }
    }

    fn position_of(&self, attraction_id: &str) -> Result<usize, usize> {
        self.attractions
            .binary_search_by(|probe| probe.id.as_str().cmp(attraction_id))
    }
}

impl From<TourRecord> for Tour {
    fn from(record: TourRecord) -> Self {
        Self::new(
            record.id,
            record.region_id,
            record.duration_days,
            record.cost,
        )
    }
}
