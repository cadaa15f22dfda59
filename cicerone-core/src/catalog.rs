//! The loaded catalog of tours and attractions.
//!
//! [`CatalogGraph`] is built once per dataset from flat records and is
//! read-only afterwards. Tours own copies of the attractions they include;
//! the reverse direction (attraction to tours) is a derived lookup index
//! and never an ownership edge. Reloading means building a new graph.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use log::{debug, trace, warn};

use crate::{Attraction, AttractionRecord, CatalogSource, Tour, TourAttractionLink, TourRecord};

/// Tours and attractions of one dataset, wired by their many-to-many
/// relation.
///
/// # Examples
/// ```
/// use cicerone_core::{AttractionRecord, CatalogGraph, TourAttractionLink, TourRecord};
///
/// let tours = vec![TourRecord {
///     id: "t1".into(),
///     region_id: "lazio".into(),
///     duration_days: 2,
///     cost: 80.0,
/// }];
/// let attractions = vec![AttractionRecord { id: "a1".into(), cultural_value: 5 }];
/// let links = vec![
///     TourAttractionLink::new("t1", "a1"),
///     TourAttractionLink::new("t1", "missing"),
/// ];
///
/// let catalog = CatalogGraph::load(tours, attractions, links);
/// let tour = catalog.tour("t1").expect("tour is loaded");
/// assert_eq!(tour.cultural_value(), 5);
/// assert_eq!(catalog.tours_in_region("lazio").len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CatalogGraph {
    tours: Vec<Tour>,
    tour_positions: HashMap<String, usize>,
    attractions: Vec<Attraction>,
    attraction_positions: HashMap<String, usize>,
    featuring: HashMap<String, Vec<usize>>,
}

impl CatalogGraph {
    /// Build the graph from tour, attraction and relation records.
    ///
    /// Relation records whose tour or attraction is unknown are dropped
    /// without error. Repeated relation records are idempotent. When two
    /// records share an identifier the later one replaces the earlier data
    /// but keeps the earlier position in load order.
    pub fn load<T, A, L>(tours: T, attractions: A, links: L) -> Self
    where
        T: IntoIterator<Item = TourRecord>,
        A: IntoIterator<Item = AttractionRecord>,
        L: IntoIterator<Item = TourAttractionLink>,
    {
        let mut catalog = Self::default();
        for record in tours {
            catalog.insert_tour(Tour::from(record));
        }
        for record in attractions {
            catalog.insert_attraction(Attraction::from(record));
        }

        let mut applied = 0_usize;
        let mut dropped = 0_usize;
        for link in links {
            if catalog.apply_link(&link) {
                applied += 1;
            } else {
                dropped += 1;
            }
        }
        catalog.index_featuring_tours();

        debug!(
            "loaded catalog with {} tours, {} attractions, {applied} links ({dropped} dropped)",
            catalog.tours.len(),
            catalog.attractions.len(),
        );
        catalog
    }

    /// Fetch every record from `source` and [`load`](Self::load) them.
    ///
    /// # Errors
    /// Propagates the first error raised by the source.
    pub fn from_source<S>(source: &S) -> Result<Self, S::Error>
    where
        S: CatalogSource + ?Sized,
    {
        let tours = source.fetch_tours()?;
        let attractions = source.fetch_attractions()?;
        let links = source.fetch_tour_attraction_links()?;
        Ok(Self::load(tours, attractions, links))
    }

    /// Tours whose region matches `region_id`, in load order.
    ///
    /// An unknown region yields an empty list.
    #[must_use]
    pub fn tours_in_region(&self, region_id: &str) -> Vec<&Tour> {
        self.tours
            .iter()
            .filter(|tour| tour.region_id == region_id)
            .collect()
    }

    /// Look up a tour by identifier.
    #[must_use]
    pub fn tour(&self, id: &str) -> Option<&Tour> {
        self.tour_positions
            .get(id)
            .and_then(|&position| self.tours.get(position))
    }

    /// Look up an attraction by identifier.
    #[must_use]
    pub fn attraction(&self, id: &str) -> Option<&Attraction> {
        self.attraction_positions
            .get(id)
            .and_then(|&position| self.attractions.get(position))
    }

    /// All tours in load order.
    #[must_use]
    pub fn tours(&self) -> &[Tour] {
        &self.tours
    }

    /// All attractions in load order.
    #[must_use]
    pub fn attractions(&self) -> &[Attraction] {
        &self.attractions
    }

    /// Tours including the attraction, in load order.
    pub fn tours_featuring(&self, attraction_id: &str) -> impl Iterator<Item = &Tour> {
        self.featuring
            .get(attraction_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .filter_map(|&position| self.tours.get(position))
    }

    /// Number of loaded tours.
    #[must_use]
    pub fn tour_count(&self) -> usize {
        self.tours.len()
    }

    /// Number of loaded attractions.
    #[must_use]
    pub fn attraction_count(&self) -> usize {
        self.attractions.len()
    }

    /// Report whether the catalog holds no tours.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tours.is_empty()
    }

    fn insert_tour(&mut self, tour: Tour) {
        match self.tour_positions.entry(tour.id.clone()) {
            Entry::Occupied(slot) => {
                warn!("duplicate tour record {} replaces earlier entry", tour.id);
                if let Some(existing) = self.tours.get_mut(*slot.get()) {
                    *existing = tour;
                }
            }
            Entry::Vacant(slot) => {
                slot.insert(self.tours.len());
                self.tours.push(tour);
            }
        }
    }

    fn insert_attraction(&mut self, attraction: Attraction) {
        match self.attraction_positions.entry(attraction.id.clone()) {
            Entry::Occupied(slot) => {
                warn!(
                    "duplicate attraction record {} replaces earlier entry",
                    attraction.id
                );
                if let Some(existing) = self.attractions.get_mut(*slot.get()) {
                    *existing = attraction;
                }
            }
            Entry::Vacant(slot) => {
                slot.insert(self.attractions.len());
                self.attractions.push(attraction);
            }
        }
    }

    fn apply_link(&mut self, link: &TourAttractionLink) -> bool {
        let Some(attraction) = self.attraction(&link.attraction_id).cloned() else {
            trace!(
                "dropping link {} -> {}: unknown attraction",
                link.tour_id, link.attraction_id
            );
            return false;
        };
        let tour = self
            .tour_positions
            .get(&link.tour_id)
            .copied()
            .and_then(|position| self.tours.get_mut(position));
        let Some(tour) = tour else {
            trace!(
                "dropping link {} -> {}: unknown tour",
                link.tour_id, link.attraction_id
            );
            return false;
        };
        tour.include(attraction);
        true
    }

    fn index_featuring_tours(&mut self) {
        let mut featuring: HashMap<String, Vec<usize>> = HashMap::new();
        for (position, tour) in self.tours.iter().enumerate() {
            for attraction_id in tour.attraction_ids() {
                featuring
                    .entry(attraction_id.to_owned())
                    .or_default()
                    .push(position);
            }
        }
        self.featuring = featuring;
    }
}
