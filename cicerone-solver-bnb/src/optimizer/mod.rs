//! `PackageOptimizer` implementation backed by an exhaustive search.

use cicerone_core::{CatalogGraph, Optimizer, Package, PackageRequest};
use log::debug;

use crate::candidates::CandidateSet;
use crate::search::{Limits, Search};

/// Exact optimizer selecting the value-maximising package for a region.
///
/// The optimizer holds no state. Every call builds its own search state, so
/// one instance may be shared across threads. The search always runs to
/// completion; callers wanting a time or size bound impose it around the
/// call.
///
/// # Examples
/// ```
/// use cicerone_core::{CatalogGraph, Optimizer, PackageRequest, TourAttractionLink};
/// use cicerone_core::{AttractionRecord, TourRecord};
/// use cicerone_solver_bnb::PackageOptimizer;
///
/// let tours = vec![TourRecord {
///     id: "forum".into(),
///     region_id: "lazio".into(),
///     duration_days: 1,
///     cost: 40.0,
/// }];
/// let attractions = vec![AttractionRecord { id: "curia".into(), cultural_value: 7 }];
/// let links = vec![TourAttractionLink::new("forum", "curia")];
/// let catalog = CatalogGraph::load(tours, attractions, links);
///
/// let package = PackageOptimizer::new()
///     .generate_package(&catalog, &PackageRequest::new("lazio").with_max_budget(50.0));
/// assert_eq!(package.value, 7);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PackageOptimizer;

impl PackageOptimizer {
    /// Construct an optimizer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Optimizer for PackageOptimizer {
    fn generate_package(&self, catalog: &CatalogGraph, request: &PackageRequest) -> Package {
        let tours = catalog.tours_in_region(&request.region_id);
        if tours.is_empty() {
            debug!("region {} has no tours", request.region_id);
            return Package::empty();
        }

        let candidates = CandidateSet::compile(&tours);
        let outcome = Search::new(&candidates, Limits::from_request(request)).run();

        debug!(
            "region {}: {} candidates, {} nodes, best value {}",
            request.region_id,
            candidates.len(),
            outcome.nodes,
            outcome.value,
        );

        Package {
            tours: candidates.tours_at(&outcome.selection),
            cost: outcome.cost,
            value: outcome.value,
        }
    }
}
