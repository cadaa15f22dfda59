//! Package requests, package results and the optimizer boundary trait.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{CatalogGraph, Tour};

/// Parameters for a package request.
///
/// The request names the region to draw tours from and optional limits on
/// the summed duration and cost of the selected tours. `None` means the
/// corresponding limit is not applied.
///
/// # Examples
/// ```rust
/// use cicerone_core::PackageRequest;
///
/// let request = PackageRequest::new("R1").with_max_days(5).with_max_budget(300.0);
/// assert_eq!(request.max_days, Some(5));
/// assert!(request.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PackageRequest {
    /// Region whose tours are candidates.
    pub region_id: String,
    /// Upper bound on the summed tour durations, in days.
    pub max_days: Option<u32>,
    /// Upper bound on the summed tour costs.
    pub max_budget: Option<f64>,
}

/// Reasons a [`PackageRequest`] is rejected by [`PackageRequest::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PackageRequestValidationError {
    /// The region identifier was empty.
    #[error("region identifier must not be empty")]
    MissingRegion,
    /// A day limit of zero was supplied.
    #[error("max_days must be positive")]
    ZeroDays,
    /// The budget was below zero.
    #[error("max_budget must not be negative")]
    NegativeBudget,
    /// The budget was NaN or infinite.
    #[error("max_budget must be finite")]
    NonFiniteBudget,
}

impl PackageRequest {
    /// Request the best package for `region_id` with no limits.
    pub fn new(region_id: impl Into<String>) -> Self {
        Self {
            region_id: region_id.into(),
            max_days: None,
            max_budget: None,
        }
    }

    /// Limit the summed duration of the package.
    #[must_use]
    pub const fn with_max_days(mut self, max_days: u32) -> Self {
        self.max_days = Some(max_days);
        self
    }

    /// Limit the summed cost of the package.
    #[must_use]
    pub const fn with_max_budget(mut self, max_budget: f64) -> Self {
        self.max_budget = Some(max_budget);
        self
    }

    /// Check the limits a caller supplied before running a search.
    ///
    /// Optimizers do not call this themselves; it belongs to the layer
    /// that accepts user input.
    ///
    /// # Errors
    /// Returns the first [`PackageRequestValidationError`] found.
    pub fn validate(&self) -> Result<(), PackageRequestValidationError> {
        if self.region_id.trim().is_empty() {
            return Err(PackageRequestValidationError::MissingRegion);
        }
        if self.max_days == Some(0) {
            return Err(PackageRequestValidationError::ZeroDays);
        }
        if let Some(budget) = self.max_budget {
            if !budget.is_finite() {
                return Err(PackageRequestValidationError::NonFiniteBudget);
            }
            if budget < 0.0 {
                return Err(PackageRequestValidationError::NegativeBudget);
            }
        }
        Ok(())
    }
}

/// The tours chosen for a request with their aggregate cost and value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Package {
    /// Selected tours in the order the search added them.
    pub tours: Vec<Tour>,
    /// Sum of the selected tours' costs.
    pub cost: f64,
    /// Sum of cultural values over the distinct attractions covered.
    pub value: u64,
}

impl Package {
    /// The empty package: no tours, zero cost and zero value.
    ///
    /// # Examples
    /// ```
    /// use cicerone_core::Package;
    ///
    /// let package = Package::empty();
    /// assert!(package.tours.is_empty());
    /// assert_eq!(package.value, 0);
    /// ```
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            tours: Vec::new(),
            cost: 0.0,
            value: 0,
        }
    }

    /// Identifiers of the selected tours, in package order.
    pub fn tour_ids(&self) -> impl Iterator<Item = &str> {
        self.tours.iter().map(|tour| tour.id.as_str())
    }

    /// Summed duration of the selected tours.
    #[must_use]
    pub fn total_days(&self) -> u64 {
        self.tours
            .iter()
            .map(|tour| u64::from(tour.duration_days))
            .sum()
    }
}

impl Default for Package {
    fn default() -> Self {
        Self::empty()
    }
}

/// Select the value-maximising package for a request.
///
/// The search is infallible: an unknown region, a region without tours or
/// limits that admit nothing but the empty selection all yield
/// [`Package::empty`]. Implementations must keep all search state local
/// to one call so a shared optimizer can serve concurrent requests against
/// the same read-only catalog.
pub trait Optimizer: Send + Sync {
    /// Compute the package for `request` over `catalog`.
    fn generate_package(&self, catalog: &CatalogGraph, request: &PackageRequest) -> Package;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_catalog;
    use rstest::rstest;

    struct FirstTourOptimizer;

    impl Optimizer for FirstTourOptimizer {
        fn generate_package(&self, catalog: &CatalogGraph, request: &PackageRequest) -> Package {
            let Some(first) = catalog.tours_in_region(&request.region_id).first().copied() else {
                return Package::empty();
            };
            Package {
                tours: vec![first.clone()],
                cost: first.cost,
                value: first.cultural_value(),
            }
        }
    }

    #[rstest]
    fn trait_objects_can_be_shared() {
        let optimizer: Box<dyn Optimizer> = Box::new(FirstTourOptimizer);
        let catalog = sample_catalog();
        let package = optimizer.generate_package(&catalog, &PackageRequest::new("R1"));
        assert_eq!(package.tour_ids().collect::<Vec<_>>(), vec!["A"]);
        assert_eq!(package.total_days(), 2);
    }

    #[rstest]
    fn unknown_region_yields_empty_package() {
        let catalog = sample_catalog();
        let package = FirstTourOptimizer.generate_package(&catalog, &PackageRequest::new("R9"));
        assert_eq!(package, Package::empty());
    }

    #[rstest]
    #[case(PackageRequest::new("R1"))]
    #[case(PackageRequest::new("R1").with_max_days(1))]
    #[case(PackageRequest::new("R1").with_max_budget(0.0))]
    fn accepts_valid_requests(#[case] request: PackageRequest) {
        assert_eq!(request.validate(), Ok(()));
    }

    #[rstest]
    #[case(PackageRequest::new("  "), PackageRequestValidationError::MissingRegion)]
    #[case(PackageRequest::new("R1").with_max_days(0), PackageRequestValidationError::ZeroDays)]
    #[case(
        PackageRequest::new("R1").with_max_budget(-1.0),
        PackageRequestValidationError::NegativeBudget
    )]
    #[case(
        PackageRequest::new("R1").with_max_budget(f64::NAN),
        PackageRequestValidationError::NonFiniteBudget
    )]
    #[case(
        PackageRequest::new("R1").with_max_budget(f64::INFINITY),
        PackageRequestValidationError::NonFiniteBudget
    )]
    fn rejects_invalid_requests(
        #[case] request: PackageRequest,
        #[case] expected: PackageRequestValidationError,
    ) {
        assert_eq!(request.validate(), Err(expected));
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn request_limits_default_to_none_when_absent() {
        let request: PackageRequest =
            serde_json::from_str(r#"{"region_id":"R1"}"#).expect("request should parse");
        assert_eq!(request, PackageRequest::new("R1"));
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn package_serialises_selection_and_totals_only() {
        let json = serde_json::to_value(Package::empty()).expect("package should serialise");
        assert_eq!(
            json,
            serde_json::json!({ "tours": [], "cost": 0.0, "value": 0 })
        );
    }
}
