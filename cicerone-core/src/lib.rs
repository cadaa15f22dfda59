//! Core domain types for the Cicerone tour packaging engine.
//!
//! The crate owns the in-memory catalog of tours and attractions for one
//! loaded dataset ([`CatalogGraph`]), the record shapes external loaders
//! produce ([`TourRecord`], [`AttractionRecord`], [`TourAttractionLink`],
//! [`RegionRecord`]), and the boundary traits that solvers and stores
//! implement ([`Optimizer`], [`CatalogSource`]).
//!
//! Nothing here touches storage or performs the search itself; those live
//! in `cicerone-data` and `cicerone-solver-bnb` respectively.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod attraction;
pub mod catalog;
mod optimizer;
mod records;
pub mod source;
mod tour;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use attraction::Attraction;
pub use catalog::CatalogGraph;
pub use optimizer::{Optimizer, Package, PackageRequest, PackageRequestValidationError};
pub use records::{AttractionRecord, RegionRecord, TourAttractionLink, TourRecord};
pub use source::CatalogSource;
pub use tour::Tour;
