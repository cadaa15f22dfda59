//! Exact branch-and-bound package optimizer for Cicerone.
//!
//! This crate provides [`PackageOptimizer`], the default implementation of the
//! [`Optimizer`](cicerone_core::Optimizer) trait. It treats package selection
//! as weighted set packing with two knapsack constraints: pick tours from one
//! region so the summed cultural value is maximal, the summed days and cost
//! stay within the optional limits, and no attraction is covered twice.
//!
//! The search enumerates combinations depth-first in catalog load order and
//! prunes any extension that breaks a limit or reuses an attraction. It is
//! exhaustive, so the result is the exact optimum; among equally valuable
//! packages the first one reached in depth-first pre-order wins.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod candidates;
mod optimizer;
mod search;

pub use optimizer::PackageOptimizer;
