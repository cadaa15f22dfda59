//! Region tours compiled into the form the search consumes.
//!
//! Attraction identifiers are arbitrary strings, so each search numbers the
//! attractions that occur in its region densely and represents every tour's
//! attraction set as a bitset over that numbering. Disjointness and union
//! then become word-wise bit operations.

use std::collections::HashMap;

use cicerone_core::Tour;
use fixedbitset::FixedBitSet;

/// One tour prepared for the search.
#[derive(Debug)]
pub(crate) struct Candidate<'a> {
    pub(crate) tour: &'a Tour,
    pub(crate) days: u64,
    pub(crate) cost: f64,
    pub(crate) value: u64,
    pub(crate) attractions: FixedBitSet,
}

/// The ordered candidate list for one region.
#[derive(Debug)]
pub(crate) struct CandidateSet<'a> {
    pub(crate) candidates: Vec<Candidate<'a>>,
    pub(crate) attraction_count: usize,
}

impl<'a> CandidateSet<'a> {
    /// Compile `tours`, keeping their order.
    pub(crate) fn compile(tours: &[&'a Tour]) -> Self {
        let mut numbering: HashMap<&'a str, usize> = HashMap::new();
        for &tour in tours {
            for attraction_id in tour.attraction_ids() {
                let next = numbering.len();
                numbering.entry(attraction_id).or_insert(next);
            }
        }

        let attraction_count = numbering.len();
        let candidates = tours
            .iter()
            .map(|&tour| {
                let mut attractions = FixedBitSet::with_capacity(attraction_count);
                for attraction_id in tour.attraction_ids() {
                    if let Some(&bit) = numbering.get(attraction_id) {
                        attractions.insert(bit);
                    }
                }
                Candidate {
                    tour,
                    days: u64::from(tour.duration_days),
                    cost: tour.cost,
                    value: tour.cultural_value(),
                    attractions,
                }
            })
            .collect();

        Self {
            candidates,
            attraction_count,
        }
    }

    pub(crate) const fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Clone the tours at `selection` positions, in selection order.
    pub(crate) fn tours_at(&self, selection: &[usize]) -> Vec<Tour> {
        selection
            .iter()
            .filter_map(|&position| self.candidates.get(position))
            .map(|candidate| candidate.tour.clone())
            .collect()
    }
}
