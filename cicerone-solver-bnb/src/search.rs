//! Depth-first combination search with feasibility pruning.
//!
//! Every recursion node corresponds to one partial selection. Entering a
//! node compares its value with the best seen so far and keeps it only when
//! strictly greater, so on ties the package reached first in pre-order
//! stands. Children extend the selection with a later candidate only, which
//! enumerates combinations rather than permutations.

use cicerone_core::PackageRequest;
use fixedbitset::FixedBitSet;

use crate::candidates::{Candidate, CandidateSet};

/// Optional limits on the summed days and cost of a selection.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct Limits {
    pub(crate) max_days: Option<u64>,
    pub(crate) max_budget: Option<f64>,
}

impl Limits {
    pub(crate) fn from_request(request: &PackageRequest) -> Self {
        Self {
            max_days: request.max_days.map(u64::from),
            max_budget: request.max_budget,
        }
    }

    /// Totals after adding `candidate`, or `None` when a limit would break.
    #[expect(
        clippy::float_arithmetic,
        reason = "tour prices are summed as floating-point costs"
    )]
    fn admit(self, totals: Totals, candidate: &Candidate<'_>) -> Option<Totals> {
        let days = totals.days.saturating_add(candidate.days);
        if self.max_days.is_some_and(|max| days > max) {
            return None;
        }
        let cost = totals.cost + candidate.cost;
        if self.max_budget.is_some_and(|max| cost > max) {
            return None;
        }
        Some(Totals {
            days,
            cost,
            value: totals.value.saturating_add(candidate.value),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Totals {
    days: u64,
    cost: f64,
    value: u64,
}

impl Totals {
    const ZERO: Self = Self {
        days: 0,
        cost: 0.0,
        value: 0,
    };
}

#[derive(Debug, Default)]
struct Best {
    selection: Vec<usize>,
    cost: f64,
    value: u64,
}

/// Result of one search: candidate positions of the best selection plus
/// bookkeeping.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SearchOutcome {
    pub(crate) selection: Vec<usize>,
    pub(crate) cost: f64,
    pub(crate) value: u64,
    pub(crate) nodes: u64,
}

/// State of one search invocation.
///
/// The best selection lives here rather than on the optimizer so separate
/// calls never observe each other.
#[derive(Debug)]
pub(crate) struct Search<'c, 'a> {
    candidates: &'c [Candidate<'a>],
    limits: Limits,
    partial: Vec<usize>,
    used: FixedBitSet,
    best: Option<Best>,
    nodes: u64,
}

impl<'c, 'a> Search<'c, 'a> {
    pub(crate) fn new(set: &'c CandidateSet<'a>, limits: Limits) -> Self {
        Self {
            candidates: &set.candidates,
            limits,
            partial: Vec::with_capacity(set.len()),
            used: FixedBitSet::with_capacity(set.attraction_count),
            best: None,
            nodes: 0,
        }
    }

    pub(crate) fn run(mut self) -> SearchOutcome {
        self.explore(0, Totals::ZERO);
        // The root node always records the empty selection, so `best` is set.
        let best = self.best.unwrap_or_default();
        SearchOutcome {
            selection: best.selection,
            cost: best.cost,
            value: best.value,
            nodes: self.nodes,
        }
    }

    fn explore(&mut self, start: usize, totals: Totals) {
        self.nodes = self.nodes.saturating_add(1);
        self.record(totals);

        let candidates = self.candidates;
        for (index, candidate) in candidates.iter().enumerate().skip(start) {
            let Some(next) = self.limits.admit(totals, candidate) else {
                continue;
            };
            if !candidate.attractions.is_disjoint(&self.used) {
                continue;
            }
            let mut step = Step::take(self, index, candidate);
            step.search().explore(index + 1, next);
        }
    }

    fn record(&mut self, totals: Totals) {
        if self
            .best
            .as_ref()
            .is_some_and(|best| totals.value <= best.value)
        {
            return;
        }
        self.best = Some(Best {
            selection: self.partial.clone(),
            cost: totals.cost,
            value: totals.value,
        });
    }
}

/// One candidate pushed onto the partial selection.
///
/// Dropping the step pops the candidate and releases its attractions, so
/// the shared buffers are restored on every exit from the child branch.
struct Step<'s, 'c, 'a> {
    search: &'s mut Search<'c, 'a>,
    attractions: &'c FixedBitSet,
}

impl<'s, 'c, 'a> Step<'s, 'c, 'a> {
    fn take(search: &'s mut Search<'c, 'a>, index: usize, candidate: &'c Candidate<'a>) -> Self {
        search.partial.push(index);
        search.used.union_with(&candidate.attractions);
        Self {
            search,
            attractions: &candidate.attractions,
        }
    }

    const fn search(&mut self) -> &mut Search<'c, 'a> {
        self.search
    }
}

impl Drop for Step<'_, '_, '_> {
    fn drop(&mut self) {
        self.search.partial.pop();
        self.search.used.difference_with(self.attractions);
    }
}
