//! Heuristic mapping for informed search.

use std::collections::HashMap;

use crate::contract::State;
use crate::error::SearchError;

/// What to do when a reachable state has no heuristic entry.
///
/// The engine never substitutes a default silently: substituting 0 without
/// declaring it degrades A* to uniform-cost behavior for that subtree
/// without any signal to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EstimatePolicy {
    /// A missing entry is a configuration error
    /// ([`SearchError::UndefinedHeuristic`]) fatal to the search call.
    Strict,
    /// A missing entry estimates 0 — the declared "uninformed fallback"
    /// mode. An estimate of 0 never overestimates, so admissibility is
    /// preserved, but the search degrades toward uniform-cost behavior
    /// wherever the table has holes.
    UninformedZero,
}

/// A total mapping from state to a non-negative remaining-cost estimate.
///
/// Admissibility (`h(n)` never exceeds the true minimal remaining cost to
/// the goal) is a caller obligation; the engine cannot verify it, and A*'s
/// optimality guarantee holds only when it is met.
#[derive(Debug, Clone)]
pub struct Heuristic<S> {
    estimates: HashMap<S, u64>,
    policy: EstimatePolicy,
}

impl<S: State> Heuristic<S> {
    /// A heuristic that errors on any state missing from the table.
    pub fn strict(estimates: impl IntoIterator<Item = (S, u64)>) -> Self {
        Self {
            estimates: estimates.into_iter().collect(),
            policy: EstimatePolicy::Strict,
        }
    }

    /// A heuristic that estimates 0 for states missing from the table
    /// (the declared uninformed fallback).
    pub fn with_uninformed_fallback(estimates: impl IntoIterator<Item = (S, u64)>) -> Self {
        Self {
            estimates: estimates.into_iter().collect(),
            policy: EstimatePolicy::UninformedZero,
        }
    }

    /// The configured missing-entry policy.
    #[must_use]
    pub fn policy(&self) -> EstimatePolicy {
        self.policy
    }

    /// The estimate for `state`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::UndefinedHeuristic`] if `state` has no entry
    /// and the policy is [`EstimatePolicy::Strict`].
    pub fn estimate(&self, state: &S) -> Result<u64, SearchError<S>> {
        match self.estimates.get(state) {
            Some(&estimate) => Ok(estimate),
            None => match self.policy {
                EstimatePolicy::Strict => Err(SearchError::UndefinedHeuristic {
                    state: state.clone(),
                }),
                EstimatePolicy::UninformedZero => Ok(0),
            },
        }
    }
}
