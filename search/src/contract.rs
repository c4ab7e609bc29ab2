//! Problem contract trait.

use std::fmt::Debug;
use std::hash::Hash;

use crate::error::SearchError;

/// Bound alias for search states.
///
/// States are opaque labels: the engine assumes no internal structure.
/// `Ord` is required (in addition to `Hash`) so explored sets and trace
/// snapshots iterate in a deterministic order at serialization boundaries.
pub trait State: Clone + Eq + Ord + Hash + Debug {}

impl<T: Clone + Eq + Ord + Hash + Debug> State for T {}

/// A read-only search problem: graph view, initial state, goal predicate.
///
/// # Contract
///
/// - `actions` must return neighbors in the order the graph was constructed.
///   That order is the tie-break source for depth-first and breadth-first
///   search; implementations must not re-sort it.
/// - `edge_cost` must fail with [`SearchError::DanglingEdge`] when `neighbor`
///   is not actually adjacent to `state`.
/// - `is_goal` must be a pure predicate with no side effects.
pub trait Problem {
    /// The state label type.
    type State: State;

    /// The state the search starts from.
    fn initial_state(&self) -> Self::State;

    /// Whether `state` satisfies the goal.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// Neighbors of `state`, in graph construction order.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::DanglingEdge`] if `state` was admitted into the
    /// search via an edge but has no adjacency entry of its own.
    fn actions(&self, state: &Self::State) -> Result<Vec<Self::State>, SearchError<Self::State>>;

    /// Cost of the edge from `state` to `neighbor`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::DanglingEdge`] if `neighbor` is not adjacent to
    /// `state`. This should not occur when `actions` is used consistently.
    fn edge_cost(
        &self,
        state: &Self::State,
        neighbor: &Self::State,
    ) -> Result<u64, SearchError<Self::State>>;
}
