//! Typed configuration errors.
//!
//! `SearchError` covers configuration faults only. Exhausting the frontier
//! without reaching the goal is NOT an error: it is the `NoPath` outcome of a
//! [`SearchReport`](crate::search::SearchReport), always distinguishable from
//! the faults below in the return type.

use std::fmt::Debug;

/// A configuration fault that aborts the search call it occurs in.
///
/// These are never retried and never downgraded to a "no path" result; they
/// carry the offending state so the caller can diagnose the graph or
/// heuristic that produced them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError<S> {
    /// The initial state is not present in the graph. Raised before the
    /// search loop starts.
    UnknownInitialState { state: S },
    /// The goal state is not present in the graph. Raised before the
    /// search loop starts.
    UnknownGoalState { state: S },
    /// An edge references a state the graph cannot resolve: either
    /// `neighbor` is not adjacent to `state`, or (`neighbor = None`)
    /// `state` itself was reached via an edge but has no adjacency entry.
    /// Raised at the point of expansion.
    DanglingEdge { state: S, neighbor: Option<S> },
    /// A state reachable during A* search has no heuristic entry under the
    /// strict estimate policy. The engine never substitutes a default
    /// silently; see [`EstimatePolicy`](crate::heuristic::EstimatePolicy).
    UndefinedHeuristic { state: S },
}

impl<S: Debug> std::fmt::Display for SearchError<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownInitialState { state } => {
                write!(f, "initial state {state:?} is not present in the graph")
            }
            Self::UnknownGoalState { state } => {
                write!(f, "goal state {state:?} is not present in the graph")
            }
            Self::DanglingEdge {
                state,
                neighbor: Some(neighbor),
            } => {
                write!(f, "no edge from {state:?} to {neighbor:?} in the graph")
            }
            Self::DanglingEdge {
                state,
                neighbor: None,
            } => {
                write!(
                    f,
                    "state {state:?} was reached via an edge but has no adjacency entry"
                )
            }
            Self::UndefinedHeuristic { state } => {
                write!(f, "no heuristic estimate defined for reachable state {state:?}")
            }
        }
    }
}

impl<S: Debug> std::error::Error for SearchError<S> {}
