//! Weighted directed graph and the problem view bound to it.
//!
//! `CostGraph` preserves adjacency insertion order: the order edges are
//! added is the order `actions` reports neighbors, which is the tie-break
//! source for depth-first and breadth-first search. Edge costs are `u64`,
//! so non-negativity holds by construction.

use std::collections::HashMap;

use crate::contract::{Problem, State};
use crate::error::SearchError;

/// One source state with its outgoing edges in insertion order.
#[derive(Debug, Clone)]
struct AdjacencyRow<S> {
    state: S,
    edges: Vec<(S, u64)>,
}

/// A weighted, directed graph over opaque state labels.
///
/// Directed: an edge `a → b` does not imply `b → a`. A state mentioned only
/// as an edge target has no adjacency row of its own; expanding such a state
/// is the dangling-edge configuration error (see [`GraphProblem`]).
#[derive(Debug, Clone, Default)]
pub struct CostGraph<S> {
    rows: Vec<AdjacencyRow<S>>,
    index: HashMap<S, usize>,
}

impl<S: State> CostGraph<S> {
    /// Create an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Build a graph from `(from, to, cost)` triples, preserving order.
    pub fn from_edges(edges: impl IntoIterator<Item = (S, S, u64)>) -> Self {
        let mut graph = Self::new();
        for (from, to, cost) in edges {
            graph.add_edge(from, to, cost);
        }
        graph
    }

    /// Ensure `state` has an adjacency row, creating an empty one if needed.
    ///
    /// Used for terminal states that have no outgoing edges (a goal may be
    /// a leaf) so that expanding them is a dead end, not a dangling edge.
    pub fn add_state(&mut self, state: S) {
        self.row_id(state);
    }

    /// Add the directed edge `from → to` with the given cost.
    ///
    /// Re-adding an existing edge replaces its cost without changing its
    /// position in the adjacency order.
    pub fn add_edge(&mut self, from: S, to: S, cost: u64) {
        let row_id = self.row_id(from);
        let row = &mut self.rows[row_id];
        if let Some(slot) = row.edges.iter_mut().find(|(n, _)| *n == to) {
            slot.1 = cost;
        } else {
            row.edges.push((to, cost));
        }
    }

    /// Outgoing edges of `state` in insertion order, or `None` if `state`
    /// has no adjacency row.
    #[must_use]
    pub fn edges(&self, state: &S) -> Option<&[(S, u64)]> {
        self.index
            .get(state)
            .map(|&row_id| self.rows[row_id].edges.as_slice())
    }

    /// Cost of the edge `from → to`, or `None` if absent.
    #[must_use]
    pub fn edge_cost(&self, from: &S, to: &S) -> Option<u64> {
        self.edges(from)?
            .iter()
            .find(|(neighbor, _)| neighbor == to)
            .map(|&(_, cost)| cost)
    }

    /// Whether `state` appears in the graph, as a source or as a target.
    #[must_use]
    pub fn contains(&self, state: &S) -> bool {
        self.index.contains_key(state)
            || self
                .rows
                .iter()
                .any(|row| row.edges.iter().any(|(n, _)| n == state))
    }

    /// Source states in insertion order.
    pub fn states(&self) -> impl Iterator<Item = &S> {
        self.rows.iter().map(|row| &row.state)
    }

    /// Number of states with an adjacency row.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the graph has no adjacency rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn row_id(&mut self, state: S) -> usize {
        if let Some(&row_id) = self.index.get(&state) {
            return row_id;
        }
        let row_id = self.rows.len();
        self.index.insert(state.clone(), row_id);
        self.rows.push(AdjacencyRow {
            state,
            edges: Vec::new(),
        });
        row_id
    }
}

/// A search problem bound to a [`CostGraph`]: fixed initial state, fixed
/// goal state, goal predicate by label equality.
///
/// Construction validates that both endpoints are present in the graph, so
/// the unknown-endpoint configuration errors surface before any search loop
/// starts.
#[derive(Debug, Clone)]
pub struct GraphProblem<S> {
    graph: CostGraph<S>,
    initial: S,
    goal: S,
}

impl<S: State> GraphProblem<S> {
    /// Bind a graph to an initial and goal state.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::UnknownInitialState`] or
    /// [`SearchError::UnknownGoalState`] if an endpoint appears nowhere in
    /// the graph (neither as a source nor as an edge target).
    pub fn new(graph: CostGraph<S>, initial: S, goal: S) -> Result<Self, SearchError<S>> {
        if !graph.contains(&initial) {
            return Err(SearchError::UnknownInitialState { state: initial });
        }
        if !graph.contains(&goal) {
            return Err(SearchError::UnknownGoalState { state: goal });
        }
        Ok(Self {
            graph,
            initial,
            goal,
        })
    }

    /// The underlying graph.
    #[must_use]
    pub fn graph(&self) -> &CostGraph<S> {
        &self.graph
    }

    /// The goal state.
    #[must_use]
    pub fn goal(&self) -> &S {
        &self.goal
    }
}

impl<S: State> Problem for GraphProblem<S> {
    type State = S;

    fn initial_state(&self) -> S {
        self.initial.clone()
    }

    fn is_goal(&self, state: &S) -> bool {
        *state == self.goal
    }

    fn actions(&self, state: &S) -> Result<Vec<S>, SearchError<S>> {
        self.graph
            .edges(state)
            .map(|edges| edges.iter().map(|(neighbor, _)| neighbor.clone()).collect())
            .ok_or_else(|| SearchError::DanglingEdge {
                state: state.clone(),
                neighbor: None,
            })
    }

    fn edge_cost(&self, state: &S, neighbor: &S) -> Result<u64, SearchError<S>> {
        self.graph
            .edge_cost(state, neighbor)
            .ok_or_else(|| SearchError::DanglingEdge {
                state: state.clone(),
                neighbor: Some(neighbor.clone()),
            })
    }
}
