//! Shared helpers for the acceptance tests.

#![forbid(unsafe_code)]

use pathwise_search::contract::State;
use pathwise_search::graph::CostGraph;

/// Sum of edge costs along `path`; panics if a consecutive pair is not a
/// real edge, which is itself a property under test.
///
/// # Panics
///
/// Panics when `path` contains a pair with no edge between them.
#[must_use]
pub fn path_cost<S: State>(graph: &CostGraph<S>, path: &[S]) -> u64 {
    path.windows(2)
        .map(|pair| {
            graph
                .edge_cost(&pair[0], &pair[1])
                .unwrap_or_else(|| panic!("{:?} -> {:?} is not an edge", pair[0], pair[1]))
        })
        .sum()
}

/// The attack graph with both edges into `RootAccess` removed: the goal
/// still exists (empty row) but nothing reaches it.
#[must_use]
pub fn severed_attack_graph() -> CostGraph<&'static str> {
    let mut graph = CostGraph::from_edges([
        ("External", "Scan", 1),
        ("Scan", "Bruteforce", 4),
        ("Scan", "WebExploit", 2),
        ("Bruteforce", "UserAccess", 3),
        ("WebExploit", "UserAccess", 2),
        ("UserAccess", "PrivilegeEsc", 3),
        ("UserAccess", "Pivot", 2),
        ("PrivilegeEsc", "AdminAccess", 2),
        ("Pivot", "DBServer", 3),
    ]);
    graph.add_state("AdminAccess");
    graph.add_state("DBServer");
    graph.add_state("RootAccess");
    graph
}
