//! Intrusion scenario: a ten-state attack graph.
//!
//! States are system conditions an attacker can reach; edge costs model
//! effort. The mission asks for the cheapest escalation from outside the
//! perimeter to root.

use pathwise_search::error::SearchError;
use pathwise_search::graph::{CostGraph, GraphProblem};
use pathwise_search::heuristic::Heuristic;

pub type Condition = &'static str;

pub const EXTERNAL: Condition = "External";
pub const ROOT_ACCESS: Condition = "RootAccess";

/// The attack graph. `RootAccess` is terminal: an empty row, not a
/// dangling target.
#[must_use]
pub fn attack_graph() -> CostGraph<Condition> {
    let mut graph = CostGraph::from_edges([
        ("External", "Scan", 1),
        ("Scan", "Bruteforce", 4),
        ("Scan", "WebExploit", 2),
        ("Bruteforce", "UserAccess", 3),
        ("WebExploit", "UserAccess", 2),
        ("UserAccess", "PrivilegeEsc", 3),
        ("UserAccess", "Pivot", 2),
        ("PrivilegeEsc", "AdminAccess", 2),
        ("AdminAccess", "RootAccess", 1),
        ("Pivot", "DBServer", 3),
        ("DBServer", "RootAccess", 2),
    ]);
    graph.add_state("RootAccess");
    graph
}

/// The escalation problem: external to root.
///
/// # Errors
///
/// Returns an unknown-endpoint error if the graph loses either endpoint.
pub fn escalation() -> Result<GraphProblem<Condition>, SearchError<Condition>> {
    GraphProblem::new(attack_graph(), EXTERNAL, ROOT_ACCESS)
}

/// Admissible remaining-effort estimates toward root.
#[must_use]
pub fn heuristic_to_root() -> Heuristic<Condition> {
    Heuristic::strict([
        ("External", 6),
        ("Scan", 5),
        ("Bruteforce", 4),
        ("WebExploit", 4),
        ("UserAccess", 3),
        ("PrivilegeEsc", 2),
        ("AdminAccess", 1),
        ("Pivot", 3),
        ("DBServer", 2),
        ("RootAccess", 0),
    ])
}
