//! Shared helpers for pathwise benchmark suites.

use pathwise_search::graph::{CostGraph, GraphProblem};
use pathwise_search::heuristic::Heuristic;

/// Grid coordinate, `(x, y)`.
pub type Cell = (u32, u32);

/// An n-by-n grid with right and down edges; costs cycle 1..=3 so the
/// ordered strategies have real reordering work to do.
#[must_use]
pub fn grid_graph(n: u32) -> CostGraph<Cell> {
    let mut graph = CostGraph::new();
    for y in 0..n {
        for x in 0..n {
            let cost = u64::from((x + y) % 3 + 1);
            if x + 1 < n {
                graph.add_edge((x, y), (x + 1, y), cost);
            }
            if y + 1 < n {
                graph.add_edge((x, y), (x, y + 1), cost);
            }
        }
    }
    graph.add_state((n - 1, n - 1));
    graph
}

/// Manhattan distance to the far corner. Edge costs are at least 1, so
/// this never overestimates.
#[must_use]
pub fn grid_heuristic(n: u32) -> Heuristic<Cell> {
    let goal = (n - 1, n - 1);
    Heuristic::strict((0..n).flat_map(|y| {
        (0..n).map(move |x| {
            let estimate = u64::from(goal.0 - x) + u64::from(goal.1 - y);
            ((x, y), estimate)
        })
    }))
}

/// Corner-to-corner problem on an n-by-n grid.
///
/// # Panics
///
/// Panics if `n` is 0. Benchmark setup failures are fatal.
#[must_use]
pub fn grid_problem(n: u32) -> GraphProblem<Cell> {
    GraphProblem::new(grid_graph(n), (0, 0), (n - 1, n - 1)).expect("grid endpoints exist")
}
