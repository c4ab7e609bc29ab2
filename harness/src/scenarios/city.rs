//! City navigation: eight districts of Rabat, edge costs in minutes.
//!
//! Travel times are symmetric, but the graph is stored directed with both
//! directions listed explicitly, matching the survey data it came from.

use pathwise_search::error::SearchError;
use pathwise_search::graph::{CostGraph, GraphProblem};
use pathwise_search::heuristic::Heuristic;

pub type District = &'static str;

pub const AGDAL: District = "Agdal";
pub const OCEAN: District = "Ocean";
pub const KASBAH: District = "Kasbah";

/// The district graph with travel times in minutes.
#[must_use]
pub fn district_graph() -> CostGraph<District> {
    CostGraph::from_edges([
        ("Agdal", "Hassan", 10),
        ("Agdal", "Hay_Riad", 15),
        ("Agdal", "Aviation", 8),
        ("Hassan", "Agdal", 10),
        ("Hassan", "Ocean", 20),
        ("Hassan", "Medina", 8),
        ("Hassan", "Hay_Riad", 12),
        ("Medina", "Hassan", 8),
        ("Medina", "Ocean", 12),
        ("Medina", "Kasbah", 5),
        ("Ocean", "Hassan", 20),
        ("Ocean", "Medina", 12),
        ("Ocean", "Souissi", 18),
        ("Ocean", "Aviation", 15),
        ("Souissi", "Ocean", 18),
        ("Souissi", "Aviation", 10),
        ("Souissi", "Hay_Riad", 20),
        ("Hay_Riad", "Agdal", 15),
        ("Hay_Riad", "Hassan", 12),
        ("Hay_Riad", "Souissi", 20),
        ("Hay_Riad", "Aviation", 8),
        ("Aviation", "Agdal", 8),
        ("Aviation", "Hay_Riad", 8),
        ("Aviation", "Souissi", 10),
        ("Aviation", "Ocean", 15),
        ("Kasbah", "Medina", 5),
    ])
}

/// A route-finding problem between two districts.
///
/// # Errors
///
/// Returns an unknown-endpoint error if either district is not in the
/// graph.
pub fn route(from: District, to: District) -> Result<GraphProblem<District>, SearchError<District>> {
    GraphProblem::new(district_graph(), from, to)
}

/// Straight-line travel-time estimates toward Ocean.
#[must_use]
pub fn heuristic_to_ocean() -> Heuristic<District> {
    Heuristic::strict([
        ("Agdal", 22),
        ("Hassan", 20),
        ("Medina", 12),
        ("Ocean", 0),
        ("Souissi", 18),
        ("Hay_Riad", 25),
        ("Aviation", 15),
        ("Kasbah", 17),
    ])
}

/// Straight-line travel-time estimates toward Kasbah.
#[must_use]
pub fn heuristic_to_kasbah() -> Heuristic<District> {
    Heuristic::strict([
        ("Agdal", 18),
        ("Hassan", 8),
        ("Medina", 5),
        ("Ocean", 17),
        ("Souissi", 35),
        ("Hay_Riad", 27),
        ("Aviation", 26),
        ("Kasbah", 0),
    ])
}
