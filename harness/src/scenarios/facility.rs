//! Facility patrol: twelve zones of an office building, costs in minutes.
//!
//! The canonical mission sends a guard from the security post to the
//! server room after a motion alert.

use pathwise_search::error::SearchError;
use pathwise_search::graph::{CostGraph, GraphProblem};
use pathwise_search::heuristic::Heuristic;

pub type Zone = &'static str;

pub const SECURITY_POST: Zone = "Poste_Securite";
pub const SERVER_ROOM: Zone = "Salle_Serveurs";

/// The building graph with walking times in minutes.
#[must_use]
pub fn zone_graph() -> CostGraph<Zone> {
    CostGraph::from_edges([
        ("Poste_Securite", "Entree", 2),
        ("Poste_Securite", "Hall", 3),
        ("Entree", "Poste_Securite", 2),
        ("Entree", "Hall", 1),
        ("Hall", "Poste_Securite", 3),
        ("Hall", "Entree", 1),
        ("Hall", "Couloir_B", 2),
        ("Hall", "Couloir_A", 2),
        ("Hall", "Cafeteria", 4),
        ("Couloir_B", "Hall", 2),
        ("Couloir_B", "Bureau_2", 3),
        ("Couloir_B", "Parking", 4),
        ("Couloir_A", "Hall", 2),
        ("Couloir_A", "Bureau_1", 3),
        ("Couloir_A", "Salle_Serveurs", 5),
        ("Bureau_2", "Couloir_B", 3),
        ("Bureau_2", "Cafeteria", 6),
        ("Bureau_1", "Couloir_A", 3),
        ("Bureau_1", "Salle_Serveurs", 5),
        ("Parking", "Couloir_B", 4),
        ("Parking", "Sortie_Urgence", 7),
        ("Cafeteria", "Hall", 4),
        ("Cafeteria", "Bureau_2", 6),
        ("Cafeteria", "Sortie_Urgence", 5),
        ("Cafeteria", "Toit", 5),
        ("Sortie_Urgence", "Parking", 7),
        ("Sortie_Urgence", "Cafeteria", 5),
        ("Toit", "Cafeteria", 5),
        ("Toit", "Salle_Serveurs", 4),
        ("Salle_Serveurs", "Couloir_A", 5),
        ("Salle_Serveurs", "Bureau_1", 5),
        ("Salle_Serveurs", "Toit", 4),
    ])
}

/// The alert-response problem: security post to server room.
///
/// # Errors
///
/// Returns an unknown-endpoint error if the graph loses either endpoint.
pub fn alert_response() -> Result<GraphProblem<Zone>, SearchError<Zone>> {
    GraphProblem::new(zone_graph(), SECURITY_POST, SERVER_ROOM)
}

/// Walking-time estimates toward the server room.
///
/// The Couloir_B entry slightly overestimates its true remaining time, so
/// this table is not admissible everywhere; Couloir_B is off every optimal
/// route, and A* still lands on the minimum-cost path here.
#[must_use]
pub fn heuristic_to_server_room() -> Heuristic<Zone> {
    Heuristic::strict([
        ("Poste_Securite", 7),
        ("Entree", 8),
        ("Hall", 5),
        ("Couloir_B", 10),
        ("Couloir_A", 4),
        ("Bureau_2", 11),
        ("Bureau_1", 4),
        ("Parking", 12),
        ("Cafeteria", 8),
        ("Sortie_Urgence", 13),
        ("Toit", 4),
        ("Salle_Serveurs", 0),
    ])
}
