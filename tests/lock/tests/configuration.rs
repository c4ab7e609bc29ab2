//! Configuration-fault locks: the error taxonomy and the limits knob.
//!
//! Faults in the problem setup abort with a typed error; they are never
//! folded into the "no path" outcome, and "no path" never becomes an
//! error.

use pathwise_harness::scenarios::{city, intrusion};
use pathwise_search::error::SearchError;
use pathwise_search::graph::{CostGraph, GraphProblem};
use pathwise_search::heuristic::Heuristic;
use pathwise_search::policy::SearchLimits;
use pathwise_search::search::{a_star, breadth_first, search, Strategy, Termination};

#[test]
fn unknown_endpoints_fail_at_construction() {
    let err = city::route("Atlantis", city::OCEAN).unwrap_err();
    assert_eq!(err, SearchError::UnknownInitialState { state: "Atlantis" });

    let err = city::route(city::AGDAL, "Atlantis").unwrap_err();
    assert_eq!(err, SearchError::UnknownGoalState { state: "Atlantis" });
}

#[test]
fn dangling_edge_aborts_at_expansion_not_before() {
    // "Ghost" is reachable, is not the goal, and has no adjacency row.
    let graph = CostGraph::from_edges([("Gate", "Ghost", 1), ("Gate", "Yard", 3), ("Yard", "Vault", 1)]);
    let problem = GraphProblem::new(graph, "Gate", "Vault").unwrap();

    let err = breadth_first(&problem, None).unwrap_err();
    assert_eq!(
        err,
        SearchError::DanglingEdge {
            state: "Ghost",
            neighbor: None
        }
    );
}

#[test]
fn strict_heuristic_hole_aborts_informed_search() {
    let problem = intrusion::escalation().unwrap();
    // Everything except WebExploit, which is reachable from Scan.
    let holed = Heuristic::strict([
        ("External", 6),
        ("Scan", 5),
        ("Bruteforce", 4),
        ("UserAccess", 3),
        ("PrivilegeEsc", 2),
        ("AdminAccess", 1),
        ("Pivot", 3),
        ("DBServer", 2),
        ("RootAccess", 0),
    ]);

    let err = a_star(&problem, &holed, None).unwrap_err();
    assert_eq!(err, SearchError::UndefinedHeuristic { state: "WebExploit" });
}

#[test]
fn uninformed_fallback_still_finds_the_optimum() {
    let problem = intrusion::escalation().unwrap();
    let empty = Heuristic::with_uninformed_fallback([]);

    let report = a_star(&problem, &empty, None).unwrap();
    assert_eq!(report.solution.unwrap().cost, 11);
}

#[test]
fn budget_termination_is_distinct_from_exhaustion() {
    let problem = city::route(city::AGDAL, city::OCEAN).unwrap();

    let capped = search(
        &problem,
        Strategy::UniformCost,
        SearchLimits::expansions(1),
        None,
    )
    .unwrap();
    assert!(capped.solution.is_none());
    assert_eq!(capped.termination, Termination::ExpansionBudgetExceeded);

    let unbounded = search(
        &problem,
        Strategy::UniformCost,
        SearchLimits::UNBOUNDED,
        None,
    )
    .unwrap();
    assert_eq!(unbounded.termination, Termination::GoalReached);
}

#[test]
fn generous_budget_does_not_change_the_answer() {
    let problem = city::route(city::AGDAL, city::OCEAN).unwrap();

    let capped = search(
        &problem,
        Strategy::UniformCost,
        SearchLimits::expansions(1_000),
        None,
    )
    .unwrap();
    let unbounded = search(
        &problem,
        Strategy::UniformCost,
        SearchLimits::UNBOUNDED,
        None,
    )
    .unwrap();
    assert_eq!(capped, unbounded);
}
