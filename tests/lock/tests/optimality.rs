//! Optimality, completeness, and path-validity locks.

use lock_tests::{path_cost, severed_attack_graph};
use pathwise_harness::scenarios::{city, facility, intrusion};
use pathwise_search::contract::Problem;
use pathwise_search::graph::GraphProblem;
use pathwise_search::heuristic::Heuristic;
use pathwise_search::search::{
    a_star, breadth_first, depth_first, uniform_cost, SearchReport, Termination,
};

type Label = &'static str;

fn scenarios() -> Vec<(Label, GraphProblem<Label>, Heuristic<Label>)> {
    vec![
        (
            "city",
            city::route(city::AGDAL, city::OCEAN).unwrap(),
            city::heuristic_to_ocean(),
        ),
        (
            "facility",
            facility::alert_response().unwrap(),
            facility::heuristic_to_server_room(),
        ),
        (
            "intrusion",
            intrusion::escalation().unwrap(),
            intrusion::heuristic_to_root(),
        ),
    ]
}

fn all_four(
    problem: &GraphProblem<Label>,
    heuristic: &Heuristic<Label>,
) -> Vec<SearchReport<Label>> {
    vec![
        depth_first(problem, None).unwrap(),
        breadth_first(problem, None).unwrap(),
        uniform_cost(problem, None).unwrap(),
        a_star(problem, heuristic, None).unwrap(),
    ]
}

#[test]
fn escalation_acceptance() {
    let problem = intrusion::escalation().unwrap();
    let expected = vec![
        "External",
        "Scan",
        "WebExploit",
        "UserAccess",
        "PrivilegeEsc",
        "AdminAccess",
        "RootAccess",
    ];

    let blind = uniform_cost(&problem, None).unwrap().solution.unwrap();
    assert_eq!(blind.path, expected);
    assert_eq!(blind.cost, 11);

    let heuristic = intrusion::heuristic_to_root();
    let informed = a_star(&problem, &heuristic, None).unwrap().solution.unwrap();
    assert_eq!(informed.path, expected);
    assert_eq!(informed.cost, 11);

    let fewest = breadth_first(&problem, None).unwrap().solution.unwrap();
    assert_eq!(fewest.path.len() - 1, 6, "no shorter hop count exists");

    let depth = depth_first(&problem, None).unwrap().solution.unwrap();
    assert_eq!(depth.path.first(), Some(&"External"));
    assert_eq!(depth.path.last(), Some(&"RootAccess"));
}

#[test]
fn every_strategy_solves_every_scenario() {
    for (name, problem, heuristic) in scenarios() {
        for report in all_four(&problem, &heuristic) {
            assert_eq!(
                report.termination,
                Termination::GoalReached,
                "{} failed on {name}",
                report.strategy.label()
            );
            assert!(report.is_solved());
        }
    }
}

#[test]
fn every_returned_path_is_walkable_and_costed_correctly() {
    for (name, problem, heuristic) in scenarios() {
        for report in all_four(&problem, &heuristic) {
            let solution = report.solution.unwrap();
            assert_eq!(solution.path.first(), Some(&problem.initial_state()));
            assert!(problem.is_goal(solution.path.last().unwrap()));
            assert_eq!(
                path_cost(problem.graph(), &solution.path),
                solution.cost,
                "{} misreported cost on {name}",
                report.strategy.label()
            );
        }
    }
}

#[test]
fn uniform_cost_is_never_beaten() {
    for (name, problem, heuristic) in scenarios() {
        let optimum = uniform_cost(&problem, None)
            .unwrap()
            .solution
            .unwrap()
            .cost;
        for report in all_four(&problem, &heuristic) {
            assert!(
                report.solution.unwrap().cost >= optimum,
                "{} undercut the optimum on {name}",
                report.strategy.label()
            );
        }
    }
}

#[test]
fn informed_search_matches_the_blind_optimum() {
    for (name, problem, heuristic) in scenarios() {
        let blind = uniform_cost(&problem, None).unwrap().solution.unwrap();
        let informed = a_star(&problem, &heuristic, None).unwrap().solution.unwrap();
        assert_eq!(informed.cost, blind.cost, "costs diverged on {name}");
    }
}

#[test]
fn unreachable_goal_is_no_path_for_all_strategies() {
    let problem = GraphProblem::new(severed_attack_graph(), "External", "RootAccess").unwrap();
    let heuristic = intrusion::heuristic_to_root();

    for report in all_four(&problem, &heuristic) {
        assert!(report.solution.is_none());
        assert_eq!(
            report.termination,
            Termination::FrontierExhausted,
            "{} must exhaust, not error",
            report.strategy.label()
        );
    }
}

#[test]
fn start_equal_to_goal_is_a_single_state_path() {
    let problem = city::route(city::AGDAL, city::AGDAL).unwrap();
    let heuristic = city::heuristic_to_ocean();

    for report in all_four(&problem, &heuristic) {
        let solution = report.solution.unwrap();
        assert_eq!(solution.path, vec![city::AGDAL]);
        assert_eq!(solution.cost, 0);
        assert_eq!(report.stats.expansions, 0);
    }
}
