//! Run all four strategies over the bundled scenarios and print the
//! comparison tables, then walk one planned route with the agent loop.

use pathwise_harness::agent::{execute_plan, PlanAgent, RouteEnvironment};
use pathwise_harness::report::{comparison_table, render_path};
use pathwise_harness::scenarios::{city, facility, intrusion};
use pathwise_search::error::SearchError;
use pathwise_search::graph::GraphProblem;
use pathwise_search::heuristic::Heuristic;
use pathwise_search::search::{a_star, breadth_first, depth_first, uniform_cost, SearchReport};

type Label = &'static str;

fn run_all(
    problem: &GraphProblem<Label>,
    heuristic: &Heuristic<Label>,
) -> Result<Vec<SearchReport<Label>>, SearchError<Label>> {
    Ok(vec![
        depth_first(problem, None)?,
        breadth_first(problem, None)?,
        uniform_cost(problem, None)?,
        a_star(problem, heuristic, None)?,
    ])
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("== city: {} -> {} ==", city::AGDAL, city::OCEAN);
    let problem = city::route(city::AGDAL, city::OCEAN)?;
    print!("{}", comparison_table(&run_all(&problem, &city::heuristic_to_ocean())?));

    println!();
    println!(
        "== facility: {} -> {} ==",
        facility::SECURITY_POST,
        facility::SERVER_ROOM
    );
    let problem = facility::alert_response()?;
    print!(
        "{}",
        comparison_table(&run_all(&problem, &facility::heuristic_to_server_room())?)
    );

    println!();
    println!(
        "== intrusion: {} -> {} ==",
        intrusion::EXTERNAL,
        intrusion::ROOT_ACCESS
    );
    let problem = intrusion::escalation()?;
    print!(
        "{}",
        comparison_table(&run_all(&problem, &intrusion::heuristic_to_root())?)
    );

    println!();
    println!("== agent walk: {} -> {} ==", city::AGDAL, city::KASBAH);
    let problem = city::route(city::AGDAL, city::KASBAH)?;
    let report = a_star(&problem, &city::heuristic_to_kasbah(), None)?;
    let Some(mut agent) = PlanAgent::from_report(&report) else {
        println!("no plan found");
        return Ok(());
    };
    let mut env = RouteEnvironment::new(city::district_graph(), city::AGDAL);
    let outcome = execute_plan(&mut env, &mut agent, 20)?;
    println!("walked: {}", render_path(&outcome.visited));
    println!(
        "cost charged: {} (plan completed: {})",
        outcome.cost_charged, outcome.plan_completed
    );

    Ok(())
}
