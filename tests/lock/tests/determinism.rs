//! Determinism locks: repeated runs are byte-identical.
//!
//! Every strategy, run repeatedly on the same problem, must produce the
//! same path, the same counters, and the same rendered trace. The tracer
//! is an observer only, so enabling it must not change the result.

use pathwise_harness::scenarios::city;
use pathwise_search::graph::GraphProblem;
use pathwise_search::heuristic::Heuristic;
use pathwise_search::policy::SearchLimits;
use pathwise_search::search::{search, SearchReport, Strategy};
use pathwise_search::trace::RecordingTracer;
use pathwise_search::trace_render::{render_trace_lines, trace_digest};

const RUNS: usize = 10;

fn mission() -> (GraphProblem<&'static str>, Heuristic<&'static str>) {
    (
        city::route(city::AGDAL, city::OCEAN).unwrap(),
        city::heuristic_to_ocean(),
    )
}

fn traced_run(
    problem: &GraphProblem<&'static str>,
    strategy: Strategy<'_, &'static str>,
) -> (SearchReport<&'static str>, String) {
    let mut recorder = RecordingTracer::new();
    let report = search(problem, strategy, SearchLimits::UNBOUNDED, Some(&mut recorder)).unwrap();
    let lines = render_trace_lines(recorder.events());
    (report, trace_digest(&lines))
}

#[test]
fn repeated_runs_agree_for_every_strategy() {
    let (problem, heuristic) = mission();
    let strategies = [
        Strategy::DepthFirst,
        Strategy::BreadthFirst,
        Strategy::UniformCost,
        Strategy::AStar(&heuristic),
    ];

    for strategy in strategies {
        let (baseline_report, baseline_digest) = traced_run(&problem, strategy);
        for _ in 1..RUNS {
            let (report, digest) = traced_run(&problem, strategy);
            assert_eq!(
                report,
                baseline_report,
                "{} report drifted across runs",
                strategy.kind().label()
            );
            assert_eq!(
                digest,
                baseline_digest,
                "{} trace drifted across runs",
                strategy.kind().label()
            );
        }
    }
}

#[test]
fn tracing_does_not_change_the_result() {
    let (problem, heuristic) = mission();
    let strategies = [
        Strategy::DepthFirst,
        Strategy::BreadthFirst,
        Strategy::UniformCost,
        Strategy::AStar(&heuristic),
    ];

    for strategy in strategies {
        let (traced, _) = traced_run(&problem, strategy);
        let silent = search(&problem, strategy, SearchLimits::UNBOUNDED, None).unwrap();
        assert_eq!(traced, silent);
    }
}

#[test]
fn rendered_trace_lines_are_valid_json() {
    let (problem, _) = mission();
    let mut recorder = RecordingTracer::new();
    search(
        &problem,
        Strategy::UniformCost,
        SearchLimits::UNBOUNDED,
        Some(&mut recorder),
    )
    .unwrap();

    for line in render_trace_lines(recorder.events()) {
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert!(value["point"].is_string());
        assert!(value["iteration"].is_u64());
    }
}

#[test]
fn transcript_files_are_reproducible() {
    let (problem, _) = mission();
    let dir = tempfile::tempdir().unwrap();

    let mut digests = Vec::new();
    for run in 0..RUNS {
        let mut recorder = RecordingTracer::new();
        search(
            &problem,
            Strategy::BreadthFirst,
            SearchLimits::UNBOUNDED,
            Some(&mut recorder),
        )
        .unwrap();
        let summary = pathwise_harness::transcript::write_transcript(
            dir.path(),
            &format!("run-{run}"),
            recorder.events(),
        )
        .unwrap();
        digests.push(summary.digest);
    }

    assert!(digests.windows(2).all(|pair| pair[0] == pair[1]));
}
