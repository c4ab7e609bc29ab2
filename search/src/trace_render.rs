//! Deterministic rendering of recorded trace events.
//!
//! Events render as one JSON object per line. `serde_json` maps are
//! BTree-backed, so object keys serialize in sorted order and two runs
//! that produce the same events produce byte-identical lines. The digest
//! over the rendered bytes is what the determinism tests compare.

use std::fmt::Display;

use serde_json::{Map, Value};
use sha2::{Digest, Sha256};

use crate::contract::State;
use crate::trace::TraceEvent;

/// Render recorded events as JSON lines, one event per line.
#[must_use]
pub fn render_trace_lines<S: State + Display>(events: &[TraceEvent<S>]) -> Vec<String> {
    events.iter().map(render_event).collect()
}

/// SHA-256 over the rendered lines, newline-terminated, as lowercase hex.
#[must_use]
pub fn trace_digest(lines: &[String]) -> String {
    let mut hasher = Sha256::new();
    for line in lines {
        hasher.update(line.as_bytes());
        hasher.update(b"\n");
    }
    hex::encode(hasher.finalize())
}

fn render_event<S: State + Display>(event: &TraceEvent<S>) -> String {
    let mut object = Map::new();
    object.insert("point".into(), Value::from(event.point.label()));
    object.insert("strategy".into(), Value::from(event.strategy.label()));
    object.insert("iteration".into(), Value::from(event.iteration));
    object.insert(
        "current".into(),
        match &event.current {
            Some(state) => Value::from(state.to_string()),
            None => Value::Null,
        },
    );
    object.insert(
        "frontier".into(),
        Value::from(
            event
                .frontier
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<String>>(),
        ),
    );
    object.insert(
        "explored".into(),
        Value::from(
            event
                .explored
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<String>>(),
        ),
    );
    object.insert(
        "parents".into(),
        Value::Object(
            event
                .parents
                .iter()
                .map(|(child, parent)| (child.to_string(), Value::from(parent.to_string())))
                .collect(),
        ),
    );
    object.insert(
        "g_costs".into(),
        Value::Object(
            event
                .g_costs
                .iter()
                .map(|(state, cost)| (state.to_string(), Value::from(*cost)))
                .collect(),
        ),
    );
    Value::Object(object).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{CostGraph, GraphProblem};
    use crate::search::uniform_cost;
    use crate::trace::RecordingTracer;

    fn traced_run() -> Vec<TraceEvent<&'static str>> {
        let graph = CostGraph::from_edges([
            ("a", "b", 1),
            ("a", "c", 4),
            ("b", "d", 5),
            ("c", "d", 1),
        ]);
        let problem = GraphProblem::new(graph, "a", "d").unwrap();
        let mut recorder = RecordingTracer::new();
        uniform_cost(&problem, Some(&mut recorder)).unwrap();
        recorder.into_events()
    }

    #[test]
    fn identical_runs_render_identical_lines() {
        let first = render_trace_lines(&traced_run());
        let second = render_trace_lines(&traced_run());
        assert_eq!(first, second);
        assert_eq!(trace_digest(&first), trace_digest(&second));
    }

    #[test]
    fn lines_are_valid_json_with_expected_fields() {
        let lines = render_trace_lines(&traced_run());
        assert!(!lines.is_empty());

        let first: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
        assert_eq!(first["point"], "started");
        assert_eq!(first["strategy"], "ucs");
        assert_eq!(first["iteration"], 0);
        assert!(first["current"].is_null());
        assert_eq!(first["frontier"][0], "a");

        let last: serde_json::Value = serde_json::from_str(lines.last().unwrap()).unwrap();
        assert_eq!(last["point"], "goal");
        assert_eq!(last["current"], "d");
    }

    #[test]
    fn digest_distinguishes_different_traces() {
        let lines = render_trace_lines(&traced_run());
        let mut truncated = lines.clone();
        truncated.pop();
        assert_ne!(trace_digest(&lines), trace_digest(&truncated));
    }
}
