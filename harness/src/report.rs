//! Pure formatting of search reports.
//!
//! The engine returns data; rendering lives here so the strategies stay
//! presentation-free. All functions return `String`s and never print.

use std::fmt::Display;
use std::fmt::Write as _;

use pathwise_search::contract::State;
use pathwise_search::search::{SearchReport, Termination};

/// Join a path as `a -> b -> c`.
#[must_use]
pub fn render_path<S: State + Display>(path: &[S]) -> String {
    let mut out = String::new();
    for (i, state) in path.iter().enumerate() {
        if i > 0 {
            out.push_str(" -> ");
        }
        let _ = write!(out, "{state}");
    }
    out
}

/// Multi-line summary of one run.
#[must_use]
pub fn run_summary<S: State + Display>(report: &SearchReport<S>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "strategy: {}", report.strategy.label());
    match &report.solution {
        Some(solution) => {
            let _ = writeln!(out, "path: {}", render_path(&solution.path));
            let _ = writeln!(out, "cost: {}", solution.cost);
            let _ = writeln!(out, "hops: {}", solution.path.len() - 1);
        }
        None => {
            let outcome = match report.termination {
                Termination::ExpansionBudgetExceeded => "no path (budget exceeded)",
                _ => "no path",
            };
            let _ = writeln!(out, "outcome: {outcome}");
        }
    }
    let _ = writeln!(
        out,
        "expansions: {}, nodes: {}, stale: {}, frontier high water: {}",
        report.stats.expansions,
        report.stats.nodes_created,
        report.stats.stale_skipped,
        report.stats.frontier_high_water
    );
    out
}

/// Side-by-side table for several runs of the same problem.
///
/// Columns: strategy, path, cost, hops. Unsolved runs render as
/// `(no path)` with dashes.
#[must_use]
pub fn comparison_table<S: State + Display>(reports: &[SearchReport<S>]) -> String {
    let rows: Vec<(String, String, String, String)> = reports
        .iter()
        .map(|report| {
            let label = report.strategy.label().to_string();
            match &report.solution {
                Some(solution) => (
                    label,
                    render_path(&solution.path),
                    solution.cost.to_string(),
                    (solution.path.len() - 1).to_string(),
                ),
                None => (label, "(no path)".to_string(), "-".to_string(), "-".to_string()),
            }
        })
        .collect();

    let path_width = rows
        .iter()
        .map(|(_, path, _, _)| path.len())
        .chain(std::iter::once("path".len()))
        .max()
        .unwrap_or(4);

    let mut out = String::new();
    let _ = writeln!(out, "{:<10} {:<path_width$} {:>6} {:>6}", "strategy", "path", "cost", "hops");
    for (label, path, cost, hops) in rows {
        let _ = writeln!(out, "{label:<10} {path:<path_width$} {cost:>6} {hops:>6}");
    }
    out
}
