//! Pathwise Search: a deterministic, strategy-parameterized graph-search engine.
//!
//! The engine runs one shared expand/select loop over a weighted directed
//! graph; the frontier discipline (LIFO, FIFO, or priority-by-key) is what
//! distinguishes the four strategies — depth-first, breadth-first,
//! uniform-cost, and A* with a caller-supplied heuristic.
//!
//! # Crate dependency graph
//!
//! ```text
//! pathwise_search  ←  pathwise_harness
//! (engine, graph)     (scenarios, report, agent)
//! ```
//!
//! # Key types
//!
//! - [`Problem`](contract::Problem) — read-only view binding a graph, an
//!   initial state, and a goal predicate
//! - [`CostGraph`](graph::CostGraph) — directed, insertion-ordered adjacency
//! - [`Frontier`](frontier::Frontier) — one container, three disciplines
//! - [`Heuristic`](heuristic::Heuristic) — state → estimate mapping with an
//!   explicit missing-entry policy
//! - [`SearchReport`](search::SearchReport) — outcome, termination reason,
//!   and counters for one search invocation
//! - [`Tracer`](trace::Tracer) — observer notified at start, each expansion,
//!   and goal discovery; never influences the result

#![forbid(unsafe_code)]

pub mod contract;
pub mod error;
pub mod frontier;
pub mod graph;
pub mod heuristic;
pub mod node;
pub mod policy;
pub mod search;
pub mod trace;
pub mod trace_render;
