//! Pathwise Harness: scenarios and orchestration around the engine.
//!
//! The harness does NOT implement search logic — it delegates to
//! `pathwise-search`. Scenarios provide domain data only (graphs and
//! heuristic tables); the harness owns reporting, the plan-then-execute
//! agent loop, and trace transcript files.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod agent;
pub mod report;
pub mod scenarios;
pub mod transcript;
