//! Ready-made scenario problems.
//!
//! Each scenario module exports a graph builder, a problem constructor for
//! its canonical mission, and the heuristic tables the scenario defines.
//! Adjacency order inside each module is part of the scenario: it is the
//! tie-break source for the cost-blind strategies, so the edge lists are
//! data, not style.

pub mod city;
pub mod facility;
pub mod intrusion;
