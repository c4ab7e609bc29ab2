//! Strategy selection and search limits.

use crate::contract::State;
use crate::frontier::Discipline;
use crate::heuristic::Heuristic;

/// Which of the four strategies a report was produced by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    DepthFirst,
    BreadthFirst,
    UniformCost,
    AStar,
}

impl StrategyKind {
    /// Stable short label, used in traces and reports.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::DepthFirst => "dfs",
            Self::BreadthFirst => "bfs",
            Self::UniformCost => "ucs",
            Self::AStar => "a-star",
        }
    }
}

/// Strategy selector passed to [`search`](crate::search::search).
///
/// A* borrows its heuristic for the duration of the call; the other three
/// strategies never consult one.
#[derive(Debug, Clone, Copy)]
pub enum Strategy<'h, S> {
    DepthFirst,
    BreadthFirst,
    UniformCost,
    AStar(&'h Heuristic<S>),
}

impl<S: State> Strategy<'_, S> {
    /// The kind tag for this strategy.
    #[must_use]
    pub fn kind(&self) -> StrategyKind {
        match self {
            Self::DepthFirst => StrategyKind::DepthFirst,
            Self::BreadthFirst => StrategyKind::BreadthFirst,
            Self::UniformCost => StrategyKind::UniformCost,
            Self::AStar(_) => StrategyKind::AStar,
        }
    }

    /// The frontier discipline this strategy orders by.
    #[must_use]
    pub fn discipline(&self) -> Discipline {
        match self {
            Self::DepthFirst => Discipline::Lifo,
            Self::BreadthFirst => Discipline::Fifo,
            Self::UniformCost | Self::AStar(_) => Discipline::Ordered,
        }
    }
}

/// Caller-imposed bound on a search invocation.
///
/// The core itself has no timeout; a caller wanting one sets an expansion
/// cap and receives a budget termination distinct from genuine frontier
/// exhaustion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchLimits {
    /// Hard cap on node expansions, or `None` for unbounded.
    pub max_expansions: Option<u64>,
}

impl SearchLimits {
    /// No bound.
    pub const UNBOUNDED: Self = Self {
        max_expansions: None,
    };

    /// Cap expansions at `n`.
    #[must_use]
    pub fn expansions(n: u64) -> Self {
        Self {
            max_expansions: Some(n),
        }
    }
}
