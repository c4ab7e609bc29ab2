//! Plan-then-execute agent loop.
//!
//! The agent plans once from a finished [`SearchReport`] and then walks
//! the plan open-loop against a [`RouteEnvironment`] that charges edge
//! costs. There is no replanning: if the environment rejects a move the
//! walk fails, and a step cap guards against malformed plans.

use pathwise_search::contract::State;
use pathwise_search::error::SearchError;
use pathwise_search::graph::CostGraph;
use pathwise_search::search::SearchReport;

/// The world the agent moves through: a graph, a position, and a meter.
#[derive(Debug)]
pub struct RouteEnvironment<S: State> {
    graph: CostGraph<S>,
    location: S,
    elapsed: u64,
}

impl<S: State> RouteEnvironment<S> {
    /// Place an agent at `start` on `graph`.
    pub fn new(graph: CostGraph<S>, start: S) -> Self {
        Self {
            graph,
            location: start,
            elapsed: 0,
        }
    }

    /// Current position.
    #[must_use]
    pub fn location(&self) -> &S {
        &self.location
    }

    /// Total cost charged so far.
    #[must_use]
    pub fn elapsed(&self) -> u64 {
        self.elapsed
    }

    /// Move to an adjacent state, charging the edge cost.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::DanglingEdge`] if `to` is not adjacent to
    /// the current location; the position does not change.
    pub fn travel(&mut self, to: &S) -> Result<u64, SearchError<S>> {
        let cost = self
            .graph
            .edge_cost(&self.location, to)
            .ok_or_else(|| SearchError::DanglingEdge {
                state: self.location.clone(),
                neighbor: Some(to.clone()),
            })?;
        self.location = to.clone();
        self.elapsed = self.elapsed.saturating_add(cost);
        Ok(cost)
    }
}

/// An agent holding a fixed plan and a cursor into it.
#[derive(Debug)]
pub struct PlanAgent<S> {
    plan: Vec<S>,
    cursor: usize,
}

impl<S: State> PlanAgent<S> {
    /// Adopt the plan from a solved report, or `None` if it found no path.
    #[must_use]
    pub fn from_report(report: &SearchReport<S>) -> Option<Self> {
        report.solution.as_ref().map(|solution| Self {
            plan: solution.path.clone(),
            cursor: 0,
        })
    }

    /// The full plan, initial state included.
    #[must_use]
    pub fn plan(&self) -> &[S] {
        &self.plan
    }

    /// The next planned move, or `None` when the plan is spent.
    ///
    /// The cursor advances on each call; the first state of the plan is
    /// where the agent starts, not a move.
    pub fn next_action(&mut self) -> Option<&S> {
        self.cursor += 1;
        self.plan.get(self.cursor)
    }
}

/// What a finished walk looked like.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkOutcome<S> {
    /// States visited, starting position included.
    pub visited: Vec<S>,
    /// Total cost the environment charged.
    pub cost_charged: u64,
    /// Whether the agent spent its whole plan.
    pub plan_completed: bool,
}

/// Walk `agent`'s plan against `env`, up to `max_steps` moves.
///
/// # Errors
///
/// Propagates the environment's rejection of a planned move. Plans that
/// came from a search over the same graph never trigger this.
pub fn execute_plan<S: State>(
    env: &mut RouteEnvironment<S>,
    agent: &mut PlanAgent<S>,
    max_steps: u32,
) -> Result<WalkOutcome<S>, SearchError<S>> {
    let mut visited = vec![env.location().clone()];
    let mut steps = 0;

    loop {
        if steps >= max_steps {
            return Ok(WalkOutcome {
                visited,
                cost_charged: env.elapsed(),
                plan_completed: false,
            });
        }
        let Some(next) = agent.next_action().cloned() else {
            return Ok(WalkOutcome {
                visited,
                cost_charged: env.elapsed(),
                plan_completed: true,
            });
        };
        env.travel(&next)?;
        visited.push(next);
        steps += 1;
    }
}
