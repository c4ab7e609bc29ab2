//! Search observability: tracer callbacks and recorded events.
//!
//! A tracer is notified at three points — search initialization, each
//! expansion, and goal discovery. It is purely side-effecting: it never
//! alters frontier contents, costs, or control flow, and disabling it
//! produces identical search results. Snapshots are only assembled when a
//! tracer is attached.

use std::collections::BTreeSet;

use crate::contract::State;
use crate::policy::StrategyKind;

/// A view of the search state at one notification point.
///
/// Everything in the snapshot iterates in a deterministic order: the
/// frontier in pop order, the explored set in label order, and the parent
/// and cost maps in label order of the child state.
#[derive(Debug)]
pub struct TraceSnapshot<'a, S> {
    /// The strategy driving the search.
    pub strategy: StrategyKind,
    /// Expansion count so far (0 at initialization).
    pub iteration: u64,
    /// The state being expanded, if any (`None` at initialization).
    pub current: Option<&'a S>,
    /// Pending frontier states in pop order; duplicates possible under
    /// lazy deletion.
    pub frontier: Vec<S>,
    /// States already expanded.
    pub explored: &'a BTreeSet<S>,
    /// Best-known parent per discovered state, `(child, parent)` pairs
    /// sorted by child.
    pub parents: Vec<(S, S)>,
    /// Best-known cumulative cost per discovered state, sorted by state.
    pub g_costs: Vec<(S, u64)>,
}

/// Observer notified as the search core runs.
///
/// Implementations must not assume they see every discovered state exactly
/// once; under lazy deletion a state may appear in several frontier
/// snapshots before it is expanded.
pub trait Tracer<S: State> {
    /// The search is about to enter its loop; the frontier holds the root.
    fn search_started(&mut self, snapshot: &TraceSnapshot<'_, S>);

    /// A state was popped, survived the stale check, and is being expanded.
    fn node_expanded(&mut self, snapshot: &TraceSnapshot<'_, S>);

    /// The goal test succeeded on the state just popped.
    fn goal_reached(&mut self, snapshot: &TraceSnapshot<'_, S>);
}

/// Which notification produced a recorded event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TracePoint {
    Started,
    Expanded,
    Goal,
}

impl TracePoint {
    /// Stable label used in rendered traces.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Started => "started",
            Self::Expanded => "expanded",
            Self::Goal => "goal",
        }
    }
}

/// An owned copy of one snapshot, suitable for rendering after the search
/// call returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceEvent<S> {
    pub point: TracePoint,
    pub strategy: StrategyKind,
    pub iteration: u64,
    pub current: Option<S>,
    pub frontier: Vec<S>,
    pub explored: Vec<S>,
    pub parents: Vec<(S, S)>,
    pub g_costs: Vec<(S, u64)>,
}

impl<S: State> TraceEvent<S> {
    /// Copy a borrowed snapshot into an owned event.
    #[must_use]
    pub fn capture(point: TracePoint, snapshot: &TraceSnapshot<'_, S>) -> Self {
        Self {
            point,
            strategy: snapshot.strategy,
            iteration: snapshot.iteration,
            current: snapshot.current.cloned(),
            frontier: snapshot.frontier.clone(),
            explored: snapshot.explored.iter().cloned().collect(),
            parents: snapshot.parents.clone(),
            g_costs: snapshot.g_costs.clone(),
        }
    }
}

/// Tracer that records every notification as an owned [`TraceEvent`].
#[derive(Debug, Default)]
pub struct RecordingTracer<S> {
    events: Vec<TraceEvent<S>>,
}

impl<S: State> RecordingTracer<S> {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// The events recorded so far, in notification order.
    #[must_use]
    pub fn events(&self) -> &[TraceEvent<S>] {
        &self.events
    }

    /// Consume the recorder, yielding its events.
    #[must_use]
    pub fn into_events(self) -> Vec<TraceEvent<S>> {
        self.events
    }
}

impl<S: State> Tracer<S> for RecordingTracer<S> {
    fn search_started(&mut self, snapshot: &TraceSnapshot<'_, S>) {
        self.events
            .push(TraceEvent::capture(TracePoint::Started, snapshot));
    }

    fn node_expanded(&mut self, snapshot: &TraceSnapshot<'_, S>) {
        self.events
            .push(TraceEvent::capture(TracePoint::Expanded, snapshot));
    }

    fn goal_reached(&mut self, snapshot: &TraceSnapshot<'_, S>) {
        self.events
            .push(TraceEvent::capture(TracePoint::Goal, snapshot));
    }
}
