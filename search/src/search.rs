//! Search entry point and the shared expansion loop.
//!
//! All four strategies run the same loop; they differ only in frontier
//! discipline and admission rule. Duplicate frontier entries are filtered
//! lazily at pop time (stale check against the explored set and, for the
//! ordered strategies, the best-known cost map) instead of being removed
//! eagerly from the frontier.

use std::collections::{BTreeSet, HashMap};

use crate::contract::{Problem, State};
use crate::error::SearchError;
use crate::frontier::{Discipline, Frontier, FrontierEntry};
use crate::heuristic::Heuristic;
use crate::node::{PriorityKey, SearchNode};
use crate::policy::{SearchLimits, StrategyKind};
pub use crate::policy::Strategy;
use crate::trace::{TraceSnapshot, Tracer};

/// A found path with its total cost.
///
/// The path runs initial → … → goal inclusive; its cost equals the sum of
/// edge costs along it, which equals the cumulative cost recorded at the
/// goal node when it was popped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution<S> {
    pub path: Vec<S>,
    pub cost: u64,
}

/// Why the search loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The goal test succeeded on a popped state.
    GoalReached,
    /// The frontier emptied without satisfying the goal test. This is the
    /// genuine "no path" outcome.
    FrontierExhausted,
    /// The caller-imposed expansion cap was hit first. Distinct from
    /// [`Termination::FrontierExhausted`]: a path may still exist.
    ExpansionBudgetExceeded,
}

/// Counters for one search invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// States expanded (neighbor enumerations performed).
    pub expansions: u64,
    /// Nodes created in the search-tree arena.
    pub nodes_created: u64,
    /// Frontier entries discarded by the lazy stale check.
    pub stale_skipped: u64,
    /// High-water mark of frontier size.
    pub frontier_high_water: u64,
}

/// Result of a search invocation.
///
/// Absence of a path is a normal outcome, not an error: `solution` is
/// `None` and `termination` says whether the frontier genuinely exhausted
/// or the expansion budget ran out. Configuration faults never produce a
/// report; they surface as [`SearchError`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport<S> {
    /// The strategy that produced this report.
    pub strategy: StrategyKind,
    /// The found path, if any.
    pub solution: Option<Solution<S>>,
    /// Why the loop stopped.
    pub termination: Termination,
    /// Counters for this invocation.
    pub stats: SearchStats,
}

impl<S> SearchReport<S> {
    /// Whether the search reached the goal.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.solution.is_some()
    }
}

/// Depth-first search: LIFO frontier, cost-blind.
///
/// Complete on finite graphs; the returned path is valid but carries no
/// optimality guarantee.
///
/// # Errors
///
/// Propagates any [`SearchError`] raised by the problem's graph view.
pub fn depth_first<P: Problem>(
    problem: &P,
    tracer: Option<&mut dyn Tracer<P::State>>,
) -> Result<SearchReport<P::State>, SearchError<P::State>> {
    search(problem, Strategy::DepthFirst, SearchLimits::UNBOUNDED, tracer)
}

/// Breadth-first search: FIFO frontier, cost-blind.
///
/// Returns a path with the minimum number of edges; minimum cost only if
/// all edges cost the same.
///
/// # Errors
///
/// Propagates any [`SearchError`] raised by the problem's graph view.
pub fn breadth_first<P: Problem>(
    problem: &P,
    tracer: Option<&mut dyn Tracer<P::State>>,
) -> Result<SearchReport<P::State>, SearchError<P::State>> {
    search(
        problem,
        Strategy::BreadthFirst,
        SearchLimits::UNBOUNDED,
        tracer,
    )
}

/// Uniform-cost search: frontier ordered by cumulative cost `g`.
///
/// Returns a minimum-cost path for any graph with non-negative costs.
///
/// # Errors
///
/// Propagates any [`SearchError`] raised by the problem's graph view.
pub fn uniform_cost<P: Problem>(
    problem: &P,
    tracer: Option<&mut dyn Tracer<P::State>>,
) -> Result<SearchReport<P::State>, SearchError<P::State>> {
    search(
        problem,
        Strategy::UniformCost,
        SearchLimits::UNBOUNDED,
        tracer,
    )
}

/// A* search: frontier ordered by `g + h(state)`.
///
/// Returns a minimum-cost path when `heuristic` is admissible (never
/// overestimates the true remaining cost); admissibility is the caller's
/// obligation and is not verified here.
///
/// # Errors
///
/// Propagates graph-view faults, and
/// [`SearchError::UndefinedHeuristic`] when a reachable state has no
/// estimate under the strict policy.
pub fn a_star<P: Problem>(
    problem: &P,
    heuristic: &Heuristic<P::State>,
    tracer: Option<&mut dyn Tracer<P::State>>,
) -> Result<SearchReport<P::State>, SearchError<P::State>> {
    search(
        problem,
        Strategy::AStar(heuristic),
        SearchLimits::UNBOUNDED,
        tracer,
    )
}

/// Run one search to completion under the given strategy and limits.
///
/// # Errors
///
/// Returns a [`SearchError`] on the first configuration fault encountered:
/// a dangling edge at expansion, or (A*, strict policy) a reachable state
/// with no heuristic estimate. "No path" is not an error; see
/// [`SearchReport`].
#[allow(clippy::too_many_lines)]
pub fn search<P: Problem>(
    problem: &P,
    strategy: Strategy<'_, P::State>,
    limits: SearchLimits,
    mut tracer: Option<&mut dyn Tracer<P::State>>,
) -> Result<SearchReport<P::State>, SearchError<P::State>> {
    let kind = strategy.kind();
    let initial = problem.initial_state();

    let mut nodes: Vec<SearchNode<P::State>> = Vec::new();
    let mut explored: BTreeSet<P::State> = BTreeSet::new();
    // state → arena id of its current-best node; the source for parent and
    // cumulative-cost snapshots.
    let mut admitted: HashMap<P::State, usize> = HashMap::new();
    // Best known g per state; consulted only by the ordered strategies.
    let mut best_g: HashMap<P::State, u64> = HashMap::new();
    let mut creation_order: u64 = 0;
    let mut frontier: Frontier<P::State> = Frontier::new(strategy.discipline());
    let mut stats = SearchStats::default();
    let mut iteration: u64 = 0;

    let root_id = push_node(
        &mut nodes,
        &mut admitted,
        initial.clone(),
        None,
        0,
        0,
        &mut creation_order,
    );

    // Zero-length case: the initial state already satisfies the goal test.
    // Short-circuit before any expansion.
    if problem.is_goal(&initial) {
        if let Some(t) = tracer.as_mut() {
            let snapshot =
                build_snapshot(kind, 0, None, &frontier, &nodes, &explored, &admitted);
            t.search_started(&snapshot);
            let snapshot = build_snapshot(
                kind,
                0,
                Some(&initial),
                &frontier,
                &nodes,
                &explored,
                &admitted,
            );
            t.goal_reached(&snapshot);
        }
        stats.nodes_created = nodes.len() as u64;
        return Ok(SearchReport {
            strategy: kind,
            solution: Some(Solution {
                path: vec![initial],
                cost: 0,
            }),
            termination: Termination::GoalReached,
            stats,
        });
    }

    let root_key = match &strategy {
        Strategy::DepthFirst | Strategy::BreadthFirst => None,
        Strategy::UniformCost => Some(PriorityKey {
            cost: 0,
            creation_order: 0,
        }),
        Strategy::AStar(heuristic) => Some(PriorityKey {
            cost: heuristic.estimate(&initial)?,
            creation_order: 0,
        }),
    };
    if matches!(strategy.discipline(), Discipline::Ordered) {
        best_g.insert(initial.clone(), 0);
    }
    frontier.push(
        FrontierEntry {
            node_id: root_id,
            key: root_key,
        },
        &initial,
    );

    if let Some(t) = tracer.as_mut() {
        let snapshot = build_snapshot(kind, 0, None, &frontier, &nodes, &explored, &admitted);
        t.search_started(&snapshot);
    }

    let mut goal_id: Option<usize> = None;

    let termination = loop {
        if frontier.is_empty() {
            break Termination::FrontierExhausted;
        }
        if let Some(cap) = limits.max_expansions {
            if stats.expansions >= cap {
                break Termination::ExpansionBudgetExceeded;
            }
        }
        let Some(entry) = frontier.pop() else {
            break Termination::FrontierExhausted;
        };

        let state = nodes[entry.node_id].state.clone();
        let g = nodes[entry.node_id].g_cost;
        let depth = nodes[entry.node_id].depth;

        // Lazy deletion: skip entries superseded since they were pushed.
        if explored.contains(&state) {
            stats.stale_skipped += 1;
            continue;
        }
        if matches!(strategy.discipline(), Discipline::Ordered)
            && best_g.get(&state).copied() != Some(g)
        {
            stats.stale_skipped += 1;
            continue;
        }

        explored.insert(state.clone());
        iteration += 1;

        if let Some(t) = tracer.as_mut() {
            let snapshot = build_snapshot(
                kind,
                iteration,
                Some(&state),
                &frontier,
                &nodes,
                &explored,
                &admitted,
            );
            t.node_expanded(&snapshot);
        }

        if problem.is_goal(&state) {
            if let Some(t) = tracer.as_mut() {
                let snapshot = build_snapshot(
                    kind,
                    iteration,
                    Some(&state),
                    &frontier,
                    &nodes,
                    &explored,
                    &admitted,
                );
                t.goal_reached(&snapshot);
            }
            goal_id = Some(entry.node_id);
            break Termination::GoalReached;
        }

        stats.expansions += 1;

        let mut neighbors = problem.actions(&state)?;
        // A LIFO frontier reverses what it receives; push in reverse so the
        // first-listed neighbor is expanded first.
        if matches!(strategy, Strategy::DepthFirst) {
            neighbors.reverse();
        }

        for neighbor in neighbors {
            let step = problem.edge_cost(&state, &neighbor)?;
            let g_candidate = g.saturating_add(step);

            match &strategy {
                Strategy::DepthFirst => {
                    if explored.contains(&neighbor) {
                        continue;
                    }
                    // First parent assignment wins; a rediscovery pushes a
                    // new frontier entry for the original node.
                    let node_id = match admitted.get(&neighbor) {
                        Some(&id) => id,
                        None => push_node(
                            &mut nodes,
                            &mut admitted,
                            neighbor.clone(),
                            Some(entry.node_id),
                            g_candidate,
                            depth + 1,
                            &mut creation_order,
                        ),
                    };
                    frontier.push(FrontierEntry { node_id, key: None }, &neighbor);
                }
                Strategy::BreadthFirst => {
                    if explored.contains(&neighbor) || frontier.is_queued(&neighbor) {
                        continue;
                    }
                    let node_id = push_node(
                        &mut nodes,
                        &mut admitted,
                        neighbor.clone(),
                        Some(entry.node_id),
                        g_candidate,
                        depth + 1,
                        &mut creation_order,
                    );
                    frontier.push(FrontierEntry { node_id, key: None }, &neighbor);
                }
                Strategy::UniformCost | Strategy::AStar(_) => {
                    if explored.contains(&neighbor) {
                        continue;
                    }
                    if let Some(&best) = best_g.get(&neighbor) {
                        if g_candidate >= best {
                            continue;
                        }
                    }
                    // Unseen or improved: a fresh node replaces the parent
                    // pointer; the superseded entry stays in the frontier
                    // and is dropped by the stale check at pop time.
                    let node_id = push_node(
                        &mut nodes,
                        &mut admitted,
                        neighbor.clone(),
                        Some(entry.node_id),
                        g_candidate,
                        depth + 1,
                        &mut creation_order,
                    );
                    best_g.insert(neighbor.clone(), g_candidate);
                    let cost = match &strategy {
                        Strategy::AStar(heuristic) => {
                            g_candidate.saturating_add(heuristic.estimate(&neighbor)?)
                        }
                        _ => g_candidate,
                    };
                    frontier.push(
                        FrontierEntry {
                            node_id,
                            key: Some(PriorityKey {
                                cost,
                                creation_order: nodes[node_id].creation_order,
                            }),
                        },
                        &neighbor,
                    );
                }
            }
        }
    };

    let solution = goal_id.map(|id| Solution {
        path: reconstruct_path(&nodes, id),
        cost: nodes[id].g_cost,
    });
    stats.nodes_created = nodes.len() as u64;
    stats.frontier_high_water = frontier.high_water();

    Ok(SearchReport {
        strategy: kind,
        solution,
        termination,
        stats,
    })
}

/// Reconstruct the path from the initial state to `goal_id`.
///
/// Walks parent ids backward with an explicit loop (no recursion, so long
/// paths cannot exhaust the stack) and reverses the result. The returned
/// sequence has length ≥ 1.
#[must_use]
pub fn reconstruct_path<S: State>(nodes: &[SearchNode<S>], goal_id: usize) -> Vec<S> {
    let mut path = Vec::new();
    let mut cursor = Some(goal_id);

    while let Some(id) = cursor {
        path.push(nodes[id].state.clone());
        cursor = nodes[id].parent_id;
    }

    path.reverse();
    path
}

/// Append a node to the arena and point `admitted` at it.
fn push_node<S: State>(
    nodes: &mut Vec<SearchNode<S>>,
    admitted: &mut HashMap<S, usize>,
    state: S,
    parent_id: Option<usize>,
    g_cost: u64,
    depth: u32,
    creation_order: &mut u64,
) -> usize {
    let node_id = nodes.len();
    nodes.push(SearchNode {
        node_id,
        parent_id,
        state: state.clone(),
        depth,
        g_cost,
        creation_order: *creation_order,
    });
    *creation_order += 1;
    admitted.insert(state, node_id);
    node_id
}

/// Assemble the deterministic view handed to tracers.
fn build_snapshot<'a, S: State>(
    strategy: StrategyKind,
    iteration: u64,
    current: Option<&'a S>,
    frontier: &Frontier<S>,
    nodes: &[SearchNode<S>],
    explored: &'a BTreeSet<S>,
    admitted: &HashMap<S, usize>,
) -> TraceSnapshot<'a, S> {
    let frontier_states = frontier
        .pending_ids()
        .into_iter()
        .map(|id| nodes[id].state.clone())
        .collect();

    let mut parents: Vec<(S, S)> = admitted
        .iter()
        .filter_map(|(state, &id)| {
            nodes[id]
                .parent_id
                .map(|parent| (state.clone(), nodes[parent].state.clone()))
        })
        .collect();
    parents.sort();

    let mut g_costs: Vec<(S, u64)> = admitted
        .iter()
        .map(|(state, &id)| (state.clone(), nodes[id].g_cost))
        .collect();
    g_costs.sort();

    TraceSnapshot {
        strategy,
        iteration,
        current,
        frontier: frontier_states,
        explored,
        parents,
        g_costs,
    }
}
