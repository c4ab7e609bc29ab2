//! Search-tree node records and the frontier priority key.

/// A transient search-tree record.
///
/// Nodes live in an arena (`Vec<SearchNode<S>>`) owned by one search call;
/// `node_id` is the arena index and `parent_id` the back-reference used for
/// path reconstruction. Never shared across calls.
#[derive(Debug, Clone)]
pub struct SearchNode<S> {
    /// Arena index of this node.
    pub node_id: usize,
    /// Arena index of the node that produced this one (`None` for the root).
    pub parent_id: Option<usize>,
    /// The state this node reached.
    pub state: S,
    /// Tree depth (root = 0).
    pub depth: u32,
    /// Cumulative path cost from the initial state along the parent chain.
    pub g_cost: u64,
    /// Global counter for deterministic discovery-order tie-breaking.
    pub creation_order: u64,
}

/// The ordered-frontier key: `(cost, creation_order)`.
///
/// `cost` is `g` for uniform-cost search and `g + h` for A*. Lower cost
/// first; ties broken by older `creation_order`, so equal-priority entries
/// pop in discovery order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriorityKey {
    pub cost: u64,
    pub creation_order: u64,
}

impl PartialOrd for PriorityKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PriorityKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.cost
            .cmp(&other.cost)
            .then(self.creation_order.cmp(&other.creation_order))
    }
}
