//! Frontier: one pending-entry container, three ordering disciplines.
//!
//! The discipline is the only thing that distinguishes the four strategies:
//! LIFO for depth-first, FIFO for breadth-first, and minimum-key for
//! uniform-cost and A*. Duplicate entries for a state are allowed under the
//! ordered discipline; staleness is resolved lazily at pop time by the
//! search core, not by the frontier.
//!
//! The FIFO variant keeps an auxiliary queued-set (a `BTreeSet`, for
//! deterministic iteration at serialization boundaries) so breadth-first
//! membership checks avoid a linear scan of the queue.

use std::cmp::Reverse;
use std::collections::{BTreeSet, BinaryHeap, VecDeque};

use crate::contract::State;
use crate::node::PriorityKey;

/// Frontier ordering discipline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Discipline {
    /// Last in, first out (depth-first).
    Lifo,
    /// First in, first out (breadth-first).
    Fifo,
    /// Minimum [`PriorityKey`] first (uniform-cost, A*).
    Ordered,
}

/// A pending entry: an arena node id plus its priority key.
///
/// The key is `None` under the LIFO and FIFO disciplines (pure insertion
/// order) and `Some` under the ordered discipline.
#[derive(Debug, Clone, Copy)]
pub struct FrontierEntry {
    pub node_id: usize,
    pub key: Option<PriorityKey>,
}

/// A heap entry wrapping a node id with its ordering key.
///
/// `BinaryHeap` is a max-heap, so `Reverse<PriorityKey>` gives min-heap
/// behavior (lowest cost first, then oldest creation order).
#[derive(Debug)]
struct HeapEntry {
    key: Reverse<PriorityKey>,
    node_id: usize,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

enum Store<S> {
    Lifo(Vec<FrontierEntry>),
    Fifo {
        queue: VecDeque<(FrontierEntry, S)>,
        queued: BTreeSet<S>,
    },
    Ordered(BinaryHeap<HeapEntry>),
}

/// The pending-node container for one search invocation.
pub struct Frontier<S: State> {
    store: Store<S>,
    high_water: u64,
}

impl<S: State> Frontier<S> {
    /// Create an empty frontier with the given discipline.
    #[must_use]
    pub fn new(discipline: Discipline) -> Self {
        let store = match discipline {
            Discipline::Lifo => Store::Lifo(Vec::new()),
            Discipline::Fifo => Store::Fifo {
                queue: VecDeque::new(),
                queued: BTreeSet::new(),
            },
            Discipline::Ordered => Store::Ordered(BinaryHeap::new()),
        };
        Self {
            store,
            high_water: 0,
        }
    }

    /// Push an entry for `state`.
    ///
    /// Under the ordered discipline the entry must carry a `Some` key; a
    /// keyless entry is a caller bug and is dropped (debug builds assert).
    pub fn push(&mut self, entry: FrontierEntry, state: &S) {
        match &mut self.store {
            Store::Lifo(stack) => stack.push(entry),
            Store::Fifo { queue, queued } => {
                queued.insert(state.clone());
                queue.push_back((entry, state.clone()));
            }
            Store::Ordered(heap) => {
                let Some(key) = entry.key else {
                    debug_assert!(false, "ordered frontier requires a priority key");
                    return;
                };
                heap.push(HeapEntry {
                    key: Reverse(key),
                    node_id: entry.node_id,
                });
            }
        }
        let size = self.len() as u64;
        if size > self.high_water {
            self.high_water = size;
        }
    }

    /// Pop the next entry under this frontier's discipline.
    #[must_use]
    pub fn pop(&mut self) -> Option<FrontierEntry> {
        match &mut self.store {
            Store::Lifo(stack) => stack.pop(),
            Store::Fifo { queue, queued } => queue.pop_front().map(|(entry, state)| {
                queued.remove(&state);
                entry
            }),
            Store::Ordered(heap) => heap.pop().map(|entry| FrontierEntry {
                node_id: entry.node_id,
                key: Some(entry.key.0),
            }),
        }
    }

    /// Whether `state` is currently queued.
    ///
    /// Meaningful only under the FIFO discipline (breadth-first admission);
    /// always `false` otherwise.
    #[must_use]
    pub fn is_queued(&self, state: &S) -> bool {
        match &self.store {
            Store::Fifo { queued, .. } => queued.contains(state),
            Store::Lifo(_) | Store::Ordered(_) => false,
        }
    }

    /// Pending node ids in pop order.
    ///
    /// Used for trace snapshots only; O(n log n) under the ordered
    /// discipline.
    #[must_use]
    pub fn pending_ids(&self) -> Vec<usize> {
        match &self.store {
            Store::Lifo(stack) => stack.iter().rev().map(|e| e.node_id).collect(),
            Store::Fifo { queue, .. } => queue.iter().map(|(e, _)| e.node_id).collect(),
            Store::Ordered(heap) => {
                let mut entries: Vec<&HeapEntry> = heap.iter().collect();
                entries.sort_by(|a, b| a.key.0.cmp(&b.key.0));
                entries.iter().map(|e| e.node_id).collect()
            }
        }
    }

    /// Current number of pending entries.
    #[must_use]
    pub fn len(&self) -> usize {
        match &self.store {
            Store::Lifo(stack) => stack.len(),
            Store::Fifo { queue, .. } => queue.len(),
            Store::Ordered(heap) => heap.len(),
        }
    }

    /// Whether the frontier is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// High-water mark of frontier size.
    #[must_use]
    pub fn high_water(&self) -> u64 {
        self.high_water
    }
}
