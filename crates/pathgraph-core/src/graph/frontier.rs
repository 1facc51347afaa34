//! Decrease-key priority queue driving the shortest-path search
//!
//! Entries are keyed by node and ordered by `cost_to + heuristic_cost`.
//! Backed by a binary heap with lazy invalidation: replacing a node's state
//! pushes a fresh heap entry and the superseded one is skipped when popped.
//!
//! Tie-break: among entries with equal totals, the one whose current state
//! was stored first is popped first. A decrease-key counts as a new store.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use crate::graph::types::{Cost, NodeId};

/// Best-known search state for a discovered node
#[derive(Debug, Clone, PartialEq)]
pub struct SearchState {
    /// Accumulated path cost from the source
    pub cost_to: Cost,
    /// Cost of the edge just taken to reach this node
    pub hop_cost: Cost,
    /// Heuristic estimate of the remaining cost
    pub heuristic_cost: Cost,
    /// Node this one was reached from; `None` for the source
    pub predecessor: Option<NodeId>,
}

impl SearchState {
    /// State for the search source
    pub fn source(heuristic_cost: Cost) -> Self {
        Self {
            cost_to: Cost::ZERO,
            hop_cost: Cost::ZERO,
            heuristic_cost,
            predecessor: None,
        }
    }

    /// Priority used to order the frontier
    pub fn total(&self) -> Cost {
        self.cost_to + self.heuristic_cost
    }
}

/// Heap entry; field order gives the (total, insertion) ordering
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct HeapEntry {
    total: Cost,
    seq: u64,
    node_id: NodeId,
}

/// Discovered-but-not-finalized nodes with their cheapest known state
#[derive(Debug, Default)]
pub struct PriorityFrontier {
    heap: BinaryHeap<Reverse<HeapEntry>>,
    entries: HashMap<NodeId, (u64, SearchState)>,
    next_seq: u64,
}

impl PriorityFrontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `node`, or lower its stored state.
    ///
    /// An existing entry is replaced only when `candidate.cost_to` is
    /// strictly below the stored `cost_to`. Returns whether the candidate
    /// was stored.
    pub fn push(&mut self, node: NodeId, candidate: SearchState) -> bool {
        if let Some((_, current)) = self.entries.get(&node) {
            if candidate.cost_to >= current.cost_to {
                tracing::trace!(node = %node, candidate = %candidate.cost_to, stored = %current.cost_to, "frontier_keep");
                return false;
            }
        }

        let seq = self.next_seq;
        self.next_seq += 1;

        tracing::trace!(node = %node, cost_to = %candidate.cost_to, total = %candidate.total(), "frontier_push");
        self.heap.push(Reverse(HeapEntry {
            total: candidate.total(),
            seq,
            node_id: node.clone(),
        }));
        self.entries.insert(node, (seq, candidate));
        true
    }

    /// Remove and return the entry with the lowest `cost_to + heuristic_cost`
    pub fn pop(&mut self) -> Option<(NodeId, SearchState)> {
        while let Some(Reverse(entry)) = self.heap.pop() {
            let live = matches!(self.entries.get(&entry.node_id), Some((seq, _)) if *seq == entry.seq);
            if !live {
                // superseded by a cheaper push, or already popped
                continue;
            }
            if let Some((_, state)) = self.entries.remove(&entry.node_id) {
                tracing::trace!(node = %entry.node_id, total = %entry.total, "frontier_pop");
                return Some((entry.node_id, state));
            }
        }
        None
    }

    /// Stored state for `node`, if it is on the frontier
    pub fn get(&self, node: &str) -> Option<&SearchState> {
        self.entries.get(node).map(|(_, state)| state)
    }

    pub fn contains(&self, node: &str) -> bool {
        self.entries.contains_key(node)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
