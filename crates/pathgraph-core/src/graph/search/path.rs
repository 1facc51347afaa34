//! Path reconstruction for the shortest-path search

use std::collections::HashMap;

use crate::graph::frontier::SearchState;
use crate::graph::types::NodeId;

/// Walk predecessor links from `to` back to `from`, returning the nodes in
/// source-to-target order.
pub(super) fn reconstruct_path(
    from: &str,
    to: &str,
    processed: &HashMap<NodeId, SearchState>,
) -> Vec<NodeId> {
    let mut path = vec![NodeId::from(to)];
    let mut current = to;

    while current != from {
        match processed.get(current).and_then(|s| s.predecessor.as_ref()) {
            Some(pred) => {
                path.push(pred.clone());
                current = pred.as_str();
            }
            None => break,
        }
    }

    path.reverse();
    path
}
