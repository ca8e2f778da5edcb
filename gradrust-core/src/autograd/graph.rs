use std::collections::HashSet;
use std::sync::RwLock;

use crate::value::Value;
use crate::value_data::ValueData;

/// Stable identity of a graph node: the address of its shared data block.
///
/// Two values with equal `data` are still distinct graph vertices, so every
/// visited-set and state map is keyed by this pointer, never by the numbers
/// themselves. The pointer stays valid as long as some `Value` handle keeps
/// the allocation alive, which the graph structure guarantees during a
/// backward pass (backward rules hold strong handles to their operands).
pub type NodeId = *const RwLock<ValueData>;

/// Builds a topological order of the graph reachable from `root`.
///
/// Post-order DFS over parent edges: a node is appended only after all of
/// its parents, so the result runs from leaves to `root`. Each node is
/// visited at most once, tracked by [`NodeId`].
pub(crate) fn topological_sort(root: &Value) -> Vec<Value> {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut sorted: Vec<Value> = Vec::new();
    build_topo(root, &mut visited, &mut sorted);
    sorted
}

fn build_topo(node: &Value, visited: &mut HashSet<NodeId>, sorted: &mut Vec<Value>) {
    if visited.insert(node.node_id()) {
        if let Some(grad_fn) = node.grad_fn() {
            for input in grad_fn.inputs() {
                build_topo(&input, visited, sorted);
            }
        }
        sorted.push(node.clone());
    }
}
