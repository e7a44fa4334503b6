//! Centroid of an unrooted tree via iterative leaf removal.

use super::UndirectedIndex;
use crate::{model::GraphModel, node::Node};

/// Returns a centroid of the graph, or `None` if the graph has no nodes.
///
/// The centroid is only meaningful when the graph is tree-shaped
/// (`|edges| == |nodes| - 1`); for anything else the smallest node id is
/// returned as a degenerate fallback. For true trees, leaves are peeled
/// off wave by wave on a working degree array until at most two nodes
/// remain; one of the survivors is returned. With two survivors the choice
/// between them is not part of the contract — callers must accept either.
pub fn centroid(model: &GraphModel) -> Option<Node> {
    let fallback = model.nodes().next()?;
    if model.number_of_edges() + 1 != model.number_of_nodes() {
        return Some(fallback);
    }

    let index = UndirectedIndex::build(model);
    let n = index.len();

    let mut degree: Vec<u32> = (0..n).map(|u| index.neighbors(u).len() as u32).collect();
    let mut leaves: Vec<u32> = (0..n as u32)
        .filter(|&u| degree[u as usize] <= 1)
        .collect();
    let mut remaining = n;

    // an edge-count-only tree check can be fooled by a cycle plus isolated
    // nodes; the empty-wave guard keeps the peeling finite in that case
    while remaining > 2 && !leaves.is_empty() {
        remaining -= leaves.len();

        let mut next = Vec::new();
        for &leaf in &leaves {
            degree[leaf as usize] = 0;
            for &v in index.neighbors(leaf as usize) {
                if degree[v as usize] > 0 {
                    degree[v as usize] -= 1;
                    if degree[v as usize] == 1 {
                        next.push(v);
                    }
                }
            }
        }
        leaves = next;
    }

    leaves.first().map(|&u| index.id(u)).or(Some(fallback))
}
