/*!
# Tree Analysis

Algorithms that re-orient and color a tree-shaped graph for display:

- [`centroid`]: the classic leaf-peeling centroid of an unrooted tree, used
  as the fallback root when none is supplied.
- [`recolor_as_tree`]: BFS rooting from a chosen (or centroid) root,
  rebuilding the edge list as an arborescence and assigning each node a
  distance-based color.

Both algorithms work on an [`UndirectedIndex`] arena, a compact index-based
view of the model's adjacency built once per analysis. The live graph is
only mutated when the analysis commits its results.
*/

mod centroid;
mod rooting;

pub use centroid::*;
pub use rooting::*;

use fxhash::FxHashMap;
use smallvec::SmallVec;

use crate::{model::GraphModel, node::Node};

/// Index-based adjacency view of a model, ignoring edge direction.
///
/// Node ids are mapped onto `0..len` in ascending id order; neighbor lists
/// contain arena indices and keep one entry per stored edge, so parallel
/// edges contribute parallel entries.
pub(crate) struct UndirectedIndex {
    ids: Vec<Node>,
    index_of: FxHashMap<Node, u32>,
    neighbors: Vec<SmallVec<[u32; 8]>>,
}

impl UndirectedIndex {
    /// Builds the arena from the model's current nodes and edges
    pub(crate) fn build(model: &GraphModel) -> Self {
        let ids: Vec<Node> = model.nodes().collect();
        let index_of: FxHashMap<Node, u32> = ids
            .iter()
            .enumerate()
            .map(|(i, &id)| (id, i as u32))
            .collect();

        let mut neighbors = vec![SmallVec::new(); ids.len()];
        for edge in model.edges() {
            // model invariants guarantee both endpoints exist
            let u = index_of[&edge.from];
            let v = index_of[&edge.to];
            neighbors[u as usize].push(v);
            neighbors[v as usize].push(u);
        }

        Self {
            ids,
            index_of,
            neighbors,
        }
    }

    /// Number of nodes in the arena
    pub(crate) fn len(&self) -> usize {
        self.ids.len()
    }

    /// Node id behind an arena index
    pub(crate) fn id(&self, index: u32) -> Node {
        self.ids[index as usize]
    }

    /// Arena index of a node id, if the node exists
    pub(crate) fn index(&self, id: Node) -> Option<u32> {
        self.index_of.get(&id).copied()
    }

    /// Undirected neighborhood of an arena index
    pub(crate) fn neighbors(&self, index: usize) -> &[u32] {
        &self.neighbors[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arena_maps_ids_in_ascending_order() {
        let mut g = GraphModel::new();
        for id in [7, 2, 5] {
            g.add_node(id).unwrap();
        }
        g.add_edge(7, 2, None).unwrap();

        let index = UndirectedIndex::build(&g);
        assert_eq!(index.len(), 3);
        assert_eq!(index.id(0), 2);
        assert_eq!(index.id(1), 5);
        assert_eq!(index.id(2), 7);
        assert_eq!(index.index(5), Some(1));
        assert_eq!(index.index(3), None);

        // the (7, 2) edge shows up on both sides
        assert_eq!(index.neighbors(0), &[2]);
        assert_eq!(index.neighbors(2), &[0]);
        assert!(index.neighbors(1).is_empty());
    }

    #[test]
    fn parallel_edges_keep_parallel_entries() {
        let mut g = GraphModel::new();
        g.add_node(0).unwrap();
        g.add_node(1).unwrap();
        g.add_edge(0, 1, None).unwrap();
        g.add_edge(1, 0, None).unwrap();

        let index = UndirectedIndex::build(&g);
        assert_eq!(index.neighbors(0), &[1, 1]);
        assert_eq!(index.neighbors(1), &[0, 0]);
    }
}
