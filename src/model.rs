/*!
# Graph Model

[`GraphModel`] owns the authoritative node-id set and the insertion-ordered
edge list together with the directed/weighted flags and the active
[`IndexBase`]. It enforces the structural invariants of the editor:

- at most [`MAX_NODES`] nodes,
- every edge references two existing, distinct nodes (no self-loops),
- node ids are unique.

Parallel edges are representable: the edge list is a list, not a set, and the
adjacency-list import format deliberately keeps edges that are listed from
both endpoints (see [`crate::io::adjacency_list`]).

All mutations are synchronous and all-or-nothing: a rejected operation leaves
the model untouched.
*/

use std::collections::BTreeSet;

use crate::{
    edge::{Edge, EdgeRef},
    error::GraphError,
    node::{IndexBase, MAX_NODES, Node, NumEdges, NumNodes},
};

/// The in-memory graph being edited.
///
/// Nodes are kept in a [`BTreeSet`], so id-iteration order is ascending.
/// Edges keep their insertion order, which is also the export order.
#[derive(Debug, Clone, Default)]
pub struct GraphModel {
    nodes: BTreeSet<Node>,
    edges: Vec<Edge>,
    directed: bool,
    weighted: bool,
    index_base: IndexBase,
}

impl GraphModel {
    /// Creates an empty undirected, unweighted, 0-indexed graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Assembles a model from already-validated parts.
    ///
    /// Callers must uphold the model invariants themselves; used by the
    /// random generator which guarantees them by construction.
    pub(crate) fn from_parts(
        nodes: BTreeSet<Node>,
        edges: Vec<Edge>,
        directed: bool,
        weighted: bool,
        index_base: IndexBase,
    ) -> Self {
        debug_assert!(nodes.len() <= MAX_NODES as usize);
        debug_assert!(
            edges
                .iter()
                .all(|e| !e.is_loop() && nodes.contains(&e.from) && nodes.contains(&e.to))
        );

        Self {
            nodes,
            edges,
            directed,
            weighted,
            index_base,
        }
    }

    /// Returns the number of nodes
    pub fn number_of_nodes(&self) -> NumNodes {
        self.nodes.len() as NumNodes
    }

    /// Returns the number of edges
    pub fn number_of_edges(&self) -> NumEdges {
        self.edges.len() as NumEdges
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns an iterator over all node ids in ascending order
    pub fn nodes(&self) -> impl Iterator<Item = Node> + '_ {
        self.nodes.iter().copied()
    }

    /// Returns the edge list in insertion order
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns *true* if a node with the given id exists
    pub fn has_node(&self, id: Node) -> bool {
        self.nodes.contains(&id)
    }

    /// Returns the edge behind a ref, if the ref is still valid
    pub fn edge(&self, r: EdgeRef) -> Option<&Edge> {
        self.edges.get(r.0)
    }

    /// Returns *true* if the graph treats edges as directed
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Returns *true* if edges carry weight labels
    pub fn is_weighted(&self) -> bool {
        self.weighted
    }

    /// Returns the active index base
    pub fn index_base(&self) -> IndexBase {
        self.index_base
    }

    /// Sets the directed flag
    pub fn set_directed(&mut self, directed: bool) {
        self.directed = directed;
    }

    /// Sets the weighted flag
    pub fn set_weighted(&mut self, weighted: bool) {
        self.weighted = weighted;
    }

    /// Sets the index base
    pub fn set_index_base(&mut self, base: IndexBase) {
        self.index_base = base;
    }

    /// Switches between 0- and 1-based numbering and returns the new base.
    /// Existing node ids are left untouched; the base only affects future
    /// imports, generation and display labeling.
    pub fn toggle_index_base(&mut self) -> IndexBase {
        self.index_base = self.index_base.toggled();
        self.index_base
    }

    /// Adds a node with the given id.
    ///
    /// Fails with [`GraphError::DuplicateId`] if the id is taken and
    /// [`GraphError::CapacityExceeded`] if the graph is full.
    pub fn add_node(&mut self, id: Node) -> Result<(), GraphError> {
        if self.nodes.contains(&id) {
            return Err(GraphError::DuplicateId(id));
        }
        if self.number_of_nodes() >= MAX_NODES {
            return Err(GraphError::CapacityExceeded);
        }

        self.nodes.insert(id);
        Ok(())
    }

    /// Adds a node with the next free id: one past the current maximum, or
    /// the base offset on an empty graph. Returns the allocated id.
    pub fn add_fresh_node(&mut self) -> Result<Node, GraphError> {
        let id = match self.nodes.last() {
            Some(max) => max + 1,
            None => self.index_base.offset(),
        };
        self.add_node(id)?;
        Ok(id)
    }

    /// Adds an edge between two existing, distinct nodes and returns its ref.
    ///
    /// Duplicate edges are accepted. Fails with [`GraphError::UnknownNode`]
    /// if an endpoint is absent and [`GraphError::SelfLoop`] if `from == to`.
    pub fn add_edge(
        &mut self,
        from: Node,
        to: Node,
        weight: Option<String>,
    ) -> Result<EdgeRef, GraphError> {
        if !self.nodes.contains(&from) {
            return Err(GraphError::UnknownNode(from));
        }
        if !self.nodes.contains(&to) {
            return Err(GraphError::UnknownNode(to));
        }
        if from == to {
            return Err(GraphError::SelfLoop(from));
        }

        self.edges.push(Edge { from, to, weight });
        Ok(EdgeRef(self.edges.len() - 1))
    }

    /// Removes a node and all its incident edges.
    /// Fails with [`GraphError::UnknownNode`] if the id is absent.
    pub fn remove_node(&mut self, id: Node) -> Result<(), GraphError> {
        if !self.nodes.remove(&id) {
            return Err(GraphError::UnknownNode(id));
        }

        self.edges.retain(|e| e.from != id && e.to != id);
        Ok(())
    }

    /// Removes the referenced edge.
    /// Fails with [`GraphError::UnknownEdge`] on a stale ref.
    pub fn remove_edge(&mut self, r: EdgeRef) -> Result<(), GraphError> {
        if r.0 >= self.edges.len() {
            return Err(GraphError::UnknownEdge(r.0));
        }

        self.edges.remove(r.0);
        Ok(())
    }

    /// Swaps the endpoints of the referenced edge in place
    pub fn reverse_edge(&mut self, r: EdgeRef) -> Result<(), GraphError> {
        let edge = self
            .edges
            .get_mut(r.0)
            .ok_or(GraphError::UnknownEdge(r.0))?;
        std::mem::swap(&mut edge.from, &mut edge.to);
        Ok(())
    }

    /// Replaces the weight label of the referenced edge
    pub fn set_edge_weight(
        &mut self,
        r: EdgeRef,
        weight: Option<String>,
    ) -> Result<(), GraphError> {
        let edge = self
            .edges
            .get_mut(r.0)
            .ok_or(GraphError::UnknownEdge(r.0))?;
        edge.weight = weight;
        Ok(())
    }

    /// Returns the weight label of the last edge joining `u` and `v` in
    /// either orientation. With parallel edges the latest insertion wins,
    /// which mirrors the lookup order of the tree recoloring.
    pub fn weight_between(&self, u: Node, v: Node) -> Option<&str> {
        self.edges
            .iter()
            .rev()
            .find(|e| e.connects(u, v) && e.weight.is_some())
            .and_then(|e| e.weight.as_deref())
    }

    /// Drops all nodes and edges, keeping the flags and index base
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
    }

    /// Swaps in a rebuilt edge list. Used by the tree recoloring, which
    /// derives the new list from the current node set.
    pub(crate) fn replace_edges(&mut self, edges: Vec<Edge>) {
        debug_assert!(
            edges
                .iter()
                .all(|e| !e.is_loop() && self.nodes.contains(&e.from) && self.nodes.contains(&e.to))
        );
        self.edges = edges;
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn add_and_query_nodes() {
        let mut g = GraphModel::new();
        g.add_node(3).unwrap();
        g.add_node(1).unwrap();
        g.add_node(2).unwrap();

        assert_eq!(g.number_of_nodes(), 3);
        assert_eq!(g.nodes().collect_vec(), vec![1, 2, 3]);
        assert!(g.has_node(2));
        assert!(!g.has_node(0));
    }

    #[test]
    fn duplicate_node_rejected() {
        let mut g = GraphModel::new();
        g.add_node(5).unwrap();
        assert_eq!(g.add_node(5), Err(GraphError::DuplicateId(5)));
        assert_eq!(g.number_of_nodes(), 1);
    }

    #[test]
    fn capacity_ceiling() {
        let mut g = GraphModel::new();
        for id in 0..MAX_NODES {
            g.add_node(id).unwrap();
        }
        assert_eq!(g.add_node(MAX_NODES), Err(GraphError::CapacityExceeded));
        assert_eq!(g.number_of_nodes(), MAX_NODES);
    }

    #[test]
    fn fresh_node_ids() {
        let mut g = GraphModel::new();
        assert_eq!(g.add_fresh_node().unwrap(), 0);
        assert_eq!(g.add_fresh_node().unwrap(), 1);

        g.set_index_base(crate::node::IndexBase::One);
        g.clear();
        assert_eq!(g.add_fresh_node().unwrap(), 1);

        g.add_node(9).unwrap();
        assert_eq!(g.add_fresh_node().unwrap(), 10);
    }

    #[test]
    fn edge_invariants() {
        let mut g = GraphModel::new();
        g.add_node(0).unwrap();
        g.add_node(1).unwrap();

        assert_eq!(g.add_edge(0, 2, None), Err(GraphError::UnknownNode(2)));
        assert_eq!(g.add_edge(1, 1, None), Err(GraphError::SelfLoop(1)));

        let r = g.add_edge(0, 1, Some("7".to_string())).unwrap();
        assert_eq!(g.number_of_edges(), 1);
        assert_eq!(g.edge(r).unwrap().weight.as_deref(), Some("7"));

        // parallel edges are allowed
        g.add_edge(0, 1, None).unwrap();
        assert_eq!(g.number_of_edges(), 2);
    }

    #[test]
    fn removing_node_drops_incident_edges() {
        let mut g = GraphModel::new();
        for id in 0..4 {
            g.add_node(id).unwrap();
        }
        g.add_edge(0, 1, None).unwrap();
        g.add_edge(1, 2, None).unwrap();
        g.add_edge(2, 3, None).unwrap();

        g.remove_node(1).unwrap();
        assert_eq!(g.number_of_edges(), 1);
        assert!(g.edges()[0].connects(2, 3));

        assert_eq!(g.remove_node(1), Err(GraphError::UnknownNode(1)));
    }

    #[test]
    fn edge_updates() {
        let mut g = GraphModel::new();
        g.add_node(0).unwrap();
        g.add_node(1).unwrap();
        let r = g.add_edge(0, 1, None).unwrap();

        g.reverse_edge(r).unwrap();
        assert_eq!((g.edges()[0].from, g.edges()[0].to), (1, 0));

        g.set_edge_weight(r, Some("12".to_string())).unwrap();
        assert_eq!(g.edges()[0].weight.as_deref(), Some("12"));

        g.remove_edge(r).unwrap();
        assert_eq!(g.remove_edge(r), Err(GraphError::UnknownEdge(0)));
    }

    #[test]
    fn weight_lookup_prefers_last_insertion() {
        let mut g = GraphModel::new();
        g.add_node(0).unwrap();
        g.add_node(1).unwrap();
        g.add_edge(0, 1, Some("first".to_string())).unwrap();
        g.add_edge(1, 0, Some("second".to_string())).unwrap();

        assert_eq!(g.weight_between(0, 1), Some("second"));
        assert_eq!(g.weight_between(1, 0), Some("second"));
        assert_eq!(g.weight_between(0, 0), None);
    }

    #[test]
    fn clear_keeps_flags() {
        let mut g = GraphModel::new();
        g.set_directed(true);
        g.set_weighted(true);
        g.add_node(0).unwrap();
        g.clear();

        assert!(g.is_empty());
        assert!(g.is_directed());
        assert!(g.is_weighted());
    }
}
