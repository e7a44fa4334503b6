/*!
# Graph Session

[`GraphSession`] is the command surface the presentation layer talks to. It
separates the persistent [`GraphModel`] from the ephemeral interaction
state (the armed edge-add source) and owns the editor mode: in tree mode,
every wholesale graph replacement retriggers the tree recoloring so the
display stays oriented and colored.

All commands are synchronous and run to completion; there is exactly one
session per editor instance and no locking discipline.
*/

use rand::Rng;

use crate::{
    algo::{TreeView, recolor_as_tree},
    edge::EdgeRef,
    error::GraphError,
    gens::RandomConnected,
    io::{self, TextFormat},
    model::GraphModel,
    node::{IndexBase, Node, NumEdges, NumNodes},
};

/// Display mode of the editor
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum GraphMode {
    /// Free-form graph, physics layout
    #[default]
    Normal,
    /// Rooted-tree display: directed, hierarchical, depth-colored
    Tree,
}

/// One editing session: the persistent model plus ephemeral interaction
/// state, passed by reference to every operation.
#[derive(Debug, Default)]
pub struct GraphSession {
    model: GraphModel,
    mode: GraphMode,
    /// Source node of an armed interactive edge addition
    pending_edge_from: Option<Node>,
}

impl GraphSession {
    /// Creates a session with an empty graph in normal mode
    pub fn new() -> Self {
        Self::default()
    }

    /// Read access to the current graph
    pub fn model(&self) -> &GraphModel {
        &self.model
    }

    /// Returns the active display mode
    pub fn mode(&self) -> GraphMode {
        self.mode
    }

    /// Switches the display mode. Entering tree mode forces the directed
    /// flag and recolors immediately (with a centroid root); leaving it
    /// changes nothing on the model.
    pub fn set_mode(&mut self, mode: GraphMode) -> Option<TreeView> {
        self.mode = mode;
        match mode {
            GraphMode::Tree => {
                self.model.set_directed(true);
                recolor_as_tree(&mut self.model, None)
            }
            GraphMode::Normal => None,
        }
    }

    /// Replaces the graph with the one described by `raw`; see
    /// [`io::import_text`] for format and failure semantics. In tree mode
    /// the imported graph is recolored and the resulting view returned.
    pub fn import_text(
        &mut self,
        raw: &str,
        format: TextFormat,
    ) -> Result<Option<TreeView>, GraphError> {
        io::import_text(&mut self.model, raw, format)?;
        Ok(self.recolor_if_tree_mode())
    }

    /// Serializes the graph as edge-list text
    pub fn export_text(&self) -> String {
        io::export_text(&self.model)
    }

    /// Replaces the graph with a random connected one, reusing the
    /// session's directed/weighted flags and index base. Inputs are
    /// clamped, never rejected.
    pub fn generate_random<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        n: NumNodes,
        m: NumEdges,
    ) -> Option<TreeView> {
        self.model = RandomConnected::new()
            .nodes(n)
            .edges(m)
            .directed(self.model.is_directed())
            .weighted(self.model.is_weighted())
            .index_base(self.model.index_base())
            .generate(rng);
        self.recolor_if_tree_mode()
    }

    /// Re-roots and recolors the current graph; an unknown or missing root
    /// falls back to the centroid. Only meaningful in tree mode but always
    /// available.
    pub fn recolor_as_tree(&mut self, root: Option<Node>) -> Option<TreeView> {
        recolor_as_tree(&mut self.model, root)
    }

    /// Drops the graph and any armed interaction, keeping flags and mode
    pub fn reset(&mut self) {
        self.model.clear();
        self.pending_edge_from = None;
    }

    /// Adds a node with the next free id and returns it
    pub fn add_node(&mut self) -> Result<Node, GraphError> {
        self.model.add_fresh_node()
    }

    /// Removes a node and its incident edges
    pub fn delete_node(&mut self, id: Node) -> Result<(), GraphError> {
        if self.pending_edge_from == Some(id) {
            self.pending_edge_from = None;
        }
        self.model.remove_node(id)
    }

    /// Removes the referenced edge
    pub fn delete_edge(&mut self, r: EdgeRef) -> Result<(), GraphError> {
        self.model.remove_edge(r)
    }

    /// Swaps the endpoints of the referenced edge
    pub fn reverse_edge(&mut self, r: EdgeRef) -> Result<(), GraphError> {
        self.model.reverse_edge(r)
    }

    /// Replaces the weight label of the referenced edge
    pub fn set_edge_weight(&mut self, r: EdgeRef, weight: Option<String>) -> Result<(), GraphError> {
        self.model.set_edge_weight(r, weight)
    }

    /// Arms an interactive edge addition starting at `from`
    pub fn begin_edge_add(&mut self, from: Node) -> Result<(), GraphError> {
        if !self.model.has_node(from) {
            return Err(GraphError::UnknownNode(from));
        }
        self.pending_edge_from = Some(from);
        Ok(())
    }

    /// Returns the armed edge-add source, if any
    pub fn pending_edge_from(&self) -> Option<Node> {
        self.pending_edge_from
    }

    /// Completes an armed edge addition towards `to`. The weight is a
    /// caller-supplied value: prompting the user for it is the embedding
    /// layer's job and happens before this call.
    ///
    /// Without an armed source, or when `to` equals the source, the
    /// gesture is dismissed silently and `Ok(None)` is returned. The armed
    /// source is consumed either way.
    pub fn complete_edge_add(
        &mut self,
        to: Node,
        weight: Option<String>,
    ) -> Result<Option<EdgeRef>, GraphError> {
        let Some(from) = self.pending_edge_from.take() else {
            return Ok(None);
        };
        if from == to {
            return Ok(None);
        }

        self.model.add_edge(from, to, weight).map(Some)
    }

    /// Disarms a pending edge addition
    pub fn cancel_edge_add(&mut self) {
        self.pending_edge_from = None;
    }

    /// Sets the directed flag
    pub fn set_directed(&mut self, directed: bool) {
        self.model.set_directed(directed);
    }

    /// Sets the weighted flag
    pub fn set_weighted(&mut self, weighted: bool) {
        self.model.set_weighted(weighted);
    }

    /// Switches between 0- and 1-based numbering and returns the new base
    pub fn toggle_index_base(&mut self) -> IndexBase {
        self.model.toggle_index_base()
    }

    fn recolor_if_tree_mode(&mut self) -> Option<TreeView> {
        match self.mode {
            GraphMode::Tree => recolor_as_tree(&mut self.model, None),
            GraphMode::Normal => None,
        }
    }
}
