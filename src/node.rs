/*!
# Node Representation

We choose `Node = u32` as the editor never handles more than [`MAX_NODES`] nodes.
Node ids are plain integers; the display label of a node is simply its stringified id,
so no separate label type is needed.
*/

use std::fmt::{Display, Formatter};

/// Nodes are identified by small unsigned integers
pub type Node = u32;

/// Number of nodes in a graph
pub type NumNodes = Node;

/// Number of edges in a graph
pub type NumEdges = u32;

/// Hard ceiling on the number of nodes a graph may hold.
/// This is a contract with the embedding layer, not a soft default.
pub const MAX_NODES: NumNodes = 100;

/// Whether vertex numbering starts at `0` or `1`.
///
/// Imported text infers the base from boundary values (see [`crate::io`]);
/// machine-generated graphs number their nodes starting at [`IndexBase::offset`].
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum IndexBase {
    /// Vertices are numbered `0..n`
    #[default]
    Zero,
    /// Vertices are numbered `1..=n`
    One,
}

impl IndexBase {
    /// Returns the id of the first vertex under this base
    pub fn offset(&self) -> Node {
        match self {
            IndexBase::Zero => 0,
            IndexBase::One => 1,
        }
    }

    /// Returns the other base
    pub fn toggled(&self) -> Self {
        match self {
            IndexBase::Zero => IndexBase::One,
            IndexBase::One => IndexBase::Zero,
        }
    }
}

impl Display for IndexBase {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            IndexBase::Zero => write!(f, "0-indexed"),
            IndexBase::One => write!(f, "1-indexed"),
        }
    }
}
