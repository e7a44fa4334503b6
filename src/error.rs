use thiserror::Error;

use crate::node::{MAX_NODES, Node};

/// Error taxonomy of the graph engine.
///
/// Model mutations reject the operation and leave the graph unchanged.
/// Import errors are different: the graph is cleared before parsing starts,
/// so a failed import leaves it **empty**, not rolled back (see [`crate::io`]).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GraphError {
    /// A node with this id already exists
    #[error("node {0} already exists")]
    DuplicateId(Node),

    /// Adding the node would exceed [`MAX_NODES`]
    #[error("graph is limited to {MAX_NODES} nodes")]
    CapacityExceeded,

    /// An edge endpoint references a node that is not in the graph
    #[error("node {0} does not exist")]
    UnknownNode(Node),

    /// Both edge endpoints are the same node
    #[error("self-loop on node {0} is not allowed")]
    SelfLoop(Node),

    /// The edge reference does not point at a live edge
    #[error("edge reference {0} is stale or out of range")]
    UnknownEdge(usize),

    /// The node count header is missing, non-numeric or outside `1..=MAX_NODES`
    #[error("invalid number of nodes, expected 1 <= N <= {MAX_NODES}")]
    InvalidNodeCount,

    /// A body line of the imported text could not be parsed
    #[error("parse error: {0}")]
    Parse(String),
}
