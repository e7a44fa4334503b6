/*!
# IO

Bidirectional text serialization of graphs in the three conventional
competitive-programming encodings:

- **EdgeList**: header `N M`, then one line `u v [w]` per edge.
- **AdjacencyList**: header `N`, then `N` lines where line `i` lists the
  neighbors of node `i + offset`.
- **AdjacencyMatrix**: header `N`, then an `N x N` integer matrix where any
  nonzero entry `(i, j)` is an edge; the entry doubles as the weight label
  when the graph is weighted.

## Index-base detection

Edge-list and adjacency-list imports infer whether the input is 0- or
1-based: a referenced vertex equal to `0` forces base 0, otherwise a vertex
equal to `N` forces base 1, and inputs that contain neither keep the
previously active base. Matrix input is addressed by row/column position and
always resets the base to 0, even when a 1-based toggle was active before.

## Failure policy

The model is cleared before parsing starts. A bad node count leaves it
cleared and reports [`GraphError::InvalidNodeCount`]; any malformed body
line (non-numeric token, short line, unknown endpoint, self-loop) leaves it
cleared and reports [`GraphError::Parse`]. Import fails to **empty**, never
to a partially applied or rolled-back graph.
*/

pub mod adjacency_list;
pub mod adjacency_matrix;
pub mod edge_list;

use std::{fmt::Write as _, str::FromStr};

use log::{debug, info};

use crate::{
    error::GraphError,
    model::GraphModel,
    node::{IndexBase, MAX_NODES, Node, NumNodes},
};

/// Identifier for a textual graph encoding.
///
/// [`FromStr`] accepts the literal UI values `edge-list`, `adjacency-list`
/// and `adjacency-matrix`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TextFormat {
    /// `N M` header followed by `u v [w]` lines
    EdgeList,
    /// `N` header followed by one neighbor line per node
    AdjacencyList,
    /// `N` header followed by an `N x N` integer matrix
    AdjacencyMatrix,
}

impl FromStr for TextFormat {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "edge-list" => Ok(TextFormat::EdgeList),
            "adjacency-list" => Ok(TextFormat::AdjacencyList),
            "adjacency-matrix" => Ok(TextFormat::AdjacencyMatrix),
            _ => Err(GraphError::Parse(format!("unknown text format: {s}"))),
        }
    }
}

/// Shorthand for returning `Err(GraphError::Parse)` early
macro_rules! parse_error {
    ($($arg : tt)*) => {
        return Err(crate::error::GraphError::Parse(format!($($arg)*)))
    };
}

/// Tries to parse the next whitespace token of a line and returns early
/// with a parse error if the token is missing or not a number
macro_rules! parse_next_token {
    ($iterator : expr, $name : expr) => {{
        let Some(token) = $iterator.next() else {
            parse_error!("premature end of line when parsing {}", $name);
        };

        let Ok(parsed) = token.parse() else {
            parse_error!("cannot parse {} from {token:?}", $name);
        };

        parsed
    }};
}

pub(crate) use parse_error;
pub(crate) use parse_next_token;

/// Replaces the model's contents with the graph described by `raw`.
///
/// Blank input yields an empty graph. The directed/weighted flags are left
/// as they are; the index base is updated by the detection described in the
/// module docs. See the module docs for the failure policy.
pub fn import_text(
    model: &mut GraphModel,
    raw: &str,
    format: TextFormat,
) -> Result<(), GraphError> {
    model.clear();

    let lines: Vec<&str> = raw
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();
    if lines.is_empty() {
        return Ok(());
    }

    let n = parse_node_count(lines[0])?;
    let base = detect_index_base(&lines[1..], format, n, model.index_base());
    if base != model.index_base() {
        debug!("detected {base} input, switching base");
    }
    model.set_index_base(base);

    let result = match format {
        TextFormat::EdgeList => edge_list::parse(model, n, &lines[1..]),
        TextFormat::AdjacencyList => adjacency_list::parse(model, n, &lines[1..]),
        TextFormat::AdjacencyMatrix => adjacency_matrix::parse(model, n, &lines[1..]),
    };

    if result.is_err() {
        // fail to empty, never to a partial graph
        model.clear();
        return result;
    }

    info!(
        "imported {:?} graph with {} nodes and {} edges",
        format,
        model.number_of_nodes(),
        model.number_of_edges()
    );
    Ok(())
}

/// Serializes the graph as edge-list text: `N M` header, then one line per
/// edge in insertion order. Weights are emitted only when the graph is
/// weighted and the edge carries a label.
pub fn export_text(model: &GraphModel) -> String {
    let mut out = format!(
        "{} {}\n",
        model.number_of_nodes(),
        model.number_of_edges()
    );

    for edge in model.edges() {
        match &edge.weight {
            Some(w) if model.is_weighted() => {
                let _ = writeln!(out, "{} {} {}", edge.from, edge.to, w);
            }
            _ => {
                let _ = writeln!(out, "{} {}", edge.from, edge.to);
            }
        }
    }

    out
}

/// Parses the node count from the header line (its first whitespace token)
fn parse_node_count(header: &str) -> Result<NumNodes, GraphError> {
    let n: NumNodes = header
        .split_whitespace()
        .next()
        .and_then(|t| t.parse().ok())
        .ok_or(GraphError::InvalidNodeCount)?;

    if !(1..=MAX_NODES).contains(&n) {
        return Err(GraphError::InvalidNodeCount);
    }
    Ok(n)
}

/// Scans the referenced vertex ids of the body for the boundary values `0`
/// and `n`. Tokens that are not numbers are skipped here; the body parse
/// rejects them afterwards.
fn detect_index_base(
    body: &[&str],
    format: TextFormat,
    n: NumNodes,
    current: IndexBase,
) -> IndexBase {
    let mut has_zero = false;
    let mut has_n = false;
    let mut check = |id: Node| {
        has_zero |= id == 0;
        has_n |= id == n;
    };

    match format {
        TextFormat::EdgeList => {
            for line in body {
                for token in line.split_whitespace().take(2) {
                    if let Ok(id) = token.parse() {
                        check(id);
                    }
                }
            }
        }
        TextFormat::AdjacencyList => {
            for line in body.iter().take(n as usize) {
                for token in line.split_whitespace() {
                    if let Ok(id) = token.parse() {
                        check(id);
                    }
                }
            }
        }
        // matrix input is addressed by position and is structurally 0-based
        TextFormat::AdjacencyMatrix => return IndexBase::Zero,
    }

    if has_zero {
        IndexBase::Zero
    } else if has_n {
        IndexBase::One
    } else {
        current
    }
}

/// Creates the contiguous node range `offset..offset + n` in the model
pub(crate) fn add_import_nodes(model: &mut GraphModel, n: NumNodes) -> Result<(), GraphError> {
    let offset = model.index_base().offset();
    for i in 0..n {
        model.add_node(i + offset)?;
    }
    Ok(())
}

/// Inserts an imported edge, mapping model rejections (unknown endpoint,
/// self-loop) into parse errors so that import surfaces a single taxonomy
pub(crate) fn add_import_edge(
    model: &mut GraphModel,
    from: Node,
    to: Node,
    weight: Option<String>,
) -> Result<(), GraphError> {
    match model.add_edge(from, to, weight) {
        Ok(_) => Ok(()),
        Err(GraphError::UnknownNode(id)) => {
            parse_error!("edge ({from}, {to}) references unknown node {id}")
        }
        Err(GraphError::SelfLoop(id)) => {
            parse_error!("self-loop on node {id} is not allowed")
        }
        Err(e) => Err(e),
    }
}
