//! # AdjacencyList
//!
//! Header `N`, then exactly `N` neighbor lines: line `i` lists the neighbors
//! of node `i + offset`, whitespace-separated. Blank lines are stripped
//! before parsing, so every node needs a non-empty line; fewer than `N`
//! body lines is a parse error, extra lines are ignored.
//!
//! Undirected inputs often list each edge from both endpoints. This parser
//! does **not** deduplicate: both listings are inserted, yielding parallel
//! edges, and such input round-trips through export with the doubled edge
//! count.

use super::*;
use crate::node::Node;

pub(super) fn parse(
    model: &mut GraphModel,
    n: NumNodes,
    body: &[&str],
) -> Result<(), GraphError> {
    add_import_nodes(model, n)?;
    let offset = model.index_base().offset();

    for i in 0..n {
        let Some(line) = body.get(i as usize) else {
            parse_error!("missing neighbor line for node {}", i + offset);
        };

        for token in line.split_whitespace() {
            let Ok(to) = token.parse::<Node>() else {
                parse_error!("cannot parse neighbor id from {token:?}");
            };
            add_import_edge(model, i + offset, to, None)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;
    use crate::io::{TextFormat, import_text};

    #[test]
    fn zero_based_import() {
        let mut g = GraphModel::new();
        import_text(&mut g, "3\n1\n2\n0", TextFormat::AdjacencyList).unwrap();

        assert_eq!(g.index_base(), IndexBase::Zero);
        assert_eq!(g.nodes().collect_vec(), vec![0, 1, 2]);
        let endpoints = g.edges().iter().map(|e| (e.from, e.to)).collect_vec();
        assert_eq!(endpoints, vec![(0, 1), (1, 2), (2, 0)]);
    }

    #[test]
    fn one_based_import() {
        let mut g = GraphModel::new();
        import_text(&mut g, "2\n2\n1", TextFormat::AdjacencyList).unwrap();

        assert_eq!(g.index_base(), IndexBase::One);
        let endpoints = g.edges().iter().map(|e| (e.from, e.to)).collect_vec();
        assert_eq!(endpoints, vec![(1, 2), (2, 1)]);
    }

    #[test]
    fn blank_neighbor_line_shortens_the_body() {
        // the isolated node's empty line is stripped by line filtering,
        // leaving only two body lines for three nodes
        let mut g = GraphModel::new();
        let err = import_text(&mut g, "3\n2 3\n\n1", TextFormat::AdjacencyList);
        assert!(matches!(err, Err(GraphError::Parse(_))));
        assert!(g.is_empty());
    }

    #[test]
    fn double_listing_is_not_deduplicated() {
        let mut g = GraphModel::new();
        import_text(&mut g, "2\n1\n0", TextFormat::AdjacencyList).unwrap();

        assert_eq!(g.number_of_edges(), 2);
        assert!(g.edges()[0].connects(0, 1));
        assert!(g.edges()[1].connects(0, 1));
    }

    #[test]
    fn missing_line_fails_empty() {
        let mut g = GraphModel::new();
        let err = import_text(&mut g, "3\n1\n2", TextFormat::AdjacencyList);
        assert!(matches!(err, Err(GraphError::Parse(_))));
        assert!(g.is_empty());
    }

    #[test]
    fn bad_token_fails_empty() {
        let mut g = GraphModel::new();
        let err = import_text(&mut g, "2\n1 x\n0", TextFormat::AdjacencyList);
        assert!(matches!(err, Err(GraphError::Parse(_))));
        assert!(g.is_empty());
    }
}
