//! # EdgeList
//!
//! Header `N M`, then one line `u v [w]` per edge. The header's `M` is
//! informational only: every remaining non-empty line is parsed as an edge.
//! The third token becomes the weight label when the graph is weighted and
//! is ignored otherwise.

use super::*;
use crate::node::Node;

pub(super) fn parse(
    model: &mut GraphModel,
    n: NumNodes,
    body: &[&str],
) -> Result<(), GraphError> {
    add_import_nodes(model, n)?;

    for line in body {
        let mut tokens = line.split_whitespace();

        let from: Node = parse_next_token!(tokens, "source endpoint");
        let to: Node = parse_next_token!(tokens, "target endpoint");
        let weight = if model.is_weighted() {
            tokens.next().map(str::to_string)
        } else {
            None
        };

        add_import_edge(model, from, to, weight)?;
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
        import_text(&mut g, "3 2\n0 1\n1 2", TextFormat::EdgeList).unwrap();

        assert_eq!(g.index_base(), IndexBase::Zero);
        assert_eq!(g.nodes().collect_vec(), vec![0, 1, 2]);
        let endpoints = g.edges().iter().map(|e| (e.from, e.to)).collect_vec();
        assert_eq!(endpoints, vec![(0, 1), (1, 2)]);
    }

    #[test]
    fn one_based_import() {
        let mut g = GraphModel::new();
        import_text(&mut g, "3 2\n1 2\n2 3", TextFormat::EdgeList).unwrap();

        assert_eq!(g.index_base(), IndexBase::One);
        assert_eq!(g.nodes().collect_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn weights_only_in_weighted_mode() {
        let mut g = GraphModel::new();
        import_text(&mut g, "2 1\n0 1 42", TextFormat::EdgeList).unwrap();
        assert_eq!(g.edges()[0].weight, None);

        g.set_weighted(true);
        import_text(&mut g, "2 1\n0 1 42", TextFormat::EdgeList).unwrap();
        assert_eq!(g.edges()[0].weight.as_deref(), Some("42"));
    }

    #[test]
    fn header_edge_count_is_informational() {
        let mut g = GraphModel::new();
        import_text(&mut g, "3 1\n0 1\n1 2", TextFormat::EdgeList).unwrap();
        assert_eq!(g.number_of_edges(), 2);
    }

    #[test]
    fn malformed_body_fails_empty() {
        let mut g = GraphModel::new();

        let err = import_text(&mut g, "3 2\n0 1\n1 x", TextFormat::EdgeList);
        assert!(matches!(err, Err(GraphError::Parse(_))));
        assert!(g.is_empty());

        let err = import_text(&mut g, "3 2\n0 1\n2", TextFormat::EdgeList);
        assert!(matches!(err, Err(GraphError::Parse(_))));
        assert!(g.is_empty());

        // endpoints must lie in the created node range
        let err = import_text(&mut g, "3 1\n0 7", TextFormat::EdgeList);
        assert!(matches!(err, Err(GraphError::Parse(_))));
        assert!(g.is_empty());

        let err = import_text(&mut g, "3 1\n0 0", TextFormat::EdgeList);
        assert!(matches!(err, Err(GraphError::Parse(_))));
        assert!(g.is_empty());
    }

    #[test]
    fn export_import_round_trip() {
        let mut g = GraphModel::new();
        g.set_weighted(true);
        import_text(&mut g, "4 3\n1 2 10\n2 3\n3 4 7", TextFormat::EdgeList).unwrap();
        assert_eq!(g.index_base(), IndexBase::One);

        let text = crate::io::export_text(&g);
        assert_eq!(text, "4 3\n1 2 10\n2 3\n3 4 7\n");

        let mut h = GraphModel::new();
        h.set_weighted(true);
        import_text(&mut h, &text, TextFormat::EdgeList).unwrap();

        assert_eq!(h.index_base(), IndexBase::One);
        assert_eq!(g.nodes().collect_vec(), h.nodes().collect_vec());
        assert_eq!(g.edges(), h.edges());
    }
}
