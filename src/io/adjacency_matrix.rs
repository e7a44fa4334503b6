//! # AdjacencyMatrix
//!
//! Header `N`, then `N` rows of `N` whitespace-separated integers. Any
//! nonzero entry at `(i, j)` is an edge `i + offset -> j + offset`; the
//! entry's text becomes the weight label when the graph is weighted.
//! Negative entries count as edges like any other nonzero value.
//!
//! Rows shorter than `N` and non-numeric entries are parse errors. A
//! nonzero diagonal entry would be a self-loop and is rejected the same
//! way. Matrix input always resets the index base to 0 (see [`crate::io`]).

use super::*;

pub(super) fn parse(
    model: &mut GraphModel,
    n: NumNodes,
    body: &[&str],
) -> Result<(), GraphError> {
    add_import_nodes(model, n)?;
    let offset = model.index_base().offset();

    for i in 0..n {
        let Some(line) = body.get(i as usize) else {
            parse_error!("missing matrix row for node {}", i + offset);
        };

        let mut tokens = line.split_whitespace();
        for j in 0..n {
            let value: i64 = parse_next_token!(tokens, "matrix entry");
            if value == 0 {
                continue;
            }

            let weight = model.is_weighted().then(|| value.to_string());
            add_import_edge(model, i + offset, j + offset, weight)?;
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
    fn nonzero_entries_become_edges() {
        let mut g = GraphModel::new();
        import_text(&mut g, "3\n0 1 0\n0 0 1\n1 0 0", TextFormat::AdjacencyMatrix).unwrap();

        assert_eq!(g.nodes().collect_vec(), vec![0, 1, 2]);
        let endpoints = g.edges().iter().map(|e| (e.from, e.to)).collect_vec();
        assert_eq!(endpoints, vec![(0, 1), (1, 2), (2, 0)]);
    }

    #[test]
    fn entries_carry_weights_in_weighted_mode() {
        let mut g = GraphModel::new();
        g.set_weighted(true);
        import_text(&mut g, "2\n0 5\n-3 0", TextFormat::AdjacencyMatrix).unwrap();

        assert_eq!(g.edges()[0].weight.as_deref(), Some("5"));
        assert_eq!(g.edges()[1].weight.as_deref(), Some("-3"));
    }

    #[test]
    fn base_is_forced_to_zero() {
        let mut g = GraphModel::new();
        g.set_index_base(IndexBase::One);
        import_text(&mut g, "2\n0 1\n1 0", TextFormat::AdjacencyMatrix).unwrap();

        assert_eq!(g.index_base(), IndexBase::Zero);
        assert_eq!(g.nodes().collect_vec(), vec![0, 1]);
    }

    #[test]
    fn short_row_fails_empty() {
        let mut g = GraphModel::new();
        let err = import_text(&mut g, "3\n0 1 0\n0 0\n0 0 0", TextFormat::AdjacencyMatrix);
        assert!(matches!(err, Err(GraphError::Parse(_))));
        assert!(g.is_empty());
    }

    #[test]
    fn diagonal_entry_fails_empty() {
        let mut g = GraphModel::new();
        let err = import_text(&mut g, "2\n1 0\n0 0", TextFormat::AdjacencyMatrix);
        assert!(matches!(err, Err(GraphError::Parse(_))));
        assert!(g.is_empty());
    }

    #[test]
    fn missing_row_fails_empty() {
        let mut g = GraphModel::new();
        let err = import_text(&mut g, "2\n0 1", TextFormat::AdjacencyMatrix);
        assert!(matches!(err, Err(GraphError::Parse(_))));
        assert!(g.is_empty());
    }
}
