use std::fmt::{Debug, Display};

use crate::node::Node;

/// An edge between two nodes with an optional weight label.
///
/// Whether the edge is directed is a property of the owning graph, not of the
/// edge itself. For undirected graphs, `(from, to)` and `(to, from)` denote the
/// same edge; [`Edge::connects`] tests endpoints in either orientation.
///
/// The weight is an opaque display label. It is kept as text so that imported
/// weights round-trip byte-for-byte through export.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Edge {
    /// Source endpoint
    pub from: Node,
    /// Target endpoint
    pub to: Node,
    /// Optional weight label
    pub weight: Option<String>,
}

impl Edge {
    /// Creates an unweighted edge
    pub fn new(from: Node, to: Node) -> Self {
        Self {
            from,
            to,
            weight: None,
        }
    }

    /// Creates an edge carrying a weight label
    pub fn weighted<S: Into<String>>(from: Node, to: Node, weight: S) -> Self {
        Self {
            from,
            to,
            weight: Some(weight.into()),
        }
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.from == self.to
    }

    /// Returns true if the edge joins `u` and `v` in either orientation
    pub fn connects(&self, u: Node, v: Node) -> bool {
        (self.from == u && self.to == v) || (self.from == v && self.to == u)
    }

    /// Returns the edge with its endpoints swapped, keeping the weight
    pub fn reversed(&self) -> Self {
        Self {
            from: self.to,
            to: self.from,
            weight: self.weight.clone(),
        }
    }

    /// Normalizes the edge such that the endpoint with smaller id comes first
    pub fn normalized(&self) -> Self {
        if self.is_normalized() {
            self.clone()
        } else {
            self.reversed()
        }
    }

    /// Returns true if the endpoint with smaller id comes first
    pub fn is_normalized(&self) -> bool {
        self.from <= self.to
    }
}

impl From<(Node, Node)> for Edge {
    fn from(value: (Node, Node)) -> Self {
        Edge::new(value.0, value.1)
    }
}

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.weight {
            Some(w) => write!(f, "({},{};{})", self.from, self.to, w),
            None => write!(f, "({},{})", self.from, self.to),
        }
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

/// Positional reference to an edge in a graph's edge list.
///
/// Refs are indices into the insertion-ordered edge list: removing an edge
/// invalidates every ref at or beyond the removed position. The interactive
/// layer resolves its hit-test target to a fresh ref per gesture, so stale
/// refs never survive a mutation in practice.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct EdgeRef(pub(crate) usize);

impl EdgeRef {
    /// Position of the referenced edge in the edge list
    pub fn index(&self) -> usize {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orientation_insensitive_equality() {
        let e = Edge::weighted(3, 7, "5");
        assert!(e.connects(3, 7));
        assert!(e.connects(7, 3));
        assert!(!e.connects(3, 5));
        assert!(!e.is_loop());
        assert!(Edge::new(4, 4).is_loop());
    }

    #[test]
    fn reversal_keeps_weight() {
        let e = Edge::weighted(1, 2, "9");
        let r = e.reversed();
        assert_eq!((r.from, r.to), (2, 1));
        assert_eq!(r.weight.as_deref(), Some("9"));
    }

    #[test]
    fn normalization() {
        assert_eq!(Edge::new(5, 2).normalized(), Edge::new(2, 5));
        assert_eq!(Edge::new(2, 5).normalized(), Edge::new(2, 5));
        assert!(!Edge::new(5, 2).is_normalized());
    }
}
