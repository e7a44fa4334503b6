/*!
# Graph Generators

Random generation for the editor's "generate" command. The single model is
[`RandomConnected`]: `n` nodes, `m` edges, connected whenever `m >= n - 1`.

Connectivity comes from the construction rather than from a density
argument: a random spanning tree over a shuffled node permutation is laid
down first, then uniform random edges top the graph up to `m`. This is the
editor's documented model and intentionally not Erdős–Rényi.

Inputs are clamped instead of rejected: `n` into `1..=MAX_NODES`, `m` into
`0..=max` where `max` is `n(n-1)` for directed and `n(n-1)/2` for
undirected graphs. Clamping is the explicit policy of the generate command,
logged at debug level, never an error.
*/

use std::collections::BTreeSet;

use fxhash::FxHashSet;
use log::{debug, info};
use rand::{Rng, seq::SliceRandom};
use rand_distr::{Distribution, Uniform};

use crate::{
    edge::Edge,
    model::GraphModel,
    node::{IndexBase, MAX_NODES, Node, NumEdges, NumNodes},
};

/// Generator for a connected random graph with a fixed node and edge count.
///
/// Configured via the builder pattern:
///
/// ```
/// use graphpad::gens::RandomConnected;
///
/// let mut rng = rand::rng();
/// let graph = RandomConnected::new()
///     .nodes(10)
///     .edges(15)
///     .weighted(true)
///     .generate(&mut rng);
///
/// assert_eq!(graph.number_of_nodes(), 10);
/// assert_eq!(graph.number_of_edges(), 15);
/// ```
#[derive(Debug, Copy, Clone, Default)]
pub struct RandomConnected {
    n: NumNodes,
    m: NumEdges,
    directed: bool,
    weighted: bool,
    index_base: IndexBase,
}

impl RandomConnected {
    /// Creates a new generator with `n = 0`, `m = 0`, undirected, unweighted
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the requested number of nodes (clamped into `1..=MAX_NODES`)
    pub fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n;
        self
    }

    /// Sets the requested number of edges (clamped into the simple-graph range)
    pub fn edges(mut self, m: NumEdges) -> Self {
        self.m = m;
        self
    }

    /// Marks the generated graph as directed (or not)
    pub fn directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    /// Assigns each edge a uniform integer weight label in `1..=10`
    pub fn weighted(mut self, weighted: bool) -> Self {
        self.weighted = weighted;
        self
    }

    /// Numbers the generated nodes starting at the base offset
    pub fn index_base(mut self, base: IndexBase) -> Self {
        self.index_base = base;
        self
    }

    /// Generates the graph.
    ///
    /// The undirected skeleton is always connected and loop-free with no
    /// duplicate edges; connectivity of the result is guaranteed exactly
    /// when the clamped `m` is at least `n - 1`.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> GraphModel {
        let n = self.n.clamp(1, MAX_NODES);
        let max_edges = if self.directed {
            n * (n - 1)
        } else {
            n * (n - 1) / 2
        };
        let m = self.m.min(max_edges);
        if n != self.n || m != self.m {
            debug!("clamped generator input to n = {n}, m = {m}");
        }

        let offset = self.index_base.offset();
        let ids: Vec<Node> = (0..n).map(|i| i + offset).collect();

        // edges in insertion order plus a dedup set over canonical keys
        let mut picked: Vec<(Node, Node)> = Vec::with_capacity(m as usize);
        let mut seen: FxHashSet<(Node, Node)> = FxHashSet::default();
        let mut push = |picked: &mut Vec<(Node, Node)>,
                        seen: &mut FxHashSet<(Node, Node)>,
                        from: Node,
                        to: Node| {
            let key = if self.directed || from < to {
                (from, to)
            } else {
                (to, from)
            };
            if seen.insert(key) {
                picked.push(key);
            }
        };

        // random spanning tree: every node attaches to a random earlier
        // node of a shuffled permutation
        let mut order = ids.clone();
        order.shuffle(rng);
        for i in 1..order.len() {
            let from = order[i];
            let to = order[rng.random_range(0..i)];
            push(&mut picked, &mut seen, from, to);
        }

        // top up with uniform random pairs until the target is reached
        if n > 1 && (picked.len() as NumEdges) < m {
            let node_gen = Uniform::new(0, n).unwrap();
            while (picked.len() as NumEdges) < m {
                let from = ids[node_gen.sample(rng) as usize];
                let to = ids[node_gen.sample(rng) as usize];
                if from == to {
                    continue;
                }
                push(&mut picked, &mut seen, from, to);
            }
        }

        // only reachable when m < n - 1 and the spanning tree overshoots
        while picked.len() as NumEdges > m {
            let victim = rng.random_range(0..picked.len());
            picked.remove(victim);
        }

        let edges = picked
            .into_iter()
            .map(|(from, to)| {
                if self.weighted {
                    Edge::weighted(from, to, rng.random_range(1..=10u32).to_string())
                } else {
                    Edge::new(from, to)
                }
            })
            .collect();

        info!("generated random graph with {n} nodes and {m} edges");
        GraphModel::from_parts(
            BTreeSet::from_iter(ids),
            edges,
            self.directed,
            self.weighted,
            self.index_base,
        )
    }
}
