//! BFS rooting and distance coloring of a tree-shaped graph.

use std::collections::VecDeque;

use fxhash::FxHashMap;
use log::info;

use super::{UndirectedIndex, centroid};
use crate::{edge::Edge, model::GraphModel, node::Node};

/// Fixed highlight color of the root node
pub const ROOT_COLOR: &str = "#ff7b7bff";

/// Fixed neutral color of nodes the BFS never reached
pub const UNREACHED_COLOR: &str = "#d1d5db";

/// HSL color on the depth ramp. Conversion to RGB is left to the
/// presentation layer.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Hsl {
    /// Hue in degrees
    pub hue: f32,
    /// Saturation in percent
    pub saturation: f32,
    /// Lightness in percent
    pub lightness: f32,
}

/// Display color of a node after tree recoloring.
///
/// The mapping is a pure function of `(root, distance, max_distance)`:
/// the root is highlighted, reachable nodes get a hue interpolated from
/// 120° to 180° by relative depth, unreachable nodes stay neutral.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeColor {
    /// The chosen root
    Root,
    /// Reachable at some depth; carries the interpolated ramp color
    Depth(Hsl),
    /// Not reached by the BFS
    Unreached,
}

impl NodeColor {
    fn for_distance(distance: u32, max_distance: u32) -> Self {
        if distance == 0 {
            return NodeColor::Root;
        }

        let hue = 120.0 + (distance as f32 / max_distance.max(1) as f32) * 60.0;
        NodeColor::Depth(Hsl {
            hue,
            saturation: 80.0,
            lightness: 60.0,
        })
    }

    /// Renders the color as a CSS color string
    pub fn css(&self) -> String {
        match self {
            NodeColor::Root => ROOT_COLOR.to_string(),
            NodeColor::Depth(hsl) => {
                format!("hsl({}, {}%, {}%)", hsl.hue, hsl.saturation, hsl.lightness)
            }
            NodeColor::Unreached => UNREACHED_COLOR.to_string(),
        }
    }
}

/// Colored snapshot of a rooted tree: the result of [`recolor_as_tree`].
///
/// `parent` and `distance` cover reachable nodes only; `colors` covers
/// every node of the graph.
#[derive(Debug, Clone)]
pub struct TreeView {
    /// The root the tree was oriented towards
    pub root: Node,
    /// BFS parent of every reachable non-root node
    pub parent: FxHashMap<Node, Node>,
    /// BFS depth of every reachable node; `distance[root] == 0`
    pub distance: FxHashMap<Node, u32>,
    /// Largest BFS depth encountered
    pub max_distance: u32,
    /// Display color per node
    pub colors: FxHashMap<Node, NodeColor>,
}

/// Re-orients the graph as a tree rooted at `root` and colors it by depth.
///
/// Returns `None` only for a graph without nodes. A missing or unknown
/// root falls back to the [`centroid`].
///
/// Side effects on the model:
/// - the directed flag is forced on,
/// - the edge list is replaced by one edge `parent -> child` per reachable
///   non-root node, in ascending child-id order. When the graph is
///   weighted, the label of the last prior edge joining the pair (in
///   either orientation) is carried over.
///
/// Traversal ignores edge direction, so entering tree mode on a graph
/// whose edges point "upwards" still roots it correctly.
pub fn recolor_as_tree(model: &mut GraphModel, root: Option<Node>) -> Option<TreeView> {
    let root = root
        .filter(|&r| model.has_node(r))
        .or_else(|| centroid(model))?;

    model.set_directed(true);

    let index = UndirectedIndex::build(model);
    let root_index = index.index(root)?;

    // plain BFS over arena indices
    let n = index.len();
    let mut dist: Vec<Option<u32>> = vec![None; n];
    let mut pred: Vec<Option<u32>> = vec![None; n];
    let mut queue = VecDeque::from([root_index]);
    dist[root_index as usize] = Some(0);

    let mut max_distance = 0;
    while let Some(u) = queue.pop_front() {
        let next_dist = dist[u as usize].unwrap_or(0) + 1;
        for &v in index.neighbors(u as usize) {
            if dist[v as usize].is_none() {
                dist[v as usize] = Some(next_dist);
                pred[v as usize] = Some(u);
                max_distance = max_distance.max(next_dist);
                queue.push_back(v);
            }
        }
    }

    // rebuild the edge list as an arborescence, carrying weights over
    let mut new_edges = Vec::with_capacity(n.saturating_sub(1));
    for v in 0..n as u32 {
        let Some(p) = pred[v as usize] else {
            continue;
        };
        let (parent_id, child_id) = (index.id(p), index.id(v));

        let weight = if model.is_weighted() {
            model.weight_between(parent_id, child_id).map(str::to_string)
        } else {
            None
        };
        new_edges.push(Edge {
            from: parent_id,
            to: child_id,
            weight,
        });
    }
    model.replace_edges(new_edges);

    let mut parent = FxHashMap::default();
    let mut distance = FxHashMap::default();
    let mut colors = FxHashMap::default();
    for v in 0..n as u32 {
        let id = index.id(v);
        if let Some(p) = pred[v as usize] {
            parent.insert(id, index.id(p));
        }
        match dist[v as usize] {
            Some(d) => {
                distance.insert(id, d);
                colors.insert(id, NodeColor::for_distance(d, max_distance));
            }
            None => {
                colors.insert(id, NodeColor::Unreached);
            }
        }
    }

    info!("recolored tree rooted at {root}, max depth {max_distance}");
    Some(TreeView {
        root,
        parent,
        distance,
        max_distance,
        colors,
    })
}
