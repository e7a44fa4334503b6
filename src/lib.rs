/*!
# GraphPad

Algorithmic core of a small-graph editor: a bounded graph model for up to
100 nodes with directed/weighted flags and a switchable 0/1 index base,
text import/export in three classroom formats, a connected random-graph
generator, and tree analysis (centroid, BFS rooting, depth coloring).

Rendering, layout, and input handling are left to the embedding layer;
this crate owns the data and the algorithms.

Most types are re-exported in the [`prelude`]:

```
use graphpad::prelude::*;

let mut session = GraphSession::new();
session.import_text("3 2\n0 1\n1 2", TextFormat::EdgeList).unwrap();
assert_eq!(session.model().number_of_nodes(), 3);

let view = session.set_mode(GraphMode::Tree).unwrap();
assert_eq!(view.root, 1);
```
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod io;
pub mod model;
pub mod node;
pub mod session;

/// Common imports of the crate
pub mod prelude {
    pub use crate::algo::{
        Hsl, NodeColor, ROOT_COLOR, TreeView, UNREACHED_COLOR, centroid, recolor_as_tree,
    };
    pub use crate::edge::{Edge, EdgeRef};
    pub use crate::error::GraphError;
    pub use crate::gens::RandomConnected;
    pub use crate::io::{TextFormat, export_text, import_text};
    pub use crate::model::GraphModel;
    pub use crate::node::{IndexBase, MAX_NODES, Node, NumEdges, NumNodes};
    pub use crate::session::{GraphMode, GraphSession};
}
