//! Find vertices [reachable] from a vertex, optionally within a bounded
//! number of edges.
//!
//! See available parameters [here](ReachableBuilder#implementations).
//!
//! # Examples
//!
//! ```
//! use refgraph::{algo::Reachable, prelude::*};
//!
//! let graph = AdjList::<&str>::from_edge_pairs(
//!     vec!["a", "b", "c", "d"],
//!     vec![("a", "b"), ("b", "c"), ("c", "d")],
//! )
//! .unwrap();
//!
//! let reachable = Reachable::on(&graph).generations(2).run(&"a").unwrap();
//! assert_eq!(reachable.iter().copied().collect::<Vec<_>>(), vec!["a", "b", "c"]);
//!
//! let ancestors = Reachable::on(&graph).ancestors().run(&"c").unwrap();
//! assert_eq!(ancestors.len(), 3);
//! assert!(!ancestors.contains(&"d"));
//! ```
//!
//! [reachable]: https://en.wikipedia.org/wiki/Reachability

use rustc_hash::FxHashSet;

use crate::core::{GraphBase, Subgraph};

mod builder;
mod dfs;

pub use builder::ReachableBuilder;

/// Vertices reachable from a start vertex, in the order they were first
/// visited. The start vertex always comes first.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug)]
pub struct Reachable<'a, G: GraphBase> {
    graph: &'a G,
    vertices: Vec<&'a G::Vertex>,
    keys: FxHashSet<G::Key>,
}

impl<'a, G> Reachable<'a, G>
where
    G: GraphBase,
{
    /// Returns the number of reached vertices, including the start.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, &'a G::Vertex> {
        self.vertices.iter()
    }

    /// Returns `true` if the vertex was reached.
    pub fn contains(&self, vertex: &G::Vertex) -> bool {
        self.keys.contains(&self.graph.id_map(vertex))
    }

    /// Returns the keys of the reached vertices.
    pub fn keys(&self) -> &FxHashSet<G::Key> {
        &self.keys
    }

    /// Returns the complete subgraph on the reached vertices.
    pub fn into_subgraph(self) -> G
    where
        G: Subgraph,
    {
        self.graph.complete_subgraph_on_vertices(self.vertices)
    }
}
