//! The directed graph contract.
//!
//! Every graph representation implements four small traits:
//!
//! * [`GraphBase`] ties a vertex type to its hashable key through the graph's
//!   identity map,
//! * [`VertexSet`] enumerates vertices in a stable order,
//! * [`Neighbors`] exposes adjacency in both directions,
//! * [`Subgraph`] builds the complete (induced) subgraph on a vertex subset.
//!
//! Representations that store explicit edges additionally implement
//! [`EdgeSet`], which is what the exporters need.
//!
//! Everything else is provided once by [`DirectedGraph`], which is implemented
//! automatically for any type that satisfies the four traits above.

pub mod base;
pub mod error;
pub mod id;
pub mod marker;

use crate::{
    algo::{Reachable, StronglyConnectedComponents},
    ops,
};

pub use self::base::EdgeRef;
use self::{error::GraphError, id::KeyType, marker::Direction};

/// Associates a vertex type with the key produced by the identity map of the
/// graph.
pub trait GraphBase {
    type Vertex;
    type Key: KeyType;

    /// Maps a vertex to its key.
    ///
    /// The mapping is deterministic and injective over the vertices of the
    /// graph. Vertices of different graphs can be compared by their keys only
    /// if the graphs use the same identity map.
    fn id_map(&self, vertex: &Self::Vertex) -> Self::Key;
}

pub trait VertexSet: GraphBase {
    type VerticesIter<'a>: Iterator<Item = &'a Self::Vertex>
    where
        Self: 'a;

    /// Returns the vertices in insertion order.
    fn vertices(&self) -> Self::VerticesIter<'_>;

    fn vertex_count(&self) -> usize;

    /// Looks up a vertex by its key.
    fn vertex(&self, key: &Self::Key) -> Option<&Self::Vertex>;

    fn contains_vertex(&self, vertex: &Self::Vertex) -> bool {
        self.vertex(&self.id_map(vertex)).is_some()
    }
}

pub trait Neighbors: GraphBase {
    type NeighborsIter<'a>: Iterator<Item = &'a Self::Vertex>
    where
        Self: 'a;

    /// Returns the vertices adjacent to `vertex` in the given direction. Each
    /// neighbor is yielded once per edge connecting it with `vertex`.
    ///
    /// Fails with [`GraphError::NotFound`] if the vertex is not in the graph.
    fn neighbors_directed(
        &self,
        vertex: &Self::Vertex,
        dir: Direction,
    ) -> Result<Self::NeighborsIter<'_>, GraphError>;

    /// Heads of the edges leaving `vertex`.
    fn children(&self, vertex: &Self::Vertex) -> Result<Self::NeighborsIter<'_>, GraphError> {
        self.neighbors_directed(vertex, Direction::Outgoing)
    }

    /// Tails of the edges entering `vertex`.
    fn parents(&self, vertex: &Self::Vertex) -> Result<Self::NeighborsIter<'_>, GraphError> {
        self.neighbors_directed(vertex, Direction::Incoming)
    }
}

pub trait EdgeSet: GraphBase {
    type Edge;

    type EdgesIter<'a>: Iterator<Item = EdgeRef<'a, Self::Vertex, Self::Edge>>
    where
        Self: 'a;

    /// Returns the edges in insertion order.
    fn edges(&self) -> Self::EdgesIter<'_>;

    fn edge_count(&self) -> usize;
}

pub trait Subgraph: VertexSet + Sized {
    /// Returns the subgraph whose vertices are the given ones and whose edges
    /// are all edges of this graph between those vertices.
    ///
    /// Vertices keep the order in which they are given. Repeated vertices are
    /// taken once and vertices that do not belong to this graph are ignored.
    /// The result owns copies of the vertices and edges.
    fn complete_subgraph_on_vertices<'a, I>(&'a self, vertices: I) -> Self
    where
        I: IntoIterator<Item = &'a Self::Vertex>;
}

/// Operations available on every graph representation.
pub trait DirectedGraph: Neighbors + VertexSet + Subgraph {
    /// Returns the complete subgraph on all vertices reachable from `start`.
    ///
    /// If `generations` is given, only vertices at most that many edges away
    /// from `start` are included, so `Some(0)` yields just `start`.
    fn descendants(
        &self,
        start: &Self::Vertex,
        generations: Option<usize>,
    ) -> Result<Self, GraphError> {
        Reachable::on(self)
            .descendants()
            .generations_opt(generations)
            .run(start)
            .map(Reachable::into_subgraph)
    }

    /// Returns the complete subgraph on all vertices from which `start` is
    /// reachable, optionally limited to `generations` edges.
    fn ancestors(&self, start: &Self::Vertex, generations: Option<usize>) -> Result<Self, GraphError> {
        Reachable::on(self)
            .ancestors()
            .generations_opt(generations)
            .run(start)
            .map(Reachable::into_subgraph)
    }

    /// Returns the strongly connected components of the graph as complete
    /// subgraphs, in the order they were completed.
    fn strongly_connected_components(&self) -> Vec<Self> {
        StronglyConnectedComponents::on(self).run().into_subgraphs()
    }

    /// Returns the strongly connected components that no vertex outside of
    /// them points into.
    ///
    /// In a graph of leaked objects, these are the components that keep the
    /// rest of the graph alive.
    fn source_components(&self) -> Vec<Self> {
        StronglyConnectedComponents::on(self).run().into_sources()
    }

    /// Returns the complete subgraph of `self` on the vertices not present in
    /// `other`.
    ///
    /// Both graphs must use the same identity map. This is not checked; the
    /// result is unspecified otherwise.
    fn difference<H>(&self, other: &H) -> Self
    where
        H: VertexSet<Key = Self::Key>,
    {
        ops::difference(self, other)
    }

    /// Returns the complete subgraph of `self` on the vertices also present in
    /// `other`.
    ///
    /// The operation is not symmetric in general, although it is when both
    /// operands are complete subgraphs of a common graph. Both graphs must use
    /// the same identity map.
    fn intersection<H>(&self, other: &H) -> Self
    where
        H: VertexSet<Key = Self::Key>,
    {
        ops::intersection(self, other)
    }
}

impl<G> DirectedGraph for G where G: Neighbors + VertexSet + Subgraph {}
