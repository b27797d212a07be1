//! Graph of explicit, labeled vertices and edges.
//!
//! Vertices and edges carry a caller-assigned id and an opaque
//! [`Annotation`]. The graph never interprets annotations; it only carries
//! them through subgraphs, JSON and DOT output.
//!
//! # Examples
//!
//! ```
//! use refgraph::prelude::*;
//!
//! let graph = AnnotatedGraph::new(
//!     vec![
//!         AnnotatedVertex::new(0, "list"),
//!         AnnotatedVertex::new(1, "dict"),
//!     ],
//!     vec![
//!         AnnotatedEdge::new(2, "item[0]", 0, 1),
//!         AnnotatedEdge::new(3, "value", 1, 0),
//!     ],
//! )
//! .unwrap();
//!
//! assert_eq!(graph.strongly_connected_components().len(), 1);
//!
//! let json = graph.export_json().unwrap();
//! assert_eq!(AnnotatedGraph::from_json(&json).unwrap(), graph);
//! ```

mod json;

pub use json::GraphDocument;

use std::{collections::HashMap, fmt};

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::{
    core::{
        error::GraphError,
        id::{ById, KeyType},
        marker::Direction,
        EdgeSet, GraphBase, Neighbors, Subgraph, VertexSet,
    },
    infra::export::Dot,
    ops::impl_set_ops,
};

use super::adj_list::{self, AdjList};

/// Opaque label of a vertex or an edge.
///
/// Annotations are either plain text or an arbitrary structured value.
/// Strings always deserialize as [`Annotation::Text`].
///
/// A structured JSON string is the same annotation as the equal text, so that
/// annotations compare equal after a JSON round trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Annotation {
    Text(String),
    Structured(serde_json::Value),
}

impl Annotation {
    /// Returns the annotation as text if it is either plain text or a
    /// structured JSON string.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Annotation::Text(text) | Annotation::Structured(serde_json::Value::String(text)) => {
                Some(text)
            }
            Annotation::Structured(_) => None,
        }
    }
}

impl PartialEq for Annotation {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Annotation::Structured(lhs), Annotation::Structured(rhs)) => lhs == rhs,
            _ => self.as_text().is_some_and(|text| other.as_text() == Some(text)),
        }
    }
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.as_text(), self) {
            (Some(text), _) => f.write_str(text),
            (None, Annotation::Structured(value)) => write!(f, "{value}"),
            (None, Annotation::Text(text)) => f.write_str(text),
        }
    }
}

impl From<&str> for Annotation {
    fn from(text: &str) -> Self {
        Annotation::Text(text.to_owned())
    }
}

impl From<String> for Annotation {
    fn from(text: String) -> Self {
        Annotation::Text(text)
    }
}

impl From<serde_json::Value> for Annotation {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(text) => Annotation::Text(text),
            value => Annotation::Structured(value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedVertex<I = u64> {
    pub id: I,
    pub annotation: Annotation,
}

impl<I> AnnotatedVertex<I> {
    pub fn new(id: I, annotation: impl Into<Annotation>) -> Self {
        Self {
            id,
            annotation: annotation.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedEdge<I = u64> {
    pub id: I,
    pub annotation: Annotation,
    pub head: I,
    pub tail: I,
}

impl<I> AnnotatedEdge<I> {
    /// Creates an edge going from `tail` to `head`.
    pub fn new(id: I, annotation: impl Into<Annotation>, tail: I, head: I) -> Self {
        Self {
            id,
            annotation: annotation.into(),
            head,
            tail,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AnnotatedGraph<I: KeyType = u64> {
    inner: AdjList<AnnotatedVertex<I>, AnnotatedEdge<I>, ById>,
    edge_index: FxHashMap<I, usize>,
}

impl<I: KeyType> AnnotatedGraph<I> {
    /// Creates a graph from explicit vertices and edges.
    ///
    /// Fails with [`GraphError::MalformedGraph`] if vertex ids or edge ids are
    /// not unique or if an edge references an undeclared vertex id. Nothing is
    /// built in that case.
    pub fn new<VI, EI>(vertices: VI, edges: EI) -> Result<Self, GraphError>
    where
        VI: IntoIterator<Item = AnnotatedVertex<I>>,
        EI: IntoIterator<Item = AnnotatedEdge<I>>,
    {
        let vertices = vertices.into_iter().collect::<Vec<_>>();
        let edges = edges.into_iter().collect::<Vec<_>>();

        let mut vertex_ids = FxHashSet::default();
        for vertex in vertices.iter() {
            if !vertex_ids.insert(&vertex.id) {
                return Err(GraphError::duplicate_vertex(&vertex.id));
            }
        }

        let mut edge_index = FxHashMap::default();
        for (position, edge) in edges.iter().enumerate() {
            if edge_index.insert(edge.id.clone(), position).is_some() {
                return Err(GraphError::duplicate_edge(&edge.id));
            }

            for endpoint in [&edge.tail, &edge.head] {
                if !vertex_ids.contains(endpoint) {
                    return Err(GraphError::dangling_edge(&edge.id, endpoint));
                }
            }
        }

        let inner = AdjList::from_edges(
            ById,
            vertices,
            edges
                .into_iter()
                .map(|edge| (edge.tail.clone(), edge.head.clone(), edge)),
        )?;

        Ok(Self { inner, edge_index })
    }

    fn from_inner(inner: AdjList<AnnotatedVertex<I>, AnnotatedEdge<I>, ById>) -> Self {
        let edge_index = inner
            .edges()
            .map(|edge| (edge.attr.id.clone(), edge.index))
            .collect();

        Self { inner, edge_index }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns `true` if the graph has a vertex with the id of `vertex`.
    pub fn contains(&self, vertex: &AnnotatedVertex<I>) -> bool {
        self.inner.contains(vertex)
    }

    pub fn edge(&self, id: &I) -> Option<&AnnotatedEdge<I>> {
        let position = *self.edge_index.get(id)?;
        self.inner.edge(position).map(|edge| edge.attr)
    }

    /// Returns the vertex the edge points to.
    pub fn head(&self, edge: &AnnotatedEdge<I>) -> Result<&AnnotatedVertex<I>, GraphError> {
        self.vertex(&edge.head)
            .ok_or_else(|| GraphError::not_found(&edge.head))
    }

    /// Returns the vertex the edge starts at.
    pub fn tail(&self, edge: &AnnotatedEdge<I>) -> Result<&AnnotatedVertex<I>, GraphError> {
        self.vertex(&edge.tail)
            .ok_or_else(|| GraphError::not_found(&edge.tail))
    }

    pub fn out_edges(
        &self,
        vertex: &AnnotatedVertex<I>,
    ) -> Result<impl Iterator<Item = &AnnotatedEdge<I>> + '_, GraphError> {
        Ok(self.inner.out_edges(vertex)?.map(|edge| edge.attr))
    }

    pub fn in_edges(
        &self,
        vertex: &AnnotatedVertex<I>,
    ) -> Result<impl Iterator<Item = &AnnotatedEdge<I>> + '_, GraphError> {
        Ok(self.inner.in_edges(vertex)?.map(|edge| edge.attr))
    }

    /// Renders the graph in DOT format with vertices and edges labeled by
    /// their annotations.
    pub fn to_dot(&self) -> String {
        self.to_dot_with(None, None)
    }

    /// Renders the graph in DOT format with custom labels.
    ///
    /// If `edge_labels` is given, only edges with an entry in it are labeled.
    /// Otherwise every edge is labeled by its annotation. Vertices without an
    /// entry in `vertex_labels` are labeled by their annotation.
    pub fn to_dot_with(
        &self,
        edge_labels: Option<&HashMap<I, String>>,
        vertex_labels: Option<&HashMap<I, String>>,
    ) -> String {
        Dot::new(
            None,
            |vertex: &AnnotatedVertex<I>| {
                vertex_labels
                    .and_then(|labels| labels.get(&vertex.id))
                    .cloned()
                    .unwrap_or_else(|| vertex.annotation.to_string())
            },
            |edge: &AnnotatedEdge<I>| match edge_labels {
                Some(labels) => labels.get(&edge.id).cloned(),
                None => Some(edge.annotation.to_string()),
            },
        )
        .to_string(self)
    }
}

impl<I: KeyType> Default for AnnotatedGraph<I> {
    fn default() -> Self {
        Self {
            inner: AdjList::default(),
            edge_index: FxHashMap::default(),
        }
    }
}

/// Graphs are equal if they have the same vertices and edges in the same
/// order.
impl<I: KeyType> PartialEq for AnnotatedGraph<I> {
    fn eq(&self, other: &Self) -> bool {
        self.inner.vertices().eq(other.inner.vertices())
            && self
                .inner
                .edges()
                .map(|edge| edge.attr)
                .eq(other.inner.edges().map(|edge| edge.attr))
    }
}

impl<I: KeyType> GraphBase for AnnotatedGraph<I> {
    type Vertex = AnnotatedVertex<I>;
    type Key = I;

    fn id_map(&self, vertex: &AnnotatedVertex<I>) -> I {
        vertex.id.clone()
    }
}

impl<I: KeyType> VertexSet for AnnotatedGraph<I> {
    type VerticesIter<'a> = adj_list::VerticesIter<'a, AnnotatedVertex<I>>
    where
        Self: 'a;

    fn vertices(&self) -> Self::VerticesIter<'_> {
        self.inner.vertices()
    }

    fn vertex_count(&self) -> usize {
        self.inner.vertex_count()
    }

    fn vertex(&self, key: &I) -> Option<&AnnotatedVertex<I>> {
        self.inner.vertex(key)
    }
}

impl<I: KeyType> Neighbors for AnnotatedGraph<I> {
    type NeighborsIter<'a> = adj_list::NeighborsIter<'a, AnnotatedVertex<I>>
    where
        Self: 'a;

    fn neighbors_directed(
        &self,
        vertex: &AnnotatedVertex<I>,
        dir: Direction,
    ) -> Result<Self::NeighborsIter<'_>, GraphError> {
        self.inner.neighbors_directed(vertex, dir)
    }
}

impl<I: KeyType> EdgeSet for AnnotatedGraph<I> {
    type Edge = AnnotatedEdge<I>;

    type EdgesIter<'a> = adj_list::EdgesIter<'a, AnnotatedVertex<I>, AnnotatedEdge<I>>
    where
        Self: 'a;

    fn edges(&self) -> Self::EdgesIter<'_> {
        self.inner.edges()
    }

    fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }
}

impl<I: KeyType> Subgraph for AnnotatedGraph<I> {
    fn complete_subgraph_on_vertices<'a, It>(&'a self, vertices: It) -> Self
    where
        It: IntoIterator<Item = &'a AnnotatedVertex<I>>,
    {
        Self::from_inner(self.inner.complete_subgraph_on_vertices(vertices))
    }
}

impl_set_ops!([I: KeyType] AnnotatedGraph<I> where []);
