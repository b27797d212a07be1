//! Adjacency list over arbitrary vertex values.
//!
//! Vertices are stored in insertion order and addressed internally by their
//! position. Their keys (as given by the identity map) are indexed once at
//! construction, as are the outgoing and incoming edge lists of every vertex.
//! The graph is never modified afterwards.

use std::{collections::hash_map::Entry, fmt, ops::Range, slice};

use rustc_hash::FxHashMap;

use crate::{
    core::{
        error::GraphError,
        id::{IdMap, Identity},
        marker::Direction,
        EdgeRef, EdgeSet, GraphBase, Neighbors, Subgraph, VertexSet,
    },
    infra::export::Dot,
    ops::impl_set_ops,
};

#[derive(Debug, Clone)]
struct AdjVertex<V> {
    data: V,
    edges: [Vec<usize>; 2],
}

impl<V> AdjVertex<V> {
    fn new(data: V) -> Self {
        Self {
            data,
            edges: [Vec::new(), Vec::new()],
        }
    }
}

pub struct AdjList<V, E = (), M = Identity>
where
    M: IdMap<V>,
{
    vertices: Vec<AdjVertex<V>>,
    edges: Vec<E>,
    endpoints: Vec<[usize; 2]>,
    index: FxHashMap<M::Key, usize>,
    id_map: M,
}

const TAIL: usize = 0;
const HEAD: usize = 1;

impl<V, E, M: IdMap<V>> AdjList<V, E, M> {
    /// Creates a graph from vertices and `(tail, head, attr)` triples where the
    /// endpoints are given by their keys.
    ///
    /// Fails with [`GraphError::MalformedGraph`] if two vertices share a key
    /// or an edge references a key of no vertex.
    pub fn from_edges<VI, EI>(id_map: M, vertices: VI, edges: EI) -> Result<Self, GraphError>
    where
        VI: IntoIterator<Item = V>,
        EI: IntoIterator<Item = (M::Key, M::Key, E)>,
    {
        let vertices = vertices.into_iter().collect::<Vec<_>>();
        let index = Self::index_vertices(&id_map, &vertices)?;

        let edges = edges
            .into_iter()
            .enumerate()
            .map(|(position, (tail, head, attr))| {
                let resolve = |key: &M::Key| {
                    index
                        .get(key)
                        .copied()
                        .ok_or_else(|| GraphError::dangling_edge(position, key))
                };
                Ok((resolve(&tail)?, resolve(&head)?, attr))
            })
            .collect::<Result<Vec<_>, GraphError>>()?;

        Ok(Self::assemble(id_map, vertices, index, edges))
    }

    fn index_vertices(id_map: &M, vertices: &[V]) -> Result<FxHashMap<M::Key, usize>, GraphError> {
        let mut index = FxHashMap::default();
        index.reserve(vertices.len());

        for (position, vertex) in vertices.iter().enumerate() {
            match index.entry(id_map.key_of(vertex)) {
                Entry::Occupied(entry) => return Err(GraphError::duplicate_vertex(entry.key())),
                Entry::Vacant(entry) => {
                    entry.insert(position);
                }
            }
        }

        Ok(index)
    }

    // Endpoints in `edges` are positions into `vertices` and must be valid.
    fn assemble(
        id_map: M,
        vertices: Vec<V>,
        index: FxHashMap<M::Key, usize>,
        edges: Vec<(usize, usize, E)>,
    ) -> Self {
        let mut vertices = vertices.into_iter().map(AdjVertex::new).collect::<Vec<_>>();
        let mut attrs = Vec::with_capacity(edges.len());
        let mut endpoints = Vec::with_capacity(edges.len());

        for (id, (tail, head, attr)) in edges.into_iter().enumerate() {
            vertices[tail].edges[Direction::Outgoing.index()].push(id);
            vertices[head].edges[Direction::Incoming.index()].push(id);
            endpoints.push([tail, head]);
            attrs.push(attr);
        }

        tracing::debug!(
            vertices = vertices.len(),
            edges = attrs.len(),
            "adjacency list assembled"
        );

        Self {
            vertices,
            edges: attrs,
            endpoints,
            index,
            id_map,
        }
    }

    pub fn id_map(&self) -> &M {
        &self.id_map
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn contains(&self, vertex: &V) -> bool {
        self.index.contains_key(&self.id_map.key_of(vertex))
    }

    /// Returns the edge at the given position in insertion order.
    pub fn edge(&self, index: usize) -> Option<EdgeRef<'_, V, E>> {
        let [tail, head] = *self.endpoints.get(index)?;
        Some(EdgeRef {
            index,
            tail: &self.vertices[tail].data,
            head: &self.vertices[head].data,
            attr: &self.edges[index],
        })
    }

    /// Edges leaving `vertex`.
    pub fn out_edges(&self, vertex: &V) -> Result<EdgesIter<'_, V, E>, GraphError> {
        self.incident_edges(vertex, Direction::Outgoing)
    }

    /// Edges entering `vertex`.
    pub fn in_edges(&self, vertex: &V) -> Result<EdgesIter<'_, V, E>, GraphError> {
        self.incident_edges(vertex, Direction::Incoming)
    }

    fn incident_edges(&self, vertex: &V, dir: Direction) -> Result<EdgesIter<'_, V, E>, GraphError> {
        let position = self.position(vertex)?;
        Ok(EdgesIter {
            ids: EdgeIds::Incident(self.vertices[position].edges[dir.index()].iter()),
            vertices: &self.vertices,
            edges: &self.edges,
            endpoints: &self.endpoints,
        })
    }

    fn position(&self, vertex: &V) -> Result<usize, GraphError> {
        let key = self.id_map.key_of(vertex);
        self.index
            .get(&key)
            .copied()
            .ok_or_else(|| GraphError::not_found(&key))
    }

    /// Renders the graph in DOT format, labeling vertices with their `Debug`
    /// representation and leaving edges unlabeled.
    pub fn to_dot(&self) -> String
    where
        V: fmt::Debug,
    {
        Dot::new(None, |vertex: &V| format!("{vertex:?}"), |_: &E| None).to_string(self)
    }
}

impl<V, E: Default, M: IdMap<V> + Default> AdjList<V, E, M> {
    /// Creates a graph from vertices and `(tail, head)` pairs of vertices.
    ///
    /// ```
    /// use refgraph::prelude::*;
    ///
    /// let graph = AdjList::<&str>::from_edge_pairs(vec!["a", "b"], vec![("a", "b")]).unwrap();
    /// assert_eq!(graph.children(&"a").unwrap().collect::<Vec<_>>(), vec![&"b"]);
    /// ```
    pub fn from_edge_pairs<VI, EI>(vertices: VI, pairs: EI) -> Result<Self, GraphError>
    where
        VI: IntoIterator<Item = V>,
        EI: IntoIterator<Item = (V, V)>,
    {
        let id_map = M::default();
        let edges = pairs
            .into_iter()
            .map(|(tail, head)| (id_map.key_of(&tail), id_map.key_of(&head), E::default()))
            .collect::<Vec<_>>();

        Self::from_edges(id_map, vertices, edges)
    }

    /// Creates a graph from vertices and a mapping from a vertex to the heads
    /// of its outgoing edges.
    ///
    /// Edges are inserted in the iteration order of the mapping.
    pub fn from_out_edges<VI, MI, HI>(vertices: VI, mapping: MI) -> Result<Self, GraphError>
    where
        VI: IntoIterator<Item = V>,
        MI: IntoIterator<Item = (V, HI)>,
        HI: IntoIterator<Item = V>,
    {
        let id_map = M::default();
        let mut edges = Vec::new();

        for (tail, heads) in mapping {
            let tail = id_map.key_of(&tail);
            for head in heads {
                edges.push((tail.clone(), id_map.key_of(&head), E::default()));
            }
        }

        Self::from_edges(id_map, vertices, edges)
    }
}

impl<V, E, M: IdMap<V> + Default> Default for AdjList<V, E, M> {
    fn default() -> Self {
        Self::assemble(M::default(), Vec::new(), FxHashMap::default(), Vec::new())
    }
}

impl<V: Clone, E: Clone, M: IdMap<V> + Clone> Clone for AdjList<V, E, M> {
    fn clone(&self) -> Self {
        Self {
            vertices: self.vertices.clone(),
            edges: self.edges.clone(),
            endpoints: self.endpoints.clone(),
            index: self.index.clone(),
            id_map: self.id_map.clone(),
        }
    }
}

impl<V: fmt::Debug, E: fmt::Debug, M: IdMap<V>> fmt::Debug for AdjList<V, E, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdjList")
            .field(
                "vertices",
                &self.vertices.iter().map(|v| &v.data).collect::<Vec<_>>(),
            )
            .field(
                "edges",
                &self
                    .endpoints
                    .iter()
                    .zip(self.edges.iter())
                    .map(|([tail, head], attr)| (tail, head, attr))
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl<V, E, M: IdMap<V>> GraphBase for AdjList<V, E, M> {
    type Vertex = V;
    type Key = M::Key;

    fn id_map(&self, vertex: &V) -> M::Key {
        self.id_map.key_of(vertex)
    }
}

impl<V, E, M: IdMap<V>> VertexSet for AdjList<V, E, M> {
    type VerticesIter<'a> = VerticesIter<'a, V>
    where
        Self: 'a;

    fn vertices(&self) -> Self::VerticesIter<'_> {
        VerticesIter {
            inner: self.vertices.iter(),
        }
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn vertex(&self, key: &M::Key) -> Option<&V> {
        self.index
            .get(key)
            .map(|&position| &self.vertices[position].data)
    }

    fn contains_vertex(&self, vertex: &V) -> bool {
        self.contains(vertex)
    }
}

impl<V, E, M: IdMap<V>> Neighbors for AdjList<V, E, M> {
    type NeighborsIter<'a> = NeighborsIter<'a, V>
    where
        Self: 'a;

    fn neighbors_directed(
        &self,
        vertex: &V,
        dir: Direction,
    ) -> Result<Self::NeighborsIter<'_>, GraphError> {
        let position = self.position(vertex)?;
        let side = match dir {
            Direction::Outgoing => HEAD,
            Direction::Incoming => TAIL,
        };

        Ok(NeighborsIter {
            edges: self.vertices[position].edges[dir.index()].iter(),
            vertices: &self.vertices,
            endpoints: &self.endpoints,
            side,
        })
    }
}

impl<V, E, M: IdMap<V>> EdgeSet for AdjList<V, E, M> {
    type Edge = E;

    type EdgesIter<'a> = EdgesIter<'a, V, E>
    where
        Self: 'a;

    fn edges(&self) -> Self::EdgesIter<'_> {
        EdgesIter {
            ids: EdgeIds::All(0..self.edges.len()),
            vertices: &self.vertices,
            edges: &self.edges,
            endpoints: &self.endpoints,
        }
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

impl<V: Clone, E: Clone, M: IdMap<V> + Clone> Subgraph for AdjList<V, E, M> {
    fn complete_subgraph_on_vertices<'a, I>(&'a self, vertices: I) -> Self
    where
        I: IntoIterator<Item = &'a V>,
    {
        // Position in this graph -> position in the subgraph.
        let mut selected = FxHashMap::default();
        let mut chosen = Vec::new();

        for vertex in vertices {
            let Some(&position) = self.index.get(&self.id_map.key_of(vertex)) else {
                continue;
            };

            if let Entry::Vacant(entry) = selected.entry(position) {
                entry.insert(chosen.len());
                chosen.push(position);
            }
        }

        // Only the edges incident to the chosen vertices are inspected. Sorting
        // restores the edge order of this graph.
        let mut edge_ids = chosen
            .iter()
            .flat_map(|&position| self.vertices[position].edges[Direction::Outgoing.index()].iter())
            .copied()
            .filter(|&id| selected.contains_key(&self.endpoints[id][HEAD]))
            .collect::<Vec<_>>();
        edge_ids.sort_unstable();

        let edges = edge_ids
            .into_iter()
            .map(|id| {
                let [tail, head] = self.endpoints[id];
                (selected[&tail], selected[&head], self.edges[id].clone())
            })
            .collect();

        let index = chosen
            .iter()
            .enumerate()
            .map(|(new, &old)| (self.id_map.key_of(&self.vertices[old].data), new))
            .collect();

        let vertices = chosen
            .into_iter()
            .map(|position| self.vertices[position].data.clone())
            .collect();

        Self::assemble(self.id_map.clone(), vertices, index, edges)
    }
}

impl_set_ops!([V: Clone, E: Clone, M: IdMap<V> + Clone] AdjList<V, E, M> where []);

#[derive(Debug)]
pub struct VerticesIter<'a, V> {
    inner: slice::Iter<'a, AdjVertex<V>>,
}

impl<'a, V> Iterator for VerticesIter<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|vertex| &vertex.data)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> ExactSizeIterator for VerticesIter<'_, V> {}

#[derive(Debug)]
pub struct NeighborsIter<'a, V> {
    edges: slice::Iter<'a, usize>,
    vertices: &'a [AdjVertex<V>],
    endpoints: &'a [[usize; 2]],
    side: usize,
}

impl<'a, V> Iterator for NeighborsIter<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        let edge = *self.edges.next()?;
        Some(&self.vertices[self.endpoints[edge][self.side]].data)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.edges.size_hint()
    }
}

#[derive(Debug)]
enum EdgeIds<'a> {
    All(Range<usize>),
    Incident(slice::Iter<'a, usize>),
}

#[derive(Debug)]
pub struct EdgesIter<'a, V, E> {
    ids: EdgeIds<'a>,
    vertices: &'a [AdjVertex<V>],
    edges: &'a [E],
    endpoints: &'a [[usize; 2]],
}

impl<'a, V, E> Iterator for EdgesIter<'a, V, E> {
    type Item = EdgeRef<'a, V, E>;

    fn next(&mut self) -> Option<Self::Item> {
        let index = match &mut self.ids {
            EdgeIds::All(range) => range.next()?,
            EdgeIds::Incident(iter) => *iter.next()?,
        };
        let [tail, head] = self.endpoints[index];

        Some(EdgeRef {
            index,
            tail: &self.vertices[tail].data,
            head: &self.vertices[head].data,
            attr: &self.edges[index],
        })
    }
}
