//! Helpers for testing graph representations and algorithms.

use std::collections::BTreeSet;

use rustc_hash::{FxHashMap, FxHashSet};
use thiserror::Error;

use crate::{
    core::{EdgeSet, Neighbors, VertexSet},
    storage::AdjList,
};

/// Builds a graph from a compact description such as `"1 2 3; 1->2->3 3->1"`.
///
/// The part before the semicolon lists the vertices, the part after it lists
/// chains of edges separated by whitespace.
///
/// # Panics
///
/// Panics if the description is missing the semicolon or if an edge
/// references an undeclared vertex.
pub fn graph_from_str(description: &str) -> AdjList<String> {
    let (vertices, edges) = description
        .split_once(';')
        .expect("description has a vertex part and an edge part");

    let vertices = vertices.split_whitespace().map(String::from).collect::<Vec<_>>();

    let mut pairs = Vec::new();
    for chain in edges.split_whitespace() {
        let nodes = chain.split("->").collect::<Vec<_>>();
        for pair in nodes.windows(2) {
            pairs.push((pair[0].to_owned(), pair[1].to_owned()));
        }
    }

    match AdjList::from_edge_pairs(vertices, pairs) {
        Ok(graph) => graph,
        Err(error) => panic!("invalid graph description {description:?}: {error}"),
    }
}

/// Parses groups of vertices such as `"1 2; 3"` into sets.
pub fn groups_from_str(description: &str) -> Vec<BTreeSet<String>> {
    description
        .split(';')
        .map(|group| group.split_whitespace().map(String::from).collect())
        .collect()
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConsistencyCheckError {
    #[error("vertices iterator count ({0}) is not equal to vertex count ({1})")]
    VertexCount(usize, usize),
    #[error("vertex key {0} is not unique")]
    DuplicateKey(String),
    #[error("vertex with key {0} cannot be looked up by it")]
    VertexLookup(String),
    #[error("edges iterator count ({0}) is not equal to edge count ({1})")]
    EdgeCount(usize, usize),
    #[error("edge {0} has an endpoint outside of the graph")]
    EdgeEndpoint(usize),
    #[error("neighbors of vertex {0} are unavailable")]
    Neighbors(String),
    #[error("{dir} degree of vertex {key} is {actual}, but edges imply {expected}")]
    Degree {
        key: String,
        dir: &'static str,
        actual: usize,
        expected: usize,
    },
}

/// Checks that vertices, keys, edges and adjacency of a graph agree with each
/// other.
pub fn check_consistency<G>(graph: &G) -> Result<(), ConsistencyCheckError>
where
    G: VertexSet + Neighbors + EdgeSet,
{
    let vertex_count = graph.vertices().count();
    if vertex_count != graph.vertex_count() {
        return Err(ConsistencyCheckError::VertexCount(
            vertex_count,
            graph.vertex_count(),
        ));
    }

    let mut keys = FxHashSet::default();
    for vertex in graph.vertices() {
        let key = graph.id_map(vertex);

        if graph.vertex(&key).map(|found| graph.id_map(found)).as_ref() != Some(&key) {
            return Err(ConsistencyCheckError::VertexLookup(format!("{key:?}")));
        }

        if !keys.insert(key.clone()) {
            return Err(ConsistencyCheckError::DuplicateKey(format!("{key:?}")));
        }
    }

    let edge_count = graph.edges().count();
    if edge_count != graph.edge_count() {
        return Err(ConsistencyCheckError::EdgeCount(
            edge_count,
            graph.edge_count(),
        ));
    }

    let mut out_degrees = FxHashMap::default();
    let mut in_degrees = FxHashMap::default();

    for edge in graph.edges() {
        let tail = graph.id_map(edge.tail);
        let head = graph.id_map(edge.head);

        if !keys.contains(&tail) || !keys.contains(&head) {
            return Err(ConsistencyCheckError::EdgeEndpoint(edge.index));
        }

        *out_degrees.entry(tail).or_insert(0usize) += 1;
        *in_degrees.entry(head).or_insert(0usize) += 1;
    }

    for vertex in graph.vertices() {
        let key = graph.id_map(vertex);
        let neighbors_error = || ConsistencyCheckError::Neighbors(format!("{key:?}"));

        let checks = [
            ("out", graph.children(vertex).map_err(|_| neighbors_error())?.count(), &out_degrees),
            ("in", graph.parents(vertex).map_err(|_| neighbors_error())?.count(), &in_degrees),
        ];

        for (dir, actual, degrees) in checks {
            let expected = degrees.get(&key).copied().unwrap_or_default();
            if actual != expected {
                return Err(ConsistencyCheckError::Degree {
                    key: format!("{key:?}"),
                    dir,
                    actual,
                    expected,
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_description() {
        let graph = graph_from_str("1 2 3; 1->2->3 3->1");
        check_consistency(&graph).unwrap();

        assert_eq!(graph.len(), 3);
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn parse_without_edges() {
        let graph = graph_from_str("a b;");
        assert_eq!(graph.len(), 2);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn parse_groups() {
        assert_eq!(
            groups_from_str("1 2; 3"),
            vec![
                BTreeSet::from(["1".to_owned(), "2".to_owned()]),
                BTreeSet::from(["3".to_owned()]),
            ]
        );
    }
}
