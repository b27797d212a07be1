//! Strategies generating random graphs for property-based tests.

use proptest::{collection::vec, prelude::*};

use crate::storage::{AdjList, AnnotatedEdge, AnnotatedGraph, AnnotatedVertex};

/// Generates graphs with up to `max_vertices` vertices `0..n` and up to `2n`
/// edges, including loops and parallel edges.
pub fn graph_directed(max_vertices: usize) -> impl Strategy<Value = AdjList<u32>> {
    (0..=max_vertices).prop_flat_map(|n| {
        let bound = n.max(1) as u32;
        vec((0..bound, 0..bound), 0..=2 * n).prop_map(move |pairs| {
            AdjList::from_edge_pairs(0..n as u32, pairs)
                .expect("generated edges connect existing vertices")
        })
    })
}

/// Generates annotated graphs shaped like those of [`graph_directed`], with
/// random text annotations.
pub fn graph_annotated(max_vertices: usize) -> impl Strategy<Value = AnnotatedGraph> {
    (0..=max_vertices).prop_flat_map(|n| {
        let bound = n.max(1) as u64;
        let vertices = vec("[a-z ]{0,8}", n);
        let edges = vec((0..bound, 0..bound, "[a-z\\[\\]0-9]{0,8}"), 0..=2 * n);

        (vertices, edges).prop_map(|(vertices, edges)| {
            let vertices = vertices
                .into_iter()
                .enumerate()
                .map(|(id, annotation)| AnnotatedVertex::new(id as u64, annotation));
            let edges = edges
                .into_iter()
                .enumerate()
                .map(|(id, (tail, head, annotation))| {
                    AnnotatedEdge::new(id as u64, annotation, tail, head)
                });

            AnnotatedGraph::new(vertices, edges).expect("generated graph is well-formed")
        })
    })
}
