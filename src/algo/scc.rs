//! Find [strongly connected components] of a directed graph.
//!
//! Components are found by the path-based algorithm of Gabow ("Path-based
//! depth-first search for strong and biconnected components", 2000). The
//! search runs on an explicit work stack, so arbitrarily deep graphs do not
//! exhaust the call stack.
//!
//! Components are reported in the order in which the search completes them.
//! That is a reverse topological order of the condensation: if there is an
//! edge from component `A` to component `B`, then `B` comes before `A`.
//!
//! # Examples
//!
//! ```
//! use refgraph::{algo::StronglyConnectedComponents, prelude::*};
//!
//! let graph = AdjList::<u32>::from_edge_pairs(
//!     vec![1, 2, 3, 4],
//!     vec![(1, 2), (2, 1), (2, 3), (3, 4), (4, 3)],
//! )
//! .unwrap();
//!
//! let sccs = StronglyConnectedComponents::on(&graph).run();
//! assert_eq!(sccs.len(), 2);
//!
//! let mut first = sccs.iter().next().unwrap().to_vec();
//! first.sort();
//! assert_eq!(first, vec![&3, &4]);
//!
//! // Only {1, 2} is not pointed into from the outside.
//! let sources = graph.source_components();
//! assert_eq!(sources.len(), 1);
//! assert!(sources[0].contains(&1));
//! ```
//!
//! [strongly connected components]: https://en.wikipedia.org/wiki/Strongly_connected_component

use rustc_hash::FxHashSet;

use crate::core::{GraphBase, Neighbors, Subgraph};

mod builder;
mod gabow;

pub use builder::StronglyConnectedComponentsBuilder;

/// Strongly connected components of a graph.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug)]
pub struct StronglyConnectedComponents<'a, G: GraphBase> {
    graph: &'a G,
    components: Vec<Vec<&'a G::Vertex>>,
}

impl<'a, G> StronglyConnectedComponents<'a, G>
where
    G: GraphBase,
{
    /// Returns the number of components.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Returns an iterator of the components in completion order.
    pub fn iter(&self) -> Iter<'_, 'a, G> {
        Iter {
            inner: self.components.iter(),
        }
    }

    /// Converts the components into complete subgraphs of the graph.
    pub fn into_subgraphs(self) -> Vec<G>
    where
        G: Subgraph,
    {
        let graph = self.graph;
        self.components
            .into_iter()
            .map(|component| graph.complete_subgraph_on_vertices(component))
            .collect()
    }

    /// Converts the components that have no incoming edge from outside of
    /// them into complete subgraphs of the graph.
    pub fn into_sources(self) -> Vec<G>
    where
        G: Subgraph + Neighbors,
    {
        let graph = self.graph;
        self.components
            .into_iter()
            .filter(|component| is_source(graph, component))
            .map(|component| graph.complete_subgraph_on_vertices(component))
            .collect()
    }
}

fn is_source<G>(graph: &G, component: &[&G::Vertex]) -> bool
where
    G: Neighbors,
{
    let keys = component
        .iter()
        .map(|vertex| graph.id_map(vertex))
        .collect::<FxHashSet<_>>();

    component.iter().all(|vertex| {
        graph
            .parents(vertex)
            .is_ok_and(|mut parents| parents.all(|parent| keys.contains(&graph.id_map(parent))))
    })
}

pub struct Iter<'s, 'a, G: GraphBase> {
    inner: std::slice::Iter<'s, Vec<&'a G::Vertex>>,
}

impl<'s, 'a, G> Iterator for Iter<'s, 'a, G>
where
    G: GraphBase,
{
    type Item = &'s [&'a G::Vertex];

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|component| component.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use proptest::prelude::*;
    use rustc_hash::FxHashMap;

    use super::*;
    use crate::{
        algo::Reachable,
        core::{DirectedGraph, EdgeSet, VertexSet},
        infra::{
            proptest::graph_directed,
            testing::{check_consistency, graph_from_str, groups_from_str},
        },
        storage::AdjList,
    };

    fn groups<G>(sccs: &StronglyConnectedComponents<'_, G>) -> Vec<BTreeSet<String>>
    where
        G: GraphBase<Vertex = String>,
    {
        sccs.iter()
            .map(|component| component.iter().map(|&v| v.clone()).collect())
            .collect()
    }

    fn assert_components(description: &str, expected: &str) {
        let graph = graph_from_str(description);
        let sccs = StronglyConnectedComponents::on(&graph).run();

        let mut actual = groups(&sccs);
        let mut expected = groups_from_str(expected);
        actual.sort();
        expected.sort();

        assert_eq!(actual, expected, "components of {description:?}");

        let subgraphs = graph.strongly_connected_components();
        assert_eq!(subgraphs.len(), expected.len());
        for subgraph in subgraphs.iter() {
            check_consistency(subgraph).unwrap();
        }
    }

    #[test]
    fn self_loop() {
        assert_components("1; 1->1", "1");
    }

    #[test]
    fn no_edges() {
        assert_components("1 2;", "1; 2");
    }

    #[test]
    fn acyclic() {
        assert_components("1 2; 1->2", "1; 2");
        assert_components("1 2; 1->2 1->2", "1; 2");
        assert_components("1 2 3; 1->2->3", "1; 2; 3");
        assert_components("1 2 3 4; 1->2->4 1->3->4", "1; 2; 3; 4");
    }

    #[test]
    fn cycles() {
        assert_components("1 2 3; 1->2->3->1", "1 2 3");
        assert_components("1 2 3; 1->2->1->3->1", "1 2 3");
        assert_components("1 2 3; 1->2->1", "1 2; 3");
        assert_components("1 2 3 4; 1->2->4 1->3->4->2", "1; 2 4; 3");
        assert_components(
            "1 2 3 4 5 6 7 8; 1->2->3->4->1 5->6->7->8->5 2->5->8 4->2",
            "1 2 3 4; 5 6 7 8",
        );
    }

    #[test]
    fn tarjan_example() {
        assert_components(
            "1 2 3 4 5 6 7 8; 1->2 2->3 2->8 3->4 3->7 4->5 5->3 5->6 7->4 7->6 8->1 8->7",
            "1 2 8; 3 4 5 7; 6",
        );
    }

    #[test]
    fn gabow_example() {
        assert_components(
            "1 2 3 4 5 6; 1->2 1->3 2->3 2->4 4->3 4->5 5->2 5->6 6->3 6->4",
            "1; 2 4 5 6; 3",
        );
    }

    #[test]
    fn completion_order() {
        let graph = graph_from_str("1 2 3; 1->2->3");
        let sccs = StronglyConnectedComponents::on(&graph).run();

        assert_eq!(groups(&sccs), groups_from_str("3; 2; 1"));
    }

    #[test]
    fn empty_components_vector() {
        let graph = AdjList::<u32>::default();
        assert_eq!(StronglyConnectedComponents::on(&graph).run().len(), 0);
        assert!(graph.strongly_connected_components().is_empty());
    }

    #[test]
    fn deep_chain() {
        let n = 10_000u32;
        let graph = AdjList::<u32>::from_edge_pairs(0..=n, (0..n).map(|i| (i, i + 1))).unwrap();
        let sccs = StronglyConnectedComponents::on(&graph).run();

        assert_eq!(sccs.len(), n as usize + 1);
        assert_eq!(sccs.iter().next(), Some([&n].as_slice()));
    }

    #[test]
    fn deep_cycle() {
        let n = 10_000u32;
        let graph = AdjList::<u32>::from_edge_pairs(
            0..=n,
            (0..n).map(|i| (i, i + 1)).chain(std::iter::once((n, 0))),
        )
        .unwrap();

        let sccs = graph.strongly_connected_components();
        assert_eq!(sccs.len(), 1);
        assert_eq!(sccs[0].len(), n as usize + 1);
        assert_eq!(sccs[0].edge_count(), n as usize + 1);
    }

    #[test]
    fn source_components() {
        let graph = graph_from_str("1 2 3 4 5; 1->2->1 2->3 3->4->3 5->5");
        let sources = graph
            .source_components()
            .iter()
            .map(|scc| scc.vertices().cloned().collect::<BTreeSet<_>>())
            .collect::<Vec<_>>();

        assert_eq!(sources, groups_from_str("1 2; 5"));
    }

    fn assert_valid(graph: &AdjList<u32>, sccs: &StronglyConnectedComponents<'_, AdjList<u32>>) {
        let mut component_of = FxHashMap::default();
        for (i, component) in sccs.iter().enumerate() {
            assert!(!component.is_empty());
            for vertex in component {
                assert_eq!(component_of.insert(**vertex, i), None, "vertex {vertex} repeated");
            }
        }
        assert_eq!(component_of.len(), graph.len());

        for edge in graph.edges() {
            assert!(
                component_of[edge.head] <= component_of[edge.tail],
                "edge {} -> {} violates completion order",
                edge.tail,
                edge.head
            );
        }

        for component in sccs.iter() {
            let descendants = Reachable::on(graph).run(component[0]).unwrap();
            let ancestors = Reachable::on(graph).ancestors().run(component[0]).unwrap();
            for vertex in component {
                assert!(descendants.contains(vertex) && ancestors.contains(vertex));
            }
        }
    }

    fn petgraph_components(graph: &AdjList<u32>) -> Vec<BTreeSet<u32>> {
        let mut other = petgraph::graph::DiGraph::<u32, ()>::new();
        let nodes = graph
            .vertices()
            .map(|v| (*v, other.add_node(*v)))
            .collect::<FxHashMap<_, _>>();
        for edge in graph.edges() {
            other.add_edge(nodes[edge.tail], nodes[edge.head], ());
        }

        let mut components = petgraph::algo::tarjan_scc(&other)
            .into_iter()
            .map(|component| component.into_iter().map(|node| other[node]).collect())
            .collect::<Vec<_>>();
        components.sort();
        components
    }

    proptest! {
        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_strongly_connected_components(graph in graph_directed(48)) {
            let sccs = StronglyConnectedComponents::on(&graph).run();
            assert_valid(&graph, &sccs);

            let mut components = sccs
                .iter()
                .map(|component| component.iter().map(|v| **v).collect::<BTreeSet<_>>())
                .collect::<Vec<_>>();
            components.sort();

            prop_assert_eq!(components, petgraph_components(&graph));
        }

        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_source_components_have_no_external_parents(graph in graph_directed(48)) {
            let sources = graph.source_components();
            let covered = sources.iter().map(|scc| scc.len()).sum::<usize>();
            prop_assert!(covered <= graph.len());

            for scc in sources.iter() {
                for vertex in scc.vertices() {
                    for parent in graph.parents(vertex).unwrap() {
                        prop_assert!(scc.contains(parent));
                    }
                }
            }

            // Every vertex is reachable from some source component.
            for vertex in graph.vertices() {
                let ancestors = Reachable::on(&graph).ancestors().run(vertex).unwrap();
                prop_assert!(sources.iter().any(|scc| scc.vertices().any(|v| ancestors.contains(v))));
            }
        }
    }
}
