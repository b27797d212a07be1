//! Directed graph engine for analysing reference structures.
//!
//! The crate is organised around a small set of traits in [`core`] that every
//! graph representation implements. Algorithms in [`algo`] (reachability,
//! strongly connected components) are written only against these traits, so
//! they work the same on the generic [`AdjList`](storage::AdjList) and on the
//! [`AnnotatedGraph`](storage::AnnotatedGraph), which additionally supports
//! JSON round trip and DOT rendering.
//!
//! # Examples
//!
//! ```
//! use refgraph::prelude::*;
//!
//! let graph = AdjList::<u32>::from_edge_pairs(
//!     vec![1, 2, 3, 4],
//!     vec![(1, 2), (2, 3), (3, 1), (3, 4)],
//! )
//! .unwrap();
//!
//! let sccs = graph.strongly_connected_components();
//! assert_eq!(sccs.len(), 2);
//!
//! let reachable = graph.descendants(&4, None).unwrap();
//! assert_eq!(reachable.len(), 1);
//! ```

pub mod algo;
pub mod core;
pub mod infra;
pub mod ops;
pub mod storage;

pub use crate::core::error::GraphError;

pub mod prelude {
    pub use crate::{
        core::{
            id::{ById, IdMap, Identity, KeyFn},
            marker::Direction,
            DirectedGraph, EdgeSet, GraphBase, Neighbors, Subgraph, VertexSet,
        },
        storage::{AdjList, AnnotatedEdge, AnnotatedGraph, AnnotatedVertex, Annotation},
        GraphError,
    };
}
