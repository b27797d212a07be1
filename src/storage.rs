pub mod adj_list;
pub mod annotated;

pub use adj_list::AdjList;
pub use annotated::{AnnotatedEdge, AnnotatedGraph, AnnotatedVertex, Annotation};
