//! Unstructured input for fuzzing graph import.

use arbitrary::Arbitrary;

use crate::storage::{annotated::GraphDocument, AnnotatedEdge, AnnotatedVertex};

/// A graph document with small ids, so that random input often produces
/// duplicate ids and dangling edges as well as valid graphs.
#[derive(Debug, Arbitrary, Clone)]
pub struct ArbitraryDocument {
    pub vertices: Vec<(u8, String)>,
    pub edges: Vec<(u8, String, u8, u8)>,
}

impl ArbitraryDocument {
    pub fn into_document(self) -> GraphDocument<u8> {
        GraphDocument {
            vertices: self
                .vertices
                .into_iter()
                .map(|(id, annotation)| AnnotatedVertex::new(id, annotation))
                .collect(),
            edges: self
                .edges
                .into_iter()
                .map(|(id, annotation, tail, head)| AnnotatedEdge::new(id, annotation, tail, head))
                .collect(),
        }
    }

    /// Serializes the document to JSON without validating it.
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.clone().into_document())
            .expect("document with integer ids and text annotations is serializable")
    }
}
