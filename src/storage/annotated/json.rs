use std::io::{Read, Write};

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::core::{error::GraphError, id::KeyType, EdgeSet, VertexSet};

use super::{AnnotatedEdge, AnnotatedGraph, AnnotatedVertex};

/// The serialized form of an [`AnnotatedGraph`].
///
/// ```json
/// {
///   "vertices": [{"id": 0, "annotation": "list"}],
///   "edges": [{"id": 1, "annotation": "item", "head": 0, "tail": 0}]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphDocument<I = u64> {
    pub vertices: Vec<AnnotatedVertex<I>>,
    pub edges: Vec<AnnotatedEdge<I>>,
}

#[derive(Serialize)]
struct GraphDocumentRef<'a, I> {
    vertices: Vec<&'a AnnotatedVertex<I>>,
    edges: Vec<&'a AnnotatedEdge<I>>,
}

impl<I: KeyType> TryFrom<GraphDocument<I>> for AnnotatedGraph<I> {
    type Error = GraphError;

    fn try_from(document: GraphDocument<I>) -> Result<Self, Self::Error> {
        AnnotatedGraph::new(document.vertices, document.edges)
    }
}

impl<I: KeyType> From<&AnnotatedGraph<I>> for GraphDocument<I> {
    fn from(graph: &AnnotatedGraph<I>) -> Self {
        GraphDocument {
            vertices: graph.vertices().cloned().collect(),
            edges: graph.edges().map(|edge| edge.attr.clone()).collect(),
        }
    }
}

impl<I: KeyType + Serialize> AnnotatedGraph<I> {
    fn as_document(&self) -> GraphDocumentRef<'_, I> {
        GraphDocumentRef {
            vertices: self.vertices().collect(),
            edges: self.edges().map(|edge| edge.attr).collect(),
        }
    }

    /// Serializes the graph to a JSON string. Vertices and edges are written
    /// in insertion order.
    pub fn export_json(&self) -> Result<String, GraphError> {
        Ok(serde_json::to_string(&self.as_document())?)
    }

    pub fn write_json<W: Write>(&self, writer: W) -> Result<(), GraphError> {
        Ok(serde_json::to_writer(writer, &self.as_document())?)
    }
}

impl<I: KeyType + DeserializeOwned> AnnotatedGraph<I> {
    /// Reconstructs a graph exported by [`export_json`](Self::export_json).
    ///
    /// Fails with [`GraphError::Json`] if the text is not a graph document and
    /// with [`GraphError::MalformedGraph`] if the document is structurally
    /// invalid.
    pub fn from_json(text: &str) -> Result<Self, GraphError> {
        Self::from_document(serde_json::from_str(text)?)
    }

    pub fn read_json<R: Read>(reader: R) -> Result<Self, GraphError> {
        Self::from_document(serde_json::from_reader(reader)?)
    }

    fn from_document(document: GraphDocument<I>) -> Result<Self, GraphError> {
        tracing::debug!(
            vertices = document.vertices.len(),
            edges = document.edges.len(),
            "importing graph document"
        );

        AnnotatedGraph::try_from(document)
    }
}
