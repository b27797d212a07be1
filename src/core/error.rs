use std::fmt;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("vertex {key} does not exist")]
    NotFound { key: String },
    #[error("malformed graph: {0}")]
    MalformedGraph(MalformedGraphKind),
    #[error("invalid graph document: {0}")]
    Json(#[from] serde_json::Error),
}

impl GraphError {
    pub(crate) fn not_found(key: &impl fmt::Debug) -> Self {
        GraphError::NotFound {
            key: format!("{key:?}"),
        }
    }

    pub(crate) fn duplicate_vertex(key: &impl fmt::Debug) -> Self {
        GraphError::MalformedGraph(MalformedGraphKind::DuplicateVertex {
            key: format!("{key:?}"),
        })
    }

    pub(crate) fn duplicate_edge(key: &impl fmt::Debug) -> Self {
        GraphError::MalformedGraph(MalformedGraphKind::DuplicateEdge {
            key: format!("{key:?}"),
        })
    }

    pub(crate) fn dangling_edge(edge: impl fmt::Debug, endpoint: &impl fmt::Debug) -> Self {
        GraphError::MalformedGraph(MalformedGraphKind::DanglingEdge {
            edge: format!("{edge:?}"),
            endpoint: format!("{endpoint:?}"),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MalformedGraphKind {
    DuplicateVertex { key: String },
    DuplicateEdge { key: String },
    DanglingEdge { edge: String, endpoint: String },
}

impl fmt::Display for MalformedGraphKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedGraphKind::DuplicateVertex { key } => {
                write!(f, "vertex {key} is declared more than once")
            }
            MalformedGraphKind::DuplicateEdge { key } => {
                write!(f, "edge {key} is declared more than once")
            }
            MalformedGraphKind::DanglingEdge { edge, endpoint } => {
                write!(f, "edge {edge} references undeclared vertex {endpoint}")
            }
        }
    }
}
