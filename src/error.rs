//! Error types for graph mutation and contraction

use thiserror::Error;

use crate::{EdgeId, Node};

/// Result type for fallible graph operations
pub type Result<T> = std::result::Result<T, GraphError>;

/// Errors raised by checked graph operations.
///
/// Lookups never fail (they return `Option`), and neither does removing an absent vertex.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A vertex was required to exist but does not. Raised for unknown endpoints under
    /// [`VertexPolicy::Strict`](crate::repr::VertexPolicy::Strict) and for edges whose endpoint
    /// has already been removed.
    #[error("Vertex {0} does not exist")]
    MissingNode(Node),

    /// The edge id does not name a live edge, e.g. it was destroyed by an earlier contraction
    #[error("Edge #{0} is not part of the current graph")]
    StaleEdge(EdgeId),

    /// Self-loops cannot be contracted
    #[error("Edge #{0} is a self-loop and cannot be contracted")]
    SelfLoop(EdgeId),
}

impl GraphError {
    /// Returns *true* if the error was caused by holding on to an edge id across a mutation
    pub fn is_stale_reference(&self) -> bool {
        matches!(self, GraphError::StaleEdge(_) | GraphError::SelfLoop(_))
    }
}
