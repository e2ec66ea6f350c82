use thiserror::Error;

use crate::VertexId;

#[derive(Error, Debug, PartialEq, Clone, Copy)]
pub enum GraphError {
    #[error("Graph contains a negative weight cycle reachable from {origin} ({iterations} iterations)")]
    NegativeCycle { origin: VertexId, iterations: usize },
    #[error("Vertex {vertex} is not valid, expected [0, {vertex_count})")]
    InvalidVertex {
        vertex: VertexId,
        vertex_count: usize,
    },
    #[error("Edge value is not a finite number: {0}")]
    InvalidWeight(f64),
    #[error("Cannot find path {origin} -> {destination}")]
    NoPath {
        origin: VertexId,
        destination: VertexId,
    },
    #[error("Predecessor chain loops at {0}")]
    PredecessorCycle(VertexId),
}
