//! Errors raised by the pipeline API.
//!
//! Only contract violations are errors. Degenerate geometry is handled
//! by drawing nothing.

use crate::polygon::PolygonId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    /// A polygon needs at least three vertices.
    TooFewVertices { count: usize },
    /// No polygon was registered under this id.
    UnknownPolygon(PolygonId),
}

impl std::fmt::Display for PipelineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PipelineError::TooFewVertices { count } => {
                write!(f, "Polygon needs at least 3 vertices, got {}", count)
            }
            PipelineError::UnknownPolygon(id) => write!(f, "Unknown polygon {}", id),
        }
    }
}

impl std::error::Error for PipelineError {}
