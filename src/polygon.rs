//! Polygons stored by the pipeline.

use crate::error::PipelineError;
use crate::math::vec2::Vec2;

/// Minimum vertex count for a polygon.
pub const MIN_VERTICES: usize = 3;

/// Identifier handed out by the pipeline when a polygon is registered.
///
/// Ids are assigned in increasing order and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PolygonId(pub(crate) usize);

impl PolygonId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for PolygonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An implicitly closed vertex list with at least three vertices.
///
/// Vertices are in modeling coordinates and never change once stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Vec2>,
}

impl Polygon {
    pub fn new(vertices: Vec<Vec2>) -> Result<Self, PipelineError> {
        if vertices.len() < MIN_VERTICES {
            return Err(PipelineError::TooFewVertices {
                count: vertices.len(),
            });
        }
        Ok(Self { vertices })
    }

    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }
}

impl TryFrom<&[Vec2]> for Polygon {
    type Error = PipelineError;

    fn try_from(vertices: &[Vec2]) -> Result<Self, Self::Error> {
        Self::new(vertices.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_three_vertices() {
        let two = vec![Vec2::ZERO, Vec2::ONE];
        assert_eq!(
            Polygon::new(two),
            Err(PipelineError::TooFewVertices { count: 2 })
        );

        let tri = [Vec2::ZERO, Vec2::ONE, Vec2::new(1.0, 0.0)];
        let polygon = Polygon::try_from(&tri[..]).unwrap();
        assert_eq!(polygon.vertices().len(), 3);
        assert_eq!(polygon.vertices(), &tri);
    }

    #[test]
    fn test_id_display() {
        assert_eq!(PolygonId(7).to_string(), "#7");
    }
}
