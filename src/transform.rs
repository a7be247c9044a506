//! Cumulative model transform.
//!
//! [`ModelTransform`] owns the current model matrix. Each elementary
//! operation is premultiplied onto it (`model' = op * model`), so a call
//! sequence reads as the order the object is transformed in: every call is a
//! further transform of the already-transformed object.

use crate::math::{mat3::Mat3, vec2::Vec2};

/// The current model matrix plus the operations that accumulate into it.
///
/// Mutating methods return `&mut Self` for chaining:
///
/// ```ignore
/// model.scale(2.0, 2.0).rotate(45.0).translate(10.0, 0.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ModelTransform {
    matrix: Mat3,
}

impl ModelTransform {
    /// Create a transform holding the identity matrix.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn matrix(&self) -> Mat3 {
        self.matrix
    }

    /// Move the object by `(dx, dy)`.
    pub fn translate(&mut self, dx: f32, dy: f32) -> &mut Self {
        self.premultiply(Mat3::translation(dx, dy))
    }

    /// Rotate the object counter-clockwise about the origin, in degrees.
    pub fn rotate(&mut self, degrees: f32) -> &mut Self {
        self.premultiply(Mat3::rotation(degrees))
    }

    /// Scale the object about the origin.
    pub fn scale(&mut self, sx: f32, sy: f32) -> &mut Self {
        self.premultiply(Mat3::scaling(sx, sy))
    }

    /// Reset to the identity matrix.
    pub fn clear(&mut self) -> &mut Self {
        self.matrix = Mat3::identity();
        self
    }

    /// Transform vertices by the current model matrix.
    pub fn apply(&self, vertices: &[Vec2]) -> Vec<Vec2> {
        self.matrix.apply(vertices)
    }

    fn premultiply(&mut self, op: Mat3) -> &mut Self {
        self.matrix = op * self.matrix;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_is_identity() {
        assert_eq!(ModelTransform::new().matrix(), Mat3::identity());
    }

    #[test]
    fn test_translate_round_trip() {
        let points = [Vec2::new(1.0, 2.0), Vec2::new(-3.5, 0.25), Vec2::new(7.0, -9.0)];
        let mut t = ModelTransform::new();
        t.translate(12.5, -4.0).translate(-12.5, 4.0);

        for (moved, original) in t.apply(&points).iter().zip(points.iter()) {
            assert_relative_eq!(moved.x, original.x, epsilon = 1e-5);
            assert_relative_eq!(moved.y, original.y, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_operations_apply_in_call_order() {
        // Scale first, then move: (1, 0) -> (2, 0) -> (2, 3).
        let mut t = ModelTransform::new();
        t.scale(2.0, 2.0).translate(0.0, 3.0);
        let p = t.matrix() * Vec2::new(1.0, 0.0);
        assert_relative_eq!(p.x, 2.0, epsilon = 1e-6);
        assert_relative_eq!(p.y, 3.0, epsilon = 1e-6);

        // Move first, then rotate about the origin: (1, 0) -> (2, 0) -> (0, 2).
        let mut t = ModelTransform::new();
        t.translate(1.0, 0.0).rotate(90.0);
        let p = t.matrix() * Vec2::new(1.0, 0.0);
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(p.y, 2.0, epsilon = 1e-5);
    }

    #[test]
    fn test_clear_resets() {
        let mut t = ModelTransform::new();
        t.rotate(30.0).scale(4.0, 0.5);
        t.clear();
        assert_eq!(t.matrix(), Mat3::identity());
    }
}
