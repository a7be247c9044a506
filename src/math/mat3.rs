//! 3x3 homogeneous matrix for 2D affine transforms.
//!
//! # Convention
//! - Points are **column vectors** on the right: `Mat3 * Vec2`, with an
//!   implied third coordinate of 1
//! - Translation is stored in the **last column**
//! - Transforms chain **right-to-left**: `A * B * v` applies B first, then A
//!
//! # Example
//! ```ignore
//! let m = Mat3::translation(5.0, 0.0) * Mat3::rotation(90.0); // rotate, then move
//! let p = m * Vec2::new(1.0, 0.0);                            // (5, 1)
//! ```

use std::ops::Mul;

use super::vec2::Vec2;

/// 3x3 matrix stored as `data[row][col]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat3 {
    data: [[f32; 3]; 3],
}

impl Mat3 {
    pub fn new(data: [[f32; 3]; 3]) -> Self {
        Mat3 { data }
    }

    pub fn identity() -> Self {
        Mat3::new([
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, 0.0, 1.0],
        ])
    }

    pub fn translation(dx: f32, dy: f32) -> Self {
        Mat3::new([
            [1.0, 0.0, dx],
            [0.0, 1.0, dy],
            [0.0, 0.0, 1.0],
        ])
    }

    /// Counter-clockwise rotation about the origin. The angle is in degrees.
    pub fn rotation(degrees: f32) -> Self {
        let (s, c) = degrees.to_radians().sin_cos();
        Mat3::new([
            [c, -s, 0.0],
            [s, c, 0.0],
            [0.0, 0.0, 1.0],
        ])
    }

    pub fn scaling(sx: f32, sy: f32) -> Self {
        Mat3::new([
            [sx, 0.0, 0.0],
            [0.0, sy, 0.0],
            [0.0, 0.0, 1.0],
        ])
    }

    /// Maps the world rectangle `[left, right] x [bottom, top]` onto the
    /// normalized device square `[-1, 1] x [-1, 1]` without flipping either axis.
    pub fn normalization(bottom: f32, top: f32, left: f32, right: f32) -> Self {
        let width = right - left;
        let height = top - bottom;
        Mat3::new([
            [2.0 / width, 0.0, -(right + left) / width],
            [0.0, 2.0 / height, -(top + bottom) / height],
            [0.0, 0.0, 1.0],
        ])
    }

    /// Maps the normalized device square onto the pixel rectangle whose
    /// lower-left corner is `(x, y)` and whose size is `w` by `h`.
    pub fn viewport(x: i32, y: i32, w: i32, h: i32) -> Self {
        let half_w = w as f32 / 2.0;
        let half_h = h as f32 / 2.0;
        Mat3::new([
            [half_w, 0.0, x as f32 + half_w],
            [0.0, half_h, y as f32 + half_h],
            [0.0, 0.0, 1.0],
        ])
    }

    /// Transforms every vertex, returning a list of the same length.
    pub fn apply(&self, vertices: &[Vec2]) -> Vec<Vec2> {
        vertices.iter().map(|&v| *self * v).collect()
    }
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::identity()
    }
}

/// Matrix multiplication: Mat3 * Mat3.
///
/// `A * B * v` applies B first, then A.
impl Mul<Mat3> for Mat3 {
    type Output = Mat3;

    fn mul(self, rhs: Mat3) -> Self::Output {
        let mut result = [[0.0f32; 3]; 3];

        for (row, out) in result.iter_mut().enumerate() {
            for (col, cell) in out.iter_mut().enumerate() {
                *cell = self.data[row][0] * rhs.data[0][col]
                    + self.data[row][1] * rhs.data[1][col]
                    + self.data[row][2] * rhs.data[2][col];
            }
        }

        Mat3::new(result)
    }
}

/// Transform a point: Mat3 * (x, y, 1). The homogeneous coordinate stays 1
/// for affine maps, so it is dropped.
impl Mul<Vec2> for Mat3 {
    type Output = Vec2;

    fn mul(self, v: Vec2) -> Self::Output {
        Vec2::new(
            self.data[0][0] * v.x + self.data[0][1] * v.y + self.data[0][2],
            self.data[1][0] * v.x + self.data[1][1] * v.y + self.data[1][2],
        )
    }
}
