//! 2D vector and homogeneous matrix types.

pub mod mat3;
pub mod vec2;
