//! Polygon rasterization.
//!
//! - [`ScanlineRasterizer`]: scanline fill driven by an active edge table.
//!
//! The supporting types are split out so each stage can be tested alone:
//! [`edge`] builds and buckets polygon sides, [`active`] holds the edges
//! crossing the current scanline.

pub mod active;
pub mod edge;
mod scanline;

pub use active::ActiveEdgeTable;
pub use edge::{Edge, EdgeTable};
pub use scanline::ScanlineRasterizer;

use super::sink::PixelSink;
use crate::math::vec2::Vec2;

/// Trait for polygon fill algorithms.
///
/// Implementors report every covered pixel to the sink. Degenerate input
/// (fewer than three vertices, zero area, entirely off the scanline range)
/// produces no pixels and is never an error.
pub trait Rasterizer {
    /// Fill a closed polygon given in pixel coordinates.
    ///
    /// # Arguments
    /// * `vertices` - Polygon vertices; the last connects back to the first
    /// * `sink` - Receives each covered pixel
    fn fill_polygon(&self, vertices: &[Vec2], sink: &mut dyn PixelSink);
}
