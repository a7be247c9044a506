//! A small CPU 2D polygon pipeline.
//!
//! Polygons are given in modeling coordinates, transformed by a chain of
//! homogeneous 3x3 matrices, clipped to a rectangular window and filled
//! scanline by scanline into a pixel sink. No GPU is involved.
//!
//! # Quick Start
//!
//! ```ignore
//! use scanfill::prelude::*;
//!
//! let mut pipeline = Pipeline::with_canvas(600, 600);
//! pipeline.set_clip_window(-1.0, 1.0, -1.0, 1.0);
//! pipeline.set_viewport(0, 0, 600, 600);
//!
//! let id = pipeline.add_polygon(&[
//!     Vec2::new(-0.5, -0.5),
//!     Vec2::new(0.5, -0.5),
//!     Vec2::new(0.0, 0.5),
//! ])?;
//! pipeline.rotate(30.0);
//! pipeline.draw_polygon(id)?;
//! pipeline.sink().save_png("triangle.png")?;
//! ```

pub mod clipper;
pub mod error;
pub mod math;
pub mod pipeline;
pub mod polygon;
pub mod render;
pub mod transform;

pub use error::PipelineError;
pub use pipeline::Pipeline;
pub use polygon::{Polygon, PolygonId};
pub use transform::ModelTransform;

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use scanfill::prelude::*;
/// ```
pub mod prelude {
    // Pipeline
    pub use crate::error::PipelineError;
    pub use crate::pipeline::Pipeline;
    pub use crate::polygon::{Polygon, PolygonId};

    // Transform
    pub use crate::transform::ModelTransform;

    // Math
    pub use crate::math::mat3::Mat3;
    pub use crate::math::vec2::Vec2;

    // Clipping
    pub use crate::clipper::{clip_polygon, ClipWindow};

    // Rendering
    pub use crate::render::{Canvas, PixelSink, Rasterizer, ScanlineRasterizer};
}
