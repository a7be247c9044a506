//! The 2D drawing pipeline.
//!
//! [`Pipeline`] keeps a registry of polygons and the three transforms in
//! effect. Drawing a polygon runs it through:
//!
//! ```text
//! model -> normalization -> clip to [-1, 1]^2 -> viewport -> scanline fill
//! ```
//!
//! Transforms are read at draw time, so the order of `add_polygon` and
//! transform calls does not matter.

use crate::clipper::ClipWindow;
use crate::error::PipelineError;
use crate::math::{mat3::Mat3, vec2::Vec2};
use crate::polygon::{Polygon, PolygonId};
use crate::render::{Canvas, PixelSink, Rasterizer, ScanlineRasterizer};
use crate::transform::ModelTransform;

/// Polygon registry plus current transforms, drawing into a pixel sink.
///
/// Not internally synchronized. Share it across threads behind a lock.
pub struct Pipeline<S: PixelSink = Canvas> {
    sink: S,
    rasterizer: ScanlineRasterizer,
    polygons: Vec<Polygon>,
    model: ModelTransform,
    normalization: Mat3,
    viewport: Mat3,
}

impl Pipeline<Canvas> {
    /// A pipeline drawing into a new canvas. The canvas height bounds the
    /// scanlines filled.
    pub fn with_canvas(width: u32, height: u32) -> Self {
        Self::new(Canvas::new(width, height), height)
    }
}

impl<S: PixelSink> Pipeline<S> {
    /// Create a pipeline with identity model, normalization and viewport
    /// transforms. Only scanlines `0..scanlines` are filled.
    pub fn new(sink: S, scanlines: u32) -> Self {
        Self {
            sink,
            rasterizer: ScanlineRasterizer::new(scanlines),
            polygons: Vec::new(),
            model: ModelTransform::new(),
            normalization: Mat3::identity(),
            viewport: Mat3::identity(),
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Store a copy of `vertices` for later drawing.
    pub fn add_polygon(&mut self, vertices: &[Vec2]) -> Result<PolygonId, PipelineError> {
        let polygon = Polygon::try_from(vertices)?;
        let id = PolygonId(self.polygons.len());
        self.polygons.push(polygon);
        log::debug!("Registered polygon {} with {} vertices", id, vertices.len());
        Ok(id)
    }

    pub fn polygon(&self, id: PolygonId) -> Option<&Polygon> {
        self.polygons.get(id.0)
    }

    pub fn polygon_count(&self) -> usize {
        self.polygons.len()
    }

    /// Draw a registered polygon with the transforms currently in effect.
    pub fn draw_polygon(&mut self, id: PolygonId) -> Result<(), PipelineError> {
        let polygon = self
            .polygons
            .get(id.0)
            .ok_or(PipelineError::UnknownPolygon(id))?;

        // Model Space --> World Space --> Normalized Device Space
        let world = self.model.apply(polygon.vertices());
        let ndc = self.normalization.apply(&world);

        let visible = ClipWindow::ndc().clip(&ndc);
        if visible.is_empty() {
            log::trace!("Polygon {} is outside the clip window", id);
            return Ok(());
        }

        // Normalized Device Space --> Pixel Space
        let pixels = self.viewport.apply(&visible);
        log::debug!(
            "Drawing polygon {}: {} vertices, {} after clipping",
            id,
            polygon.vertices().len(),
            pixels.len()
        );

        self.rasterizer.fill_polygon(&pixels, &mut self.sink);
        Ok(())
    }

    /// Draw every registered polygon in id order.
    pub fn draw_all(&mut self) -> Result<(), PipelineError> {
        for index in 0..self.polygons.len() {
            self.draw_polygon(PolygonId(index))?;
        }
        Ok(())
    }

    /// Move subsequent drawings by `(dx, dy)` after the transforms already set.
    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.model.translate(dx, dy);
    }

    /// Rotate counter-clockwise about the origin, in degrees.
    pub fn rotate(&mut self, degrees: f32) {
        self.model.rotate(degrees);
    }

    pub fn scale(&mut self, sx: f32, sy: f32) {
        self.model.scale(sx, sy);
    }

    /// Reset the model transform to identity.
    pub fn clear_transform(&mut self) {
        self.model.clear();
    }

    /// Set the world-space region that maps onto the clip square.
    pub fn set_clip_window(&mut self, bottom: f32, top: f32, left: f32, right: f32) {
        self.normalization = Mat3::normalization(bottom, top, left, right);
    }

    /// Set the pixel rectangle the clip square maps onto. `(x, y)` is the
    /// lower-left corner.
    pub fn set_viewport(&mut self, x: i32, y: i32, w: i32, h: i32) {
        self.viewport = Mat3::viewport(x, y, w, h);
    }

    pub fn model_matrix(&self) -> Mat3 {
        self.model.matrix()
    }

    pub fn normalization_matrix(&self) -> Mat3 {
        self.normalization
    }

    pub fn viewport_matrix(&self) -> Mat3 {
        self.viewport
    }
}
