//! Scanline polygon fill with an active edge table.
//!
//! # Algorithm Overview
//!
//! 1. **Build edges**: every non-horizontal side becomes an [`Edge`] holding
//!    its x on the first scanline at or above its lower endpoint, its top y
//!    and its inverse slope, bucketed by that scanline.
//! 2. **Walk scanlines** upwards. On each one:
//!    - retire edges whose top is at or below the scanline
//!    - add edges starting on it
//!    - sort by x-intercept, ties by inverse slope
//!    - fill between consecutive pairs of edges
//!    - step every x-intercept by its inverse slope
//!
//! ```text
//!        /\            y = 3   |  pairs: (a, b)
//!       /  \     /\    y = 2   |  pairs: (a, b) (c, d)
//!      a    b   c  d
//! ```
//!
//! # Span Policy
//!
//! A span runs from `floor(left.x)` to `ceil(right.x)`, both inclusive. This
//! guarantees boundary coverage and may paint up to one pixel past the true
//! edge on either side. An odd edge count on a scanline leaves the last edge
//! unpaired; it is ignored.
//!
//! [`Edge`]: super::edge::Edge

use super::active::ActiveEdgeTable;
use super::edge::EdgeTable;
use super::Rasterizer;
use crate::math::vec2::Vec2;
use crate::render::sink::PixelSink;

/// Fills arbitrary simple polygons, convex or concave.
///
/// `scanlines` bounds the rows visited: only `0..scanlines` are filled.
#[derive(Debug, Clone, Copy)]
pub struct ScanlineRasterizer {
    scanlines: u32,
}

impl ScanlineRasterizer {
    pub fn new(scanlines: u32) -> Self {
        Self { scanlines }
    }

    pub fn scanlines(&self) -> u32 {
        self.scanlines
    }
}

impl Rasterizer for ScanlineRasterizer {
    fn fill_polygon(&self, vertices: &[Vec2], sink: &mut dyn PixelSink) {
        if vertices.len() < 3 {
            log::trace!("Skipping fill of {} vertices", vertices.len());
            return;
        }

        let table = EdgeTable::build(vertices, self.scanlines);
        let (Some(first), Some(last)) = (table.first_scanline(), table.last_scanline()) else {
            return;
        };

        let bound = self.scanlines.min(i32::MAX as u32) as i32;
        let mut aet = ActiveEdgeTable::new();

        for y in first..bound {
            aet.begin_scanline(y, table.starting_at(y));
            if aet.is_empty() {
                if y >= last {
                    break;
                }
                continue;
            }

            if aet.len() % 2 == 1 {
                log::trace!("Odd active edge count {} on scanline {}", aet.len(), y);
            }

            for (left, right) in aet.spans() {
                let x_start = left.x.floor() as i32;
                let x_end = right.x.ceil() as i32;
                for x in x_start..=x_end {
                    sink.add_pixel(x, y);
                }
            }

            aet.step();
        }
    }
}
