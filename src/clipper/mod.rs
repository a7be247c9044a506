//! Polygon clipping against a rectangular window.
//!
//! Uses the Sutherland-Hodgman algorithm: the polygon is clipped against the
//! left, bottom, right and top edges in that order, each pass consuming the
//! output of the previous one.
//!
//! - [`edge`]: the four directed window edges, their inside tests and
//!   segment intersection.
//! - [`window`]: the clip window and the clipping passes.

pub mod edge;
pub mod window;

pub use edge::{Boundary, ClipEdge};
pub use window::{clip_polygon, ClipWindow};
