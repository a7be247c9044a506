//! Pixel output: sinks, the owned canvas and the polygon rasterizer.

pub mod canvas;
pub mod rasterizer;
pub mod sink;

pub use canvas::{Canvas, DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH};
pub use rasterizer::{Rasterizer, ScanlineRasterizer};
pub use sink::PixelSink;
