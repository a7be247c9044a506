//! An owned pixel buffer that polygons are filled into.
//!
//! The canvas origin is the lower-left corner with y growing upwards, which
//! matches the viewport mapping. Exported images are flipped so they appear
//! the right way up.

use std::path::Path;

use super::sink::PixelSink;

pub const DEFAULT_CANVAS_WIDTH: u32 = 600;
pub const DEFAULT_CANVAS_HEIGHT: u32 = 600;

pub const BLACK: u32 = 0xFF000000;
pub const WHITE: u32 = 0xFFFFFFFF;

/// ARGB color buffer with a current draw color.
pub struct Canvas {
    color_buffer: Vec<u32>,
    width: u32,
    height: u32,
    color: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            color_buffer: vec![BLACK; width as usize * height as usize],
            width,
            height,
            color: WHITE,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Color used for subsequent `add_pixel` calls.
    pub fn set_color(&mut self, color: u32) {
        self.color = color;
    }

    pub fn color(&self) -> u32 {
        self.color
    }

    pub fn clear(&mut self, color: u32) {
        self.color_buffer.fill(color);
    }

    /// Get the color at (x, y), or None if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<u32> {
        self.index(x, y).map(|idx| self.color_buffer[idx])
    }

    /// Number of pixels currently holding `color`.
    pub fn count_pixels(&self, color: u32) -> usize {
        self.color_buffer.iter().filter(|&&c| c == color).count()
    }

    /// Write the buffer as a PNG, top row first.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<(), image::ImageError> {
        let img = image::RgbaImage::from_fn(self.width, self.height, |x, y| {
            let row = self.height - 1 - y;
            let argb = self.color_buffer[row as usize * self.width as usize + x as usize];
            image::Rgba([
                (argb >> 16) as u8,
                (argb >> 8) as u8,
                argb as u8,
                (argb >> 24) as u8,
            ])
        });
        img.save(path)
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(DEFAULT_CANVAS_WIDTH, DEFAULT_CANVAS_HEIGHT)
    }
}

impl PixelSink for Canvas {
    /// Silently ignores out-of-bounds coordinates.
    #[inline]
    fn add_pixel(&mut self, x: i32, y: i32) {
        if let Some(idx) = self.index(x, y) {
            self.color_buffer[idx] = self.color;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_pixel_uses_current_color() {
        let mut canvas = Canvas::new(4, 3);
        canvas.set_color(0xFFFF0000);
        canvas.add_pixel(1, 2);
        assert_eq!(canvas.get_pixel(1, 2), Some(0xFFFF0000));
        assert_eq!(canvas.get_pixel(2, 1), Some(BLACK));
        assert_eq!(canvas.count_pixels(0xFFFF0000), 1);
    }

    #[test]
    fn test_out_of_bounds_is_ignored() {
        let mut canvas = Canvas::new(4, 3);
        canvas.add_pixel(-1, 0);
        canvas.add_pixel(4, 0);
        canvas.add_pixel(0, 3);
        assert_eq!(canvas.count_pixels(WHITE), 0);
        assert_eq!(canvas.get_pixel(4, 0), None);
    }

    #[test]
    fn test_buffer_is_row_major() {
        let mut canvas = Canvas::new(5, 3);
        assert_eq!(canvas.color_buffer.len(), 15);
        canvas.add_pixel(4, 2);
        canvas.add_pixel(0, 1);
        assert_eq!(canvas.color_buffer[14], WHITE);
        assert_eq!(canvas.color_buffer[5], WHITE);
        assert_eq!(canvas.count_pixels(WHITE), 2);
    }

    #[test]
    fn test_duplicates_are_harmless() {
        let mut canvas = Canvas::new(2, 2);
        canvas.add_pixel(0, 0);
        canvas.add_pixel(0, 0);
        assert_eq!(canvas.count_pixels(WHITE), 1);
    }

    #[test]
    fn test_clear() {
        let mut canvas = Canvas::new(3, 3);
        canvas.add_pixel(1, 1);
        canvas.clear(0xFF112233);
        assert_eq!(canvas.count_pixels(0xFF112233), 9);
    }

    #[test]
    fn test_save_png_flips_rows() {
        let mut canvas = Canvas::new(2, 2);
        canvas.set_color(0xFF00FF00);
        canvas.add_pixel(0, 0);

        let path = std::env::temp_dir().join(format!("scanfill-canvas-{}.png", std::process::id()));
        canvas.save_png(&path).unwrap();
        let img = image::open(&path).unwrap().to_rgba8();
        std::fs::remove_file(&path).unwrap();

        // Canvas row 0 is the bottom row of the image.
        assert_eq!(img.get_pixel(0, 1).0, [0, 255, 0, 255]);
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 255]);
    }
}
