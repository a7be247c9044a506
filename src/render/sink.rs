//! Destinations for rasterized pixels.

use std::collections::BTreeSet;

/// Receives the pixels covered by a filled polygon.
///
/// Pixels may arrive in any order and the same pixel may be reported more
/// than once (adjacent spans can share a vertex). Implementors must accept
/// both without complaint.
pub trait PixelSink {
    fn add_pixel(&mut self, x: i32, y: i32);
}

/// Records every pixel in emission order, duplicates included.
impl PixelSink for Vec<(i32, i32)> {
    #[inline]
    fn add_pixel(&mut self, x: i32, y: i32) {
        self.push((x, y));
    }
}

/// Records coverage only.
impl PixelSink for BTreeSet<(i32, i32)> {
    #[inline]
    fn add_pixel(&mut self, x: i32, y: i32) {
        self.insert((x, y));
    }
}

impl<S: PixelSink + ?Sized> PixelSink for &mut S {
    #[inline]
    fn add_pixel(&mut self, x: i32, y: i32) {
        (**self).add_pixel(x, y);
    }
}
