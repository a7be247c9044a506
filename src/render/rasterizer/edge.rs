//! Polygon sides prepared for scanline traversal.

use std::collections::BTreeMap;

use crate::math::vec2::Vec2;

/// One non-horizontal polygon side.
///
/// An edge is active on the scanlines in `[ceil(min_y), ceil(max_y))`, so two
/// sides meeting at a vertex never overlap on a scanline, whether or not the
/// vertex y is an integer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    /// x on the first scanline the edge is active on.
    pub x: f32,
    /// y of the higher endpoint. The edge retires on the first scanline at
    /// or above this value, so a shared vertex is only counted once.
    pub max_y: f32,
    /// Change in x per scanline (dx / dy).
    pub inv_slope: f32,
}

impl Edge {
    /// Build the edge for side `a -> b` with the scanline it starts on.
    ///
    /// Returns `None` for a horizontal side, or one lying between two
    /// scanlines without crossing either.
    pub fn from_side(a: Vec2, b: Vec2) -> Option<(i32, Edge)> {
        if a.y == b.y {
            return None;
        }
        let (low, high) = if a.y < b.y { (a, b) } else { (b, a) };
        let start = low.y.ceil();
        if start >= high.y {
            return None;
        }
        let inv_slope = (high.x - low.x) / (high.y - low.y);
        let edge = Edge {
            x: low.x + (start - low.y) * inv_slope,
            max_y: high.y,
            inv_slope,
        };
        Some((start as i32, edge))
    }
}

/// Edges bucketed by the scanline on which they become active.
#[derive(Debug, Default)]
pub struct EdgeTable {
    buckets: BTreeMap<i32, Vec<Edge>>,
}

impl EdgeTable {
    /// Build the table for a closed polygon, limited to scanlines
    /// `0..scanlines`.
    ///
    /// Edges starting below scanline 0 are stepped forward so they enter
    /// at 0 with the x they would have had there. Edges that start at or
    /// past the last scanline, or end before the first, are dropped.
    pub fn build(vertices: &[Vec2], scanlines: u32) -> Self {
        let mut buckets: BTreeMap<i32, Vec<Edge>> = BTreeMap::new();
        let limit = scanlines.min(i32::MAX as u32) as i32;

        let sides = vertices
            .iter()
            .zip(vertices.iter().cycle().skip(1))
            .take(vertices.len());

        for (&a, &b) in sides {
            let Some((key, mut edge)) = Edge::from_side(a, b) else {
                continue;
            };
            if key >= limit || edge.max_y <= 0.0 {
                continue;
            }
            let key = if key < 0 {
                edge.x += edge.inv_slope * (-key) as f32;
                0
            } else {
                key
            };
            buckets.entry(key).or_default().push(edge);
        }

        Self { buckets }
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Number of edges across all buckets.
    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn first_scanline(&self) -> Option<i32> {
        self.buckets.keys().next().copied()
    }

    pub fn last_scanline(&self) -> Option<i32> {
        self.buckets.keys().next_back().copied()
    }

    /// Edges that become active on scanline `y`.
    pub fn starting_at(&self, y: i32) -> &[Edge] {
        self.buckets.get(&y).map(Vec::as_slice).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_horizontal_side_is_skipped() {
        assert!(Edge::from_side(Vec2::new(0.0, 3.0), Vec2::new(9.0, 3.0)).is_none());
    }

    #[test]
    fn test_edge_uses_lower_endpoint() {
        let (key, edge) = Edge::from_side(Vec2::new(10.0, 20.0), Vec2::new(4.0, 8.0)).unwrap();
        assert_eq!(key, 8);
        assert_relative_eq!(edge.x, 4.0);
        assert_relative_eq!(edge.max_y, 20.0);
        assert_relative_eq!(edge.inv_slope, 0.5);
    }

    #[test]
    fn test_fractional_start_steps_to_next_scanline() {
        let (key, edge) = Edge::from_side(Vec2::new(10.0, 20.0), Vec2::new(4.0, 8.5)).unwrap();
        assert_eq!(key, 9);
        assert_relative_eq!(edge.x, 4.0 + 0.5 * 6.0 / 11.5);
        assert_relative_eq!(edge.inv_slope, 6.0 / 11.5);
    }

    #[test]
    fn test_side_between_scanlines_is_skipped() {
        assert!(Edge::from_side(Vec2::new(0.0, 3.2), Vec2::new(5.0, 3.7)).is_none());
        assert!(Edge::from_side(Vec2::new(0.0, 3.2), Vec2::new(5.0, 4.0)).is_none());
        assert!(Edge::from_side(Vec2::new(0.0, 3.2), Vec2::new(5.0, 4.1)).is_some());
    }

    #[test]
    fn test_sides_sharing_fractional_vertex_do_not_overlap() {
        let (lower_key, lower) = Edge::from_side(Vec2::new(10.0, 0.0), Vec2::new(0.0, 4.5)).unwrap();
        let (upper_key, _) = Edge::from_side(Vec2::new(0.0, 4.5), Vec2::new(10.0, 10.0)).unwrap();
        // The lower side covers scanlines 0..=4, the upper one starts at 5.
        assert_eq!(lower_key, 0);
        assert!(4.0 < lower.max_y && 5.0 >= lower.max_y);
        assert_eq!(upper_key, 5);
    }

    #[test]
    fn test_table_buckets_by_min_y() {
        let tri = [
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(5.0, 10.0),
        ];
        let table = EdgeTable::build(&tri, 100);
        assert_eq!(table.len(), 2);
        assert_eq!(table.starting_at(0).len(), 2);
        assert_eq!(table.first_scanline(), Some(0));
        assert_eq!(table.last_scanline(), Some(0));
        assert!(table.starting_at(5).is_empty());
    }

    #[test]
    fn test_edges_below_zero_are_stepped_in() {
        let side = [Vec2::new(0.0, -4.0), Vec2::new(8.0, 4.0), Vec2::new(0.0, 4.0)];
        let table = EdgeTable::build(&side, 10);
        let entering = table.starting_at(0);
        assert_eq!(entering.len(), 2);
        assert!(entering.iter().any(|e| (e.x - 4.0).abs() < 1e-6));
    }

    #[test]
    fn test_edges_outside_scanline_range_are_dropped() {
        let high = [Vec2::new(0.0, 50.0), Vec2::new(5.0, 60.0), Vec2::new(-5.0, 60.0)];
        assert!(EdgeTable::build(&high, 50).is_empty());

        let low = [Vec2::new(0.0, -9.0), Vec2::new(5.0, -1.0), Vec2::new(-5.0, -1.0)];
        assert!(EdgeTable::build(&low, 50).is_empty());
    }
}
