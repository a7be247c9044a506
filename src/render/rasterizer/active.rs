//! The active edge table for one fill.

use std::cmp::Ordering;

use super::edge::Edge;

/// Edges crossing the current scanline, ordered by x-intercept.
///
/// Scoped to a single fill call. Each step retires expired edges, adds the
/// newly starting ones and re-sorts, instead of erasing from the sequence
/// while walking it.
#[derive(Debug, Default)]
pub struct ActiveEdgeTable {
    edges: Vec<Edge>,
}

impl ActiveEdgeTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Prepare the table for scanline `y`: drop edges whose top is at or
    /// below `y`, add `incoming`, and sort by x then by inverse slope.
    pub fn begin_scanline(&mut self, y: i32, incoming: &[Edge]) {
        let y = y as f32;
        self.edges.retain(|edge| y < edge.max_y);
        self.edges.extend_from_slice(incoming);
        self.edges.sort_by(compare_edges);
    }

    /// Consecutive `(left, right)` pairs. A trailing unpaired edge is left out.
    pub fn spans(&self) -> impl Iterator<Item = (&Edge, &Edge)> {
        self.edges.chunks_exact(2).map(|pair| (&pair[0], &pair[1]))
    }

    /// Move every edge's x-intercept to the next scanline.
    pub fn step(&mut self) {
        for edge in &mut self.edges {
            edge.x += edge.inv_slope;
        }
    }
}

fn compare_edges(a: &Edge, b: &Edge) -> Ordering {
    a.x.total_cmp(&b.x)
        .then_with(|| a.inv_slope.total_cmp(&b.inv_slope))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(x: f32, max_y: f32, inv_slope: f32) -> Edge {
        Edge {
            x,
            max_y,
            inv_slope,
        }
    }

    #[test]
    fn test_sorted_by_x_then_slope() {
        let mut aet = ActiveEdgeTable::new();
        aet.begin_scanline(
            0,
            &[edge(5.0, 10.0, 0.0), edge(2.0, 10.0, 1.0), edge(2.0, 10.0, -1.0)],
        );
        let order: Vec<(f32, f32)> = aet
            .spans()
            .flat_map(|(a, b)| [(a.x, a.inv_slope), (b.x, b.inv_slope)])
            .collect();
        assert_eq!(order, vec![(2.0, -1.0), (2.0, 1.0)]);
        assert_eq!(aet.len(), 3);
    }

    #[test]
    fn test_edges_expire_at_max_y() {
        let mut aet = ActiveEdgeTable::new();
        aet.begin_scanline(0, &[edge(0.0, 2.0, 0.0), edge(4.0, 3.0, 0.0)]);
        aet.begin_scanline(1, &[]);
        assert_eq!(aet.len(), 2);
        aet.begin_scanline(2, &[]);
        assert_eq!(aet.len(), 1);
        aet.begin_scanline(3, &[]);
        assert!(aet.is_empty());
    }

    #[test]
    fn test_fractional_top_expires_on_next_scanline() {
        let mut aet = ActiveEdgeTable::new();
        aet.begin_scanline(4, &[edge(0.0, 4.5, 0.0)]);
        assert_eq!(aet.len(), 1);
        aet.begin_scanline(5, &[]);
        assert!(aet.is_empty());
    }

    #[test]
    fn test_step_advances_x() {
        let mut aet = ActiveEdgeTable::new();
        aet.begin_scanline(0, &[edge(1.0, 9.0, 0.5), edge(8.0, 9.0, -2.0)]);
        aet.step();
        let (left, right) = aet.spans().next().unwrap();
        assert_eq!(left.x, 1.5);
        assert_eq!(right.x, 6.0);
    }
}
