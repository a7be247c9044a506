//! Sutherland-Hodgman clipping against an axis-aligned window.

use super::edge::{Boundary, ClipEdge};
use crate::math::vec2::Vec2;

/// An axis-aligned clip rectangle given by its lower-left and upper-right
/// corners. Callers guarantee `lower_left` is strictly below and to the left
/// of `upper_right`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClipWindow {
    pub lower_left: Vec2,
    pub upper_right: Vec2,
}

impl ClipWindow {
    pub fn new(lower_left: Vec2, upper_right: Vec2) -> Self {
        debug_assert!(
            lower_left.x < upper_right.x && lower_left.y < upper_right.y,
            "Clip window corners are not ordered"
        );
        Self {
            lower_left,
            upper_right,
        }
    }

    /// The normalized device square `[-1, 1] x [-1, 1]`.
    pub fn ndc() -> Self {
        Self::new(Vec2::new(-1.0, -1.0), Vec2::new(1.0, 1.0))
    }

    /// The four boundary edges in clipping order: left, bottom, right, top.
    pub fn edges(&self) -> [ClipEdge; 4] {
        let ll = self.lower_left;
        let ur = self.upper_right;
        let top_left = Vec2::new(ll.x, ur.y);
        let bottom_right = Vec2::new(ur.x, ll.y);
        [
            ClipEdge::new(Boundary::Left, top_left, ll),
            ClipEdge::new(Boundary::Bottom, ll, bottom_right),
            ClipEdge::new(Boundary::Right, bottom_right, ur),
            ClipEdge::new(Boundary::Top, ur, top_left),
        ]
    }

    /// Clip a polygon against all four edges in turn.
    ///
    /// Returns the visible polygon, which is empty when the input lies
    /// entirely outside the window.
    pub fn clip(&self, vertices: &[Vec2]) -> Vec<Vec2> {
        let mut result = vertices.to_vec();

        for edge in self.edges() {
            if result.is_empty() {
                break;
            }
            result = clip_against_edge(&result, &edge);
        }

        result
    }
}

/// Clip a polygon against the rectangle with corners `lower_left` and
/// `upper_right`.
pub fn clip_polygon(vertices: &[Vec2], lower_left: Vec2, upper_right: Vec2) -> Vec<Vec2> {
    ClipWindow::new(lower_left, upper_right).clip(vertices)
}

/// One Sutherland-Hodgman pass against a single edge.
///
/// Walks `(previous, current)` pairs, starting with the wrap-around pair
/// `(last, first)`.
fn clip_against_edge(vertices: &[Vec2], edge: &ClipEdge) -> Vec<Vec2> {
    let Some(&last) = vertices.last() else {
        return Vec::new();
    };

    let mut output = Vec::with_capacity(vertices.len() + 2);
    let mut previous = last;

    for &current in vertices {
        match (edge.is_inside(previous), edge.is_inside(current)) {
            (true, true) => push_distinct(&mut output, current),
            (true, false) => {
                if let Some(crossing) = edge.intersection(previous, current) {
                    push_distinct(&mut output, crossing);
                }
            }
            (false, true) => {
                if let Some(crossing) = edge.intersection(previous, current) {
                    push_distinct(&mut output, crossing);
                }
                push_distinct(&mut output, current);
            }
            (false, false) => {}
        }
        previous = current;
    }

    // The walk is cyclic, so the first vertex may repeat the last one.
    if output.len() > 1 && output.first() == output.last() {
        output.pop();
    }

    output
}

/// A crossing computed at a vertex that lies on the boundary is that same
/// vertex; it is emitted once.
fn push_distinct(output: &mut Vec<Vec2>, v: Vec2) {
    if output.last() != Some(&v) {
        output.push(v);
    }
}
