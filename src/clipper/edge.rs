//! Directed boundary edges of a rectangular clip window.

use crate::math::vec2::Vec2;

/// Which side of the clip rectangle an edge lies on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Boundary {
    /// Inside when x >= edge x
    Left,
    /// Inside when y >= edge y
    Bottom,
    /// Inside when x <= edge x
    Right,
    /// Inside when y <= edge y
    Top,
}

/// A directed side `p1 -> p2` of the clip rectangle.
///
/// The rectangle is walked counter-clockwise starting at the top-left
/// corner, so the inside half-plane is always to the left of the direction
/// of travel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClipEdge {
    pub boundary: Boundary,
    pub p1: Vec2,
    pub p2: Vec2,
}

impl ClipEdge {
    pub fn new(boundary: Boundary, p1: Vec2, p2: Vec2) -> Self {
        Self { boundary, p1, p2 }
    }

    /// True for the bottom and top edges.
    pub fn is_horizontal(&self) -> bool {
        self.p1.y == self.p2.y
    }

    /// Signed distance from a vertex to this edge's line.
    /// Positive = inside, zero = on the line, negative = outside.
    pub fn signed_distance(&self, v: Vec2) -> f32 {
        match self.boundary {
            Boundary::Left => v.x - self.p1.x,
            Boundary::Bottom => v.y - self.p1.y,
            Boundary::Right => self.p1.x - v.x,
            Boundary::Top => self.p1.y - v.y,
        }
    }

    /// Vertices on the line count as inside.
    pub fn is_inside(&self, v: Vec2) -> bool {
        self.signed_distance(v) >= 0.0
    }

    /// Where the segment `from -> to` crosses this edge's line.
    ///
    /// An endpoint lying exactly on the line is returned unchanged so that
    /// callers can recognise it. Returns `None` when the segment runs
    /// parallel to the line, since there is no single crossing point.
    pub fn intersection(&self, from: Vec2, to: Vec2) -> Option<Vec2> {
        if self.signed_distance(to) == 0.0 {
            return Some(to);
        }
        if self.signed_distance(from) == 0.0 {
            return Some(from);
        }

        if self.is_horizontal() {
            let dy = to.y - from.y;
            if dy == 0.0 {
                return None;
            }
            let crossing = from.lerp(to, (self.p1.y - from.y) / dy);
            Some(Vec2::new(crossing.x, self.p1.y))
        } else {
            let dx = to.x - from.x;
            if dx == 0.0 {
                return None;
            }
            let crossing = from.lerp(to, (self.p1.x - from.x) / dx);
            Some(Vec2::new(self.p1.x, crossing.y))
        }
    }
}
