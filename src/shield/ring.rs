use std::f64::consts::PI;
use std::ops::Index;

use crate::math::Point2;

/// Number of vertices in a ring and of segments around the shield.
pub const SEGMENT_COUNT: usize = 6;

/// A flat-top regular hexagon centered at the origin.
///
/// Vertex `i` sits at angle `i * 60°` from +X, counter-clockwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexRing {
    points: [Point2; SEGMENT_COUNT],
    radius: f64,
}

impl VertexRing {
    /// Builds the ring at `radius`.
    #[must_use]
    pub fn new(radius: f64) -> Self {
        let points = std::array::from_fn(|i| {
            #[allow(clippy::cast_precision_loss)]
            let angle = i as f64 * PI / 3.0;
            Point2::new(radius * angle.cos(), radius * angle.sin())
        });
        Self { points, radius }
    }

    /// Circumradius of the ring.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// The six vertices in counter-clockwise order.
    #[must_use]
    pub fn points(&self) -> &[Point2; SEGMENT_COUNT] {
        &self.points
    }
}

impl Index<usize> for VertexRing {
    type Output = Point2;

    /// Vertex `i`, wrapping around.
    fn index(&self, i: usize) -> &Point2 {
        &self.points[i % SEGMENT_COUNT]
    }
}

/// Builds the flat-top hexagon ring at `radius`.
#[must_use]
pub fn hex_ring(radius: f64) -> VertexRing {
    VertexRing::new(radius)
}

/// Footprint of one segment: two outer and two inner corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentQuad {
    /// `outer[i]`.
    pub a: Point2,
    /// `outer[i + 1]`.
    pub b: Point2,
    /// `inner[i + 1]`.
    pub c: Point2,
    /// `inner[i]`.
    pub d: Point2,
}

impl SegmentQuad {
    /// Corners in `A, B, C, D` order.
    #[must_use]
    pub fn corners(&self) -> [Point2; 4] {
        [self.a, self.b, self.c, self.d]
    }

    /// Vertex average of the four corners.
    #[must_use]
    pub fn centroid(&self) -> Point2 {
        Point2::from((self.a.coords + self.b.coords + self.c.coords + self.d.coords) / 4.0)
    }
}

/// Quad of segment `i` between the two rings.
#[must_use]
pub fn segment_quad(i: usize, outer: &VertexRing, inner: &VertexRing) -> SegmentQuad {
    SegmentQuad {
        a: outer[i],
        b: outer[i + 1],
        c: inner[i + 1],
        d: inner[i],
    }
}
