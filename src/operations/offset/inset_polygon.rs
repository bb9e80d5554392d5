use tracing::trace;

use crate::math::intersect_2d::intersect_lines;
use crate::math::polygon_2d::{centroid, inward_normal, min_edge_length};
use crate::math::{Point2, Vector2, TOLERANCE};

/// Largest safe inset as a fraction of the polygon's shortest edge.
///
/// Beyond roughly a quarter of the shortest edge the offset lines of a
/// trapezoid start crossing each other.
pub const SAFE_INSET_FACTOR: f64 = 0.24;

/// Insets a closed convex polygon by a uniform distance.
///
/// # Algorithm
///
/// 1. Every edge is shifted along its inward normal (toward the vertex
///    centroid) by `distance`, giving one offset line per edge.
/// 2. Output vertex `i` is the intersection of the offset lines of edges
///    `i - 1` and `i`. Parallel neighbours fall back to the first line's
///    origin instead of failing.
///
/// Negative distances grow the polygon outward. The distance is used as
/// given; clamp it with [`clamp_inset`] first to avoid self-intersection.
#[derive(Debug)]
pub struct InsetPolygon2D<'a> {
    points: &'a [Point2],
    distance: f64,
}

impl<'a> InsetPolygon2D<'a> {
    /// Creates a new inset operation.
    #[must_use]
    pub fn new(points: &'a [Point2], distance: f64) -> Self {
        Self { points, distance }
    }

    /// Executes the inset, returning a polygon with the same vertex count.
    #[must_use]
    pub fn execute(&self) -> Vec<Point2> {
        let n = self.points.len();
        if n < 3 || self.distance.abs() < TOLERANCE {
            return self.points.to_vec();
        }

        let center = centroid(self.points);
        let lines: Vec<(Point2, Vector2)> = (0..n)
            .map(|i| {
                let p = self.points[i];
                let q = self.points[(i + 1) % n];
                let normal = inward_normal(&p, &q, &center);
                let dir = Vector2::new(-normal.y, normal.x);
                (p + normal * self.distance, dir)
            })
            .collect();

        (0..n)
            .map(|i| {
                let (p1, d1) = &lines[(i + n - 1) % n];
                let (p2, d2) = &lines[i];
                intersect_lines(p1, d1, p2, d2)
            })
            .collect()
    }
}

/// Insets `points` by `distance`. Shorthand for [`InsetPolygon2D`].
#[must_use]
pub fn inset_polygon(points: &[Point2], distance: f64) -> Vec<Point2> {
    InsetPolygon2D::new(points, distance).execute()
}

/// The largest inset that keeps `points` free of self-intersection.
#[must_use]
pub fn max_inset(points: &[Point2]) -> f64 {
    min_edge_length(points) * SAFE_INSET_FACTOR
}

/// Clamps a requested inset into `[0, max_inset(points)]`.
#[must_use]
pub fn clamp_inset(points: &[Point2], requested: f64) -> f64 {
    let limit = max_inset(points).max(0.0);
    let applied = requested.max(0.0).min(limit);
    if applied < requested {
        trace!(requested, applied, "inset clamped to safe maximum");
    }
    applied
}
