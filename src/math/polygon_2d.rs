use super::{Point2, Vector2, TOLERANCE};

/// Computes the signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Vertex average of a polygon. Returns the origin for an empty slice.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn centroid(points: &[Point2]) -> Point2 {
    if points.is_empty() {
        return Point2::origin();
    }
    let sum = points
        .iter()
        .fold(Vector2::zeros(), |acc, p| acc + p.coords);
    Point2::from(sum / points.len() as f64)
}

/// Length of the shortest edge of a closed polygon.
///
/// Returns `f64::INFINITY` for fewer than two points.
#[must_use]
pub fn min_edge_length(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 2 {
        return f64::INFINITY;
    }
    (0..n)
        .map(|i| nalgebra::distance(&points[i], &points[(i + 1) % n]))
        .fold(f64::INFINITY, f64::min)
}

/// Unit normal of the edge `p -> q` that points toward `centroid`.
///
/// The edge direction is rotated by 90° and flipped when it faces away
/// from the centroid as seen from the edge midpoint. A zero-length edge
/// yields the zero vector.
#[must_use]
pub fn inward_normal(p: &Point2, q: &Point2, centroid: &Point2) -> Vector2 {
    let edge = q - p;
    let n = Vector2::new(-edge.y, edge.x)
        .try_normalize(TOLERANCE)
        .unwrap_or_else(Vector2::zeros);
    let mid = nalgebra::center(p, q);
    if n.dot(&(centroid - mid)) > 0.0 {
        n
    } else {
        -n
    }
}

/// Returns `true` if `point` lies inside or on the boundary of a convex
/// polygon, within `tolerance`.
///
/// Works for either winding.
#[must_use]
pub fn contains_convex(polygon: &[Point2], point: &Point2, tolerance: f64) -> bool {
    let n = polygon.len();
    if n < 3 {
        return false;
    }
    let winding = signed_area_2d(polygon).signum();
    (0..n).all(|i| {
        let a = polygon[i];
        let b = polygon[(i + 1) % n];
        let edge = b - a;
        let len = edge.norm();
        if len < TOLERANCE {
            return true;
        }
        let cross = edge.x * (point.y - a.y) - edge.y * (point.x - a.x);
        winding * cross / len >= -tolerance
    })
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn unit_square() -> Vec<Point2> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ]
    }

    #[test]
    fn signed_area_ccw_square() {
        assert!((signed_area_2d(&unit_square()) - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn signed_area_cw_square() {
        let mut pts = unit_square();
        pts.reverse();
        assert!((signed_area_2d(&pts) + 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn signed_area_degenerate() {
        assert!(signed_area_2d(&[Point2::new(0.0, 0.0)]).abs() < TOLERANCE);
        assert!(signed_area_2d(&[]).abs() < TOLERANCE);
    }

    #[test]
    fn centroid_of_square() {
        assert_relative_eq!(centroid(&unit_square()), Point2::new(0.5, 0.5));
        assert_eq!(centroid(&[]), Point2::origin());
    }

    #[test]
    fn shortest_edge_wraps_around() {
        let pts = vec![
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(4.0, 3.0),
            Point2::new(0.0, 0.5),
        ];
        assert_relative_eq!(min_edge_length(&pts), 0.5);
    }

    #[test]
    fn inward_normal_points_at_centroid() {
        let c = Point2::new(0.5, 0.5);
        let n = inward_normal(&Point2::new(0.0, 0.0), &Point2::new(1.0, 0.0), &c);
        assert_relative_eq!(n, Vector2::new(0.0, 1.0));

        // Reversed edge gives the same inward direction.
        let n = inward_normal(&Point2::new(1.0, 0.0), &Point2::new(0.0, 0.0), &c);
        assert_relative_eq!(n, Vector2::new(0.0, 1.0));
    }

    #[test]
    fn inward_normal_zero_edge_is_zero() {
        let p = Point2::new(2.0, 2.0);
        let n = inward_normal(&p, &p, &Point2::origin());
        assert!(n.norm() < TOLERANCE);
        assert!(!n.x.is_nan());
    }

    #[test]
    fn convex_containment() {
        let sq = unit_square();
        assert!(contains_convex(&sq, &Point2::new(0.5, 0.5), 0.0));
        assert!(contains_convex(&sq, &Point2::new(1.0, 0.5), 1e-12));
        assert!(!contains_convex(&sq, &Point2::new(1.1, 0.5), 1e-12));

        let mut cw = sq.clone();
        cw.reverse();
        assert!(contains_convex(&cw, &Point2::new(0.25, 0.75), 0.0));
    }
}
