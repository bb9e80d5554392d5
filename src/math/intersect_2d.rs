use tracing::trace;

use super::{Point2, Vector2, PARALLEL_EPSILON};

/// Parametric 2D line-line intersection.
///
/// Given lines `p1 + t * d1` and `p2 + u * d2`, returns `(t, u)` if the
/// determinant clears [`PARALLEL_EPSILON`].
#[must_use]
pub fn line_line_intersect_2d(
    p1: &Point2,
    d1: &Vector2,
    p2: &Point2,
    d2: &Vector2,
) -> Option<(f64, f64)> {
    let cross = d1.x * d2.y - d1.y * d2.x;
    if cross.abs() < PARALLEL_EPSILON {
        return None;
    }
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    let t = (dx * d2.y - dy * d2.x) / cross;
    let u = (dx * d1.y - dy * d1.x) / cross;
    Some((t, u))
}

/// Intersects two parametric lines, falling back to `p1` when they are
/// parallel or nearly so.
#[must_use]
pub fn intersect_lines(p1: &Point2, d1: &Vector2, p2: &Point2, d2: &Vector2) -> Point2 {
    match line_line_intersect_2d(p1, d1, p2, d2) {
        Some((t, _)) => point_at(p1, d1, t),
        None => {
            trace!(x = p1.x, y = p1.y, "parallel lines, keeping first origin");
            *p1
        }
    }
}

/// Linear interpolation: `origin + dir * t`.
#[must_use]
pub fn point_at(origin: &Point2, dir: &Vector2, t: f64) -> Point2 {
    origin + dir * t
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn crossing_axes() {
        let p = intersect_lines(
            &Point2::new(-1.0, 0.0),
            &Vector2::new(1.0, 0.0),
            &Point2::new(0.5, -3.0),
            &Vector2::new(0.0, 2.0),
        );
        assert_relative_eq!(p, Point2::new(0.5, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn parameters_are_reported_per_line() {
        let (t, u) = line_line_intersect_2d(
            &Point2::new(0.0, 0.0),
            &Vector2::new(2.0, 0.0),
            &Point2::new(1.0, 1.0),
            &Vector2::new(0.0, -1.0),
        )
        .unwrap_or((f64::NAN, f64::NAN));
        assert_relative_eq!(t, 0.5, epsilon = 1e-12);
        assert_relative_eq!(u, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn parallel_falls_back_to_first_origin() {
        let p1 = Point2::new(3.0, 4.0);
        let p = intersect_lines(
            &p1,
            &Vector2::new(1.0, 1.0),
            &Point2::new(0.0, 1.0),
            &Vector2::new(-2.0, -2.0),
        );
        assert_eq!(p, p1);
    }

    #[test]
    fn nearly_parallel_also_falls_back() {
        let p1 = Point2::new(0.0, 0.0);
        let p = intersect_lines(
            &p1,
            &Vector2::new(1.0, 0.0),
            &Point2::new(0.0, 1.0),
            &Vector2::new(1.0, 1e-10),
        );
        assert_eq!(p, p1);
    }
}
