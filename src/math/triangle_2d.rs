use tracing::trace;

use super::{Point2, COLLINEAR_EPSILON};

/// Circumcenter of the triangle `abc`.
///
/// Falls back to the triangle's centroid when the points are collinear.
#[must_use]
pub fn circumcenter(a: &Point2, b: &Point2, c: &Point2) -> Point2 {
    let d = 2.0 * (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y));
    if d.abs() < COLLINEAR_EPSILON {
        trace!("collinear triangle, using centroid");
        return triangle_centroid(a, b, c);
    }
    let a2 = a.coords.norm_squared();
    let b2 = b.coords.norm_squared();
    let c2 = c.coords.norm_squared();
    let ux = (a2 * (b.y - c.y) + b2 * (c.y - a.y) + c2 * (a.y - b.y)) / d;
    let uy = (a2 * (c.x - b.x) + b2 * (a.x - c.x) + c2 * (b.x - a.x)) / d;
    Point2::new(ux, uy)
}

/// Average of the three vertices.
#[must_use]
pub fn triangle_centroid(a: &Point2, b: &Point2, c: &Point2) -> Point2 {
    Point2::from((a.coords + b.coords + c.coords) / 3.0)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn right_triangle_center_is_hypotenuse_midpoint() {
        let cc = circumcenter(
            &Point2::new(0.0, 0.0),
            &Point2::new(4.0, 0.0),
            &Point2::new(0.0, 3.0),
        );
        assert_relative_eq!(cc, Point2::new(2.0, 1.5), epsilon = 1e-12);
    }

    #[test]
    fn equidistant_from_vertices() {
        let (a, b, c) = (
            Point2::new(-1.3, 0.2),
            Point2::new(2.1, 0.7),
            Point2::new(0.4, 3.3),
        );
        let cc = circumcenter(&a, &b, &c);
        let ra = nalgebra::distance(&cc, &a);
        assert_relative_eq!(nalgebra::distance(&cc, &b), ra, epsilon = 1e-9);
        assert_relative_eq!(nalgebra::distance(&cc, &c), ra, epsilon = 1e-9);
    }

    #[test]
    fn collinear_uses_centroid() {
        let cc = circumcenter(
            &Point2::new(0.0, 0.0),
            &Point2::new(1.0, 1.0),
            &Point2::new(3.0, 3.0),
        );
        assert_relative_eq!(cc, Point2::new(4.0 / 3.0, 4.0 / 3.0), epsilon = 1e-12);
    }

    #[test]
    fn coincident_points_use_centroid() {
        let p = Point2::new(0.7, -0.2);
        assert_eq!(circumcenter(&p, &p, &p), triangle_centroid(&p, &p, &p));
    }
}
