pub mod intersect_2d;
pub mod polygon_2d;
pub mod triangle_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Determinant threshold below which two offset lines count as parallel.
pub const PARALLEL_EPSILON: f64 = 1e-8;

/// Determinant threshold below which a triangle counts as collinear.
pub const COLLINEAR_EPSILON: f64 = 1e-9;

/// Lifts a 2D point onto the plane `z`.
#[must_use]
pub fn lift(p: &Point2, z: f64) -> Point3 {
    Point3::new(p.x, p.y, z)
}
