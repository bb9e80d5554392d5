use crate::error::{GeometryError, Result};
use crate::math::{Point3, Vector3, TOLERANCE};

use super::{Curve, CurveDomain};

/// A quadratic Bézier segment.
///
/// `P(t) = (1-t)² start + 2(1-t)t control + t² end`, `t ∈ [0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticBezier {
    /// Point at `t = 0`.
    pub start: Point3,
    /// Control point the segment bends toward.
    pub control: Point3,
    /// Point at `t = 1`.
    pub end: Point3,
}

impl QuadraticBezier {
    /// Creates a new quadratic Bézier segment.
    #[must_use]
    pub fn new(start: Point3, control: Point3, end: Point3) -> Self {
        Self {
            start,
            control,
            end,
        }
    }

    /// Straight segment: the control point sits on the chord midpoint.
    #[must_use]
    pub fn line(start: Point3, end: Point3) -> Self {
        Self::new(start, nalgebra::center(&start, &end), end)
    }

    /// Evaluates without a domain check.
    #[must_use]
    pub fn point(&self, t: f64) -> Point3 {
        let s = 1.0 - t;
        Point3::from(
            self.start.coords * (s * s)
                + self.control.coords * (2.0 * s * t)
                + self.end.coords * (t * t),
        )
    }

    /// First derivative without a domain check.
    #[must_use]
    pub fn derivative(&self, t: f64) -> Vector3 {
        (self.control - self.start) * (2.0 * (1.0 - t)) + (self.end - self.control) * (2.0 * t)
    }

    /// Largest distance of the control point from the chord; zero for a
    /// straight segment.
    #[must_use]
    pub fn bulge(&self) -> f64 {
        let chord = self.end - self.start;
        let len = chord.norm();
        let to_control = self.control - self.start;
        if len < TOLERANCE {
            return to_control.norm();
        }
        (to_control - chord * (to_control.dot(&chord) / (len * len))).norm()
    }
}

impl Curve for QuadraticBezier {
    fn evaluate(&self, t: f64) -> Result<Point3> {
        let t = self.domain().check(t)?;
        Ok(self.point(t))
    }

    fn tangent(&self, t: f64) -> Result<Vector3> {
        let t = self.domain().check(t)?;
        self.derivative(t)
            .try_normalize(TOLERANCE)
            .ok_or_else(|| GeometryError::ZeroVector.into())
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::unit()
    }
}
