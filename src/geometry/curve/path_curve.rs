use crate::error::{GeometryError, Result};
use crate::math::{Point3, Vector3, TOLERANCE};

use super::{Curve, CurveDomain, QuadraticBezier};

/// A chain of quadratic segments evaluated over a single `u ∈ [0, 1]`.
///
/// Each segment owns an equal share of the parameter range, so segment `k`
/// of `n` covers `[k/n, (k+1)/n]`. An empty chain is a valid curve that
/// evaluates to nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathCurve {
    segments: Vec<QuadraticBezier>,
}

impl PathCurve {
    /// Creates a new path curve from its segments in order.
    #[must_use]
    pub fn new(segments: Vec<QuadraticBezier>) -> Self {
        Self { segments }
    }

    /// A curve with no segments.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns `true` if the curve has no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of quadratic segments.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// The segments in parameter order.
    #[must_use]
    pub fn segments(&self) -> &[QuadraticBezier] {
        &self.segments
    }

    /// Position at `u`, clamped into `[0, 1]`. `None` for an empty curve.
    #[must_use]
    pub fn point_at(&self, u: f64) -> Option<Point3> {
        let (segment, t) = self.locate(u)?;
        Some(segment.point(t))
    }

    /// `n + 1` evenly spaced points along the curve, for drawing it as a
    /// polyline. Empty for an empty curve.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn sample(&self, n: usize) -> Vec<Point3> {
        if self.is_empty() {
            return Vec::new();
        }
        let n = n.max(1);
        (0..=n)
            .filter_map(|i| self.point_at(i as f64 / n as f64))
            .collect()
    }

    /// Maps `u` to the segment that owns it and the local parameter.
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    fn locate(&self, u: f64) -> Option<(&QuadraticBezier, f64)> {
        let n = self.segments.len();
        if n == 0 {
            return None;
        }
        let u = if u.is_nan() { 0.0 } else { u.clamp(0.0, 1.0) };
        let scaled = u * n as f64;
        let k = (scaled.floor() as usize).min(n - 1);
        Some((&self.segments[k], scaled - k as f64))
    }
}

impl Curve for PathCurve {
    fn evaluate(&self, t: f64) -> Result<Point3> {
        let t = self.domain().check(t)?;
        self.point_at(t)
            .ok_or_else(|| GeometryError::EmptyCurve.into())
    }

    fn tangent(&self, t: f64) -> Result<Vector3> {
        let t = self.domain().check(t)?;
        let (segment, local) = self.locate(t).ok_or(GeometryError::EmptyCurve)?;
        segment
            .derivative(local)
            .try_normalize(TOLERANCE)
            .ok_or_else(|| GeometryError::ZeroVector.into())
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::unit()
    }
}
