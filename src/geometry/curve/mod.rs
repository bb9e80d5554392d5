mod path_curve;
mod quadratic;

pub use path_curve::PathCurve;
pub use quadratic::QuadraticBezier;

use crate::error::{GeometryError, Result};
use crate::math::{Point3, Vector3};

/// Parameter domain for a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveDomain {
    /// Start of the parameter range.
    pub t_min: f64,
    /// End of the parameter range.
    pub t_max: f64,
}

impl CurveDomain {
    /// Creates a new curve domain.
    #[must_use]
    pub fn new(t_min: f64, t_max: f64) -> Self {
        Self { t_min, t_max }
    }

    /// The unit domain `[0, 1]`.
    #[must_use]
    pub fn unit() -> Self {
        Self::new(0.0, 1.0)
    }

    /// Returns `t` unchanged if it lies inside the domain.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ParameterOutOfRange`] otherwise.
    pub fn check(&self, t: f64) -> Result<f64> {
        if t >= self.t_min && t <= self.t_max {
            Ok(t)
        } else {
            Err(GeometryError::ParameterOutOfRange {
                parameter: "t",
                value: t,
                min: self.t_min,
                max: self.t_max,
            }
            .into())
        }
    }
}

/// Trait for parametric curves in 3D space.
pub trait Curve {
    /// Evaluates the curve at parameter `t`, returning the 3D point.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameter is out of range or evaluation fails.
    fn evaluate(&self, t: f64) -> Result<Point3>;

    /// Computes the unit tangent vector at parameter `t`.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameter is out of range or the tangent is degenerate.
    fn tangent(&self, t: f64) -> Result<Vector3>;

    /// Returns the parameter domain of the curve.
    fn domain(&self) -> CurveDomain;
}
