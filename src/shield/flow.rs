use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::geometry::{Curve, PathCurve};
use crate::math::{Point3, Vector3};

/// Settings of the particles that travel along each path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowParams {
    /// Particles per path.
    pub count_per_path: u32,
    /// Curve lengths per second, in parameter units.
    pub speed: f64,
    /// Ghost points drawn behind each particle.
    pub trail: u32,
    /// Parameter distance between consecutive ghosts.
    pub trail_spacing: f64,
}

impl Default for FlowParams {
    fn default() -> Self {
        Self {
            count_per_path: 20,
            speed: 0.35,
            trail: 6,
            trail_spacing: 0.02,
        }
    }
}

impl FlowParams {
    /// Checks the flow settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for a zero particle count, a
    /// negative or non-finite speed, or a negative spacing.
    pub fn validate(&self) -> Result<()> {
        if self.count_per_path == 0 {
            return Err(ConfigError::Invalid("count_per_path must be at least 1".into()).into());
        }
        if !self.speed.is_finite() || self.speed < 0.0 {
            return Err(ConfigError::Invalid(format!("speed {} must be >= 0", self.speed)).into());
        }
        if !self.trail_spacing.is_finite() || self.trail_spacing < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "trail_spacing {} must be >= 0",
                self.trail_spacing
            ))
            .into());
        }
        Ok(())
    }
}

/// A single particle: where on the curve it started and how fast it moves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowParticle {
    /// Curve parameter at time zero.
    pub phase: f64,
    /// Curve lengths per second.
    pub speed: f64,
}

impl FlowParticle {
    /// Curve parameter of the particle head after `elapsed` seconds.
    #[must_use]
    pub fn head(&self, elapsed: f64) -> f64 {
        (self.phase + elapsed * self.speed).rem_euclid(1.0)
    }

    /// Head followed by `trail` ghost positions, each `spacing` further
    /// back along the curve, wrapping past the start.
    #[must_use]
    pub fn positions(
        &self,
        curve: &PathCurve,
        elapsed: f64,
        trail: u32,
        spacing: f64,
    ) -> Vec<Point3> {
        let head = self.head(elapsed);
        (0..=trail)
            .filter_map(|i| curve.point_at((head - f64::from(i) * spacing).rem_euclid(1.0)))
            .collect()
    }

    /// Unit direction of travel at the head, for orienting the particle.
    /// `None` on an empty curve or where the tangent vanishes.
    #[must_use]
    pub fn heading(&self, curve: &PathCurve, elapsed: f64) -> Option<Vector3> {
        curve.tangent(self.head(elapsed)).ok()
    }
}

/// All particles of one path.
///
/// Phases are spread evenly over the curve so a flow is reproducible
/// between rebuilds.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleFlow {
    particles: Vec<FlowParticle>,
    trail: u32,
    spacing: f64,
}

impl ParticleFlow {
    /// Creates a new flow with evenly spaced particle phases.
    #[must_use]
    pub fn new(params: &FlowParams) -> Self {
        let count = params.count_per_path.max(1);
        let particles = (0..count)
            .map(|i| FlowParticle {
                phase: f64::from(i) / f64::from(count),
                speed: params.speed,
            })
            .collect();
        Self {
            particles,
            trail: params.trail,
            spacing: params.trail_spacing,
        }
    }

    /// The particles of this flow.
    #[must_use]
    pub fn particles(&self) -> &[FlowParticle] {
        &self.particles
    }

    /// Every head and ghost position at `elapsed` seconds. Empty for an
    /// empty curve.
    #[must_use]
    pub fn frame(&self, curve: &PathCurve, elapsed: f64) -> Vec<Point3> {
        self.particles
            .iter()
            .flat_map(|p| p.positions(curve, elapsed, self.trail, self.spacing))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::geometry::QuadraticBezier;

    fn straight() -> PathCurve {
        PathCurve::new(vec![QuadraticBezier::line(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(10.0, 0.0, 0.0),
        )])
    }

    #[test]
    fn head_wraps_around() {
        let p = FlowParticle { phase: 0.5, speed: 0.35 };
        assert_relative_eq!(p.head(0.0), 0.5);
        assert_relative_eq!(p.head(2.0), 0.2, epsilon = 1e-12);
    }

    #[test]
    fn trail_trails_behind_head() {
        let p = FlowParticle { phase: 0.5, speed: 0.0 };
        let pts = p.positions(&straight(), 0.0, 3, 0.1);
        assert_eq!(pts.len(), 4);
        assert_relative_eq!(pts[0].x, 5.0, epsilon = 1e-12);
        assert_relative_eq!(pts[3].x, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn trail_wraps_past_start() {
        let p = FlowParticle { phase: 0.05, speed: 0.0 };
        let pts = p.positions(&straight(), 0.0, 1, 0.1);
        assert_relative_eq!(pts[1].x, 9.5, epsilon = 1e-9);
    }

    #[test]
    fn heading_follows_the_curve() {
        let p = FlowParticle { phase: 0.3, speed: 0.0 };
        let dir = p.heading(&straight(), 5.0);
        assert_relative_eq!(dir.unwrap_or_default(), Vector3::x(), epsilon = 1e-12);
        assert!(p.heading(&PathCurve::empty(), 0.0).is_none());
    }

    #[test]
    fn frame_counts_heads_and_ghosts() {
        let flow = ParticleFlow::new(&FlowParams::default());
        assert_eq!(flow.particles().len(), 20);
        let pts = flow.frame(&straight(), 1.7);
        assert_eq!(pts.len(), 20 * 7);
        assert!(pts.iter().all(|p| p.y == 0.0 && (-1e-9..=10.0 + 1e-9).contains(&p.x)));
    }

    #[test]
    fn empty_curve_has_no_particles() {
        let flow = ParticleFlow::new(&FlowParams::default());
        assert!(flow.frame(&PathCurve::empty(), 0.3).is_empty());
    }

    #[test]
    fn invalid_params_are_rejected() {
        let bad = FlowParams {
            speed: -1.0,
            ..FlowParams::default()
        };
        assert!(bad.validate().is_err());
        let none = FlowParams {
            count_per_path: 0,
            ..FlowParams::default()
        };
        assert!(none.validate().is_err());
        assert!(FlowParams::default().validate().is_ok());
    }
}
