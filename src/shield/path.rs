use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{GeometryError, Result};
use crate::geometry::{PathCurve, QuadraticBezier};
use crate::math::{Point3, Vector3, TOLERANCE};

use super::anchors::AnchorSet;

/// Fraction of the chord length a full rounding of 1 bulges the curve.
pub const BULGE_FACTOR: f64 = 0.25;

/// One stop of a path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathStep {
    /// Anchor id, e.g. `"I1"`.
    pub anchor: String,
    /// Rounding of the segment leaving this step; the path's or the global
    /// rounding applies when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rounding: Option<f64>,
}

impl PathStep {
    /// Creates a new step at `anchor` with no rounding override.
    #[must_use]
    pub fn new(anchor: impl Into<String>) -> Self {
        Self {
            anchor: anchor.into(),
            rounding: None,
        }
    }

    /// Sets the rounding of the segment leaving this step.
    #[must_use]
    pub fn with_rounding(mut self, rounding: f64) -> Self {
        self.rounding = Some(rounding);
        self
    }
}

/// An ordered list of anchors to connect with a curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathSpec {
    /// Name the built curve is looked up by.
    pub id: String,
    /// Stops in drawing order.
    pub steps: Vec<PathStep>,
    /// Overrides the global rounding for every segment of this path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rounding: Option<f64>,
}

impl PathSpec {
    /// Creates a new path using the global rounding.
    #[must_use]
    pub fn new(id: impl Into<String>, steps: Vec<PathStep>) -> Self {
        Self {
            id: id.into(),
            steps,
            rounding: None,
        }
    }

    /// Builds the curve through this path's anchors.
    ///
    /// Steps naming an unknown anchor are dropped together with their
    /// rounding; the remaining anchors are joined in order. Fewer than two
    /// resolvable anchors give an empty curve.
    #[must_use]
    pub fn resolve(&self, anchors: &AnchorSet, global_rounding: f64) -> PathCurve {
        let mut points = Vec::with_capacity(self.steps.len());
        let mut rounding = Vec::with_capacity(self.steps.len());
        for step in &self.steps {
            if let Some(p) = anchors.position(&step.anchor) {
                points.push(p);
                rounding.push(step.rounding);
            } else {
                trace!(path = %self.id, anchor = %step.anchor, "unknown anchor, step dropped");
            }
        }
        build_curve(&points, self.rounding.unwrap_or(global_rounding), &rounding)
    }

    /// Like [`PathSpec::resolve`], but reports a path that cannot be drawn.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] when fewer than two of the
    /// path's anchors exist in `anchors`.
    pub fn try_resolve(&self, anchors: &AnchorSet, global_rounding: f64) -> Result<PathCurve> {
        let curve = self.resolve(anchors, global_rounding);
        if curve.is_empty() {
            return Err(GeometryError::Degenerate(format!(
                "path {} has fewer than two known anchors",
                self.id
            ))
            .into());
        }
        Ok(curve)
    }
}

/// Joins `points` with one quadratic segment per consecutive pair.
///
/// Segment `k` uses `per_segment[k]` when present, otherwise
/// `global_rounding`, clamped to `[0, 1]`. A rounding of zero gives a
/// straight segment; otherwise the control point is the chord midpoint
/// pushed along the chord's in-plane left normal by
/// `rounding * 0.25 * chord length`.
#[must_use]
pub fn build_curve(
    points: &[Point3],
    global_rounding: f64,
    per_segment: &[Option<f64>],
) -> PathCurve {
    if points.len() < 2 {
        return PathCurve::empty();
    }
    let segments = points
        .windows(2)
        .enumerate()
        .map(|(k, pair)| {
            let r = per_segment
                .get(k)
                .copied()
                .flatten()
                .unwrap_or(global_rounding);
            bulged_segment(pair[0], pair[1], r)
        })
        .collect();
    PathCurve::new(segments)
}

fn bulged_segment(a: Point3, b: Point3, rounding: f64) -> QuadraticBezier {
    let r = if rounding.is_nan() { 0.0 } else { rounding.clamp(0.0, 1.0) };
    let chord = b - a;
    let normal = Vector3::new(-chord.y, chord.x, 0.0).try_normalize(TOLERANCE);
    match normal {
        Some(normal) if r > TOLERANCE => {
            let mid = nalgebra::center(&a, &b);
            let control = mid + normal * (r * BULGE_FACTOR * chord.norm());
            QuadraticBezier::new(a, control, b)
        }
        _ => QuadraticBezier::line(a, b),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::shield::anchors::AnchorStrategy;
    use crate::shield::ring::hex_ring;
    use crate::shield::shift::SegmentShifts;

    fn anchors() -> AnchorSet {
        let outer = hex_ring(3.2);
        let inner = hex_ring(0.832);
        let shifts = SegmentShifts::compute(&outer, &inner, 0.025, &[0.0; 6]);
        AnchorSet::build(AnchorStrategy::InnerOuterRing, &outer, &inner, &shifts, -0.002)
    }

    fn path(ids: &[&str]) -> PathSpec {
        PathSpec::new("test", ids.iter().map(|id| PathStep::new(*id)).collect())
    }

    #[test]
    fn zero_rounding_is_straight() {
        let pts = [
            Point3::new(0.0, 0.0, -0.1),
            Point3::new(2.0, 1.0, -0.1),
            Point3::new(-1.0, 3.0, -0.1),
        ];
        let curve = build_curve(&pts, 0.0, &[]);
        assert_eq!(curve.segment_count(), 2);
        assert_relative_eq!(
            curve.point_at(0.25).unwrap(),
            nalgebra::center(&pts[0], &pts[1]),
            epsilon = 1e-12
        );
        assert_relative_eq!(
            curve.point_at(0.75).unwrap(),
            nalgebra::center(&pts[1], &pts[2]),
            epsilon = 1e-12
        );
    }

    #[test]
    fn control_offset_is_quarter_chord_times_rounding() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(4.0, 0.0, 0.0);
        let curve = build_curve(&[a, b], 0.5, &[]);
        let seg = curve.segments()[0];
        assert_relative_eq!(seg.control, Point3::new(2.0, 0.5, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn per_segment_override_and_clamp() {
        let pts = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
        ];
        let curve = build_curve(&pts, 0.8, &[Some(0.0), Some(3.0)]);
        assert_relative_eq!(curve.segments()[0].bulge(), 0.0, epsilon = 1e-12);
        assert_relative_eq!(curve.segments()[1].bulge(), 0.25, epsilon = 1e-12);
    }

    #[test]
    fn fewer_than_two_points_is_empty() {
        assert!(build_curve(&[], 0.2, &[]).is_empty());
        assert!(build_curve(&[Point3::origin()], 0.2, &[]).is_empty());
    }

    #[test]
    fn three_anchor_path_bulges() {
        let set = anchors();
        let curve = path(&["I1", "I2", "I3"]).resolve(&set, 0.2);
        assert_eq!(curve.segment_count(), 2);
        for seg in curve.segments() {
            let chord = nalgebra::distance(&seg.start, &seg.end);
            assert!(chord > 0.0);
            assert_relative_eq!(seg.bulge(), 0.2 * BULGE_FACTOR * chord, epsilon = 1e-12);
        }
        let first = curve.segments()[0];
        assert_relative_eq!(first.start, set.position("I1").unwrap());
        assert_relative_eq!(first.end, set.position("I2").unwrap());
    }

    #[test]
    fn unknown_anchor_is_dropped() {
        let set = anchors();
        let curve = path(&["I1", "I9", "I2"]).resolve(&set, 0.2);
        assert_eq!(curve.segment_count(), 1);
        assert_relative_eq!(curve.point_at(0.0).unwrap(), set.position("I1").unwrap());
        assert_relative_eq!(
            curve.point_at(1.0).unwrap(),
            set.position("I2").unwrap(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn only_unknown_anchors_give_empty_curve() {
        let spec = path(&["C0", "P3"]);
        assert!(spec.resolve(&anchors(), 0.2).is_empty());
        assert!(matches!(
            spec.try_resolve(&anchors(), 0.2),
            Err(crate::error::ShieldError::Geometry(GeometryError::Degenerate(_)))
        ));
        assert!(path(&["O1", "I1"]).try_resolve(&anchors(), 0.2).is_ok());
    }

    #[test]
    fn path_rounding_overrides_global() {
        let mut spec = path(&["O1", "I1"]);
        spec.rounding = Some(0.0);
        let curve = spec.resolve(&anchors(), 0.9);
        assert_relative_eq!(curve.segments()[0].bulge(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn step_rounding_follows_its_step() {
        let spec = PathSpec::new(
            "p",
            vec![
                PathStep::new("I1"),
                PathStep::new("nope").with_rounding(1.0),
                PathStep::new("I2").with_rounding(1.0),
                PathStep::new("I3"),
            ],
        );
        let curve = spec.resolve(&anchors(), 0.0);
        assert_eq!(curve.segment_count(), 2);
        assert_relative_eq!(curve.segments()[0].bulge(), 0.0, epsilon = 1e-12);
        assert!(curve.segments()[1].bulge() > 0.0);
    }
}
