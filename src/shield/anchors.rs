use serde::{Deserialize, Serialize};

use crate::math::triangle_2d::{circumcenter, triangle_centroid};
use crate::math::{lift, Point2, Point3};

use super::ring::{VertexRing, SEGMENT_COUNT};
use super::shift::SegmentShifts;

/// How anchor positions are derived from the rings and shifts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnchorStrategy {
    /// `C0..C5` averaged around the inner ring, `P0..P5` between segments
    /// on the outer ring.
    CenterPerimeter,
    /// `I1..I6` circumcenters around the inner ring, `O1..O6` between
    /// segments on the outer ring.
    #[default]
    InnerOuterRing,
}

/// A named point paths can start or end at.
#[derive(Debug, Clone, PartialEq)]
pub struct Anchor {
    /// Stable id such as `"I1"` or `"P3"`.
    pub id: String,
    /// Position on the back plane.
    pub position: Point3,
}

/// The anchors of one rebuild, in derivation order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnchorSet {
    anchors: Vec<Anchor>,
}

impl AnchorSet {
    /// Derives all anchors for `strategy` on the plane `z`.
    ///
    /// Positions come from the rings and shifts only, never from mesh
    /// vertices, so they stay put while relief, rim or rounding change.
    #[must_use]
    pub fn build(
        strategy: AnchorStrategy,
        outer: &VertexRing,
        inner: &VertexRing,
        shifts: &SegmentShifts,
        z: f64,
    ) -> Self {
        let mut anchors = Vec::with_capacity(2 * SEGMENT_COUNT);
        let mut push = |id: String, p: Point2| {
            anchors.push(Anchor {
                id,
                position: lift(&p, z),
            });
        };

        match strategy {
            AnchorStrategy::CenterPerimeter => {
                for i in 0..SEGMENT_COUNT {
                    let prev = (i + SEGMENT_COUNT - 1) % SEGMENT_COUNT;
                    let c = triangle_centroid(
                        &inner[i],
                        &(inner[i] + shifts[i]),
                        &(inner[i] + shifts[prev]),
                    );
                    push(format!("C{i}"), c);
                }
                for i in 0..SEGMENT_COUNT {
                    push(format!("P{i}"), between_segments(outer, shifts, i));
                }
            }
            AnchorStrategy::InnerOuterRing => {
                for i in 0..SEGMENT_COUNT {
                    let c = circumcenter(
                        &inner[i],
                        &(inner[i] + shifts[i]),
                        &(inner[i + 1] + shifts[i]),
                    );
                    push(format!("I{}", i + 1), c);
                }
                for i in 0..SEGMENT_COUNT {
                    let j = (i + 1) % SEGMENT_COUNT;
                    push(format!("O{}", j + 1), between_segments(outer, shifts, i));
                }
            }
        }

        Self { anchors }
    }

    /// Looks up an anchor by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Anchor> {
        self.anchors.iter().find(|a| a.id == id)
    }

    /// Position of the anchor `id`, if present.
    #[must_use]
    pub fn position(&self, id: &str) -> Option<Point3> {
        self.get(id).map(|a| a.position)
    }

    /// Anchor ids in derivation order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.anchors.iter().map(|a| a.id.as_str())
    }

    /// Iterates anchors in derivation order.
    pub fn iter(&self) -> impl Iterator<Item = &Anchor> {
        self.anchors.iter()
    }

    /// Number of anchors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    /// Returns `true` if the set holds no anchors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }
}

/// Midpoint of outer vertex `i + 1` as displaced by segment `i` and by
/// segment `i + 1`, i.e. the middle of the gap between the two.
fn between_segments(outer: &VertexRing, shifts: &SegmentShifts, i: usize) -> Point2 {
    let j = (i + 1) % SEGMENT_COUNT;
    let shared = outer[j];
    nalgebra::center(&(shared + shifts[i]), &(shared + shifts[j]))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashSet;

    use approx::assert_relative_eq;

    use super::*;
    use crate::shield::ring::hex_ring;

    fn setup(gap: f64) -> (VertexRing, VertexRing, SegmentShifts) {
        let outer = hex_ring(3.2);
        let inner = hex_ring(0.832);
        let shifts = SegmentShifts::compute(&outer, &inner, gap, &[0.0; 6]);
        (outer, inner, shifts)
    }

    #[test]
    fn inner_outer_ids_are_stable_and_unique() {
        let (outer, inner, shifts) = setup(0.025);
        let set = AnchorSet::build(AnchorStrategy::InnerOuterRing, &outer, &inner, &shifts, -0.002);
        let ids: Vec<&str> = set.ids().collect();
        assert_eq!(
            ids,
            ["I1", "I2", "I3", "I4", "I5", "I6", "O2", "O3", "O4", "O5", "O6", "O1"]
        );
        assert_eq!(ids.iter().collect::<HashSet<_>>().len(), 12);
    }

    #[test]
    fn center_perimeter_ids() {
        let (outer, inner, shifts) = setup(0.025);
        let set = AnchorSet::build(AnchorStrategy::CenterPerimeter, &outer, &inner, &shifts, 0.0);
        let ids: Vec<&str> = set.ids().collect();
        assert_eq!(
            ids,
            ["C0", "C1", "C2", "C3", "C4", "C5", "P0", "P1", "P2", "P3", "P4", "P5"]
        );
    }

    #[test]
    fn anchors_live_on_the_back_plane() {
        let (outer, inner, shifts) = setup(0.1);
        let set = AnchorSet::build(AnchorStrategy::InnerOuterRing, &outer, &inner, &shifts, -0.252);
        assert!(set.iter().all(|a| (a.position.z + 0.252).abs() < 1e-15));
    }

    #[test]
    fn perimeter_anchor_is_midpoint_of_shifted_vertex() {
        let (outer, _, shifts) = setup(0.5);
        let p = between_segments(&outer, &shifts, 0);
        let expected = outer[1] + (shifts[0] + shifts[1]) * 0.5;
        assert_relative_eq!(p, expected, epsilon = 1e-12);
        // With equal gaps the midpoint lies on the vertex ray.
        assert_relative_eq!(p.y / p.x, outer[1].y / outer[1].x, epsilon = 1e-9);
    }

    #[test]
    fn center_anchor_averages_three_points() {
        let (outer, inner, shifts) = setup(0.3);
        let set = AnchorSet::build(AnchorStrategy::CenterPerimeter, &outer, &inner, &shifts, 0.0);
        let c0 = set.position("C0").unwrap();
        let expected = inner[0] + (shifts[0] + shifts[5]) / 3.0;
        assert_relative_eq!(c0.x, expected.x, epsilon = 1e-12);
        assert_relative_eq!(c0.y, expected.y, epsilon = 1e-12);
    }

    #[test]
    fn inner_anchor_is_equidistant() {
        let (outer, inner, shifts) = setup(0.4);
        let set = AnchorSet::build(AnchorStrategy::InnerOuterRing, &outer, &inner, &shifts, 0.0);
        let i1 = set.position("I1").unwrap().xy();
        let a = inner[0];
        let b = inner[0] + shifts[0];
        let c = inner[1] + shifts[0];
        let r = nalgebra::distance(&i1, &a);
        assert_relative_eq!(nalgebra::distance(&i1, &b), r, epsilon = 1e-9);
        assert_relative_eq!(nalgebra::distance(&i1, &c), r, epsilon = 1e-9);
    }

    #[test]
    fn zero_gap_collapses_to_ring_points() {
        let (outer, inner, shifts) = setup(0.0);
        let set = AnchorSet::build(AnchorStrategy::InnerOuterRing, &outer, &inner, &shifts, 0.0);
        // Degenerate triangles fall back to their centroid.
        let expected = Point2::from((inner[0].coords * 2.0 + inner[1].coords) / 3.0);
        assert_relative_eq!(set.position("I1").unwrap().xy(), expected, epsilon = 1e-12);
        assert_relative_eq!(set.position("O2").unwrap().xy(), outer[1], epsilon = 1e-12);
    }

    #[test]
    fn rebuild_is_deterministic() {
        let (outer, inner, shifts) = setup(0.025);
        let a = AnchorSet::build(AnchorStrategy::InnerOuterRing, &outer, &inner, &shifts, 0.0);
        let b = AnchorSet::build(AnchorStrategy::InnerOuterRing, &outer, &inner, &shifts, 0.0);
        assert_eq!(a, b);
        assert!(a.get("I9").is_none());
    }
}
