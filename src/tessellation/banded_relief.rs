use std::f64::consts::PI;

use crate::math::polygon_2d::signed_area_2d;
use crate::math::{Point2, TOLERANCE};
use crate::operations::offset::inset_polygon;

use super::TriangleMesh;

/// Smooth accelerate/decelerate ramp `(1 - cos(πt)) / 2` on `[0, 1]`.
#[must_use]
pub fn ease(t: f64) -> f64 {
    (1.0 - (PI * t).cos()) * 0.5
}

/// Vertical shape of a banded relief.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReliefProfile {
    /// Height of the top plateau above the base plane.
    pub height: f64,
    /// Depth of the downward extrusion below the base plane. `0` leaves
    /// the underside open.
    pub thickness: f64,
    /// Number of bands between the base and the plateau (at least 1).
    pub steps: u32,
}

impl ReliefProfile {
    /// Creates a profile, raising `steps` to at least 1.
    #[must_use]
    pub fn new(height: f64, thickness: f64, steps: u32) -> Self {
        Self {
            height,
            thickness,
            steps: steps.max(1),
        }
    }
}

/// One eased stretch of the downward skirt, as insets of the base polygon.
#[derive(Debug, Clone, Copy)]
struct SkirtStage {
    from_inset: f64,
    to_inset: f64,
    from_z: f64,
    to_z: f64,
}

impl SkirtStage {
    fn at(&self, t: f64) -> (f64, f64) {
        let e = ease(t);
        (
            self.from_inset + (self.to_inset - self.from_inset) * e,
            self.from_z + (self.to_z - self.from_z) * e,
        )
    }
}

/// Builds a rounded relief by stacking inset contours of a convex base
/// polygon at eased heights.
///
/// Band `k` of `steps` sits at `t = k / steps`, height
/// `profile.height * ease(t)` and offset `top_distance * t`. A positive
/// `top_distance` shrinks the contours toward a raised plateau; a negative
/// one grows them outward from the base.
///
/// When `profile.thickness > 0` the base continues downward and is closed
/// by a cap on the base footprint at `-thickness`. The upper half of that
/// skirt is the outer transition: it eases inward from the base to an
/// inset of `skirt_distance`. The lower half eases back out to the base
/// footprint, starting either from that same inset or, with
/// [`BandedRelief::with_inner_transition`], from the plateau outline.
#[derive(Debug)]
pub struct BandedRelief {
    base: Vec<Point2>,
    top_distance: f64,
    skirt_distance: f64,
    inner_transition: bool,
    profile: ReliefProfile,
}

impl BandedRelief {
    /// Creates a new relief. The base is re-ordered counter-clockwise if
    /// needed so the output triangles face outward.
    #[must_use]
    pub fn new(
        base: &[Point2],
        top_distance: f64,
        skirt_distance: f64,
        profile: ReliefProfile,
    ) -> Self {
        let mut base = base.to_vec();
        if signed_area_2d(&base) < 0.0 {
            base.reverse();
        }
        Self {
            base,
            top_distance,
            skirt_distance,
            inner_transition: false,
            profile,
        }
    }

    /// Starts the lower skirt half from the plateau outline instead of the
    /// outer transition's last contour. A flat ledge joins the two at
    /// mid-depth.
    #[must_use]
    pub fn with_inner_transition(mut self) -> Self {
        self.inner_transition = true;
        self
    }

    /// Contour of the raised part at band parameter `t`.
    #[must_use]
    pub fn contour(&self, t: f64) -> Vec<Point2> {
        inset_polygon(&self.base, self.top_distance * t)
    }

    /// Outline of the top plateau.
    #[must_use]
    pub fn plateau(&self) -> Vec<Point2> {
        self.contour(1.0)
    }

    /// Executes the extrusion, returning a mesh with vertex normals.
    #[must_use]
    pub fn execute(&self) -> TriangleMesh {
        let mut mesh = TriangleMesh::default();
        let steps = self.profile.steps.max(1);

        let base_ring = mesh.push_ring(&self.base, 0.0);
        let mut prev = base_ring.clone();
        for k in 1..=steps {
            let t = f64::from(k) / f64::from(steps);
            let ring = mesh.push_ring(&self.contour(t), self.profile.height * ease(t));
            mesh.stitch_rings(&prev, &ring, false);
            prev = ring;
        }
        mesh.fan(&prev, false);

        if self.profile.thickness > 0.0 {
            let mut prev = base_ring;
            let mut prev_inset = 0.0;
            for stage in self.skirt_stages() {
                if (stage.from_inset - prev_inset).abs() > TOLERANCE {
                    let ledge = inset_polygon(&self.base, stage.from_inset);
                    let ring = mesh.push_ring(&ledge, stage.from_z);
                    mesh.stitch_rings(&prev, &ring, true);
                    prev = ring;
                }
                for k in 1..=steps {
                    let (inset, z) = stage.at(f64::from(k) / f64::from(steps));
                    let ring = mesh.push_ring(&inset_polygon(&self.base, inset), z);
                    mesh.stitch_rings(&prev, &ring, true);
                    prev = ring;
                }
                prev_inset = stage.to_inset;
            }
            // The last stage ends on the base footprint.
            mesh.fan(&prev, true);
        }

        mesh.compute_normals();
        mesh
    }

    fn skirt_stages(&self) -> [SkirtStage; 2] {
        let depth = self.profile.thickness;
        let mid = -0.5 * depth;
        let inner_from = if self.inner_transition {
            self.top_distance
        } else {
            self.skirt_distance
        };
        [
            SkirtStage {
                from_inset: 0.0,
                to_inset: self.skirt_distance,
                from_z: 0.0,
                to_z: mid,
            },
            SkirtStage {
                from_inset: inner_from,
                to_inset: 0.0,
                from_z: mid,
                to_z: -depth,
            },
        ]
    }
}
