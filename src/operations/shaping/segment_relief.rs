use crate::math::Point2;
use crate::operations::offset::clamp_inset;
use crate::shield::ring::SegmentQuad;
use crate::tessellation::{BandedRelief, ReliefProfile, TriangleMesh};

/// Share of the applied rim used to bevel the downward skirt.
pub const SKIRT_RIM_FACTOR: f64 = 0.5;

/// Builds the rounded, raised mesh of one trapezoidal segment.
///
/// # Algorithm
///
/// 1. The rim is clamped into `[0, 0.24 * shortest quad edge]`.
/// 2. `steps` bands rise from the quad to the plateau: band `k` is the quad
///    inset by `rim * t` at height `height * ease(t)`, `t = k / steps`.
/// 3. The final contour is capped with two triangles.
/// 4. With `thickness > 0` the quad continues downward and is closed by a
///    bottom cap on the base quad at `-thickness`. Two eased transitions
///    bevel the extrusion: the outer one runs from the base quad inward to
///    half the rim, the inner one from the plateau outline back out to
///    the base quad.
///
/// The mesh is built in the shared ring frame; the segment's gap shift is
/// applied by the caller.
#[derive(Debug)]
pub struct SegmentRelief {
    quad: SegmentQuad,
    rim: f64,
    profile: ReliefProfile,
}

impl SegmentRelief {
    /// Creates a new segment relief from its quad and shape values in world
    /// units.
    #[must_use]
    pub fn new(quad: SegmentQuad, rim: f64, height: f64, thickness: f64, steps: u32) -> Self {
        Self {
            quad,
            rim,
            profile: ReliefProfile::new(height, thickness, steps),
        }
    }

    /// Rim width actually used after clamping to the safe inset.
    #[must_use]
    pub fn applied_rim(&self) -> f64 {
        clamp_inset(&self.quad.corners(), self.rim)
    }

    /// Outline of the top plateau.
    #[must_use]
    pub fn plateau(&self) -> Vec<Point2> {
        self.relief().plateau()
    }

    /// Executes the build, returning the mesh with vertex normals.
    #[must_use]
    pub fn execute(&self) -> TriangleMesh {
        self.relief().execute()
    }

    fn relief(&self) -> BandedRelief {
        let rim = self.applied_rim();
        BandedRelief::new(
            &self.quad.corners(),
            rim,
            rim * SKIRT_RIM_FACTOR,
            self.profile,
        )
        .with_inner_transition()
    }
}
