use crate::math::Point2;
use crate::operations::offset::clamp_inset;
use crate::shield::ring::VertexRing;
use crate::tessellation::{BandedRelief, ReliefProfile, TriangleMesh};

use super::segment_relief::SKIRT_RIM_FACTOR;

/// Builds the hexagonal center cap from the inner ring.
///
/// Uses the same banding as [`super::SegmentRelief`], but the contours grow
/// outward: band `k` is the inner ring offset outward by `rim * t`, so the
/// cap starts exactly on the ring the segments' inner edges share. The rim
/// is clamped against the inner ring's edge length. When `thickness > 0`
/// the ring continues down to a bottom cap on the ring itself at
/// `-thickness`. Only the outer transition bevels it: it eases inward to
/// half the rim and mirrors back out, since the grown plateau outline lies
/// outside the ring.
#[derive(Debug)]
pub struct CenterCap {
    ring: VertexRing,
    rim: f64,
    profile: ReliefProfile,
}

impl CenterCap {
    /// Creates a new center cap from the inner ring and shape values in
    /// world units.
    #[must_use]
    pub fn new(ring: VertexRing, rim: f64, height: f64, thickness: f64, steps: u32) -> Self {
        Self {
            ring,
            rim,
            profile: ReliefProfile::new(height, thickness, steps),
        }
    }

    /// Rim width actually used after clamping to the safe inset.
    #[must_use]
    pub fn applied_rim(&self) -> f64 {
        clamp_inset(self.ring.points(), self.rim)
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
        BandedRelief::new(self.ring.points(), -rim, rim * SKIRT_RIM_FACTOR, self.profile)
    }
}
