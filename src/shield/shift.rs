use std::ops::Index;

use crate::math::{Vector2, TOLERANCE};

use super::ring::{segment_quad, VertexRing, SEGMENT_COUNT};

/// Outward translation of segment `i` that opens the gap around it.
///
/// The direction is the segment quad's centroid direction from the origin;
/// the length is `gap_world + extra_gap`. A centroid at the origin is
/// treated as unit length.
#[must_use]
pub fn segment_shift(
    i: usize,
    outer: &VertexRing,
    inner: &VertexRing,
    gap_world: f64,
    extra_gap: f64,
) -> Vector2 {
    let c = segment_quad(i, outer, inner).centroid().coords;
    let len = c.norm();
    let len = if len < TOLERANCE { 1.0 } else { len };
    c / len * (gap_world + extra_gap)
}

/// The six segment translations of one rebuild.
///
/// Meshes and anchors both read from the same instance so the rendered
/// segments and their anchors can never drift apart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentShifts([Vector2; SEGMENT_COUNT]);

impl SegmentShifts {
    /// Computes every segment's shift.
    #[must_use]
    pub fn compute(
        outer: &VertexRing,
        inner: &VertexRing,
        gap_world: f64,
        extra_gaps: &[f64; SEGMENT_COUNT],
    ) -> Self {
        Self(std::array::from_fn(|i| {
            segment_shift(i, outer, inner, gap_world, extra_gaps[i])
        }))
    }

    /// All six shifts by segment index.
    #[must_use]
    pub fn as_array(&self) -> &[Vector2; SEGMENT_COUNT] {
        &self.0
    }
}

impl Index<usize> for SegmentShifts {
    type Output = Vector2;

    /// Shift of segment `i`, wrapping around.
    fn index(&self, i: usize) -> &Vector2 {
        &self.0[i % SEGMENT_COUNT]
    }
}
