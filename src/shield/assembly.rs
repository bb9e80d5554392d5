use tracing::{debug, instrument};

use crate::geometry::PathCurve;
use crate::math::{Point3, Vector2, Vector3};
use crate::operations::shaping::{CenterCap, SegmentRelief};
use crate::tessellation::TriangleMesh;

use super::anchors::AnchorSet;
use super::flow::ParticleFlow;
use super::params::{AssemblyParams, OUTER_RADIUS};
use super::ring::{hex_ring, segment_quad, VertexRing, SEGMENT_COUNT};
use super::shift::SegmentShifts;

/// One trapezoidal segment ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentMesh {
    /// Segment index `0..6`.
    pub index: usize,
    /// Mesh in the unshifted ring frame.
    pub mesh: TriangleMesh,
    /// Gap translation the renderer applies to `mesh`.
    pub translation: Vector2,
    /// Rim width after safe-inset clamping.
    pub applied_rim: f64,
}

impl SegmentMesh {
    /// The mesh moved by its gap translation.
    #[must_use]
    pub fn world_mesh(&self) -> TriangleMesh {
        self.mesh
            .translated(&Vector3::new(self.translation.x, self.translation.y, 0.0))
    }
}

/// A resolved path and its curve.
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltPath {
    /// Id of the [`super::path::PathSpec`] it came from.
    pub id: String,
    /// Resolved curve; empty when fewer than two anchors were found.
    pub curve: PathCurve,
}

/// Everything one parameter snapshot produces.
///
/// Built in one pass by [`Assembly::build`]; a parameter change builds a
/// new one instead of patching this.
#[derive(Debug, Clone, PartialEq)]
pub struct Assembly {
    pub outer: VertexRing,
    pub inner: VertexRing,
    pub shifts: SegmentShifts,
    pub segments: [SegmentMesh; SEGMENT_COUNT],
    /// Center cap mesh at the origin, never shifted.
    pub center: TriangleMesh,
    pub anchors: AnchorSet,
    /// One entry per configured path, in configuration order.
    pub paths: Vec<BuiltPath>,
    /// Particle layout shared by every path.
    pub flow: ParticleFlow,
}

impl Assembly {
    /// Runs the whole pipeline: rings, shifts, meshes, anchors, paths.
    #[must_use]
    #[instrument(skip_all, fields(strategy = ?params.anchor_strategy))]
    pub fn build(params: &AssemblyParams) -> Self {
        let shape = &params.shape;
        let outer = hex_ring(OUTER_RADIUS);
        let inner = hex_ring(shape.inner_radius());
        let shifts = SegmentShifts::compute(
            &outer,
            &inner,
            shape.gap_world(),
            &params.segment_gaps_world(),
        );

        let segments: [SegmentMesh; SEGMENT_COUNT] = std::array::from_fn(|i| {
            let relief = SegmentRelief::new(
                segment_quad(i, &outer, &inner),
                shape.rim_world(),
                shape.height(),
                shape.thickness(),
                shape.round_steps(),
            );
            SegmentMesh {
                index: i,
                mesh: relief.execute(),
                translation: shifts[i],
                applied_rim: relief.applied_rim(),
            }
        });

        let center = CenterCap::new(
            inner,
            shape.rim_world(),
            shape.height(),
            shape.thickness(),
            shape.round_steps(),
        )
        .execute();

        let anchors = AnchorSet::build(
            params.anchor_strategy,
            &outer,
            &inner,
            &shifts,
            shape.back_plane_z(),
        );

        let paths: Vec<BuiltPath> = params
            .paths
            .iter()
            .map(|spec| BuiltPath {
                id: spec.id.clone(),
                curve: spec.resolve(&anchors, params.rounding),
            })
            .collect();

        debug!(
            anchors = anchors.len(),
            paths = paths.len(),
            empty_paths = paths.iter().filter(|p| p.curve.is_empty()).count(),
            triangles = segments
                .iter()
                .map(|s| s.mesh.triangle_count())
                .sum::<usize>()
                + center.triangle_count(),
            "assembly rebuilt"
        );

        Self {
            outer,
            inner,
            shifts,
            segments,
            center,
            anchors,
            paths,
            flow: ParticleFlow::new(&params.flow),
        }
    }

    /// Curve of the path `id`, if it was configured.
    #[must_use]
    pub fn path(&self, id: &str) -> Option<&PathCurve> {
        self.paths.iter().find(|p| p.id == id).map(|p| &p.curve)
    }

    /// Particle positions on every path at `elapsed` seconds.
    #[must_use]
    pub fn particle_frame(&self, elapsed: f64) -> Vec<Point3> {
        self.paths
            .iter()
            .flat_map(|p| self.flow.frame(&p.curve, elapsed))
            .collect()
    }

    /// Axis-aligned bounds of the translated segments and the center cap.
    #[must_use]
    pub fn bounds(&self) -> Option<(Point3, Point3)> {
        self.segments
            .iter()
            .filter_map(|s| s.world_mesh().bounds())
            .chain(self.center.bounds())
            .reduce(|(lo, hi), (l, h)| (lo.inf(&l), hi.sup(&h)))
    }
}
