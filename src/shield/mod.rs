//! The hexagonal shield: parameters, rings, segment shifts, anchors, paths
//! and the assembly that ties them together.

pub mod anchors;
pub mod assembly;
pub mod flow;
pub mod params;
pub mod path;
pub mod ring;
pub mod shift;

pub use anchors::{Anchor, AnchorSet, AnchorStrategy};
pub use assembly::{Assembly, BuiltPath, SegmentMesh};
pub use flow::{FlowParams, FlowParticle, ParticleFlow};
pub use params::{AssemblyParams, ShapeParameters, SliderRange};
pub use path::{build_curve, PathSpec, PathStep};
pub use ring::{hex_ring, segment_quad, SegmentQuad, VertexRing, SEGMENT_COUNT};
pub use shift::{segment_shift, SegmentShifts};
