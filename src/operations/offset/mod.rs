mod inset_polygon;

pub use inset_polygon::{clamp_inset, inset_polygon, max_inset, InsetPolygon2D, SAFE_INSET_FACTOR};
