mod center_cap;
mod segment_relief;

pub use center_cap::CenterCap;
pub use segment_relief::{SegmentRelief, SKIRT_RIM_FACTOR};
