pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod shield;
pub mod tessellation;

pub use error::{Result, ShieldError};
pub use shield::{Assembly, AssemblyParams};
