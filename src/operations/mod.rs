pub mod offset;
pub mod shaping;
