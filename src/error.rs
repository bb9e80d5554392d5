use thiserror::Error;

/// Top-level error type for the hexshield geometry engine.
#[derive(Debug, Error)]
pub enum ShieldError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors related to geometric computations.
///
/// Degenerate inputs inside the rebuild pipeline are recovered locally and
/// never surface here; these variants are reserved for caller-facing checks.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,

    #[error("curve has no segments")]
    EmptyCurve,
}

/// Errors raised while loading an assembly configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Convenience type alias for results using [`ShieldError`].
pub type Result<T> = std::result::Result<T, ShieldError>;
