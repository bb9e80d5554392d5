use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, GeometryError, Result};

use super::anchors::AnchorStrategy;
use super::flow::FlowParams;
use super::path::{PathSpec, PathStep};

/// Radius of the outer hexagon ring in world units.
pub const OUTER_RADIUS: f64 = 3.2;

/// Slider units per world unit for gap, relief and thickness.
pub const LENGTH_SCALE: f64 = 20.0;

/// Slider units per world unit for the rim width.
pub const RIM_SCALE: f64 = 40.0;

/// Distance of the anchor plane behind the underside of the assembly.
pub const BACK_PLANE_OFFSET: f64 = 0.002;

/// Inclusive bounds of one editable parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderRange {
    /// Smallest allowed value.
    pub min: f64,
    /// Largest allowed value.
    pub max: f64,
}

impl SliderRange {
    const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Snaps `value` into the range. Non-finite values become `min`.
    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_finite() {
            value.clamp(self.min, self.max)
        } else {
            self.min
        }
    }

    fn check(&self, parameter: &'static str, value: f64) -> Result<()> {
        if value.is_finite() && value >= self.min && value <= self.max {
            Ok(())
        } else {
            Err(GeometryError::ParameterOutOfRange {
                parameter,
                value,
                min: self.min,
                max: self.max,
            }
            .into())
        }
    }
}

/// Bounds of [`ShapeParameters::gap`] and the per-segment gaps.
pub const GAP_RANGE: SliderRange = SliderRange::new(0.0, 10.0);
/// Bounds of [`ShapeParameters::relief`].
pub const RELIEF_RANGE: SliderRange = SliderRange::new(0.0, 80.0);
/// Bounds of [`ShapeParameters::rim`].
pub const RIM_RANGE: SliderRange = SliderRange::new(0.0, 60.0);
/// Bounds of [`ShapeParameters::round`].
pub const ROUND_RANGE: SliderRange = SliderRange::new(1.0, 100.0);
/// Bounds of [`ShapeParameters::ratio`].
pub const RATIO_RANGE: SliderRange = SliderRange::new(10.0, 60.0);
/// Bounds of [`ShapeParameters::thick`].
pub const THICK_RANGE: SliderRange = SliderRange::new(0.0, 30.0);
/// Bounds of every path rounding value.
pub const ROUNDING_RANGE: SliderRange = SliderRange::new(0.0, 1.0);

/// The editable shape of the shield, in slider units.
///
/// Values are plain scalars as the control panel shows them; the accessor
/// methods convert them to world units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeParameters {
    /// Gap between segments and the center.
    pub gap: f64,
    /// Relief height of the raised tops.
    pub relief: f64,
    /// Rim width of the rounded bevel.
    pub rim: f64,
    /// Number of rounding bands.
    pub round: u32,
    /// Inner ring radius in percent of the outer radius.
    pub ratio: f64,
    /// Downward extrusion depth.
    pub thick: f64,
}

impl Default for ShapeParameters {
    fn default() -> Self {
        Self {
            gap: 0.5,
            relief: 4.0,
            rim: 10.0,
            round: 32,
            ratio: 26.0,
            thick: 0.0,
        }
    }
}

impl ShapeParameters {
    /// Gap in world units.
    #[must_use]
    pub fn gap_world(&self) -> f64 {
        self.gap / LENGTH_SCALE
    }

    /// Plateau height in world units.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.relief / LENGTH_SCALE
    }

    /// Downward thickness in world units.
    #[must_use]
    pub fn thickness(&self) -> f64 {
        self.thick / LENGTH_SCALE
    }

    /// Requested rim width in world units, before any safe-inset clamping.
    #[must_use]
    pub fn rim_world(&self) -> f64 {
        self.rim / RIM_SCALE
    }

    /// Rounding band count, at least 1.
    #[must_use]
    pub fn round_steps(&self) -> u32 {
        self.round.max(1)
    }

    /// Radius of the inner ring.
    #[must_use]
    pub fn inner_radius(&self) -> f64 {
        OUTER_RADIUS * self.ratio / 100.0
    }

    /// Height of the plane anchors and paths live on.
    #[must_use]
    pub fn back_plane_z(&self) -> f64 {
        -self.thickness() - BACK_PLANE_OFFSET
    }

    /// Checks every value against its slider bounds.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ParameterOutOfRange`] for the first value
    /// outside its range.
    pub fn validate(&self) -> Result<()> {
        GAP_RANGE.check("gap", self.gap)?;
        RELIEF_RANGE.check("relief", self.relief)?;
        RIM_RANGE.check("rim", self.rim)?;
        ROUND_RANGE.check("round", f64::from(self.round))?;
        RATIO_RANGE.check("ratio", self.ratio)?;
        THICK_RANGE.check("thick", self.thick)?;
        Ok(())
    }

    /// Returns a copy with every value snapped into its slider bounds.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn clamped(&self) -> Self {
        Self {
            gap: GAP_RANGE.clamp(self.gap),
            relief: RELIEF_RANGE.clamp(self.relief),
            rim: RIM_RANGE.clamp(self.rim),
            round: ROUND_RANGE.clamp(f64::from(self.round)) as u32,
            ratio: RATIO_RANGE.clamp(self.ratio),
            thick: THICK_RANGE.clamp(self.thick),
        }
    }
}

/// Full snapshot of everything a rebuild depends on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssemblyParams {
    /// Slider values shared by every segment.
    pub shape: ShapeParameters,
    /// Extra gap per segment, in slider units like [`ShapeParameters::gap`].
    pub segment_gaps: [f64; 6],
    /// How anchors are derived.
    pub anchor_strategy: AnchorStrategy,
    /// Global path rounding in `[0, 1]`.
    pub rounding: f64,
    /// Paths to draw between anchors.
    pub paths: Vec<PathSpec>,
    /// Particle settings for every path.
    pub flow: FlowParams,
}

impl Default for AssemblyParams {
    fn default() -> Self {
        Self {
            shape: ShapeParameters::default(),
            segment_gaps: [0.0; 6],
            anchor_strategy: AnchorStrategy::default(),
            rounding: 0.2,
            paths: vec![PathSpec::new(
                "o1_to_i1",
                vec![PathStep::new("O1"), PathStep::new("I1")],
            )],
            flow: FlowParams::default(),
        }
    }
}

impl AssemblyParams {
    /// Per-segment extra gaps in world units.
    #[must_use]
    pub fn segment_gaps_world(&self) -> [f64; 6] {
        self.segment_gaps.map(|g| g / LENGTH_SCALE)
    }

    /// Parses a JSON document. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and the
    /// [`AssemblyParams::validate`] errors for out-of-range values.
    pub fn from_json(json: &str) -> Result<Self> {
        let params: Self = serde_json::from_str(json).map_err(ConfigError::from)?;
        params.validate()?;
        Ok(params)
    }

    /// Serializes to pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self).map_err(ConfigError::from)?)
    }

    /// Validates the shape, per-segment gaps, rounding values and flow.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ParameterOutOfRange`] or
    /// [`ConfigError::Invalid`] describing the first bad value.
    pub fn validate(&self) -> Result<()> {
        self.shape.validate()?;
        for gap in self.segment_gaps {
            GAP_RANGE.check("segment_gaps", gap)?;
        }
        ROUNDING_RANGE.check("rounding", self.rounding)?;
        for path in &self.paths {
            if let Some(r) = path.rounding {
                ROUNDING_RANGE.check("path rounding", r)?;
            }
            for step in &path.steps {
                if let Some(r) = step.rounding {
                    ROUNDING_RANGE.check("step rounding", r)?;
                }
            }
        }
        self.flow.validate()
    }
}
