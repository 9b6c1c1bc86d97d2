//! Deflection evaluation and its options

use serde::{Deserialize, Serialize};

use crate::elements::BeamSpec;
use crate::error::CalcResult;
use crate::loads::{BeamLoad, LoadType};
use crate::math::{self, linspace};
use crate::report::DeflectionReport;
use crate::results::DeflectionCurve;

/// Number of samples taken along the span, both supports included
pub const SAMPLE_COUNT: usize = 50;

/// How inputs are checked before evaluating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Validation {
    /// Reject non-positive or non-finite L, E, I and a non-finite load
    Strict,
    /// Evaluate anything; degenerate inputs show up as inf/NaN in the output
    Permissive,
}

impl Default for Validation {
    fn default() -> Self {
        Self::Strict
    }
}

impl std::str::FromStr for Validation {
    type Err = crate::error::CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "strict" => Ok(Validation::Strict),
            "permissive" => Ok(Validation::Permissive),
            _ => Err(crate::error::CalcError::invalid_input(
                "validation",
                s,
                "expected 'strict' or 'permissive'",
            )),
        }
    }
}

/// Options for deflection evaluation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EvaluationOptions {
    /// Input checking mode
    pub validation: Validation,
}

impl EvaluationOptions {
    /// Options that reject physically meaningless beams
    pub fn strict() -> Self {
        Self {
            validation: Validation::Strict,
        }
    }

    /// Options that let floating-point degeneracies through
    pub fn permissive() -> Self {
        Self {
            validation: Validation::Permissive,
        }
    }
}

/// Closed-form midspan deflection for the beam
pub fn max_deflection(spec: &BeamSpec) -> f64 {
    let BeamLoad { kind, magnitude } = spec.load;
    match kind {
        LoadType::Point => math::point_load_max_deflection(magnitude, spec.length, spec.e, spec.i),
        LoadType::Udl => math::udl_max_deflection(magnitude, spec.length, spec.e, spec.i),
    }
}

/// Deflection at an arbitrary distance `x` from the left support
pub fn deflection_at(spec: &BeamSpec, x: f64) -> f64 {
    let delta_max = max_deflection(spec);
    shape(spec.load.kind, x, spec.length, delta_max)
}

fn shape(kind: LoadType, x: f64, length: f64, delta_max: f64) -> f64 {
    match kind {
        LoadType::Point => math::point_load_shape(x, length, delta_max),
        LoadType::Udl => math::udl_shape(x, length, delta_max),
    }
}

/// Evaluate the deflection curve without checking the inputs.
///
/// Never fails: E = 0, I = 0 or a non-finite length propagate as inf/NaN.
pub fn evaluate(spec: &BeamSpec) -> DeflectionCurve {
    log::debug!(
        "Evaluating {} load: L={} m, load={} {}, E={} Pa, I={} m^4",
        spec.load.kind,
        spec.length,
        spec.load.magnitude,
        spec.load.kind.magnitude_unit(),
        spec.e,
        spec.i
    );

    let kind = spec.load.kind;
    let length = spec.length;
    let delta_max = max_deflection(spec);

    if !delta_max.is_finite() {
        log::warn!("Maximum deflection is not finite ({})", delta_max);
    }

    let positions = linspace(0.0, length, SAMPLE_COUNT);
    let deflections = positions.map(|x| shape(kind, x, length, delta_max));

    DeflectionCurve::new(kind, delta_max, positions, deflections)
}

/// Validate the beam, then evaluate it
pub fn evaluate_checked(spec: &BeamSpec) -> CalcResult<DeflectionCurve> {
    spec.validate()?;
    Ok(evaluate(spec))
}

/// Evaluate according to the given options
pub fn evaluate_with(spec: &BeamSpec, options: &EvaluationOptions) -> CalcResult<DeflectionCurve> {
    match options.validation {
        Validation::Strict => evaluate_checked(spec),
        Validation::Permissive => Ok(evaluate(spec)),
    }
}

/// Calculator entry point: five inputs in, the two display strings out.
///
/// The load type is parsed from its form value (`"point"` or `"udl"`) and
/// the beam is strictly validated.
pub fn beam_deflection(
    length: f64,
    load_type: &str,
    load_value: f64,
    e: f64,
    i: f64,
) -> CalcResult<DeflectionReport> {
    let kind: LoadType = load_type.parse()?;
    let spec = BeamSpec::new(length, BeamLoad::new(kind, load_value), e, i);
    let curve = evaluate_checked(&spec)?;
    Ok(DeflectionReport::from_curve(&curve))
}
