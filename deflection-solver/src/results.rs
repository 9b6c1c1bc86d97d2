//! Result types for deflection evaluation

use serde::{Deserialize, Serialize};

use crate::loads::LoadType;
use crate::math::Samples;

/// One sample of the deflection curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Distance from the left support (m)
    pub x: f64,
    /// Deflection at `x` (m)
    pub y: f64,
}

/// Sampled deflection curve plus the closed-form maximum
#[derive(Debug, Clone, PartialEq)]
pub struct DeflectionCurve {
    /// Load type the curve was computed for
    pub load_type: LoadType,
    /// Midspan deflection from the closed-form expression (m)
    pub max_deflection: f64,
    positions: Samples,
    deflections: Samples,
}

impl DeflectionCurve {
    pub(crate) fn new(
        load_type: LoadType,
        max_deflection: f64,
        positions: Samples,
        deflections: Samples,
    ) -> Self {
        debug_assert_eq!(positions.len(), deflections.len());
        Self {
            load_type,
            max_deflection,
            positions,
            deflections,
        }
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Sample positions, left support first
    pub fn positions(&self) -> &Samples {
        &self.positions
    }

    /// Deflection at each sample position
    pub fn deflections(&self) -> &Samples {
        &self.deflections
    }

    /// Iterate over (x, y) samples in order
    pub fn points(&self) -> impl Iterator<Item = CurvePoint> + '_ {
        self.positions
            .iter()
            .zip(self.deflections.iter())
            .map(|(&x, &y)| CurvePoint { x, y })
    }

    /// Sample with the largest deflection magnitude.
    ///
    /// The first sample wins a tie. NaN samples are skipped.
    pub fn peak(&self) -> Option<CurvePoint> {
        self.points()
            .filter(|p| !p.y.is_nan())
            .fold(None, |best: Option<CurvePoint>, p| match best {
                Some(b) if b.y.abs() >= p.y.abs() => Some(b),
                _ => Some(p),
            })
    }
}
