//! The single load a simply supported beam carries

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CalcError;

/// How the load is applied along the span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadType {
    /// Concentrated force P (N) at midspan
    Point,
    /// Uniformly distributed load w (N/m) over the full span
    Udl,
}

impl LoadType {
    /// Lowercase name as used by the calculator form
    pub fn as_str(&self) -> &'static str {
        match self {
            LoadType::Point => "point",
            LoadType::Udl => "udl",
        }
    }

    /// Unit of the load magnitude for this load type
    pub fn magnitude_unit(&self) -> &'static str {
        match self {
            LoadType::Point => "N",
            LoadType::Udl => "N/m",
        }
    }
}

impl fmt::Display for LoadType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LoadType {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "point" => Ok(LoadType::Point),
            "udl" => Ok(LoadType::Udl),
            _ => Err(CalcError::invalid_input(
                "load_type",
                s,
                "expected 'point' or 'udl'",
            )),
        }
    }
}

/// A load on the beam: its type and magnitude
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BeamLoad {
    /// Load type
    pub kind: LoadType,
    /// P in N for a point load, w in N/m for a UDL
    pub magnitude: f64,
}

impl BeamLoad {
    /// Create a new load
    pub fn new(kind: LoadType, magnitude: f64) -> Self {
        Self { kind, magnitude }
    }

    /// Central point load P (N)
    pub fn point(magnitude: f64) -> Self {
        Self::new(LoadType::Point, magnitude)
    }

    /// Uniformly distributed load w (N/m)
    pub fn udl(magnitude: f64) -> Self {
        Self::new(LoadType::Udl, magnitude)
    }

    /// Total force this load puts on a span of the given length
    pub fn total_force(&self, length: f64) -> f64 {
        match self.kind {
            LoadType::Point => self.magnitude,
            LoadType::Udl => self.magnitude * length,
        }
    }
}
