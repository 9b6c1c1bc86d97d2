//! Material properties

use serde::{Deserialize, Serialize};

/// Elastic material for bending calculations
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Modulus of elasticity (Young's modulus) in Pa
    pub e: f64,
}

impl Material {
    /// Create a new material from its Young's modulus
    pub fn new(e: f64) -> Self {
        Self { e }
    }

    /// Create a standard steel material (A36)
    pub fn steel() -> Self {
        Self { e: 200e9 } // 200 GPa
    }

    /// Structural steel at 210 GPa, the calculator's default
    pub fn structural_steel() -> Self {
        Self { e: 2.1e11 }
    }

    /// Create a standard concrete material
    pub fn concrete(fc: f64) -> Self {
        // fc is compressive strength in Pa
        // E estimated using ACI formula: E = 4700 * sqrt(f'c in MPa) MPa
        let fc_mpa = fc / 1e6;
        Self {
            e: 4700.0 * fc_mpa.sqrt() * 1e6,
        }
    }

    /// Create an aluminum material (6061-T6)
    pub fn aluminum() -> Self {
        Self { e: 68.9e9 } // 68.9 GPa
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::structural_steel()
    }
}
