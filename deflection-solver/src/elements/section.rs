//! Section properties for bending

use serde::{Deserialize, Serialize};

/// Cross-section of the beam, reduced to what bending needs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Second moment of area about the bending axis in m⁴
    pub i: f64,
}

impl Section {
    /// Create a section from its second moment of area
    pub fn new(i: f64) -> Self {
        Self { i }
    }

    /// Create a rectangular section bending about its strong axis
    pub fn rectangular(width: f64, depth: f64) -> Self {
        Self::new(width * depth.powi(3) / 12.0)
    }

    /// Create a circular section
    pub fn circular(diameter: f64) -> Self {
        let r = diameter / 2.0;
        Self::new(std::f64::consts::PI * r.powi(4) / 4.0)
    }

    /// Create a hollow circular (pipe) section
    pub fn pipe(outer_diameter: f64, wall_thickness: f64) -> Self {
        let r_o = outer_diameter / 2.0;
        let r_i = r_o - wall_thickness;
        Self::new(std::f64::consts::PI * (r_o.powi(4) - r_i.powi(4)) / 4.0)
    }
}

impl Default for Section {
    fn default() -> Self {
        // The calculator's default, I = 1e-6 m⁴
        Self::new(1e-6)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangular_section() {
        let section = Section::rectangular(0.3, 0.5);
        let expected_i = 0.3 * 0.5_f64.powi(3) / 12.0;

        assert!((section.i - expected_i).abs() < 1e-10);
    }

    #[test]
    fn test_pipe_with_full_wall_is_circular() {
        let solid = Section::circular(0.2);
        let pipe = Section::pipe(0.2, 0.1);
        assert!((solid.i - pipe.i).abs() < 1e-15);
    }
}
