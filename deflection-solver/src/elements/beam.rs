//! Simply supported beam definition

use serde::{Deserialize, Serialize};

use super::{Material, Section};
use crate::error::{CalcError, CalcResult};
use crate::loads::{BeamLoad, LoadType};

/// Everything one deflection evaluation needs.
///
/// Units are SI throughout: metres, newtons, pascals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BeamSpec {
    /// Span between the two supports (m)
    pub length: f64,
    /// Applied load
    pub load: BeamLoad,
    /// Young's modulus (Pa)
    pub e: f64,
    /// Second moment of area (m⁴)
    pub i: f64,
}

impl BeamSpec {
    /// Create a new beam
    pub fn new(length: f64, load: BeamLoad, e: f64, i: f64) -> Self {
        Self { length, load, e, i }
    }

    /// Create a beam from a material and a section
    pub fn from_parts(length: f64, load: BeamLoad, material: &Material, section: &Section) -> Self {
        Self::new(length, load, material.e, section.i)
    }

    /// Build a beam from the five raw text fields of the calculator form.
    ///
    /// Surrounding whitespace is ignored. Empty fields are reported as
    /// missing, anything that does not parse as a float as invalid.
    pub fn from_text(
        length: &str,
        load_type: &str,
        load_value: &str,
        e: &str,
        i: &str,
    ) -> CalcResult<Self> {
        if load_type.trim().is_empty() {
            return Err(CalcError::MissingField("load_type".to_string()));
        }
        let kind: LoadType = load_type.parse()?;

        Ok(Self::new(
            parse_field("length", length)?,
            BeamLoad::new(kind, parse_field("load_value", load_value)?),
            parse_field("youngs_modulus", e)?,
            parse_field("moment_of_inertia", i)?,
        ))
    }

    /// Check that the beam is physically meaningful.
    ///
    /// L, E and I must be finite and strictly positive; the load magnitude
    /// must be finite but may have either sign.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("length", self.length)?;
        require_positive("youngs_modulus", self.e)?;
        require_positive("moment_of_inertia", self.i)?;

        if !self.load.magnitude.is_finite() {
            return Err(CalcError::invalid_input(
                "load_value",
                self.load.magnitude.to_string(),
                "load must be a finite number",
            ));
        }
        Ok(())
    }

    /// Flexural rigidity EI (N·m²)
    pub fn flexural_rigidity(&self) -> f64 {
        self.e * self.i
    }
}

fn parse_field(field: &str, text: &str) -> CalcResult<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(CalcError::MissingField(field.to_string()));
    }
    trimmed
        .parse::<f64>()
        .map_err(|_| CalcError::invalid_input(field, text, "not a number"))
}

fn require_positive(field: &str, value: f64) -> CalcResult<()> {
    if !value.is_finite() {
        return Err(CalcError::invalid_input(
            field,
            value.to_string(),
            "must be a finite number",
        ));
    }
    if value <= 0.0 {
        return Err(CalcError::invalid_input(
            field,
            value.to_string(),
            "must be greater than zero",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_text() {
        let beam = BeamSpec::from_text(" 1.0", "point", "100", "2.1e11", "1e-6 ").unwrap();
        assert_eq!(beam, BeamSpec::new(1.0, BeamLoad::point(100.0), 2.1e11, 1e-6));
    }

    #[test]
    fn test_from_text_reports_field() {
        match BeamSpec::from_text("1.0", "udl", "abc", "2.1e11", "1e-6") {
            Err(CalcError::InvalidInput { field, value, .. }) => {
                assert_eq!(field, "load_value");
                assert_eq!(value, "abc");
            }
            other => panic!("expected InvalidInput, got {:?}", other),
        }

        match BeamSpec::from_text("1.0", "udl", "100", "", "1e-6") {
            Err(CalcError::MissingField(field)) => assert_eq!(field, "youngs_modulus"),
            other => panic!("expected MissingField, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_non_positive() {
        let ok = BeamSpec::new(1.0, BeamLoad::udl(100.0), 2.1e11, 1e-6);
        assert!(ok.validate().is_ok());

        assert!(BeamSpec { length: 0.0, ..ok }.validate().is_err());
        assert!(BeamSpec { e: -1.0, ..ok }.validate().is_err());
        assert!(BeamSpec { i: f64::NAN, ..ok }.validate().is_err());
        assert!(BeamSpec::new(1.0, BeamLoad::udl(f64::INFINITY), 2.1e11, 1e-6)
            .validate()
            .is_err());
    }

    #[test]
    fn test_negative_load_is_valid() {
        let beam = BeamSpec::new(2.0, BeamLoad::point(-50.0), 2.1e11, 1e-6);
        assert!(beam.validate().is_ok());
    }

    #[test]
    fn test_from_parts() {
        let beam = BeamSpec::from_parts(
            3.0,
            BeamLoad::point(1.0),
            &Material::steel(),
            &Section::rectangular(0.1, 0.2),
        );
        assert_eq!(beam.e, 200e9);
        assert!((beam.flexural_rigidity() - 200e9 * 0.1 * 0.008 / 12.0).abs() < 1e-3);
    }
}
