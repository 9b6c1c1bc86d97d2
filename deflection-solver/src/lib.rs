//! Deflection Solver - closed-form beam deflection in Rust
//!
//! Computes the deflection curve of a simply supported beam under either a
//! central point load or a uniformly distributed load (UDL), using the
//! Euler–Bernoulli closed-form results:
//! - Point load: δmax = P·L³ / (48·E·I)
//! - UDL: δmax = 5·w·L⁴ / (384·E·I)
//!
//! The curve is sampled at 50 evenly spaced positions from support to support.
//!
//! ## Example
//! ```rust
//! use deflection_solver::prelude::*;
//!
//! let beam = BeamSpec::from_parts(
//!     4.0,
//!     BeamLoad::udl(2_000.0),
//!     &Material::steel(),
//!     &Section::rectangular(0.1, 0.3),
//! );
//!
//! let curve = evaluate_checked(&beam).unwrap();
//! assert_eq!(curve.len(), 50);
//!
//! let report = DeflectionReport::from_curve(&curve);
//! println!("{}", report.summary);
//! ```

pub mod analysis;
pub mod elements;
pub mod error;
pub mod loads;
pub mod math;
pub mod report;
pub mod results;

// Re-export common types
pub mod prelude {
    pub use crate::analysis::{
        beam_deflection, deflection_at, evaluate, evaluate_checked, evaluate_with,
        max_deflection, EvaluationOptions, Validation, SAMPLE_COUNT,
    };
    pub use crate::elements::{BeamSpec, Material, Section};
    pub use crate::error::{CalcError, CalcResult};
    pub use crate::loads::{BeamLoad, LoadType};
    pub use crate::report::DeflectionReport;
    pub use crate::results::{CurvePoint, DeflectionCurve};
}

#[cfg(feature = "wasm")]
pub mod wasm;
