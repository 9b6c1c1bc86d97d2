use serde::{Deserialize, Serialize};

use deflection_solver::results::CurvePoint;

/// Raw fields posted by the calculator form.
///
/// Kept as text so a field that does not parse can be reported by name and
/// echoed back into the page unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculatorForm {
    #[serde(default)]
    pub length: String,
    #[serde(default)]
    pub load_type: String,
    #[serde(default)]
    pub load_value: String,
    #[serde(default)]
    pub youngs_modulus: String,
    #[serde(default)]
    pub moment_of_inertia: String,
}

impl CalculatorForm {
    /// Values the page opens with
    pub fn initial() -> Self {
        Self {
            length: "1.0".to_string(),
            load_type: "point".to_string(),
            load_value: "100.0".to_string(),
            youngs_modulus: "2.1e11".to_string(),
            moment_of_inertia: "1e-6".to_string(),
        }
    }
}

/// JSON evaluation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluateRequest {
    pub length: f64,
    pub load_type: String,
    pub load_value: f64,
    pub youngs_modulus: f64,
    pub moment_of_inertia: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct EvaluateResponse {
    pub job_id: String,
    pub status: EvaluationStatus,
    /// Serialized as `null` when not finite
    pub max_deflection: f64,
    pub points: Vec<CurvePoint>,
    pub summary: String,
    pub table: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EvaluationStatus {
    Success,
    Failed,
}
