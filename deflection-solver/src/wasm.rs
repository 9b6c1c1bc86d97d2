//! WASM bindings for the deflection solver
//!
//! Lets the calculator page evaluate beams directly in the browser instead
//! of posting the form to the service.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::prelude::*;

// Use wee_alloc for smaller WASM binary
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

#[derive(Debug, Deserialize)]
pub struct EvaluateRequest {
    pub length: f64,
    pub load_type: String,
    pub load_value: f64,
    pub youngs_modulus: f64,
    pub moment_of_inertia: f64,
    #[serde(default)]
    pub validation: Validation,
}

#[derive(Debug, Serialize)]
pub struct EvaluateResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_deflection: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table: Option<String>,
    pub ms_elapsed: f64,
}

/// Evaluate a beam.
///
/// Takes a JSON string with the five calculator inputs and returns a JSON
/// string with the two display outputs.
#[wasm_bindgen]
pub fn evaluate_json(request_json: &str) -> String {
    let start = js_sys::Date::now();

    let response = match run_evaluation(request_json) {
        Ok((max_deflection, report)) => EvaluateResponse {
            success: true,
            error: None,
            max_deflection: Some(max_deflection),
            summary: Some(report.summary),
            table: Some(report.table),
            ms_elapsed: js_sys::Date::now() - start,
        },
        Err(e) => EvaluateResponse {
            success: false,
            error: Some(e.to_string()),
            max_deflection: None,
            summary: None,
            table: None,
            ms_elapsed: js_sys::Date::now() - start,
        },
    };

    serde_json::to_string(&response).unwrap_or_else(|e| {
        format!(r#"{{"success":false,"error":"Serialization failed: {}"}}"#, e)
    })
}

fn run_evaluation(request_json: &str) -> CalcResult<(f64, DeflectionReport)> {
    let request: EvaluateRequest = serde_json::from_str(request_json)?;
    let kind: LoadType = request.load_type.parse()?;

    let spec = BeamSpec::new(
        request.length,
        BeamLoad::new(kind, request.load_value),
        request.youngs_modulus,
        request.moment_of_inertia,
    );
    let options = EvaluationOptions {
        validation: request.validation,
    };
    let curve = evaluate_with(&spec, &options)?;

    Ok((curve.max_deflection, DeflectionReport::from_curve(&curve)))
}

/// Get version information
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
