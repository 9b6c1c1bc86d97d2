use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use deflection_solver::prelude::*;

use crate::config::ServiceConfig;
use crate::models::{CalculatorForm, EvaluateRequest, EvaluateResponse, EvaluationStatus};
use crate::page::{FormOutput, PageRenderer};

/// Application state
pub struct AppState {
    options: EvaluationOptions,
    renderer: PageRenderer,
}

impl AppState {
    pub fn new(config: &ServiceConfig) -> Self {
        Self {
            options: config.evaluation_options(),
            renderer: PageRenderer::new(),
        }
    }
}

/// Build the router: the calculator page plus the JSON API
pub fn create_router(config: &ServiceConfig) -> Router {
    let state = AppState::new(config);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index_handler))
        .route("/compute", post(compute_handler))
        .route("/health", get(health_check))
        .route("/api/v1/evaluate", post(evaluate_handler))
        .route("/api/v1/version", get(version_handler))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(Arc::new(state))
}

/// Calculator page with its default inputs
async fn index_handler(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(
        state
            .renderer
            .render(&CalculatorForm::initial(), &FormOutput::Empty),
    )
}

/// Form submission: re-render the page with both outputs filled in
async fn compute_handler(
    State(state): State<Arc<AppState>>,
    Form(form): Form<CalculatorForm>,
) -> Html<String> {
    let output = match evaluate_form(&form, &state.options) {
        Ok(report) => FormOutput::Report(report),
        Err(e) => {
            tracing::info!("Rejected form submission: {}", e);
            FormOutput::Error(format!("Error: {}", e))
        }
    };

    Html(state.renderer.render(&form, &output))
}

fn evaluate_form(
    form: &CalculatorForm,
    options: &EvaluationOptions,
) -> CalcResult<DeflectionReport> {
    let spec = BeamSpec::from_text(
        &form.length,
        &form.load_type,
        &form.load_value,
        &form.youngs_modulus,
        &form.moment_of_inertia,
    )?;
    let curve = evaluate_with(&spec, options)?;
    tracing::debug!(
        "Evaluated {} load on L={} m: max deflection {:e} m",
        spec.load.kind,
        spec.length,
        curve.max_deflection
    );
    Ok(DeflectionReport::from_curve(&curve))
}

/// JSON evaluation
async fn evaluate_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<EvaluateRequest>,
) -> Result<Json<EvaluateResponse>, ApiError> {
    tracing::info!(
        "Received evaluation request: L={}, {} load={}",
        request.length,
        request.load_type,
        request.load_value
    );

    let kind: LoadType = request.load_type.parse()?;
    let spec = BeamSpec::new(
        request.length,
        BeamLoad::new(kind, request.load_value),
        request.youngs_modulus,
        request.moment_of_inertia,
    );
    let curve = evaluate_with(&spec, &state.options)?;
    let report = DeflectionReport::from_curve(&curve);

    Ok(Json(EvaluateResponse {
        job_id: Uuid::new_v4().to_string(),
        status: EvaluationStatus::Success,
        max_deflection: curve.max_deflection,
        points: curve.points().collect(),
        summary: report.summary,
        table: report.table,
        timestamp: chrono::Utc::now().to_rfc3339(),
    }))
}

/// Health check endpoint
async fn health_check(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "validation": state.options.validation,
    }))
}

/// Version endpoint
async fn version_handler() -> Json<serde_json::Value> {
    Json(json!({
        "service": "Beam Deflection Service",
        "version": env!("CARGO_PKG_VERSION"),
        "api_version": "v1",
        "solver": "closed-form Euler-Bernoulli",
        "samples": SAMPLE_COUNT,
    }))
}

/// API Errors
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Calculation(#[from] CalcError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::Calculation(e) => (StatusCode::BAD_REQUEST, e.error_code()),
        };

        let body = Json(json!({
            "status": EvaluationStatus::Failed,
            "error": self.to_string(),
            "code": code,
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request};
    use deflection_solver::analysis::Validation;
    use tower::ServiceExt;

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, String) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    fn post_form(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/compute")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn post_json(body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/v1/evaluate")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_index_serves_calculator() {
        let app = create_router(&ServiceConfig::default());
        let request = Request::builder().uri("/").body(Body::empty()).unwrap();
        let (status, body) = send(app, request).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Beam Deflection Calculator"));
        assert!(body.contains("action=\"/compute\""));
    }

    #[tokio::test]
    async fn test_form_submission_fills_outputs() {
        let app = create_router(&ServiceConfig::default());
        let form = "length=1.0&load_type=point&load_value=100&youngs_modulus=2.1e11&moment_of_inertia=1e-6";
        let (status, body) = send(app, post_form(form)).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Maximum Deflection: 9.920635e-06 m"));
        assert!(body.contains("x(m)   deflection(m)"));
        assert!(body.contains("1.00   0.000000e+00"));
    }

    #[tokio::test]
    async fn test_form_error_is_shown_on_page() {
        let app = create_router(&ServiceConfig::default());
        let form = "length=abc&load_type=udl&load_value=100&youngs_modulus=2.1e11&moment_of_inertia=1e-6";
        let (status, body) = send(app, post_form(form)).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Error: Invalid input for "));
        assert!(body.contains("value=\"abc\""));
    }

    #[tokio::test]
    async fn test_permissive_form_prints_inf() {
        let config = ServiceConfig {
            validation: Validation::Permissive,
            ..ServiceConfig::default()
        };
        let app = create_router(&config);
        let form = "length=1.0&load_type=point&load_value=100&youngs_modulus=0&moment_of_inertia=1e-6";
        let (_, body) = send(app, post_form(form)).await;

        assert!(body.contains("Maximum Deflection: inf m"));
    }

    #[tokio::test]
    async fn test_json_evaluation() {
        let app = create_router(&ServiceConfig::default());
        let request = post_json(json!({
            "length": 1.0,
            "load_type": "udl",
            "load_value": 100.0,
            "youngs_modulus": 2.1e11,
            "moment_of_inertia": 1e-6
        }));
        let (status, body) = send(app, request).await;
        assert_eq!(status, StatusCode::OK);

        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["status"], "Success");
        assert_eq!(value["points"].as_array().unwrap().len(), SAMPLE_COUNT);
        assert_eq!(value["summary"], "Maximum Deflection: 6.200397e-06 m");
        assert_eq!(value["points"][49]["x"], 1.0);
    }

    #[tokio::test]
    async fn test_json_rejects_unknown_load_type() {
        let app = create_router(&ServiceConfig::default());
        let request = post_json(json!({
            "length": 1.0,
            "load_type": "cantilever",
            "load_value": 100.0,
            "youngs_modulus": 2.1e11,
            "moment_of_inertia": 1e-6
        }));
        let (status, body) = send(app, request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["status"], "Failed");
        assert_eq!(value["code"], "INVALID_INPUT");
    }

    #[tokio::test]
    async fn test_health() {
        let app = create_router(&ServiceConfig::default());
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let (status, body) = send(app, request).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("\"validation\":\"strict\""));
    }
}
