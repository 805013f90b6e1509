// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Query, State as AxumState},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::{Local, NaiveDate};
use clap::Parser;
use coy_forms_api::{
    ApiError, BuildGuardDutyRequest, GenerateFormRequest, GenerateFormResponse,
    GuardDutyListResponse, ListGenerationsResponse, ListTemplatesResponse, PruneGuardDutyRequest,
    PruneGuardDutyResponse, RecordGenerationRequest, RecordGenerationResponse, RoutineOrderRequest,
    RoutineOrderResponse,
    build_guard_duty, compose_routine_order, generate_form, list_generations, list_templates,
    prune_guard_duty, record_generation,
};
use coy_forms_persistence::{PersistenceError, SqlitePersistence};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};

/// Coy Forms Server - HTTP server for the Coy Forms generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

/// Application state shared across handlers.
///
/// This contains the persistence layer wrapped in a Mutex to allow
/// safe concurrent access.
#[derive(Clone)]
struct AppState {
    /// The persistence layer for generation-event analytics.
    persistence: Arc<Mutex<SqlitePersistence>>,
}

/// Query parameters for listing generation events.
#[derive(Debug, Deserialize)]
struct ListGenerationsQuery {
    /// Maximum number of events to return. Defaults to 50.
    limit: Option<i64>,
}

/// Standard error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::ValidationFailed { .. } => Self {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                message: err.to_string(),
            },
            ApiError::InvalidInput { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
            },
            ApiError::ResourceNotFound { .. } => Self {
                status: StatusCode::NOT_FOUND,
                message: err.to_string(),
            },
            ApiError::Internal { .. } => Self {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message: err.to_string(),
            },
        }
    }
}

impl From<PersistenceError> for HttpError {
    fn from(err: PersistenceError) -> Self {
        error!(error = %err, "Persistence error");
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: format!("Persistence error: {err}"),
        }
    }
}

fn user_agent_from(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::USER_AGENT)
        .and_then(|value| value.to_str().ok())
        .map(String::from)
}

/// Handler for GET /templates.
async fn handle_list_templates() -> Json<ListTemplatesResponse> {
    Json(list_templates())
}

/// Handler for POST /generate.
///
/// On success the generation is also recorded as an analytics event.
/// Recording is best-effort: a failed write is logged and never fails
/// the response.
async fn handle_generate(
    AxumState(state): AxumState<AppState>,
    headers: HeaderMap,
    Json(req): Json<GenerateFormRequest>,
) -> Result<Json<GenerateFormResponse>, HttpError> {
    let today: NaiveDate = Local::now().date_naive();
    let response: GenerateFormResponse = generate_form(&req, today)?;

    let record: RecordGenerationRequest = RecordGenerationRequest {
        template: req.template,
        fields: req.values,
    };
    let user_agent: Option<String> = user_agent_from(&headers);
    let mut persistence = state.persistence.lock().await;
    if let Err(e) = record_generation(&mut persistence, &record, user_agent) {
        error!(error = %e, template = %record.template, "Failed to record generation event");
    }

    Ok(Json(response))
}

/// Handler for POST /guard_duty/list.
async fn handle_build_guard_duty(
    Json(req): Json<BuildGuardDutyRequest>,
) -> Result<Json<GuardDutyListResponse>, HttpError> {
    let response: GuardDutyListResponse = build_guard_duty(&req)?;
    Ok(Json(response))
}

/// Handler for POST /guard_duty/prune.
async fn handle_prune_guard_duty(
    Json(req): Json<PruneGuardDutyRequest>,
) -> Json<PruneGuardDutyResponse> {
    let today: NaiveDate = Local::now().date_naive();
    Json(prune_guard_duty(&req, today))
}

/// Handler for POST /routine_order.
async fn handle_routine_order(
    Json(req): Json<RoutineOrderRequest>,
) -> Result<Json<RoutineOrderResponse>, HttpError> {
    let today: NaiveDate = Local::now().date_naive();
    let response: RoutineOrderResponse = compose_routine_order(&req, today)?;
    Ok(Json(response))
}

/// Handler for POST /generations.
///
/// Explicit record sink for clients that generate through the dedicated
/// builder endpoints (guard duty, routine order); `/generate` records
/// its own events.
async fn handle_record_generation(
    AxumState(state): AxumState<AppState>,
    headers: HeaderMap,
    Json(req): Json<RecordGenerationRequest>,
) -> Result<Json<RecordGenerationResponse>, HttpError> {
    let user_agent: Option<String> = user_agent_from(&headers);
    let mut persistence = state.persistence.lock().await;
    let response: RecordGenerationResponse =
        record_generation(&mut persistence, &req, user_agent)?;
    Ok(Json(response))
}

/// Handler for GET /generations.
async fn handle_list_generations(
    AxumState(state): AxumState<AppState>,
    Query(query): Query<ListGenerationsQuery>,
) -> Result<Json<ListGenerationsResponse>, HttpError> {
    let limit: i64 = query.limit.unwrap_or(50);
    let mut persistence = state.persistence.lock().await;
    let response: ListGenerationsResponse = list_generations(&mut persistence, limit)?;
    Ok(Json(response))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/templates", get(handle_list_templates))
        .route("/generate", post(handle_generate))
        .route("/guard_duty/list", post(handle_build_guard_duty))
        .route("/guard_duty/prune", post(handle_prune_guard_duty))
        .route("/routine_order", post(handle_routine_order))
        .route("/generations", post(handle_record_generation))
        .route("/generations", get(handle_list_generations))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Coy Forms Server");

    // Initialize persistence (in-memory or file-based based on CLI argument)
    let persistence: SqlitePersistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        SqlitePersistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        SqlitePersistence::new_in_memory()?
    };

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode as HttpStatusCode},
    };
    use std::collections::BTreeMap;
    use tower::ServiceExt;

    /// Helper to create test app state with in-memory persistence.
    fn create_test_app_state() -> AppState {
        let persistence: SqlitePersistence =
            SqlitePersistence::new_in_memory().expect("Failed to create in-memory persistence");
        AppState {
            persistence: Arc::new(Mutex::new(persistence)),
        }
    }

    fn post_json<T: Serialize>(uri: &str, body: &T) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .header("user-agent", "test-agent/1.0")
            .body(Body::from(serde_json::to_string(body).unwrap()))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn body_json<T: for<'de> Deserialize<'de>>(response: Response) -> T {
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body_bytes).unwrap()
    }

    /// Helper to create a fully valid leave application request.
    fn create_leave_request() -> GenerateFormRequest {
        let values: BTreeMap<String, String> = [
            ("rank", "3SG"),
            ("name", "John Tan"),
            ("leaveType", "Annual Leave"),
            ("isHalfDay", "false"),
            ("startDate", "2025-06-03"),
            ("endDate", "2025-06-05"),
            ("reason", "Family event"),
            ("contactNumber", "91234567"),
        ]
        .into_iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect();

        GenerateFormRequest {
            template: String::from("leave-application"),
            values,
        }
    }

    #[tokio::test]
    async fn test_list_templates_returns_registry() {
        let app: Router = build_router(create_test_app_state());

        let response = app.oneshot(get_request("/templates")).await.unwrap();
        assert_eq!(response.status(), HttpStatusCode::OK);

        let api_response: ListTemplatesResponse = body_json(response).await;
        assert_eq!(api_response.templates.len(), 6);
        assert_eq!(api_response.templates[0].id, "leave-application");
    }

    #[tokio::test]
    async fn test_generate_leave_application_succeeds() {
        let app: Router = build_router(create_test_app_state());

        let response = app
            .oneshot(post_json("/generate", &create_leave_request()))
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::OK);

        let api_response: GenerateFormResponse = body_json(response).await;
        assert_eq!(api_response.template_type, "Leave Application");
        assert!(api_response.text.contains("3SG JOHN TAN"));
    }

    #[tokio::test]
    async fn test_generate_missing_field_returns_422() {
        let app: Router = build_router(create_test_app_state());

        let mut req: GenerateFormRequest = create_leave_request();
        req.values.insert(String::from("name"), String::new());

        let response = app.oneshot(post_json("/generate", &req)).await.unwrap();
        assert_eq!(response.status(), HttpStatusCode::UNPROCESSABLE_ENTITY);

        let api_response: ErrorResponse = body_json(response).await;
        assert!(api_response.error);
        assert!(api_response.message.contains("Name"));
    }

    #[tokio::test]
    async fn test_generate_unknown_template_returns_404() {
        let app: Router = build_router(create_test_app_state());

        let mut req: GenerateFormRequest = create_leave_request();
        req.template = String::from("parade-state");

        let response = app.oneshot(post_json("/generate", &req)).await.unwrap();
        assert_eq!(response.status(), HttpStatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_generate_records_analytics_event() {
        let app: Router = build_router(create_test_app_state());

        let response = app
            .clone()
            .oneshot(post_json("/generate", &create_leave_request()))
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::OK);

        let response = app.oneshot(get_request("/generations")).await.unwrap();
        assert_eq!(response.status(), HttpStatusCode::OK);

        let api_response: ListGenerationsResponse = body_json(response).await;
        assert_eq!(api_response.generations.len(), 1);
        let event = &api_response.generations[0];
        assert_eq!(event.template, "leave-application");
        assert_eq!(event.template_type, "Leave Application");
        assert_eq!(event.user_agent.as_deref(), Some("test-agent/1.0"));
        assert_eq!(event.fields.get("rank").map(String::as_str), Some("3SG"));
    }

    #[tokio::test]
    async fn test_failed_generation_is_not_recorded() {
        let app: Router = build_router(create_test_app_state());

        let mut req: GenerateFormRequest = create_leave_request();
        req.values.insert(String::from("name"), String::new());
        app.clone()
            .oneshot(post_json("/generate", &req))
            .await
            .unwrap();

        let response = app.oneshot(get_request("/generations")).await.unwrap();
        let api_response: ListGenerationsResponse = body_json(response).await;
        assert!(api_response.generations.is_empty());
    }

    #[tokio::test]
    async fn test_build_guard_duty_roster() {
        let app: Router = build_router(create_test_app_state());

        let req = serde_json::json!({
            "month": 2,
            "year": 2026,
            "entries": [
                { "date": "2026-02-07", "ic_types": ["2IC"], "num_guards": 2 }
            ]
        });

        let response = app
            .oneshot(post_json("/guard_duty/list", &req))
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::OK);

        let api_response: GuardDutyListResponse = body_json(response).await;
        assert!(api_response.text.starts_with("GUARD DUTY FEBRUARY 2026"));
    }

    #[tokio::test]
    async fn test_build_guard_duty_bad_month_returns_400() {
        let app: Router = build_router(create_test_app_state());

        let req = serde_json::json!({
            "month": 13,
            "year": 2026,
            "entries": [
                { "date": "2026-02-07", "ic_types": [], "num_guards": 1 }
            ]
        });

        let response = app
            .oneshot(post_json("/guard_duty/list", &req))
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_prune_passes_text_through() {
        let app: Router = build_router(create_test_app_state());

        let req = serde_json::json!({ "text": "no roster here, just notes" });

        let response = app
            .oneshot(post_json("/guard_duty/prune", &req))
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::OK);

        let api_response: PruneGuardDutyResponse = body_json(response).await;
        assert_eq!(api_response.text, "no roster here, just notes");
    }

    #[tokio::test]
    async fn test_routine_order_returns_bulletin() {
        let app: Router = build_router(create_test_app_state());

        let req = serde_json::json!({
            "safety_message": "",
            "event_update": "Cohesion this Friday",
            "regimental": [],
            "guard_duty_text": ""
        });

        let response = app
            .oneshot(post_json("/routine_order", &req))
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::OK);

        let api_response: RoutineOrderResponse = body_json(response).await;
        assert!(api_response.text.contains("ROUTINE ORDER FOR"));
        assert!(api_response.text.contains("Cohesion this Friday"));
        assert!(api_response.text.contains("NO TRAINING INCIDENT"));
    }

    #[tokio::test]
    async fn test_explicit_record_endpoint_assigns_event_id() {
        let app: Router = build_router(create_test_app_state());

        let req = serde_json::json!({
            "template": "guard-duty",
            "fields": { "month": "2", "year": "2026", "entry_count": "3" }
        });

        let response = app
            .clone()
            .oneshot(post_json("/generations", &req))
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::OK);

        let api_response: RecordGenerationResponse = body_json(response).await;
        assert!(api_response.event_id >= 1);

        let response = app.oneshot(get_request("/generations")).await.unwrap();
        let listed: ListGenerationsResponse = body_json(response).await;
        assert_eq!(listed.generations.len(), 1);
        assert_eq!(listed.generations[0].template_type, "Guard Duty");
    }

    #[tokio::test]
    async fn test_list_generations_empty_initially() {
        let app: Router = build_router(create_test_app_state());

        let response = app
            .oneshot(get_request("/generations?limit=5"))
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::OK);

        let api_response: ListGenerationsResponse = body_json(response).await;
        assert!(api_response.generations.is_empty());
    }
}
