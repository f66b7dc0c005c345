// Axum API Server Module
//
// REST surface over the health evaluator and the document-store wrappers.
// Handlers deserialize, call into the library, and map errors to statuses;
// domain logic stays in the library modules.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, patch, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::health::{self, HealthReport};
use crate::records::{PlantRecord, ThresholdRecord, UserRecord};
use crate::store::client::RealtimeDb;
use crate::store::thresholds::ThresholdStore;
use crate::store::users::{ProfileUpdateError, UserStore};
use crate::store::StoreError;

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub thresholds: Arc<ThresholdStore>,
    pub users: Arc<UserStore>,
}

impl AppState {
    pub fn new(database_url: &str, auth: Option<String>) -> Self {
        let mut db = RealtimeDb::new(database_url);
        if let Some(token) = auth {
            db = db.with_auth(token);
        }
        let db = Arc::new(db);

        Self {
            thresholds: Arc::new(ThresholdStore::new(db.clone())),
            users: Arc::new(UserStore::new(db)),
        }
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Liveness
        .route("/health", get(health_check))
        // Threshold lookup
        .route("/api/plant-types/:type/thresholds", get(get_thresholds))
        // Plant health evaluation
        .route("/api/plants/health", post(evaluate_plant))
        // User profile
        .route("/api/users/:id", get(get_user))
        .route("/api/users/:id/theme", patch(update_theme))
        .route("/api/users/:id/profile-picture", patch(update_profile_picture))
        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

async fn get_thresholds(
    State(state): State<AppState>,
    Path(plant_type): Path<String>,
) -> Result<Json<ThresholdRecord>, AppError> {
    match state.thresholds.ideal_conditions(&plant_type).await? {
        Some(record) => Ok(Json(record)),
        None => Err(AppError::NotFound(format!(
            "No threshold data for plant type {plant_type}"
        ))),
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluateRequest {
    pub plant: PlantRecord,

    /// Inline thresholds; when absent they are fetched by the plant's type
    #[serde(default)]
    pub ideal_conditions: Option<ThresholdRecord>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluateResponse {
    pub name: String,
    pub plant_type: String,

    /// False when no threshold record exists for the plant's type
    pub thresholds_found: bool,

    #[serde(flatten)]
    pub report: HealthReport,
}

async fn evaluate_plant(
    State(state): State<AppState>,
    Json(request): Json<EvaluateRequest>,
) -> Result<Json<EvaluateResponse>, AppError> {
    let ideal = match request.ideal_conditions {
        Some(inline) => Some(inline),
        None => {
            state
                .thresholds
                .ideal_conditions(&request.plant.plant_type)
                .await?
        }
    };

    // An unknown plant type is a defined state (unhealthy, no breakdown),
    // not an error status
    let report = health::evaluate(Some(&request.plant), ideal.as_ref());

    Ok(Json(EvaluateResponse {
        name: request.plant.name,
        plant_type: request.plant.plant_type,
        thresholds_found: ideal.is_some(),
        report,
    }))
}

async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<UserRecord>, AppError> {
    match state.users.fetch(id).await? {
        Some(user) => Ok(Json(user)),
        None => Err(AppError::NotFound(format!("User {id} not found"))),
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeUpdate {
    pub is_dark: bool,
}

async fn update_theme(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(body): Json<ThemeUpdate>,
) -> Result<StatusCode, AppError> {
    state.users.update_theme(id, body.is_dark).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePictureUpdate {
    pub profile_picture: String,
}

async fn update_profile_picture(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(body): Json<ProfilePictureUpdate>,
) -> Result<StatusCode, AppError> {
    state
        .users
        .update_profile_picture(id, &body.profile_picture)
        .await
        .map_err(|e| match e {
            ProfileUpdateError::Invalid(err) => AppError::Unprocessable(err.to_string()),
            ProfileUpdateError::Store(err) => AppError::from(err),
        })?;
    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
pub enum AppError {
    Store(String),
    NotFound(String),
    Unprocessable(String),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::Store(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::Store(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Unprocessable(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
