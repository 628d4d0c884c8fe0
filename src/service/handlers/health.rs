//! Health check and root status endpoints

use axum::{extract::State, response::Json};

use crate::model::HealthCheckResult;
use crate::service::{
    server::AppState,
    types::{DetailedHealthResponse, HealthResponse, ModelStatus, RootResponse},
};

/// Status reported by the service root
pub const ROOT_STATUS: &str = "AlphaGenome Backend Running";

/// Service root: static status and version
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        status: ROOT_STATUS.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Liveness check
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}

/// Health check that also asks the prediction model
pub async fn detailed_health_check(State(state): State<AppState>) -> Json<DetailedHealthResponse> {
    let result = state.model.health_check().await;

    let reason = match &result {
        HealthCheckResult::Healthy => None,
        HealthCheckResult::Degraded { reason } | HealthCheckResult::Unhealthy { reason } => {
            Some(reason.clone())
        }
    };

    Json(DetailedHealthResponse {
        status: result.status_string().to_string(),
        model: ModelStatus {
            name: state.model.name().to_string(),
            available: result.is_available(),
            status: result.status_string().to_string(),
            reason,
            external_model_configured: state.external_model_configured,
        },
    })
}
