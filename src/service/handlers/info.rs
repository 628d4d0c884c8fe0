//! Service information endpoints

use axum::{extract::State, response::Json};
use serde_json::{json, Value};

use crate::service::server::AppState;

/// Provide basic service information
pub async fn service_info(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "service": "genoscore-web",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "SNP pathogenicity scoring web service",
        "model": {
            "name": state.model.name(),
            "external_model_configured": state.external_model_configured,
        },
        "limits": {
            "max_request_size": state.config.server.max_request_size,
            "max_batch_size": state.config.server.max_batch_size,
        },
        "endpoints": {
            "analyze": "POST /api/analyze_snps",
            "health": {
                "service": "GET /health",
                "detailed": "GET /health/detailed"
            },
            "info": "GET /api/info"
        }
    }))
}
