//! Web server setup using Axum framework

use axum::{
    extract::DefaultBodyLimit,
    http::{header, Method, StatusCode},
    response::Json,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::model::{HeuristicModel, PredictionModel};
use crate::service::{
    config::ServiceConfig,
    handlers,
    types::{ErrorResponse, ServiceError},
};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Model used to score variants
    pub model: Arc<dyn PredictionModel>,
    /// Service configuration
    pub config: Arc<ServiceConfig>,
    /// Whether an external model API key was found at startup
    pub external_model_configured: bool,
}

impl AppState {
    pub fn new(config: ServiceConfig, model: Arc<dyn PredictionModel>) -> Self {
        let external_model_configured = config.model.api_key_present();
        Self {
            model,
            config: Arc::new(config),
            external_model_configured,
        }
    }
}

/// Create the Axum application with the heuristic model
pub fn create_app(config: ServiceConfig) -> Result<(Router, AppState), ServiceError> {
    let model: Arc<dyn PredictionModel> = Arc::new(HeuristicModel::new());
    let state = AppState::new(config, model);

    if state.external_model_configured {
        tracing::info!(
            "External model API key found in {}; using {} model",
            state.config.model.api_key_env,
            state.model.name()
        );
    } else {
        tracing::debug!(
            "{} not set; using {} model",
            state.config.model.api_key_env,
            state.model.name()
        );
    }

    let app = router(state.clone())?;
    Ok((app, state))
}

/// Build the router with all routes and middleware for the given state
pub fn router(state: AppState) -> Result<Router, ServiceError> {
    let server = state.config.server.clone();

    // Parse max request size
    let max_size = parse_size(&server.max_request_size)
        .map_err(|e| ServiceError::ConfigError(format!("Invalid max_request_size: {}", e)))?;

    let mut app = Router::new()
        .route("/", get(handlers::health::root))
        .route("/health", get(handlers::health::health_check))
        .route(
            "/health/detailed",
            get(handlers::health::detailed_health_check),
        )
        .route(
            "/api/analyze_snps",
            post(handlers::analyze::analyze_snps).options(handlers::analyze::analyze_preflight),
        )
        .route("/api/info", get(handlers::info::service_info))
        .fallback(handle_404)
        .with_state(state)
        .layer(DefaultBodyLimit::max(max_size));

    if server.enable_cors {
        app = app.layer(cors_layer());
    }
    if server.enable_tracing {
        app = app.layer(TraceLayer::new_for_http());
    }

    Ok(app)
}

/// Allow any origin with the methods and headers browser clients send
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::PUT,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

/// Handle 404 errors
async fn handle_404() -> (StatusCode, Json<ErrorResponse>) {
    ServiceError::NotFound.into_http()
}

/// Parse size strings like "10MB", "1GB", etc.
pub(crate) fn parse_size(size_str: &str) -> Result<usize, String> {
    let size_str = size_str.trim().to_uppercase();

    // Check longer suffixes first to avoid partial matches
    let (num_str, multiplier) = if let Some(num_str) = size_str.strip_suffix("GB") {
        (num_str, 1024 * 1024 * 1024)
    } else if let Some(num_str) = size_str.strip_suffix("MB") {
        (num_str, 1024 * 1024)
    } else if let Some(num_str) = size_str.strip_suffix("KB") {
        (num_str, 1024)
    } else if let Some(num_str) = size_str.strip_suffix('B') {
        (num_str, 1)
    } else {
        (size_str.as_str(), 1)
    };

    num_str
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(|num| num.checked_mul(multiplier))
        .ok_or_else(|| format!("Invalid size format: {}", size_str))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_size() {
        assert_eq!(parse_size("100").unwrap(), 100);
        assert_eq!(parse_size("100B").unwrap(), 100);
        assert_eq!(parse_size("1KB").unwrap(), 1024);
        assert_eq!(parse_size("10MB").unwrap(), 10 * 1024 * 1024);
        assert_eq!(parse_size("1GB").unwrap(), 1024 * 1024 * 1024);

        // Case insensitive
        assert_eq!(parse_size("10mb").unwrap(), 10 * 1024 * 1024);

        // Invalid formats
        assert!(parse_size("invalid").is_err());
        assert!(parse_size("10XB").is_err());
        assert!(parse_size("").is_err());
    }

    #[test]
    fn test_router_rejects_bad_body_limit() {
        let mut config = ServiceConfig::default();
        config.server.max_request_size = "huge".to_string();
        let state = AppState::new(config, Arc::new(HeuristicModel::new()));
        assert!(matches!(router(state), Err(ServiceError::ConfigError(_))));
    }

    #[test]
    fn test_create_app_uses_heuristic_model() {
        let (_, state) = create_app(ServiceConfig::default()).unwrap();
        assert_eq!(state.model.name(), "heuristic");
    }
}
