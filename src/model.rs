//! Prediction model seam
//!
//! Scoring goes through [`PredictionModel`] so an external genomics model can
//! stand in for the built-in heuristic. [`HeuristicModel`] is the only
//! implementation shipped; it wraps [`crate::score::score_variant`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::score::score_variant;
use crate::variant::{Prediction, Variant};

/// Errors a prediction model can report for a single variant
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("model '{model}' is unavailable: {reason}")]
    Unavailable { model: &'static str, reason: String },

    #[error("model '{model}' cannot score {rs_id}: {reason}")]
    Unsupported {
        model: &'static str,
        rs_id: String,
        reason: String,
    },
}

/// Result of a health check operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthCheckResult {
    /// Model is fully operational
    Healthy,
    /// Model is operational but with limitations or warnings
    Degraded { reason: String },
    /// Model is not operational
    Unhealthy { reason: String },
}

impl HealthCheckResult {
    /// Check if the model is available for use (healthy or degraded)
    pub fn is_available(&self) -> bool {
        matches!(
            self,
            HealthCheckResult::Healthy | HealthCheckResult::Degraded { .. }
        )
    }

    /// Get status string for API responses
    pub fn status_string(&self) -> &'static str {
        match self {
            HealthCheckResult::Healthy => "healthy",
            HealthCheckResult::Degraded { .. } => "degraded",
            HealthCheckResult::Unhealthy { .. } => "unhealthy",
        }
    }
}

/// A source of variant predictions
#[async_trait::async_trait]
pub trait PredictionModel: Send + Sync {
    /// Predict pathogenicity and effect for one variant
    async fn predict(&self, variant: &Variant) -> Result<Prediction, ModelError>;

    /// Check whether the model can serve predictions
    async fn health_check(&self) -> HealthCheckResult;

    /// Short model name for logs and service info
    fn name(&self) -> &'static str;
}

/// Deterministic arithmetic model over chromosome and position
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicModel;

impl HeuristicModel {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl PredictionModel for HeuristicModel {
    async fn predict(&self, variant: &Variant) -> Result<Prediction, ModelError> {
        Ok(score_variant(variant))
    }

    async fn health_check(&self) -> HealthCheckResult {
        HealthCheckResult::Healthy
    }

    fn name(&self) -> &'static str {
        "heuristic"
    }
}
