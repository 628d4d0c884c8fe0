//! SNP analysis endpoint

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::StatusCode,
    response::Json,
};
use std::time::Instant;

use crate::analysis::{analyze, AnalyzeRequest, AnalyzeResponse};
use crate::service::{
    server::AppState,
    types::{ErrorResponse, ServiceError},
    validation::validate_batch_size,
};

/// Score a batch of SNP records
///
/// The body is decoded by hand rather than through the `Json` extractor so that
/// malformed input is reported as `{"error": ...}` with a 500, whatever the
/// content type. A body over the size limit is reported the same way.
pub async fn analyze_snps(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<AnalyzeResponse>, (StatusCode, Json<ErrorResponse>)> {
    let start = Instant::now();

    let body = body.map_err(|rejection| {
        tracing::warn!("Rejected analyze request body: {}", rejection.body_text());
        ServiceError::BodyRejected(rejection.body_text()).into_http()
    })?;

    let request = AnalyzeRequest::from_slice(&body).map_err(|e| {
        tracing::warn!("Rejected analyze request: {}", e);
        ServiceError::from(e).into_http()
    })?;

    validate_batch_size(request.snps.len(), state.config.server.max_batch_size)
        .map_err(|e| ServiceError::from(e).into_http())?;

    let total = request.snps.len();
    let response = analyze(state.model.as_ref(), request).await;

    tracing::debug!(
        "Analyzed {} SNPs ({} failed) with {} model in {} ms",
        total,
        response.failed_count(),
        state.model.name(),
        start.elapsed().as_millis()
    );

    Ok(Json(response))
}

/// Answer a bare `OPTIONS` request with an empty 200
pub async fn analyze_preflight() -> StatusCode {
    StatusCode::OK
}
