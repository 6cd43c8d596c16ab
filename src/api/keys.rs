//! Key lifecycle endpoints

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use tracing::{debug, error};

use crate::api::state::AppState;
use crate::api::types::{ApiError, GetKeyResponse, VerificationResponse, VerifyQuery};
use crate::domain::access_key::validate_candidate;
use crate::domain::{KeyRecord, VerificationOutcome};

/// POST /api/generate-key
/// Generates a new key, replacing the current one
pub async fn generate_key(State(state): State<AppState>) -> Result<Json<KeyRecord>, ApiError> {
    let record = state.access_key_service.generate().await.map_err(|e| {
        error!("Error in /api/generate-key endpoint: {}", e);
        ApiError::internal("Failed to generate key")
    })?;

    Ok(Json(record))
}

/// GET /api/current-key
/// Returns the stored key as-is, expired or not
pub async fn current_key(State(state): State<AppState>) -> Result<Json<KeyRecord>, ApiError> {
    state
        .access_key_service
        .get_stored()
        .await
        .map(Json)
        .ok_or_else(|| ApiError::not_found("No key found"))
}

/// GET /get-key
/// Returns the current key, rotating it first if it is missing or expired
pub async fn get_key(State(state): State<AppState>) -> Result<Json<GetKeyResponse>, ApiError> {
    let service = &state.access_key_service;

    let record = service.get_current().await.map_err(|e| {
        error!("Error in /get-key endpoint: {}", e);
        ApiError::internal("Failed to retrieve key")
    })?;

    let status = service.status_of(&record);

    Ok(Json(GetKeyResponse::new(&record, status)))
}

/// GET /verify?key=...
/// Checks a presented key. Expired keys are redirected to the configured URL.
pub async fn verify_key(
    State(state): State<AppState>,
    query: Result<Query<VerifyQuery>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(query) = query.map_err(|e| {
        debug!("Rejected verification query: {}", e);
        ApiError::invalid_key()
    })?;

    let candidate = validate_candidate(query.key.as_deref())?;
    let outcome = state.access_key_service.verify(candidate).await;
    let body = VerificationResponse::new(outcome, &state.verify.redirect_url);

    if outcome == VerificationOutcome::Expired && state.verify.redirect_on_expired {
        let location = state.verify.redirect_url.clone();
        return Ok((StatusCode::FOUND, [(header::LOCATION, location)], Json(body)).into_response());
    }

    Ok(Json(body).into_response())
}
