use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use super::AppState;
use crate::error::Error;
use crate::models::WrappedSummary;

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl From<&Error> for ErrorResponse {
    fn from(err: &Error) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

#[derive(Debug, Deserialize)]
pub struct WrappedParams {
    pub token: Option<String>,
}

pub async fn get_wrapped(
    State(state): State<AppState>,
    Path(username): Path<String>,
    Query(params): Query<WrappedParams>,
) -> Result<Json<WrappedSummary>, (StatusCode, Json<ErrorResponse>)> {
    let token = params.token.as_deref().filter(|t| !t.is_empty());

    match state.pipeline.wrapped(&username, token).await {
        Ok(summary) => Ok(Json(summary)),
        Err(e) => {
            tracing::error!("Failed to build summary for {}: {}", username, e);
            let status =
                StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            Err((status, Json(ErrorResponse::from(&e))))
        }
    }
}
