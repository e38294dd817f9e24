//! `POST /api/generate`: theme in, flat property list out.

#[cfg(test)]
#[path = "generate_test.rs"]
mod generate_test;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::services::generate::{GenerateError, GeneratedProperty, generate_board};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub theme: String,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub properties: Vec<GeneratedProperty>,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    message: String,
}

/// Generate a themed property list.
///
/// 422 on an empty theme, 503 when no LLM is configured, 502 when the
/// provider call fails or returns no usable board.
pub async fn generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Response {
    let theme = request.theme.trim();
    if theme.is_empty() {
        return error_response(StatusCode::UNPROCESSABLE_ENTITY, "theme must not be empty");
    }

    let Some(llm) = state.llm.clone() else {
        return error_response(StatusCode::SERVICE_UNAVAILABLE, "generation is not configured");
    };

    match generate_board(llm.as_ref(), theme).await {
        Ok(properties) => (StatusCode::OK, Json(GenerateResponse { properties })).into_response(),
        Err(err) => {
            tracing::warn!(error = %err, "generate request failed");
            error_response(generate_error_to_status(&err), &err.to_string())
        }
    }
}

pub(crate) fn generate_error_to_status(err: &GenerateError) -> StatusCode {
    match err {
        GenerateError::Llm(_) | GenerateError::MissingBoard | GenerateError::MalformedBoard(_) => {
            StatusCode::BAD_GATEWAY
        }
    }
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(ErrorBody { message: message.to_owned() })).into_response()
}
