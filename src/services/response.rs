use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
	#[error("post not found")]
	PostNotFound,

	#[error("{field} must not be empty")]
	EmptyField { field: &'static str },

	#[error("board store unavailable: {0}")]
	StoreUnavailable(#[from] sqlx::Error),

	#[error("event not encodable: {0}")]
	EventEncode(#[from] serde_json::Error),
}

/// Store and channel failures all collapse into one generic message for
/// the caller; the detail only goes to the log.
impl IntoResponse for ServiceError {
	fn into_response(self) -> Response {
		let (status, message) = match &self {
			ServiceError::PostNotFound => (StatusCode::NOT_FOUND, self.to_string()),
			ServiceError::EmptyField { .. } => (StatusCode::UNPROCESSABLE_ENTITY, self.to_string()),
			ServiceError::StoreUnavailable(_) | ServiceError::EventEncode(_) => {
				tracing::error!("board request failed: {self}");
				(StatusCode::INTERNAL_SERVER_ERROR, "board request failed".to_string())
			}
		};

		(status, Json(json!({ "message": message }))).into_response()
	}
}
