use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use laresa_core::BookingError;
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Malformed or incomplete request input
    #[error("{0}")]
    Validation(String),
    #[error(transparent)]
    Booking(#[from] BookingError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Booking(err) => {
                tracing::error!("Booking operation failed: {}", err);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(json!({
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}
