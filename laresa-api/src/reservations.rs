use axum::{
    body::Bytes,
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use laresa_core::validation::is_complete;
use laresa_core::{BookingParams, Customer, Reservation};
use tracing::info;
use crate::error::ApiError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/customers/{email}/reservations", post(create_reservation))
        .route("/customers/{email}/reservations/{id}", get(get_reservation))
}

async fn create_reservation(
    State(state): State<AppState>,
    Path(email): Path<String>,
    body: Bytes,
) -> Result<Json<Reservation>, ApiError> {
    // Decoded by hand so any malformed body is a 400, whatever the content type
    let params: BookingParams = serde_json::from_slice(&body)
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    if !is_complete(&params) {
        return Err(ApiError::Validation("missing booking parameters".to_string()));
    }

    let reservation = state.booker.book_flight(Customer::new(email), params).await?;
    info!("Reservation booked: {} for {}", reservation.id, reservation.customer.email);

    Ok(Json(reservation))
}

// The email segment is not matched against the reservation's customer.
async fn get_reservation(
    State(state): State<AppState>,
    Path((_email, id)): Path<(String, String)>,
) -> Result<Json<Reservation>, ApiError> {
    let reservation = state.booker.get_reservation(&id).await?;
    Ok(Json(reservation))
}
