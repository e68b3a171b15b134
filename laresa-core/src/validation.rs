use crate::models::{BookingParams, Guest};

/// Maximum number of guests a customer may bring on one booking
pub const MAX_GUESTS: usize = 3;

pub fn too_many_guests(guests: &[Guest]) -> bool {
    guests.len() > MAX_GUESTS
}

/// Structural check run at the request boundary, before the workflow.
pub fn is_complete(params: &BookingParams) -> bool {
    params.is_complete()
}
