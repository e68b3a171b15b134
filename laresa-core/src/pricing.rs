use chrono::{DateTime, Datelike, Utc, Weekday};
use crate::models::BookingParams;

/// Fixed coefficient for Monday departures
pub const MONDAY_COEFFICIENT: f64 = 50.7;

/// Subtracted from the distance to get the Tuesday coefficient
pub const TUESDAY_DISTANCE_OFFSET: f64 = 10.0;

/// Coefficient for every day without a dedicated rule
pub const DEFAULT_COEFFICIENT: f64 = 1.0;

/// Discount granted per invited guest
pub const GUEST_DISCOUNT_RATE: f64 = 0.1;

/// Compute the final price of a flight.
///
/// `distance * day coefficient`, then reduced by the guest discount.
/// Total over its input: zero or negative distances multiply through.
pub fn price(params: &BookingParams) -> f64 {
    let base_price = params.distance * day_coefficient(params);
    apply_guest_discount(base_price, params.guests.len())
}

/// Select the coefficient from the UTC weekday of the departure
pub fn day_coefficient(params: &BookingParams) -> f64 {
    match departure_weekday(params.departure_date) {
        Weekday::Mon => MONDAY_COEFFICIENT,
        Weekday::Tue => params.distance - TUESDAY_DISTANCE_OFFSET,
        Weekday::Wed => {
            let letters = params.departure_city.name.chars().count()
                + params.destination_city.name.chars().count();
            letters as f64
        }
        _ => DEFAULT_COEFFICIENT,
    }
}

/// Linear discount of 10% per guest. Not floored: above ten guests the price goes negative.
pub fn apply_guest_discount(base_price: f64, guests: usize) -> f64 {
    base_price * (1.0 - guests as f64 * GUEST_DISCOUNT_RATE)
}

/// Weekday of a nanosecond Unix timestamp, in UTC
pub fn departure_weekday(departure_date: i64) -> Weekday {
    DateTime::<Utc>::from_timestamp_nanos(departure_date).weekday()
}
