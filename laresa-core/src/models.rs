use serde::{Deserialize, Deserializer, Serialize};

/// Treat an explicit JSON `null` like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

impl City {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Customer placing the booking, identified by email
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(default)]
    pub email: String,
}

impl Customer {
    pub fn new(email: impl Into<String>) -> Self {
        Self { email: email.into() }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

impl Guest {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Booking request as received from a customer.
///
/// Missing or `null` JSON fields fall back to their zero value; use
/// [`BookingParams::is_complete`] to reject requests lacking a date or cities.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookingParams {
    /// Nanoseconds since the Unix epoch (UTC)
    #[serde(deserialize_with = "null_as_default")]
    pub departure_date: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub departure_city: City,
    #[serde(deserialize_with = "null_as_default")]
    pub destination_city: City,
    #[serde(deserialize_with = "null_as_default")]
    pub distance: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub guests: Vec<Guest>,
}

impl BookingParams {
    /// Departure date and both cities must be set. Distance and guests are optional.
    pub fn is_complete(&self) -> bool {
        !(self.departure_date == 0
            || self.departure_city.name.is_empty()
            || self.destination_city.name.is_empty())
    }
}

/// A priced, persisted flight reservation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: String,
    pub customer: Customer,
    /// Nanoseconds since the Unix epoch (UTC)
    pub departure_date: i64,
    pub departure_city: City,
    pub destination_city: City,
    pub distance: f64,
    pub price: f64,
}

impl Reservation {
    pub fn from_booking(id: String, customer: Customer, params: &BookingParams, price: f64) -> Self {
        Self {
            id,
            customer,
            departure_date: params.departure_date,
            departure_city: params.departure_city.clone(),
            destination_city: params.destination_city.clone(),
            distance: params.distance,
            price,
        }
    }
}
