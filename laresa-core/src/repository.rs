use async_trait::async_trait;
use crate::models::Reservation;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Repository trait for reservation persistence
#[async_trait]
pub trait ReservationStore: Send + Sync {
    async fn save_reservation(
        &self,
        reservation: &Reservation,
    ) -> Result<(), BoxError>;

    /// `Ok(None)` when no reservation has this id
    async fn get_reservation(
        &self,
        id: &str,
    ) -> Result<Option<Reservation>, BoxError>;
}

/// Announces finalized reservations to downstream consumers
#[async_trait]
pub trait NotificationSink: Send + Sync {
    async fn publish_reservation(
        &self,
        reservation: &Reservation,
    ) -> Result<(), BoxError>;
}

/// Source of reservation ids. Every call must return a fresh value.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

impl<F> IdGenerator for F
where
    F: Fn() -> String + Send + Sync,
{
    fn next_id(&self) -> String {
        self()
    }
}
