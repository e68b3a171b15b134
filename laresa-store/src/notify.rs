use std::sync::Mutex;
use async_trait::async_trait;
use tracing::info;
use laresa_core::models::Reservation;
use laresa_core::repository::{BoxError, NotificationSink};

/// Records every published reservation so callers can inspect them directly.
#[derive(Default)]
pub struct InMemoryNotificationSink {
    published: Mutex<Vec<Reservation>>,
    fail: bool,
}

impl InMemoryNotificationSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink whose every publish is rejected, nothing gets recorded
    pub fn failing() -> Self {
        Self { published: Mutex::default(), fail: true }
    }

    /// Snapshot of the reservations published so far, in order
    pub fn published(&self) -> Vec<Reservation> {
        self.published
            .lock()
            .map(|published| published.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }
}

#[async_trait]
impl NotificationSink for InMemoryNotificationSink {
    async fn publish_reservation(
        &self,
        reservation: &Reservation,
    ) -> Result<(), BoxError> {
        if self.fail {
            return Err("notification sink rejected the reservation".into());
        }
        self.published
            .lock()
            .map_err(|e| e.to_string())?
            .push(reservation.clone());
        Ok(())
    }
}

/// Writes reservations to the tracing output. Used when no broker is configured.
pub struct TracingNotificationSink;

#[async_trait]
impl NotificationSink for TracingNotificationSink {
    async fn publish_reservation(
        &self,
        reservation: &Reservation,
    ) -> Result<(), BoxError> {
        info!(
            reservation_id = %reservation.id,
            customer = %reservation.customer.email,
            price = reservation.price,
            "New reservation published"
        );
        Ok(())
    }
}
