use std::collections::HashMap;
use async_trait::async_trait;
use tokio::sync::RwLock;
use laresa_core::models::Reservation;
use laresa_core::repository::{BoxError, ReservationStore};

/// Process-local reservation store.
///
/// Writes are serialized behind the lock; a `get` after a completed `save`
/// always sees the saved value.
#[derive(Default)]
pub struct InMemoryReservationStore {
    reservations: RwLock<HashMap<String, Reservation>>,
}

impl InMemoryReservationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with pre-existing reservations, keyed by id
    pub fn with_reservations(reservations: HashMap<String, Reservation>) -> Self {
        Self {
            reservations: RwLock::new(reservations),
        }
    }

    pub async fn len(&self) -> usize {
        self.reservations.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.reservations.read().await.is_empty()
    }
}

#[async_trait]
impl ReservationStore for InMemoryReservationStore {
    async fn save_reservation(
        &self,
        reservation: &Reservation,
    ) -> Result<(), BoxError> {
        self.reservations
            .write()
            .await
            .insert(reservation.id.clone(), reservation.clone());
        Ok(())
    }

    async fn get_reservation(
        &self,
        id: &str,
    ) -> Result<Option<Reservation>, BoxError> {
        Ok(self.reservations.read().await.get(id).cloned())
    }
}
