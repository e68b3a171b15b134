use std::sync::Arc;
use async_trait::async_trait;
use crate::models::{BookingParams, Customer, Reservation};
use crate::repository::{IdGenerator, NotificationSink, ReservationStore};
use crate::{pricing, validation, BookingError, CoreResult};

/// Operations exposed to the request boundary
#[async_trait]
pub trait BookingService: Send + Sync {
    async fn book_flight(&self, customer: Customer, params: BookingParams) -> CoreResult<Reservation>;

    async fn get_reservation(&self, id: &str) -> CoreResult<Reservation>;
}

/// Books flights: validates, prices, persists and announces reservations.
///
/// Holds no state of its own besides its collaborators, so clones are cheap
/// and concurrent calls are independent.
#[derive(Clone)]
pub struct Booker {
    store: Arc<dyn ReservationStore>,
    notifier: Arc<dyn NotificationSink>,
    ids: Arc<dyn IdGenerator>,
}

impl Booker {
    pub fn new(
        store: Arc<dyn ReservationStore>,
        notifier: Arc<dyn NotificationSink>,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        Self { store, notifier, ids }
    }

    /// Book a flight for `customer`.
    ///
    /// A failed publish is reported to the caller but the reservation is
    /// already saved and stays saved.
    pub async fn book_flight(&self, customer: Customer, params: BookingParams) -> CoreResult<Reservation> {
        if validation::too_many_guests(&params.guests) {
            return Err(BookingError::TooManyGuests);
        }

        let price = pricing::price(&params);
        let reservation = Reservation::from_booking(self.ids.next_id(), customer, &params, price);

        self.store
            .save_reservation(&reservation)
            .await
            .map_err(BookingError::Store)?;

        self.notifier
            .publish_reservation(&reservation)
            .await
            .map_err(BookingError::Notification)?;

        Ok(reservation)
    }

    pub async fn get_reservation(&self, id: &str) -> CoreResult<Reservation> {
        self.store
            .get_reservation(id)
            .await
            .map_err(BookingError::Store)?
            .ok_or(BookingError::ReservationNotFound)
    }
}

#[async_trait]
impl BookingService for Booker {
    async fn book_flight(&self, customer: Customer, params: BookingParams) -> CoreResult<Reservation> {
        Booker::book_flight(self, customer, params).await
    }

    async fn get_reservation(&self, id: &str) -> CoreResult<Reservation> {
        Booker::get_reservation(self, id).await
    }
}
