pub mod models;
pub mod pricing;
pub mod validation;
pub mod repository;
pub mod booking;

pub use models::{BookingParams, City, Customer, Guest, Reservation};
pub use booking::{Booker, BookingService};
pub use repository::{BoxError, IdGenerator, NotificationSink, ReservationStore};

#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error("can't have more than three guests")]
    TooManyGuests,
    #[error("reservation not found")]
    ReservationNotFound,
    #[error(transparent)]
    Store(BoxError),
    #[error(transparent)]
    Notification(BoxError),
}

pub type CoreResult<T> = Result<T, BookingError>;
