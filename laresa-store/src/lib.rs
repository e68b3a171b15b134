pub mod app_config;
pub mod events;
pub mod ids;
pub mod ledger;
pub mod memory_repo;
pub mod notify;
pub mod reservation_repo;

pub use events::KafkaNotificationSink;
pub use ids::UuidV7Generator;
pub use ledger::ReservationLedger;
pub use memory_repo::InMemoryReservationStore;
pub use notify::{InMemoryNotificationSink, TracingNotificationSink};
pub use reservation_repo::PostgresReservationStore;
