use std::sync::Arc;
use anyhow::Context;
use laresa_core::{Booker, BookingService, NotificationSink, ReservationStore};
use laresa_store::app_config::{Config, NotifierBackend, StoreBackend};
use laresa_store::{
    InMemoryReservationStore, KafkaNotificationSink, PostgresReservationStore,
    TracingNotificationSink, UuidV7Generator,
};

#[derive(Clone)]
pub struct AppState {
    pub booker: Arc<dyn BookingService>,
}

impl AppState {
    pub fn new(booker: Arc<dyn BookingService>) -> Self {
        Self { booker }
    }

    /// Wire the booking workflow to the collaborators selected in `config`
    pub async fn from_config(config: &Config) -> anyhow::Result<Self> {
        let store: Arc<dyn ReservationStore> = match config.store.backend {
            StoreBackend::Memory => {
                tracing::info!("Using in-memory reservation store");
                Arc::new(InMemoryReservationStore::new())
            }
            StoreBackend::Postgres => {
                let url = config
                    .database_url()
                    .context("store.backend = \"postgres\" requires a [database] section")?;
                let store = PostgresReservationStore::connect(url)
                    .await
                    .map_err(|e| anyhow::anyhow!("Failed to open Postgres reservation store: {}", e))?;
                tracing::info!("Using Postgres reservation store");
                Arc::new(store)
            }
        };

        let notifier: Arc<dyn NotificationSink> = match config.notifier.backend {
            NotifierBackend::Log => Arc::new(TracingNotificationSink),
            NotifierBackend::Kafka => {
                let kafka = config
                    .kafka
                    .as_ref()
                    .context("notifier.backend = \"kafka\" requires a [kafka] section")?;
                let sink = KafkaNotificationSink::new(&kafka.brokers, kafka.topic.clone())
                    .context("Failed to create Kafka producer")?;
                tracing::info!("Publishing reservations to Kafka topic {}", sink.topic());
                Arc::new(sink)
            }
        };

        let booker = Booker::new(store, notifier, Arc::new(UuidV7Generator));
        Ok(Self::new(Arc::new(booker)))
    }
}
