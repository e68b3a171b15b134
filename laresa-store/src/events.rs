use async_trait::async_trait;
use rdkafka::config::ClientConfig;
use rdkafka::error::KafkaError;
use rdkafka::producer::{FutureProducer, FutureRecord};
use rdkafka::util::Timeout;
use std::time::Duration;
use tracing::{info, error};
use laresa_core::models::Reservation;
use laresa_core::repository::{BoxError, NotificationSink};

/// Publishes each reservation as JSON on a Kafka topic, keyed by reservation id
#[derive(Clone)]
pub struct KafkaNotificationSink {
    producer: FutureProducer,
    topic: String,
}

impl KafkaNotificationSink {
    pub fn new(brokers: &str, topic: impl Into<String>) -> Result<Self, KafkaError> {
        let producer: FutureProducer = ClientConfig::new()
            .set("bootstrap.servers", brokers)
            .set("message.timeout.ms", "5000")
            .create()?;

        Ok(Self { producer, topic: topic.into() })
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }
}

#[async_trait]
impl NotificationSink for KafkaNotificationSink {
    async fn publish_reservation(
        &self,
        reservation: &Reservation,
    ) -> Result<(), BoxError> {
        let payload = serde_json::to_vec(reservation)?;
        let record = FutureRecord::to(&self.topic)
            .key(reservation.id.as_str())
            .payload(&payload);

        match self.producer.send(record, Timeout::After(Duration::from_secs(0))).await {
            Ok(delivery) => {
                info!(
                    "Published reservation {} to {}: partition {} offset {}",
                    reservation.id, self.topic, delivery.partition, delivery.offset
                );
                Ok(())
            }
            Err((e, _msg)) => {
                error!("Failed to publish reservation {} to {}: {}", reservation.id, self.topic, e);
                Err(e.into())
            }
        }
    }
}
