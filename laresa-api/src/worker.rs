use rdkafka::config::ClientConfig;
use rdkafka::consumer::{Consumer, StreamConsumer};
use rdkafka::error::KafkaError;
use rdkafka::message::Message;
use laresa_store::ReservationLedger;
use tracing::{info, error};

/// Consume published reservations and append each one to the ledger file.
///
/// Runs until the task is dropped. Broker and write errors are logged and the
/// message is skipped.
pub async fn start_ledger_worker(
    brokers: String,
    group_id: String,
    topic: String,
    ledger: ReservationLedger,
) -> Result<(), KafkaError> {
    let consumer: StreamConsumer = ClientConfig::new()
        .set("bootstrap.servers", &brokers)
        .set("group.id", &group_id)
        .set("enable.auto.commit", "true")
        .set("auto.offset.reset", "earliest")
        .create()?;

    consumer.subscribe(&[topic.as_str()])?;

    info!("Ledger worker started, appending {} to {}", topic, ledger.path().display());

    loop {
        match consumer.recv().await {
            Err(e) => error!("Kafka error: {}", e),
            Ok(m) => {
                let Some(payload) = m.payload() else {
                    continue;
                };
                if let Err(e) = ledger.append(payload).await {
                    error!("Failed to append reservation to ledger: {}", e);
                }
            }
        }
    }
}
