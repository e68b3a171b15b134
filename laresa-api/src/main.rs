use std::net::SocketAddr;
use anyhow::Context;
use laresa_api::{app, worker, AppState};
use laresa_store::app_config::Config;
use laresa_store::ReservationLedger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "laresa_api=debug,laresa_store=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().context("Failed to load config")?;
    tracing::info!("Starting Laresa API on {}:{}", config.server.host, config.server.port);

    let app_state = AppState::from_config(&config).await?;

    // Out-of-process consumer in production; run in-process when enabled
    if config.ledger.enabled {
        let kafka = config
            .kafka
            .clone()
            .context("ledger.enabled requires a [kafka] section")?;
        let ledger = ReservationLedger::new(&config.ledger.path);
        tokio::spawn(async move {
            if let Err(e) = worker::start_ledger_worker(kafka.brokers, kafka.group_id, kafka.topic, ledger).await {
                tracing::error!("Ledger worker stopped: {}", e);
            }
        });
    }

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .context("Invalid server address")?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(app_state)).await?;

    Ok(())
}
