use reservations_hex::application::reservation_service::ReservationService;
use reservations_hex::config::Config;
use reservations_hex::inbound::http::{HttpServer, HttpServerConfig};
use reservations_providers::ProviderRegistry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env for SERVER_PORT / RESERVATIONS_* when present.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "debug".to_string()))
        .init();

    let config = Config::from_env()?;
    tracing::info!(
        sandbox = config.provider_defaults.is_sandbox(),
        "reservation providers configured"
    );
    let registry = ProviderRegistry::new();
    let service = ReservationService::new(registry, config.provider_defaults.clone());

    let server_cfg = HttpServerConfig {
        port: config.server_port.clone(),
    };

    let http = HttpServer::new(service, server_cfg).await?;
    http.run().await
}
