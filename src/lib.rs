pub mod config;
pub mod handlers;
pub mod middleware;
pub mod state;
pub mod telemetry;
pub mod types;
pub mod utils;

use axum::{
    routing::{get, post},
    Router,
};
use std::time::Duration;
use thiserror::Error;
use tracing::info;

pub use config::{ConfigError, ServiceConfig};
pub use handlers::{channel_state_handler, health_handler};
pub use state::{
    ChannelStateService, EcdsaAuthenticator, EthersLedgerReader, InMemoryChannelStore,
    InMemoryLedger, InMemoryPaymentStore,
};
pub use types::{
    Authenticator, Channel, ChannelKey, ChannelState, ChannelStateReply, ChannelStateRequest,
    ChannelStore, LedgerReader, OnChainChannel, Payment, PaymentStore, StateError, StoreError,
};
pub use utils::crypto::{channel_id_message, payment_id, signed_hash};

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub fn create_state_router(service: ChannelStateService, request_timeout: Duration) -> Router {
    let router = Router::new()
        .route("/channel-state", post(channel_state_handler))
        .route("/health", get(health_handler))
        .with_state(service);

    middleware::apply_layers(router, request_timeout)
}

/// Serves the channel state API until the listener fails.
pub async fn serve(config: ServiceConfig, service: ChannelStateService) -> Result<(), ServerError> {
    config.validate()?;
    if let Err(e) = telemetry::init_tracing(&config) {
        eprintln!("tracing subscriber not installed: {}", e);
    }

    let app = create_state_router(service, config.request_timeout());
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    info!(addr = %config.listen_addr, "channel state service listening");

    axum::serve(listener, app).await?;
    Ok(())
}
