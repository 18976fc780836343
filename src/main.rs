//! Room Relay - Binary Entry Point
//!
//! Reads configuration from the environment, starts the idle-room sweep and
//! serves the relay until Ctrl+C.

use std::sync::Arc;

use room_relay::api::http::create_router;
use room_relay::api::websocket::AppState;
use room_relay::relay::sweeper;
use room_relay::{Config, Relay, RelayResult, RoomRegistry};

#[tokio::main]
async fn main() -> RelayResult<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env()?;
    let relay = Arc::new(Relay::new(RoomRegistry::new()));

    match config.room_idle_ttl {
        Some(ttl) => {
            tokio::spawn(sweeper::run(Arc::clone(&relay), ttl, config.sweep_interval));
        }
        None => log::info!("Idle-room eviction disabled"),
    }

    let state = Arc::new(AppState::new(relay, config.clone()));
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    log::info!("Server running on port {}", config.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for Ctrl+C: {}", err);
        std::future::pending::<()>().await;
    }
}
