//! GeoQuest Game Server
//!
//! Location-triggered encounters and turn-based combat over HTTP JSON.

mod config;
mod entities;
mod error;
mod network;
mod persistence;
mod world;

use std::sync::Arc;
use log::{info, error};

use crate::config::{GameData, ServerConfig};
use crate::network::AppState;
use crate::persistence::{SessionStore, SWEEP_INTERVAL};

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("Starting GeoQuest Server...");

    let config = match ServerConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            error!("Invalid server configuration: {}", e);
            return;
        }
    };

    // An invalid overrides file aborts startup rather than falling back
    let data = match GameData::load(config.game_config.as_deref()) {
        Ok(d) => {
            info!(
                "Loaded {} characters and {} enemies",
                d.characters.len(),
                d.enemies.len()
            );
            d
        }
        Err(e) => {
            error!("Failed to load game data: {}", e);
            return;
        }
    };

    let store = Arc::new(SessionStore::new(config.session_ttl));
    persistence::spawn_sweeper(Arc::clone(&store), SWEEP_INTERVAL);

    let app = network::router(AppState::new(store, Arc::new(data)));

    let addr = config.socket_addr();
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            error!("Failed to bind {}: {}", addr, e);
            return;
        }
    };

    info!("Listening on {}", addr);
    info!("Session idle timeout: {:?}", config.session_ttl);

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
    }
}
