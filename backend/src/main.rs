//! Booking server entry-point: loads settings, prepares the store and serves
//! the REST API.

mod server;

use std::net::{IpAddr, SocketAddr};

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use booking::inbound::http::health::HealthState;
use booking::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use booking::settings::AppSettings;
use server::{ServerConfig, create_server, drain_on, shutdown_signal};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load().map_err(|e| {
        error!(error = %e, "failed to load settings");
        std::io::Error::other(format!("failed to load settings: {e}"))
    })?;

    let host: IpAddr = settings.host().parse().map_err(|e| {
        std::io::Error::other(format!("invalid host {}: {e}", settings.host()))
    })?;
    let mut config = ServerConfig::new(SocketAddr::new(host, settings.port()));

    if let Some(database_url) = settings.database_url() {
        if settings.run_migrations() {
            run_pending_migrations(&database_url)
                .await
                .map_err(|e| std::io::Error::other(format!("migrations failed: {e}")))?;
            info!("database migrations applied");
        }
        let pool_config = PoolConfig::new(database_url)
            .with_max_size(settings.pool_max_size())
            .with_connection_timeout(settings.pool_connection_timeout())
            .with_statement_timeout(settings.statement_timeout());
        let pool = DbPool::new(pool_config)
            .await
            .map_err(|e| std::io::Error::other(format!("database pool setup failed: {e}")))?;
        config = config.with_db_pool(pool);
    }

    let bind_addr = config.bind_addr();
    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    actix_web::rt::spawn(drain_on(shutdown_signal(), health_state, server.handle()));
    info!(%bind_addr, "booking server listening");
    server.await
}
