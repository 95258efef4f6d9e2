//! Builders for HTTP state over the configured store.

use std::sync::Arc;

use actix_web::web;
use tracing::{info, warn};

use booking::inbound::http::state::HttpState;
use booking::outbound::memory::InMemoryBookingStore;
use booking::outbound::persistence::{DieselReservationRepository, DieselTableRepository};

use super::ServerConfig;

/// Build handler state from the configured store.
///
/// Uses the Diesel repositories when a pool is configured, otherwise a
/// process-local in-memory store shared by both repositories.
pub fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let state = match &config.db_pool {
        Some(pool) => {
            info!("using PostgreSQL booking store");
            HttpState::from_repositories(
                Arc::new(DieselTableRepository::new(pool.clone())),
                Arc::new(DieselReservationRepository::new(pool.clone())),
            )
        }
        None => {
            warn!("no database configured; bookings are kept in memory and lost on restart");
            let store = Arc::new(InMemoryBookingStore::new());
            HttpState::from_repositories(Arc::clone(&store), store)
        }
    };
    web::Data::new(state)
}
