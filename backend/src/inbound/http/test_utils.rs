//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use crate::inbound::http::error::{json_config, path_config};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{reservations, tables};
use crate::middleware::Trace;
use crate::outbound::memory::InMemoryBookingStore;

/// HTTP state backed by a fresh in-memory store.
pub fn memory_state() -> HttpState {
    let store = Arc::new(InMemoryBookingStore::new());
    HttpState::from_repositories(Arc::clone(&store), store)
}

/// Build an app exposing the table and reservation routes over `state`.
///
/// Mirrors the production extractor configuration so malformed payloads are
/// reported the same way.
pub fn booking_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .wrap(Trace)
        .app_data(json_config())
        .app_data(path_config())
        .app_data(web::Data::new(state))
        .service(tables::list_tables)
        .service(tables::create_table)
        .service(tables::delete_table)
        .service(reservations::list_reservations)
        .service(reservations::create_reservation)
        .service(reservations::delete_reservation)
}
