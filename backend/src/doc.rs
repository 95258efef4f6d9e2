//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! document for the REST API. It registers:
//!
//! - **Paths**: table, reservation and health endpoints from the inbound layer
//! - **Schemas**: request/response DTOs plus domain error wrappers
//!   ([`ErrorSchema`], [`ErrorCodeSchema`]) that keep utoipa out of the domain
//!
//! The generated document is used by Swagger UI (debug builds) and
//! exported via `cargo run --bin openapi-dump` for external tooling.

use crate::inbound::http::health::StatusBody;
use crate::inbound::http::reservations::{ReservationCreateBody, ReservationResponse};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use crate::inbound::http::tables::{TableCreateBody, TableResponse};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Table booking API",
        description = "Create, list and cancel table reservations without double-booking."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::tables::list_tables,
        crate::inbound::http::tables::create_table,
        crate::inbound::http::tables::delete_table,
        crate::inbound::http::reservations::list_reservations,
        crate::inbound::http::reservations::create_reservation,
        crate::inbound::http::reservations::delete_reservation,
        crate::inbound::http::health::tables_health,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        TableCreateBody,
        TableResponse,
        ReservationCreateBody,
        ReservationResponse,
        StatusBody,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "tables", description = "Bookable tables"),
        (name = "reservations", description = "Reservations against tables"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
