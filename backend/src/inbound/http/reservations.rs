//! Reservation HTTP handlers.
//!
//! ```text
//! GET    /reservations/
//! POST   /reservations/
//! DELETE /reservations/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::CreateReservationRequest;
use crate::domain::{Error, Reservation, ReservationId, TableId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, format_timestamp, parse_timestamp};

/// Request payload for booking a table.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct ReservationCreateBody {
    #[schema(example = "Alice")]
    pub customer_name: String,
    #[schema(example = 1)]
    pub table_id: i32,
    /// RFC 3339 timestamp; a timestamp without offset is read as UTC.
    #[schema(format = "date-time", example = "2025-04-10T18:00:00Z")]
    pub reservation_time: String,
    /// Length of the booking; must be positive.
    #[schema(example = 60)]
    pub duration_minutes: i32,
}

/// Reservation representation returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct ReservationResponse {
    pub id: i32,
    pub customer_name: String,
    pub table_id: i32,
    #[schema(format = "date-time")]
    pub reservation_time: String,
    pub duration_minutes: i32,
}

impl From<Reservation> for ReservationResponse {
    fn from(reservation: Reservation) -> Self {
        let window = reservation.window();
        Self {
            id: reservation.id().get(),
            customer_name: reservation.customer_name().to_owned(),
            table_id: reservation.table_id().get(),
            reservation_time: format_timestamp(window.start()),
            duration_minutes: window.duration_minutes(),
        }
    }
}

impl TryFrom<ReservationCreateBody> for CreateReservationRequest {
    type Error = Error;

    fn try_from(body: ReservationCreateBody) -> Result<Self, Self::Error> {
        let reservation_time = parse_timestamp(
            body.reservation_time.as_str(),
            FieldName::new("reservation_time"),
        )?;
        Ok(Self {
            table_id: TableId::new(body.table_id),
            customer_name: body.customer_name,
            reservation_time,
            duration_minutes: body.duration_minutes,
        })
    }
}

/// List every reservation.
#[utoipa::path(
    get,
    path = "/reservations/",
    tags = ["reservations"],
    responses(
        (status = 200, description = "Reservations ordered by id", body = [ReservationResponse]),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    )
)]
#[get("/reservations/")]
pub async fn list_reservations(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<ReservationResponse>>> {
    let reservations = state.reservations_query.list_reservations().await?;
    Ok(web::Json(reservations.into_iter().map(Into::into).collect()))
}

/// Book a table if the window is free.
#[utoipa::path(
    post,
    path = "/reservations/",
    tags = ["reservations"],
    request_body = ReservationCreateBody,
    responses(
        (status = 201, description = "Reservation created", body = ReservationResponse),
        (status = 400, description = "Window overlaps an existing reservation", body = ErrorSchema),
        (status = 404, description = "Table not found", body = ErrorSchema),
        (status = 422, description = "Invalid payload or non-positive duration", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    )
)]
#[post("/reservations/")]
pub async fn create_reservation(
    state: web::Data<HttpState>,
    payload: web::Json<ReservationCreateBody>,
) -> ApiResult<HttpResponse> {
    let request = CreateReservationRequest::try_from(payload.into_inner())?;
    let reservation = state.reservations.create_reservation(request).await?;
    Ok(HttpResponse::Created().json(ReservationResponse::from(reservation)))
}

/// Cancel a reservation.
#[utoipa::path(
    delete,
    path = "/reservations/{id}",
    tags = ["reservations"],
    params(("id" = i32, Path, description = "Reservation identifier")),
    responses(
        (status = 204, description = "Reservation deleted"),
        (status = 404, description = "Reservation not found", body = ErrorSchema),
        (status = 422, description = "Malformed identifier", body = ErrorSchema)
    )
)]
#[delete("/reservations/{id}")]
pub async fn delete_reservation(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    state
        .reservations
        .delete_reservation(ReservationId::new(path.into_inner()))
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
#[path = "reservations_tests.rs"]
mod tests;
