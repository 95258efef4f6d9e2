//! Booking service implementing the reservation driving ports.
//!
//! Creation runs in a fixed order: window validation, table lookup,
//! availability check, insert. The availability check only gives callers a
//! friendly early answer; the repository insert is the authority on
//! overlaps, so a concurrent winner still surfaces here as a conflict.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, info, warn};

use crate::domain::ports::{
    CreateReservationRequest, ReservationCommand, ReservationQuery, ReservationRepository,
    ReservationRepositoryError, TableRepository,
};
use crate::domain::{
    AvailabilityChecker, BookingWindow, BookingWindowError, Error, NewReservation, Reservation,
    ReservationId, TableId,
};

use super::table_service::map_table_repository_error;

/// Message returned whenever a reservation overlaps an existing one.
pub const RESERVATION_CONFLICT_MESSAGE: &str = "Table is already reserved for the selected time.";

fn table_not_found(table_id: TableId) -> Error {
    Error::not_found(format!("Table with id {table_id} not found"))
}

pub(crate) fn map_reservation_repository_error(error: ReservationRepositoryError) -> Error {
    match error {
        ReservationRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("reservation repository unavailable: {message}"))
        }
        ReservationRepositoryError::Query { message } => {
            Error::internal(format!("reservation repository error: {message}"))
        }
        ReservationRepositoryError::TableNotFound { table_id } => {
            table_not_found(TableId::new(table_id))
        }
        ReservationRepositoryError::SlotTaken { .. } => {
            Error::conflict(RESERVATION_CONFLICT_MESSAGE)
        }
    }
}

fn map_window_error(error: BookingWindowError) -> Error {
    let (field, value, code) = match &error {
        BookingWindowError::NonPositiveDuration { minutes } => {
            ("duration_minutes", json!(minutes), "non_positive_duration")
        }
        BookingWindowError::StartOutOfRange { start } => {
            ("reservation_time", json!(start.to_rfc3339()), "out_of_range")
        }
        BookingWindowError::EndOutOfRange => {
            ("duration_minutes", serde_json::Value::Null, "end_out_of_range")
        }
    };
    Error::invalid_request(error.to_string()).with_details(json!({
        "field": field,
        "value": value,
        "code": code,
    }))
}

/// Reservation service backed by table and reservation repositories.
pub struct ReservationService<T, R> {
    tables: Arc<T>,
    reservations: Arc<R>,
    availability: AvailabilityChecker<R>,
}

impl<T, R> ReservationService<T, R>
where
    R: ReservationRepository,
{
    /// Create a new service over both repositories.
    pub fn new(tables: Arc<T>, reservations: Arc<R>) -> Self {
        let availability = AvailabilityChecker::new(Arc::clone(&reservations));
        Self {
            tables,
            reservations,
            availability,
        }
    }
}

#[async_trait]
impl<T, R> ReservationCommand for ReservationService<T, R>
where
    T: TableRepository,
    R: ReservationRepository,
{
    async fn create_reservation(
        &self,
        request: CreateReservationRequest,
    ) -> Result<Reservation, Error> {
        let CreateReservationRequest {
            table_id,
            customer_name,
            reservation_time,
            duration_minutes,
        } = request;

        let window =
            BookingWindow::try_new(reservation_time, duration_minutes).map_err(map_window_error)?;

        let exists = self
            .tables
            .exists(table_id)
            .await
            .map_err(map_table_repository_error)?;
        if !exists {
            return Err(table_not_found(table_id));
        }

        if !self.availability.is_available(table_id, &window).await? {
            return Err(Error::conflict(RESERVATION_CONFLICT_MESSAGE));
        }

        info!(%table_id, start = %window.start(), duration_minutes, "creating reservation");
        let new_reservation = NewReservation::new(table_id, customer_name, window);
        let reservation = self
            .reservations
            .insert(&new_reservation)
            .await
            .map_err(|err| {
                if matches!(err, ReservationRepositoryError::SlotTaken { .. }) {
                    warn!(%table_id, "lost reservation race to a concurrent booking");
                }
                map_reservation_repository_error(err)
            })?;
        debug!(reservation_id = %reservation.id(), "reservation created");
        Ok(reservation)
    }

    async fn delete_reservation(&self, reservation_id: ReservationId) -> Result<(), Error> {
        let removed = self
            .reservations
            .delete(reservation_id)
            .await
            .map_err(map_reservation_repository_error)?;
        if !removed {
            return Err(Error::not_found(format!(
                "Reservation with id {reservation_id} not found"
            )));
        }
        info!(%reservation_id, "reservation deleted");
        Ok(())
    }
}

#[async_trait]
impl<T, R> ReservationQuery for ReservationService<T, R>
where
    T: TableRepository,
    R: ReservationRepository,
{
    async fn list_reservations(&self) -> Result<Vec<Reservation>, Error> {
        let reservations = self
            .reservations
            .list()
            .await
            .map_err(map_reservation_repository_error)?;
        debug!(count = reservations.len(), "listed reservations");
        Ok(reservations)
    }
}

#[cfg(test)]
#[path = "reservation_service_tests.rs"]
mod tests;
