//! Availability checker: does a proposed window collide with a booking?
//!
//! The check is a single read against the reservation store. It never
//! compares across tables, and windows that merely touch (`end_a ==
//! start_b`) are free. Callers must have verified the table exists.

use std::sync::Arc;

use tracing::warn;

use crate::domain::ports::ReservationRepository;
use crate::domain::{BookingWindow, Error, Reservation, TableId};

use super::reservation_service::map_reservation_repository_error;

/// Read-only overlap detection over a reservation repository.
pub struct AvailabilityChecker<R> {
    reservations: Arc<R>,
}

impl<R> Clone for AvailabilityChecker<R> {
    fn clone(&self) -> Self {
        Self {
            reservations: Arc::clone(&self.reservations),
        }
    }
}

impl<R> AvailabilityChecker<R>
where
    R: ReservationRepository,
{
    /// Build a checker reading from `reservations`.
    pub fn new(reservations: Arc<R>) -> Self {
        Self { reservations }
    }

    /// Reservations on `table_id` that overlap `window`.
    pub async fn conflicts(
        &self,
        table_id: TableId,
        window: &BookingWindow,
    ) -> Result<Vec<Reservation>, Error> {
        self.reservations
            .find_overlapping(table_id, window)
            .await
            .map_err(map_reservation_repository_error)
    }

    /// Whether `window` is free on `table_id`.
    pub async fn is_available(
        &self,
        table_id: TableId,
        window: &BookingWindow,
    ) -> Result<bool, Error> {
        let conflicts = self.conflicts(table_id, window).await?;
        if conflicts.is_empty() {
            return Ok(true);
        }
        warn!(
            %table_id,
            start = %window.start(),
            conflicting = conflicts.len(),
            "reservation window conflicts with existing booking"
        );
        Ok(false)
    }
}
