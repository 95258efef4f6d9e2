//! Driving ports for the booking workflow.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Error, Reservation, ReservationId, TableId};

/// Request to book a table.
///
/// `duration_minutes` is carried unvalidated so the domain owns the
/// positivity rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateReservationRequest {
    pub table_id: TableId,
    pub customer_name: String,
    pub reservation_time: DateTime<Utc>,
    pub duration_minutes: i32,
}

/// Driving port for reservation mutations.
///
/// # Errors
/// `create_reservation` fails with `InvalidRequest` for a non-positive
/// duration, `NotFound` for a missing table and `Conflict` when the window
/// overlaps an existing reservation on the same table. `delete_reservation`
/// fails with `NotFound` when the reservation does not exist.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReservationCommand: Send + Sync {
    /// Book a table for a window if it is free.
    async fn create_reservation(
        &self,
        request: CreateReservationRequest,
    ) -> Result<Reservation, Error>;

    /// Cancel a reservation.
    async fn delete_reservation(&self, reservation_id: ReservationId) -> Result<(), Error>;
}

/// Driving port for reservation reads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReservationQuery: Send + Sync {
    /// List every reservation ordered by identifier.
    async fn list_reservations(&self) -> Result<Vec<Reservation>, Error>;
}
