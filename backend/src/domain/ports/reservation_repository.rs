//! Port for reservation persistence.
//!
//! Adapters must make [`ReservationRepository::insert`] atomic with respect to
//! the no-overlap invariant: whatever the domain observed beforehand, an
//! insert that would overlap a committed reservation on the same table fails
//! with [`ReservationRepositoryError::SlotTaken`], and an insert whose table
//! has disappeared fails with [`ReservationRepositoryError::TableNotFound`].

use async_trait::async_trait;

use crate::domain::{BookingWindow, NewReservation, Reservation, ReservationId, TableId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by reservation repository adapters.
    pub enum ReservationRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "reservation repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "reservation repository query failed: {message}",
        /// The referenced table does not exist (or no longer exists).
        TableNotFound { table_id: i32 } =>
            "table {table_id} does not exist",
        /// The window overlaps a committed reservation, or the store aborted
        /// the write because of a concurrent conflicting one.
        SlotTaken { table_id: i32 } =>
            "table {table_id} is already reserved for an overlapping window",
    }
}

/// Driven port for storing and reading reservations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// Read every reservation ordered by identifier.
    async fn list(&self) -> Result<Vec<Reservation>, ReservationRepositoryError>;

    /// Reservations on `table_id` whose window overlaps `window`.
    async fn find_overlapping(
        &self,
        table_id: TableId,
        window: &BookingWindow,
    ) -> Result<Vec<Reservation>, ReservationRepositoryError>;

    /// Persist a reservation if its window is still free.
    async fn insert(
        &self,
        reservation: &NewReservation,
    ) -> Result<Reservation, ReservationRepositoryError>;

    /// Remove one reservation. Returns `false` when none matched.
    async fn delete(&self, reservation_id: ReservationId) -> Result<bool, ReservationRepositoryError>;
}
