//! PostgreSQL-backed `ReservationRepository` implementation using Diesel ORM.
//!
//! The insert is a single statement. Overlap safety comes from the
//! `reservations_no_overlap` exclusion constraint, so two concurrent inserts
//! for overlapping windows on one table cannot both commit; the loser's
//! error is translated to `SlotTaken`.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::sql_types::{Integer, Timestamptz};
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{ReservationRepository, ReservationRepositoryError};
use crate::domain::{BookingWindow, NewReservation, Reservation, ReservationId, TableId};

use super::diesel_error_mapping::{
    InsertConflict, classify_insert_conflict, map_basic_diesel_error, map_basic_pool_error,
};
use super::models::{NewReservationRow, ReservationRow};
use super::pool::{DbPool, PoolError};
use super::schema::reservations;

diesel::define_sql_function! {
    /// Exclusive end of a reservation window, as computed by the migration's
    /// IMMUTABLE SQL helper.
    fn reservation_end(starts_at: Timestamptz, minutes: Integer) -> Timestamptz;
}

/// Diesel-backed implementation of the reservation repository port.
#[derive(Clone)]
pub struct DieselReservationRepository {
    pool: DbPool,
}

impl DieselReservationRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> ReservationRepositoryError {
    map_basic_pool_error(error, ReservationRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> ReservationRepositoryError {
    map_basic_diesel_error(
        error,
        ReservationRepositoryError::query,
        ReservationRepositoryError::connection,
    )
}

fn map_insert_error(error: diesel::result::Error, table_id: TableId) -> ReservationRepositoryError {
    match classify_insert_conflict(&error) {
        Some(InsertConflict::SlotTaken) => ReservationRepositoryError::slot_taken(table_id.get()),
        Some(InsertConflict::TableMissing) => {
            ReservationRepositoryError::table_not_found(table_id.get())
        }
        None => map_diesel_error(error),
    }
}

/// Convert a row into a validated domain reservation.
fn row_to_reservation(row: ReservationRow) -> Result<Reservation, ReservationRepositoryError> {
    let ReservationRow {
        id,
        customer_name,
        table_id,
        reservation_time,
        duration_minutes,
    } = row;
    let window = BookingWindow::try_new(reservation_time, duration_minutes).map_err(|err| {
        ReservationRepositoryError::query(format!("stored reservation {id}: {err}"))
    })?;
    Ok(NewReservation::new(TableId::new(table_id), customer_name, window)
        .with_id(ReservationId::new(id)))
}

fn rows_to_reservations(
    rows: Vec<ReservationRow>,
) -> Result<Vec<Reservation>, ReservationRepositoryError> {
    rows.into_iter().map(row_to_reservation).collect()
}

#[async_trait]
impl ReservationRepository for DieselReservationRepository {
    async fn list(&self) -> Result<Vec<Reservation>, ReservationRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<ReservationRow> = reservations::table
            .select(ReservationRow::as_select())
            .order(reservations::id.asc())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        rows_to_reservations(rows)
    }

    async fn find_overlapping(
        &self,
        table_id: TableId,
        window: &BookingWindow,
    ) -> Result<Vec<Reservation>, ReservationRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<ReservationRow> = reservations::table
            .filter(reservations::table_id.eq(table_id.get()))
            .filter(reservations::reservation_time.lt(window.end()))
            .filter(
                reservation_end(reservations::reservation_time, reservations::duration_minutes)
                    .gt(window.start()),
            )
            .select(ReservationRow::as_select())
            .order(reservations::id.asc())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        rows_to_reservations(rows)
    }

    async fn insert(
        &self,
        reservation: &NewReservation,
    ) -> Result<Reservation, ReservationRepositoryError> {
        let table_id = reservation.table_id();
        let window = reservation.window();
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let new_row = NewReservationRow {
            customer_name: reservation.customer_name(),
            table_id: table_id.get(),
            reservation_time: window.start(),
            duration_minutes: window.duration_minutes(),
        };
        let row: ReservationRow = diesel::insert_into(reservations::table)
            .values(&new_row)
            .returning(ReservationRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|err| map_insert_error(err, table_id))?;
        row_to_reservation(row)
    }

    async fn delete(
        &self,
        reservation_id: ReservationId,
    ) -> Result<bool, ReservationRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let deleted =
            diesel::delete(reservations::table.filter(reservations::id.eq(reservation_id.get())))
                .execute(&mut conn)
                .await
                .map_err(map_diesel_error)?;
        debug!(%reservation_id, deleted, "reservation delete executed");
        Ok(deleted > 0)
    }
}
