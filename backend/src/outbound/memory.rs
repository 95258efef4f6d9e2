//! Process-local booking store for running without PostgreSQL.
//!
//! Tables and reservations share one mutex, so the overlap check inside
//! [`ReservationRepository::insert`] and the write it guards cannot
//! interleave with another insert or with a table delete. Nothing survives a
//! restart.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{
    ReservationRepository, ReservationRepositoryError, TableRepository, TableRepositoryError,
};
use crate::domain::{
    BookingWindow, NewReservation, NewTable, Reservation, ReservationId, Table, TableId,
};

#[derive(Debug, Default)]
struct StoreState {
    tables: BTreeMap<TableId, Table>,
    reservations: BTreeMap<ReservationId, Reservation>,
    last_table_id: i32,
    last_reservation_id: i32,
}

impl StoreState {
    fn overlapping<'a>(
        &'a self,
        table_id: TableId,
        window: &'a BookingWindow,
    ) -> impl Iterator<Item = &'a Reservation> + 'a {
        self.reservations.values().filter(move |reservation| {
            reservation.table_id() == table_id && reservation.window().overlaps(window)
        })
    }
}

/// In-memory implementation of both booking repositories.
///
/// Identifiers start at 1 and are never reused.
#[derive(Debug, Default)]
pub struct InMemoryBookingStore {
    state: Mutex<StoreState>,
}

impl InMemoryBookingStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // Every critical section leaves the maps consistent, so a poisoned lock
    // still guards valid data.
    fn lock(&self) -> MutexGuard<'_, StoreState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl TableRepository for InMemoryBookingStore {
    async fn list(&self) -> Result<Vec<Table>, TableRepositoryError> {
        Ok(self.lock().tables.values().cloned().collect())
    }

    async fn insert(&self, table: &NewTable) -> Result<Table, TableRepositoryError> {
        let mut state = self.lock();
        let next = state
            .last_table_id
            .checked_add(1)
            .ok_or_else(|| TableRepositoryError::query("table identifiers exhausted"))?;
        state.last_table_id = next;
        let stored = table.clone().with_id(TableId::new(next));
        state.tables.insert(stored.id(), stored.clone());
        Ok(stored)
    }

    async fn exists(&self, table_id: TableId) -> Result<bool, TableRepositoryError> {
        Ok(self.lock().tables.contains_key(&table_id))
    }

    async fn delete(&self, table_id: TableId) -> Result<bool, TableRepositoryError> {
        let mut state = self.lock();
        if state.tables.remove(&table_id).is_none() {
            return Ok(false);
        }
        let before = state.reservations.len();
        state
            .reservations
            .retain(|_, reservation| reservation.table_id() != table_id);
        debug!(
            %table_id,
            cascaded = before - state.reservations.len(),
            "table removed with its reservations"
        );
        Ok(true)
    }
}

#[async_trait]
impl ReservationRepository for InMemoryBookingStore {
    async fn list(&self) -> Result<Vec<Reservation>, ReservationRepositoryError> {
        Ok(self.lock().reservations.values().cloned().collect())
    }

    async fn find_overlapping(
        &self,
        table_id: TableId,
        window: &BookingWindow,
    ) -> Result<Vec<Reservation>, ReservationRepositoryError> {
        Ok(self.lock().overlapping(table_id, window).cloned().collect())
    }

    async fn insert(
        &self,
        reservation: &NewReservation,
    ) -> Result<Reservation, ReservationRepositoryError> {
        let table_id = reservation.table_id();
        let mut state = self.lock();
        if !state.tables.contains_key(&table_id) {
            return Err(ReservationRepositoryError::table_not_found(table_id.get()));
        }
        if state
            .overlapping(table_id, reservation.window())
            .next()
            .is_some()
        {
            return Err(ReservationRepositoryError::slot_taken(table_id.get()));
        }
        let next = state
            .last_reservation_id
            .checked_add(1)
            .ok_or_else(|| ReservationRepositoryError::query("reservation identifiers exhausted"))?;
        state.last_reservation_id = next;
        let stored = reservation.clone().with_id(ReservationId::new(next));
        state.reservations.insert(stored.id(), stored.clone());
        Ok(stored)
    }

    async fn delete(
        &self,
        reservation_id: ReservationId,
    ) -> Result<bool, ReservationRepositoryError> {
        Ok(self.lock().reservations.remove(&reservation_id).is_some())
    }
}

#[cfg(test)]
#[path = "memory_tests.rs"]
mod tests;
