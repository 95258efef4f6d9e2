//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    ReservationCommand, ReservationQuery, ReservationRepository, TableCommand, TableQuery,
    TableRepository,
};
use crate::domain::{ReservationService, TableService};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub tables: Arc<dyn TableCommand>,
    pub tables_query: Arc<dyn TableQuery>,
    pub reservations: Arc<dyn ReservationCommand>,
    pub reservations_query: Arc<dyn ReservationQuery>,
}

impl HttpState {
    /// Construct state from explicit port implementations.
    pub fn new(
        tables: Arc<dyn TableCommand>,
        tables_query: Arc<dyn TableQuery>,
        reservations: Arc<dyn ReservationCommand>,
        reservations_query: Arc<dyn ReservationQuery>,
    ) -> Self {
        Self {
            tables,
            tables_query,
            reservations,
            reservations_query,
        }
    }

    /// Wire the domain services over a pair of repositories.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use booking::inbound::http::state::HttpState;
    /// use booking::outbound::memory::InMemoryBookingStore;
    ///
    /// let store = Arc::new(InMemoryBookingStore::new());
    /// let _state = HttpState::from_repositories(Arc::clone(&store), store);
    /// ```
    pub fn from_repositories<T, R>(tables: Arc<T>, reservations: Arc<R>) -> Self
    where
        T: TableRepository + 'static,
        R: ReservationRepository + 'static,
    {
        let table_service = Arc::new(TableService::new(Arc::clone(&tables)));
        let reservation_service = Arc::new(ReservationService::new(tables, reservations));
        Self::new(
            table_service.clone(),
            table_service,
            reservation_service.clone(),
            reservation_service,
        )
    }
}
