//! Domain primitives, aggregates and services.
//!
//! Purpose: Define strongly typed booking entities used by the API and
//! persistence layers and the services enforcing booking rules. Types are
//! immutable once built and document their invariants in Rustdoc.
//!
//! Public surface:
//! - Error (alias to `error::Error`) - transport-agnostic error payload.
//! - ErrorCode (alias to `error::ErrorCode`) - stable error identifier.
//! - Table / NewTable / TableId - the bookable resource.
//! - Reservation / NewReservation / ReservationId / BookingWindow - bookings
//!   and the half-open interval they occupy.
//! - TableService / ReservationService - driving port implementations.

pub mod availability;
pub mod error;
pub mod ports;
pub mod reservation;
pub mod reservation_service;
pub mod table;
pub mod table_service;
pub mod trace_id;

pub use self::availability::AvailabilityChecker;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::reservation::{
    BookingWindow, BookingWindowError, NewReservation, Reservation, ReservationId,
};
pub use self::reservation_service::{RESERVATION_CONFLICT_MESSAGE, ReservationService};
pub use self::table::{NewTable, Table, TableId, TableValidationError};
pub use self::table_service::TableService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use booking::domain::{ApiResult, Error};
///
/// fn lookup() -> ApiResult<()> {
///     Err(Error::not_found("Table with id 7 not found"))
/// }
/// assert!(lookup().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
