//! Shared Diesel error mapping for the booking repositories.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use super::pool::PoolError;

/// Exclusion constraint guarding against overlapping reservations.
pub(crate) const NO_OVERLAP_CONSTRAINT: &str = "reservations_no_overlap";

/// Map pool errors into a repository-specific connection error constructor.
pub(crate) fn map_basic_pool_error<E, C>(error: PoolError, connection: C) -> E
where
    C: FnOnce(String) -> E,
{
    let message = match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    };
    connection(message)
}

fn log_diesel_error(error: &DieselError) {
    match error {
        DieselError::DatabaseError(kind, info) => {
            debug!(
                ?kind,
                message = info.message(),
                constraint = ?info.constraint_name(),
                "diesel operation failed"
            );
        }
        _ => debug!(%error, "diesel operation failed"),
    }
}

/// Map common Diesel error variants into query/connection constructors.
pub(crate) fn map_basic_diesel_error<E, Q, C>(error: DieselError, query: Q, connection: C) -> E
where
    Q: Fn(&'static str) -> E,
    C: Fn(&'static str) -> E,
{
    log_diesel_error(&error);

    match error {
        DieselError::NotFound => query("record not found"),
        DieselError::QueryBuilderError(_) => query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            connection("database connection error")
        }
        DieselError::DatabaseError(_, info) if is_statement_timeout(info.message()) => {
            connection("database statement timed out")
        }
        _ => query("database error"),
    }
}

fn is_statement_timeout(message: &str) -> bool {
    message.contains("canceling statement due to statement timeout")
}

/// SQLSTATE 55P03, raised when `lock_timeout` expires.
fn is_lock_timeout(message: &str) -> bool {
    message.contains("canceling statement due to lock timeout")
}

/// How a failed reservation insert should be reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InsertConflict {
    /// The window overlaps a committed reservation.
    SlotTaken,
    /// The referenced table is gone.
    TableMissing,
}

/// Classify a database error raised by a reservation insert.
///
/// Exclusion violations, serialization aborts, deadlocks and timeouts all mean
/// a concurrent writer held the slot. An insert blocked behind another
/// writer's exclusion check is aborted as a conflict once a statement or lock
/// timeout fires. Postgres reports exclusion violations as SQLSTATE 23P01,
/// which Diesel surfaces as `Unknown`, so the constraint name is the reliable
/// signal.
pub(crate) fn classify_insert_conflict(error: &DieselError) -> Option<InsertConflict> {
    let DieselError::DatabaseError(kind, info) = error else {
        return None;
    };
    if info.constraint_name() == Some(NO_OVERLAP_CONSTRAINT) {
        return Some(InsertConflict::SlotTaken);
    }
    match kind {
        DatabaseErrorKind::ForeignKeyViolation => Some(InsertConflict::TableMissing),
        DatabaseErrorKind::SerializationFailure => Some(InsertConflict::SlotTaken),
        _ if info.message().contains("deadlock detected") => Some(InsertConflict::SlotTaken),
        _ if is_statement_timeout(info.message()) || is_lock_timeout(info.message()) => {
            Some(InsertConflict::SlotTaken)
        }
        _ => None,
    }
}
