//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use super::schema::{reservations, tables};

/// Row struct for reading from the tables table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tables)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct TableRow {
    pub id: i32,
    pub name: String,
    pub seats: i32,
    pub location: String,
}

/// Insertable struct for creating table records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tables)]
pub(crate) struct NewTableRow<'a> {
    pub name: &'a str,
    pub seats: i32,
    pub location: &'a str,
}

/// Row struct for reading from the reservations table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = reservations)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ReservationRow {
    pub id: i32,
    pub customer_name: String,
    pub table_id: i32,
    pub reservation_time: DateTime<Utc>,
    pub duration_minutes: i32,
}

/// Insertable struct for creating reservation records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = reservations)]
pub(crate) struct NewReservationRow<'a> {
    pub customer_name: &'a str,
    pub table_id: i32,
    pub reservation_time: DateTime<Utc>,
    pub duration_minutes: i32,
}
