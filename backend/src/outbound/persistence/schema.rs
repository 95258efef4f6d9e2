//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. The
//! `reservations_no_overlap` exclusion constraint and the `reservation_end`
//! SQL function live only in the migration; Diesel sees plain columns.

diesel::table! {
    /// Bookable dining tables.
    tables (id) {
        /// Primary key assigned by a serial sequence.
        id -> Int4,
        /// Display name.
        name -> Varchar,
        /// Seat count, constrained to be positive.
        seats -> Int4,
        /// Free-text location label.
        location -> Varchar,
    }
}

diesel::table! {
    /// Reservations, each owned by one table.
    ///
    /// Rows are removed with their table through `ON DELETE CASCADE`.
    reservations (id) {
        /// Primary key assigned by a serial sequence.
        id -> Int4,
        customer_name -> Varchar,
        /// Owning table.
        table_id -> Int4,
        /// Inclusive start of the booked window.
        reservation_time -> Timestamptz,
        /// Window length, constrained to be positive.
        duration_minutes -> Int4,
    }
}

diesel::joinable!(reservations -> tables (table_id));
diesel::allow_tables_to_appear_in_same_query!(reservations, tables);
