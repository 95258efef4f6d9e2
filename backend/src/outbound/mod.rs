//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: PostgreSQL-backed repositories using Diesel ORM.
//! - **memory**: a process-local store used when no database is configured.
//!
//! Adapters are thin translators between domain types and storage
//! representations. The only rule they own is the atomic overlap guard on
//! reservation inserts.

pub mod memory;
pub mod persistence;
