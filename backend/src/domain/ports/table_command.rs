//! Driving ports for table lifecycle operations.
//!
//! Inbound adapters call these to create, list and delete tables without
//! knowing which store backs them.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{Error, Table, TableId};

/// Request to create a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTableRequest {
    pub name: String,
    pub seats: i32,
    pub location: String,
}

/// Driving port for table mutations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TableCommand: Send + Sync {
    /// Create a table. Fails with `InvalidRequest` when `seats <= 0`.
    async fn create_table(&self, request: CreateTableRequest) -> Result<Table, Error>;

    /// Delete a table and, through the ownership cascade, its reservations.
    ///
    /// Deleting a table that does not exist succeeds.
    async fn delete_table(&self, table_id: TableId) -> Result<(), Error>;
}

/// Driving port for table reads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TableQuery: Send + Sync {
    /// List every table ordered by identifier.
    async fn list_tables(&self) -> Result<Vec<Table>, Error>;
}
