//! Port for table persistence.

use async_trait::async_trait;

use crate::domain::{NewTable, Table, TableId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by table repository adapters.
    pub enum TableRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "table repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "table repository query failed: {message}",
    }
}

/// Driven port for storing and reading tables.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TableRepository: Send + Sync {
    /// Read every table ordered by identifier.
    async fn list(&self) -> Result<Vec<Table>, TableRepositoryError>;

    /// Persist a table and return it with its assigned identifier.
    async fn insert(&self, table: &NewTable) -> Result<Table, TableRepositoryError>;

    /// Whether a table with `table_id` exists.
    async fn exists(&self, table_id: TableId) -> Result<bool, TableRepositoryError>;

    /// Remove a table together with its reservations.
    ///
    /// Returns `false` when no table matched.
    async fn delete(&self, table_id: TableId) -> Result<bool, TableRepositoryError>;
}
