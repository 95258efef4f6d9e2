//! Table lifecycle service implementing the table driving ports.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, info};

use crate::domain::ports::{
    CreateTableRequest, TableCommand, TableQuery, TableRepository, TableRepositoryError,
};
use crate::domain::{Error, NewTable, Table, TableId};

pub(crate) fn map_table_repository_error(error: TableRepositoryError) -> Error {
    match error {
        TableRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("table repository unavailable: {message}"))
        }
        TableRepositoryError::Query { message } => {
            Error::internal(format!("table repository error: {message}"))
        }
    }
}

/// Table service backed by a [`TableRepository`].
pub struct TableService<T> {
    tables: Arc<T>,
}

impl<T> TableService<T> {
    /// Create a new service over the table repository.
    pub fn new(tables: Arc<T>) -> Self {
        Self { tables }
    }
}

#[async_trait]
impl<T> TableCommand for TableService<T>
where
    T: TableRepository,
{
    async fn create_table(&self, request: CreateTableRequest) -> Result<Table, Error> {
        let CreateTableRequest {
            name,
            seats,
            location,
        } = request;
        let new_table = NewTable::try_new(name, seats, location).map_err(|err| {
            Error::invalid_request(err.to_string()).with_details(json!({
                "field": "seats",
                "value": seats,
                "code": "non_positive_seats",
            }))
        })?;

        info!(name = new_table.name(), seats = new_table.seats(), "creating table");
        let table = self
            .tables
            .insert(&new_table)
            .await
            .map_err(map_table_repository_error)?;
        debug!(table_id = %table.id(), "table created");
        Ok(table)
    }

    async fn delete_table(&self, table_id: TableId) -> Result<(), Error> {
        info!(%table_id, "deleting table");
        let removed = self
            .tables
            .delete(table_id)
            .await
            .map_err(map_table_repository_error)?;
        debug!(%table_id, removed, "table delete finished");
        Ok(())
    }
}

#[async_trait]
impl<T> TableQuery for TableService<T>
where
    T: TableRepository,
{
    async fn list_tables(&self) -> Result<Vec<Table>, Error> {
        let tables = self
            .tables
            .list()
            .await
            .map_err(map_table_repository_error)?;
        debug!(count = tables.len(), "listed tables");
        Ok(tables)
    }
}
