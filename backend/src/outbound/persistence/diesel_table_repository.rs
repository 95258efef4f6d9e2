//! PostgreSQL-backed `TableRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{TableRepository, TableRepositoryError};
use crate::domain::{NewTable, Table, TableId};

use super::diesel_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{NewTableRow, TableRow};
use super::pool::{DbPool, PoolError};
use super::schema::tables;

/// Diesel-backed implementation of the table repository port.
#[derive(Clone)]
pub struct DieselTableRepository {
    pool: DbPool,
}

impl DieselTableRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> TableRepositoryError {
    map_basic_pool_error(error, TableRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> TableRepositoryError {
    map_basic_diesel_error(
        error,
        TableRepositoryError::query,
        TableRepositoryError::connection,
    )
}

/// Convert a row into a validated domain table.
fn row_to_table(row: TableRow) -> Result<Table, TableRepositoryError> {
    let TableRow {
        id,
        name,
        seats,
        location,
    } = row;
    NewTable::try_new(name, seats, location)
        .map(|table| table.with_id(TableId::new(id)))
        .map_err(|err| TableRepositoryError::query(format!("stored table {id}: {err}")))
}

#[async_trait]
impl TableRepository for DieselTableRepository {
    async fn list(&self) -> Result<Vec<Table>, TableRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<TableRow> = tables::table
            .select(TableRow::as_select())
            .order(tables::id.asc())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        rows.into_iter().map(row_to_table).collect()
    }

    async fn insert(&self, table: &NewTable) -> Result<Table, TableRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let new_row = NewTableRow {
            name: table.name(),
            seats: table.seats(),
            location: table.location(),
        };
        let row: TableRow = diesel::insert_into(tables::table)
            .values(&new_row)
            .returning(TableRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        row_to_table(row)
    }

    async fn exists(&self, table_id: TableId) -> Result<bool, TableRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::select(diesel::dsl::exists(
            tables::table.filter(tables::id.eq(table_id.get())),
        ))
        .get_result(&mut conn)
        .await
        .map_err(map_diesel_error)
    }

    async fn delete(&self, table_id: TableId) -> Result<bool, TableRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let deleted = diesel::delete(tables::table.filter(tables::id.eq(table_id.get())))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        debug!(%table_id, deleted, "table delete executed");
        Ok(deleted > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn row_to_table_keeps_columns() {
        let table = row_to_table(TableRow {
            id: 3,
            name: "Booth".to_owned(),
            seats: 6,
            location: "Back wall".to_owned(),
        })
        .expect("valid row");
        assert_eq!(table.id(), TableId::new(3));
        assert_eq!(table.seats(), 6);
    }

    #[rstest]
    fn row_to_table_rejects_corrupt_seats() {
        let err = row_to_table(TableRow {
            id: 3,
            name: "Booth".to_owned(),
            seats: 0,
            location: "Back wall".to_owned(),
        })
        .expect_err("seat check violated");
        assert!(matches!(err, TableRepositoryError::Query { .. }));
    }
}
