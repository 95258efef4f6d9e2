//! Shared helpers for booking integration tests.
//!
//! Integration tests compile as separate crates under `backend/tests/`; this
//! module holds the embedded-cluster plumbing they share.

pub mod pg_embed;

use booking::outbound::persistence::run_pending_migrations;
use postgres::{Client, NoTls};
use tokio::runtime::Runtime;

/// Database created inside the embedded cluster for each test.
const TEST_DATABASE: &str = "booking_test";

/// Render a `postgres` error with its SQLSTATE, detail and hint.
///
/// `postgres::Error`'s `Display` collapses server errors to `db error`.
pub fn format_postgres_error(error: &postgres::Error) -> String {
    let Some(db_error) = error.as_db_error() else {
        return error.to_string();
    };

    let mut summary = format!(
        "postgres error {:?}: {}",
        db_error.code(),
        db_error.message()
    );
    if let Some(detail) = db_error.detail() {
        summary.push_str("; detail: ");
        summary.push_str(detail);
    }
    if let Some(hint) = db_error.hint() {
        summary.push_str("; hint: ");
        summary.push_str(hint);
    }
    summary
}

/// True when `SKIP_TEST_CLUSTER` is `1`, `true` or `yes`.
pub fn should_skip_test_cluster() -> bool {
    std::env::var("SKIP_TEST_CLUSTER")
        .map(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

/// Skip (returning `None`) or fail loudly when the cluster cannot start.
pub fn handle_cluster_setup_failure<T>(reason: impl std::fmt::Display) -> Option<T> {
    if should_skip_test_cluster() {
        eprintln!("SKIP-TEST-CLUSTER: {reason}");
        None
    } else {
        panic!("Test cluster setup failed: {reason}. Set SKIP_TEST_CLUSTER=1 to skip.");
    }
}

/// Create the test database in the cluster and apply the embedded migrations.
///
/// `admin_url` must point at an existing database such as `postgres`;
/// `test_url` at [`test_database_name`] in the same cluster.
pub fn provision_database(runtime: &Runtime, admin_url: &str, test_url: &str) -> Result<(), String> {
    let mut admin = Client::connect(admin_url, NoTls).map_err(|err| format_postgres_error(&err))?;
    // CREATE DATABASE refuses to run inside the implicit multi-statement transaction.
    admin
        .batch_execute(&format!("CREATE DATABASE {TEST_DATABASE}"))
        .map_err(|err| format_postgres_error(&err))?;
    runtime
        .block_on(run_pending_migrations(test_url))
        .map_err(|err| err.to_string())
}

/// Name of the per-test database.
pub fn test_database_name() -> &'static str {
    TEST_DATABASE
}

/// Count rows in `table` through a plain `postgres` client.
pub fn count_rows(database_url: &str, table: &str) -> i64 {
    let mut client = Client::connect(database_url, NoTls)
        .unwrap_or_else(|err| panic!("connect: {}", format_postgres_error(&err)));
    let row = client
        .query_one(&format!("SELECT COUNT(*) FROM {table}"), &[])
        .unwrap_or_else(|err| panic!("count {table}: {}", format_postgres_error(&err)));
    row.get(0)
}
