//! Postgres-backed store implementations.
//!
//! Schema DDL lives in `migrations/` at the workspace root; deployments apply
//! it before boot. Queries keep `ORDER BY created_at ASC` so listings and
//! aggregation inputs are deterministic.

mod orders;
mod products;

pub use orders::PostgresOrderStore;
pub use products::PostgresProductStore;

use vendora_core::StoreError;

/// Map a sqlx error to the store error surfaced to callers.
///
/// The message is client-visible on 500 responses, so it names the operation
/// and carries the backend's own message.
pub(crate) fn map_sqlx_error(operation: &str, err: sqlx::Error) -> StoreError {
    match err {
        sqlx::Error::Database(db_err) => StoreError::database(format!(
            "database error in {}: {}",
            operation,
            db_err.message()
        )),
        sqlx::Error::PoolClosed => {
            StoreError::database(format!("connection pool closed in {operation}"))
        }
        sqlx::Error::RowNotFound => {
            StoreError::database(format!("unexpected row not found in {operation}"))
        }
        other => StoreError::database(format!("sqlx error in {operation}: {other}")),
    }
}
