//! Infrastructure layer: Postgres adapters and in-memory stores.
//!
//! Both backends implement the same domain ports, so the API layer can swap
//! them through configuration without touching handler code.

pub mod memory;
pub mod postgres;

pub use memory::{InMemoryOrderStore, InMemoryProductStore};
pub use postgres::{PostgresOrderStore, PostgresProductStore};
