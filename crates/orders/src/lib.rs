//! Orders domain module.
//!
//! This crate contains the order read model and its persistence port,
//! implemented purely as deterministic domain logic (no IO, no HTTP,
//! no storage).

pub mod order;
pub mod store;

pub use order::{LineItem, Order, OrderStatus};
pub use store::OrderStore;
