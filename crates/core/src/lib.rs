//! `vendora-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! strongly-typed identifiers, the shared error model, and the date-range value
//! object used to window order queries.

pub mod error;
pub mod id;
pub mod time;

pub use error::{DomainError, DomainResult, StoreError};
pub use id::{OrderId, ProductId, UserId};
pub use time::DateRange;
