//! Products domain module.
//!
//! This crate contains the catalog read model, its persistence port and the
//! public-listing pagination rules, implemented purely as deterministic
//! domain logic (no IO, no HTTP, no storage).

pub mod pagination;
pub mod product;
pub mod store;

pub use pagination::{PageInfo, PageParams};
pub use product::{Product, ProductStatus};
pub use store::ProductStore;
