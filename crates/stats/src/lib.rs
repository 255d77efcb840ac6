//! Seller statistics domain module.
//!
//! Aggregates completed orders into per-seller revenue figures. The only IO
//! happens through the order/product store ports; everything else is
//! deterministic and fully testable without a database.

pub mod money;
pub mod seller;

pub use money::{line_amount, to_decimal, to_f64};
pub use seller::{
    OwnershipLookup, SellerStatLine, SellerStats, StatsError, compute_seller_stats,
};
