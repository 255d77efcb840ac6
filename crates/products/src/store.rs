use async_trait::async_trait;
use chrono::{DateTime, Utc};

use vendora_core::{ProductId, StoreError, UserId};

use crate::product::Product;

/// Persistence port for the product catalog.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// The product, only if it exists and belongs to `seller_id`.
    async fn find_owned_by_seller(
        &self,
        product_id: ProductId,
        seller_id: UserId,
    ) -> Result<Option<Product>, StoreError>;

    /// The subset of `product_ids` owned by `seller_id`, answered in one
    /// round trip. Order of the result is unspecified; callers treat it as
    /// a membership set.
    async fn filter_owned_by_seller(
        &self,
        seller_id: UserId,
        product_ids: &[ProductId],
    ) -> Result<Vec<ProductId>, StoreError>;

    /// One page of listable products (available, not expired at `now`),
    /// ordered by creation time ascending.
    async fn list_available(
        &self,
        now: DateTime<Utc>,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Product>, StoreError>;

    /// Number of listable products at `now`, for page arithmetic.
    async fn count_available(&self, now: DateTime<Utc>) -> Result<i64, StoreError>;
}
