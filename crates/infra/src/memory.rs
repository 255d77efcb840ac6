//! In-memory store implementations for tests and single-node dev runs.

use std::collections::HashSet;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use vendora_core::{DateRange, OrderId, ProductId, StoreError, UserId};
use vendora_orders::{Order, OrderStatus, OrderStore};
use vendora_products::{Product, ProductStore};

/// In-memory order store.
///
/// Rows live in insertion order; queries sort by creation time so results
/// match the Postgres implementation row for row.
#[derive(Debug, Default)]
pub struct InMemoryOrderStore {
    inner: RwLock<Vec<Order>>,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Vec::new()),
        }
    }

    /// Insert or replace by id. A poisoned lock is recovered so the write
    /// still lands; readers surface the poisoning as a store error.
    pub fn insert(&self, order: Order) {
        let mut rows = self.inner.write().unwrap_or_else(|e| e.into_inner());
        rows.retain(|o| o.id != order.id);
        rows.push(order);
    }

    fn snapshot(&self) -> Result<Vec<Order>, StoreError> {
        self.inner
            .read()
            .map(|rows| rows.clone())
            .map_err(|_| StoreError::database("order store lock poisoned"))
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn find_completed_in_range(&self, range: DateRange) -> Result<Vec<Order>, StoreError> {
        let mut rows: Vec<Order> = self
            .snapshot()?
            .into_iter()
            .filter(|o| o.is_completed() && range.contains(o.created_at))
            .collect();
        rows.sort_by_key(|o| o.created_at);
        Ok(rows)
    }

    async fn list_for_user(&self, user_id: UserId) -> Result<Vec<Order>, StoreError> {
        let mut rows: Vec<Order> = self
            .snapshot()?
            .into_iter()
            .filter(|o| o.user_id == user_id)
            .collect();
        rows.sort_by_key(|o| o.created_at);
        Ok(rows)
    }

    async fn find_for_user(
        &self,
        order_id: OrderId,
        user_id: UserId,
    ) -> Result<Option<Order>, StoreError> {
        Ok(self
            .snapshot()?
            .into_iter()
            .find(|o| o.id == order_id && o.user_id == user_id))
    }

    async fn list_all(&self) -> Result<Vec<Order>, StoreError> {
        let mut rows = self.snapshot()?;
        rows.sort_by_key(|o| o.created_at);
        Ok(rows)
    }

    async fn update_status(
        &self,
        order_id: OrderId,
        status: OrderStatus,
    ) -> Result<Option<Order>, StoreError> {
        let mut rows = self
            .inner
            .write()
            .map_err(|_| StoreError::database("order store lock poisoned"))?;
        Ok(rows.iter_mut().find(|o| o.id == order_id).map(|order| {
            order.status = status;
            order.updated_at = Utc::now();
            order.clone()
        }))
    }
}

/// In-memory product store.
#[derive(Debug, Default)]
pub struct InMemoryProductStore {
    inner: RwLock<Vec<Product>>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Vec::new()),
        }
    }

    /// Insert or replace by id. A poisoned lock is recovered so the write
    /// still lands; readers surface the poisoning as a store error.
    pub fn insert(&self, product: Product) {
        let mut rows = self.inner.write().unwrap_or_else(|e| e.into_inner());
        rows.retain(|p| p.id != product.id);
        rows.push(product);
    }

    fn snapshot(&self) -> Result<Vec<Product>, StoreError> {
        self.inner
            .read()
            .map(|rows| rows.clone())
            .map_err(|_| StoreError::database("product store lock poisoned"))
    }
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn find_owned_by_seller(
        &self,
        product_id: ProductId,
        seller_id: UserId,
    ) -> Result<Option<Product>, StoreError> {
        Ok(self
            .snapshot()?
            .into_iter()
            .find(|p| p.id == product_id && p.seller_id == seller_id))
    }

    async fn filter_owned_by_seller(
        &self,
        seller_id: UserId,
        product_ids: &[ProductId],
    ) -> Result<Vec<ProductId>, StoreError> {
        let owned: HashSet<ProductId> = self
            .snapshot()?
            .into_iter()
            .filter(|p| p.seller_id == seller_id)
            .map(|p| p.id)
            .collect();
        Ok(product_ids
            .iter()
            .copied()
            .filter(|id| owned.contains(id))
            .collect())
    }

    async fn list_available(
        &self,
        now: DateTime<Utc>,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Product>, StoreError> {
        let mut rows: Vec<Product> = self
            .snapshot()?
            .into_iter()
            .filter(|p| p.is_listable(now))
            .collect();
        rows.sort_by_key(|p| p.created_at);
        Ok(rows
            .into_iter()
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .collect())
    }

    async fn count_available(&self, now: DateTime<Utc>) -> Result<i64, StoreError> {
        Ok(self
            .snapshot()?
            .iter()
            .filter(|p| p.is_listable(now))
            .count() as i64)
    }
}
