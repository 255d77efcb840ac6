use async_trait::async_trait;

use vendora_core::{DateRange, OrderId, StoreError, UserId};

use crate::order::{Order, OrderStatus};

/// Persistence port for orders.
///
/// Implementations must return rows ordered by creation time ascending so
/// downstream aggregation and listings stay deterministic.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Completed orders created inside `range`, bounds inclusive.
    async fn find_completed_in_range(&self, range: DateRange) -> Result<Vec<Order>, StoreError>;

    /// Orders placed by `user_id`.
    async fn list_for_user(&self, user_id: UserId) -> Result<Vec<Order>, StoreError>;

    /// A single order, visible only to the user who placed it.
    async fn find_for_user(
        &self,
        order_id: OrderId,
        user_id: UserId,
    ) -> Result<Option<Order>, StoreError>;

    /// Every order in the system (admin surface).
    async fn list_all(&self) -> Result<Vec<Order>, StoreError>;

    /// Set a new status, returning the updated order if it exists.
    async fn update_status(
        &self,
        order_id: OrderId,
        status: OrderStatus,
    ) -> Result<Option<Order>, StoreError>;
}
