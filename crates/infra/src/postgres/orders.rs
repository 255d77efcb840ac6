use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};
use tracing::instrument;

use vendora_core::{DateRange, OrderId, StoreError, UserId};
use vendora_orders::{LineItem, Order, OrderStatus, OrderStore};

use super::map_sqlx_error;

const SELECT_ORDER: &str = "SELECT id, user_id, status, items, created_at, updated_at FROM orders";

/// Postgres-backed order store.
///
/// Line items are denormalized into a JSONB `items` column; every query maps
/// rows through [`OrderRow`] so a malformed row surfaces as a decode error
/// instead of a panic.
#[derive(Debug, Clone)]
pub struct PostgresOrderStore {
    pool: Arc<PgPool>,
}

impl PostgresOrderStore {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool: Arc::new(pool),
        }
    }
}

#[async_trait]
impl OrderStore for PostgresOrderStore {
    #[instrument(skip(self), err)]
    async fn find_completed_in_range(&self, range: DateRange) -> Result<Vec<Order>, StoreError> {
        let rows = sqlx::query_as::<_, OrderRow>(&format!(
            "{SELECT_ORDER} WHERE status = $1 AND created_at >= $2 AND created_at <= $3 \
             ORDER BY created_at ASC"
        ))
        .bind(OrderStatus::Completed.as_str())
        .bind(range.start())
        .bind(range.end())
        .fetch_all(&*self.pool)
        .await
        .map_err(|e| map_sqlx_error("find_completed_in_range", e))?;

        rows.into_iter().map(Order::try_from).collect()
    }

    #[instrument(skip(self), err)]
    async fn list_for_user(&self, user_id: UserId) -> Result<Vec<Order>, StoreError> {
        let rows = sqlx::query_as::<_, OrderRow>(&format!(
            "{SELECT_ORDER} WHERE user_id = $1 ORDER BY created_at ASC"
        ))
        .bind(user_id.as_uuid())
        .fetch_all(&*self.pool)
        .await
        .map_err(|e| map_sqlx_error("list_for_user", e))?;

        rows.into_iter().map(Order::try_from).collect()
    }

    #[instrument(skip(self), err)]
    async fn find_for_user(
        &self,
        order_id: OrderId,
        user_id: UserId,
    ) -> Result<Option<Order>, StoreError> {
        let row = sqlx::query_as::<_, OrderRow>(&format!(
            "{SELECT_ORDER} WHERE id = $1 AND user_id = $2"
        ))
        .bind(order_id.as_uuid())
        .bind(user_id.as_uuid())
        .fetch_optional(&*self.pool)
        .await
        .map_err(|e| map_sqlx_error("find_for_user", e))?;

        row.map(Order::try_from).transpose()
    }

    #[instrument(skip(self), err)]
    async fn list_all(&self) -> Result<Vec<Order>, StoreError> {
        let rows = sqlx::query_as::<_, OrderRow>(&format!("{SELECT_ORDER} ORDER BY created_at ASC"))
            .fetch_all(&*self.pool)
            .await
            .map_err(|e| map_sqlx_error("list_all", e))?;

        rows.into_iter().map(Order::try_from).collect()
    }

    #[instrument(skip(self), err)]
    async fn update_status(
        &self,
        order_id: OrderId,
        status: OrderStatus,
    ) -> Result<Option<Order>, StoreError> {
        let row = sqlx::query_as::<_, OrderRow>(
            "UPDATE orders SET status = $2, updated_at = NOW() WHERE id = $1 \
             RETURNING id, user_id, status, items, created_at, updated_at",
        )
        .bind(order_id.as_uuid())
        .bind(status.as_str())
        .fetch_optional(&*self.pool)
        .await
        .map_err(|e| map_sqlx_error("update_status", e))?;

        row.map(Order::try_from).transpose()
    }
}

// SQLx row type

#[derive(Debug)]
struct OrderRow {
    id: uuid::Uuid,
    user_id: uuid::Uuid,
    status: String,
    items: serde_json::Value,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl<'r> sqlx::FromRow<'r, sqlx::postgres::PgRow> for OrderRow {
    fn from_row(row: &'r sqlx::postgres::PgRow) -> Result<Self, sqlx::Error> {
        Ok(OrderRow {
            id: row.try_get("id")?,
            user_id: row.try_get("user_id")?,
            status: row.try_get("status")?,
            items: row.try_get("items")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

impl TryFrom<OrderRow> for Order {
    type Error = StoreError;

    fn try_from(row: OrderRow) -> Result<Self, Self::Error> {
        let status: OrderStatus = row
            .status
            .parse()
            .map_err(|e| StoreError::decode("order", format!("{e}")))?;
        let items: Vec<LineItem> = serde_json::from_value(row.items)
            .map_err(|e| StoreError::decode("order", format!("bad items column: {e}")))?;

        Ok(Order {
            id: OrderId::from_uuid(row.id),
            user_id: UserId::from_uuid(row.user_id),
            status,
            items,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}
