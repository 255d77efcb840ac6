use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};
use tracing::instrument;

use vendora_core::{ProductId, StoreError, UserId};
use vendora_products::{Product, ProductStatus, ProductStore};

use super::map_sqlx_error;

const SELECT_PRODUCT: &str =
    "SELECT id, seller_id, name, price, status, expiry_date, images, created_at FROM products";

/// Postgres-backed product store.
#[derive(Debug, Clone)]
pub struct PostgresProductStore {
    pool: Arc<PgPool>,
}

impl PostgresProductStore {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool: Arc::new(pool),
        }
    }
}

#[async_trait]
impl ProductStore for PostgresProductStore {
    #[instrument(skip(self), err)]
    async fn find_owned_by_seller(
        &self,
        product_id: ProductId,
        seller_id: UserId,
    ) -> Result<Option<Product>, StoreError> {
        let row = sqlx::query_as::<_, ProductRow>(&format!(
            "{SELECT_PRODUCT} WHERE id = $1 AND seller_id = $2"
        ))
        .bind(product_id.as_uuid())
        .bind(seller_id.as_uuid())
        .fetch_optional(&*self.pool)
        .await
        .map_err(|e| map_sqlx_error("find_owned_by_seller", e))?;

        row.map(Product::try_from).transpose()
    }

    #[instrument(skip(self, product_ids), fields(seller_id = %seller_id, candidates = product_ids.len()), err)]
    async fn filter_owned_by_seller(
        &self,
        seller_id: UserId,
        product_ids: &[ProductId],
    ) -> Result<Vec<ProductId>, StoreError> {
        let candidates: Vec<uuid::Uuid> = product_ids.iter().map(|id| *id.as_uuid()).collect();

        let owned = sqlx::query_scalar::<_, uuid::Uuid>(
            "SELECT id FROM products WHERE seller_id = $1 AND id = ANY($2)",
        )
        .bind(seller_id.as_uuid())
        .bind(&candidates)
        .fetch_all(&*self.pool)
        .await
        .map_err(|e| map_sqlx_error("filter_owned_by_seller", e))?;

        Ok(owned.into_iter().map(ProductId::from_uuid).collect())
    }

    #[instrument(skip(self), err)]
    async fn list_available(
        &self,
        now: DateTime<Utc>,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Product>, StoreError> {
        let rows = sqlx::query_as::<_, ProductRow>(&format!(
            "{SELECT_PRODUCT} WHERE status = $1 AND expiry_date > $2 \
             ORDER BY created_at ASC OFFSET $3 LIMIT $4"
        ))
        .bind(ProductStatus::Available.as_str())
        .bind(now)
        .bind(offset)
        .bind(limit)
        .fetch_all(&*self.pool)
        .await
        .map_err(|e| map_sqlx_error("list_available", e))?;

        rows.into_iter().map(Product::try_from).collect()
    }

    #[instrument(skip(self), err)]
    async fn count_available(&self, now: DateTime<Utc>) -> Result<i64, StoreError> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM products WHERE status = $1 AND expiry_date > $2",
        )
        .bind(ProductStatus::Available.as_str())
        .bind(now)
        .fetch_one(&*self.pool)
        .await
        .map_err(|e| map_sqlx_error("count_available", e))
    }
}

// SQLx row type

#[derive(Debug)]
struct ProductRow {
    id: uuid::Uuid,
    seller_id: uuid::Uuid,
    name: String,
    price: f64,
    status: String,
    expiry_date: DateTime<Utc>,
    images: serde_json::Value,
    created_at: DateTime<Utc>,
}

impl<'r> sqlx::FromRow<'r, sqlx::postgres::PgRow> for ProductRow {
    fn from_row(row: &'r sqlx::postgres::PgRow) -> Result<Self, sqlx::Error> {
        Ok(ProductRow {
            id: row.try_get("id")?,
            seller_id: row.try_get("seller_id")?,
            name: row.try_get("name")?,
            price: row.try_get("price")?,
            status: row.try_get("status")?,
            expiry_date: row.try_get("expiry_date")?,
            images: row.try_get("images")?,
            created_at: row.try_get("created_at")?,
        })
    }
}

impl TryFrom<ProductRow> for Product {
    type Error = StoreError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        let status: ProductStatus = row
            .status
            .parse()
            .map_err(|e| StoreError::decode("product", format!("{e}")))?;
        let images: Vec<String> = serde_json::from_value(row.images)
            .map_err(|e| StoreError::decode("product", format!("bad images column: {e}")))?;

        Ok(Product {
            id: ProductId::from_uuid(row.id),
            seller_id: UserId::from_uuid(row.seller_id),
            name: row.name,
            price: row.price,
            status,
            expiry_date: row.expiry_date,
            images,
            created_at: row.created_at,
        })
    }
}
