use core::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use vendora_core::{DomainError, ProductId, UserId};

/// Product status lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    Available,
    Unavailable,
}

impl ProductStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductStatus::Available => "available",
            ProductStatus::Unavailable => "unavailable",
        }
    }
}

impl core::fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "available" => Ok(ProductStatus::Available),
            "unavailable" => Ok(ProductStatus::Unavailable),
            other => Err(DomainError::validation(format!(
                "unknown product status '{other}'; expected 'available' or 'unavailable'"
            ))),
        }
    }
}

/// Catalog read model. Every product belongs to exactly one seller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub seller_id: UserId,
    pub name: String,
    pub price: f64,
    pub status: ProductStatus,
    pub expiry_date: DateTime<Utc>,
    #[serde(default)]
    pub images: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Whether the product shows up in the public listing at `now`:
    /// marked available and not yet expired (strict comparison).
    pub fn is_listable(&self, now: DateTime<Utc>) -> bool {
        self.status == ProductStatus::Available && self.expiry_date > now
    }
}
