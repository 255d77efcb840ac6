use core::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use vendora_core::{DomainError, OrderId, ProductId, UserId};

/// Order status lifecycle.
///
/// The wire form is the capitalized variant name (`"Pending"`, `"Completed"`,
/// ...), both in stored rows and in API payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    Paid,
    Shipping,
    Delivered,
    Completed,
    Cancelled,
    Failed,
}

impl OrderStatus {
    /// Accepted literals, in lifecycle order. Used in parse error messages.
    pub const ACCEPTED: &'static str =
        "Pending, Paid, Shipping, Delivered, Completed, Cancelled, Failed";

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Paid => "Paid",
            OrderStatus::Shipping => "Shipping",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Completed => "Completed",
            OrderStatus::Cancelled => "Cancelled",
            OrderStatus::Failed => "Failed",
        }
    }
}

impl core::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(OrderStatus::Pending),
            "Paid" => Ok(OrderStatus::Paid),
            "Shipping" => Ok(OrderStatus::Shipping),
            "Delivered" => Ok(OrderStatus::Delivered),
            "Completed" => Ok(OrderStatus::Completed),
            "Cancelled" => Ok(OrderStatus::Cancelled),
            "Failed" => Ok(OrderStatus::Failed),
            other => Err(DomainError::validation(format!(
                "unknown order status '{}'; expected one of {}",
                other,
                OrderStatus::ACCEPTED
            ))),
        }
    }
}

/// One purchased product inside an order, denormalized at checkout time.
///
/// `price` is the unit price at purchase; later product edits never change it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub product_id: ProductId,
    pub name: String,
    pub price: f64,
    pub quantity: i64,
    #[serde(default)]
    pub images: Vec<String>,
}

/// Order read model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub status: OrderStatus,
    pub items: Vec<LineItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// A freshly placed order: `Pending`, timestamps pinned to `placed_at`.
    pub fn new(user_id: UserId, items: Vec<LineItem>, placed_at: DateTime<Utc>) -> Self {
        Self {
            id: OrderId::new(),
            user_id,
            status: OrderStatus::Pending,
            items,
            created_at: placed_at,
            updated_at: placed_at,
        }
    }

    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.status = status;
        self
    }

    pub fn is_completed(&self) -> bool {
        matches!(self.status, OrderStatus::Completed)
    }
}
