use core::str::FromStr;
use std::collections::HashSet;

use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

use vendora_core::{DateRange, DomainError, ProductId, StoreError, UserId};
use vendora_orders::{LineItem, Order, OrderStore};
use vendora_products::ProductStore;

use crate::money::{line_amount, to_decimal, to_f64};

/// How line-item ownership is resolved against the catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OwnershipLookup {
    /// One catalog lookup per line item, awaited in encounter order.
    PerItem,
    /// A single membership query over the distinct product ids.
    #[default]
    Batched,
}

impl OwnershipLookup {
    pub fn as_str(&self) -> &'static str {
        match self {
            OwnershipLookup::PerItem => "per-item",
            OwnershipLookup::Batched => "batched",
        }
    }
}

impl core::fmt::Display for OwnershipLookup {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OwnershipLookup {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "per-item" => Ok(OwnershipLookup::PerItem),
            "batched" => Ok(OwnershipLookup::Batched),
            other => Err(DomainError::validation(format!(
                "unknown ownership lookup '{other}'; expected 'per-item' or 'batched'"
            ))),
        }
    }
}

/// One sold line attributed to the seller.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SellerStatLine {
    pub product_id: ProductId,
    pub name: String,
    pub price: f64,
    pub quantity: i64,
    pub images: Vec<String>,
    pub amount: f64,
}

impl SellerStatLine {
    fn from_item(item: &LineItem) -> Self {
        Self {
            product_id: item.product_id,
            name: item.name.clone(),
            price: item.price,
            quantity: item.quantity,
            images: item.images.clone(),
            amount: line_amount(item.price, item.quantity),
        }
    }
}

/// Aggregated revenue for one seller over a time window.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SellerStats {
    pub total_amount: f64,
    pub total_sold_items: i64,
    pub lines: Vec<SellerStatLine>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StatsError {
    /// No completed orders were created inside the window.
    #[error("no completed orders in the requested window")]
    NoOrdersInRange,

    /// Completed orders exist, but none of their items belong to the seller.
    #[error("no line items owned by the seller in the requested window")]
    NoSellerItems,

    /// A store failed; the message is surfaced to the caller verbatim.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Aggregate completed-order revenue for one seller over `range`.
///
/// Line items keep their encounter order: orders ascending by creation time,
/// items in stored order within each order. `total_amount` is summed in
/// `Decimal`, so it is exactly the sum of the (already rounded) line amounts.
pub async fn compute_seller_stats(
    orders: &dyn OrderStore,
    products: &dyn ProductStore,
    seller_id: UserId,
    range: DateRange,
    lookup: OwnershipLookup,
) -> Result<SellerStats, StatsError> {
    let completed = orders.find_completed_in_range(range).await?;
    if completed.is_empty() {
        return Err(StatsError::NoOrdersInRange);
    }

    let lines = match lookup {
        OwnershipLookup::PerItem => per_item_lines(products, seller_id, &completed).await?,
        OwnershipLookup::Batched => batched_lines(products, seller_id, &completed).await?,
    };
    if lines.is_empty() {
        return Err(StatsError::NoSellerItems);
    }

    let total_amount = to_f64(lines.iter().map(|l| to_decimal(l.amount)).sum::<Decimal>());
    let total_sold_items = lines.iter().map(|l| l.quantity).sum();

    Ok(SellerStats {
        total_amount,
        total_sold_items,
        lines,
    })
}

async fn per_item_lines(
    products: &dyn ProductStore,
    seller_id: UserId,
    completed: &[Order],
) -> Result<Vec<SellerStatLine>, StatsError> {
    let mut lines = Vec::new();
    for order in completed {
        for item in &order.items {
            if products
                .find_owned_by_seller(item.product_id, seller_id)
                .await?
                .is_some()
            {
                lines.push(SellerStatLine::from_item(item));
            }
        }
    }
    Ok(lines)
}

async fn batched_lines(
    products: &dyn ProductStore,
    seller_id: UserId,
    completed: &[Order],
) -> Result<Vec<SellerStatLine>, StatsError> {
    let mut seen = HashSet::new();
    let mut distinct = Vec::new();
    for order in completed {
        for item in &order.items {
            if seen.insert(item.product_id) {
                distinct.push(item.product_id);
            }
        }
    }
    if distinct.is_empty() {
        return Ok(Vec::new());
    }

    let owned: HashSet<ProductId> = products
        .filter_owned_by_seller(seller_id, &distinct)
        .await?
        .into_iter()
        .collect();

    let mut lines = Vec::new();
    for order in completed {
        for item in &order.items {
            if owned.contains(&item.product_id) {
                lines.push(SellerStatLine::from_item(item));
            }
        }
    }
    Ok(lines)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
