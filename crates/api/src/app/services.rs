use std::sync::Arc;

use vendora_infra::{InMemoryOrderStore, InMemoryProductStore, PostgresOrderStore, PostgresProductStore};
use vendora_orders::OrderStore;
use vendora_products::ProductStore;
use vendora_stats::OwnershipLookup;

/// Shared handles the handlers pull out of the request extensions.
///
/// Both store backends hide behind the domain ports, so swapping
/// Postgres for in-memory is a wiring decision, not a handler change.
#[derive(Clone)]
pub struct AppServices {
    orders: Arc<dyn OrderStore>,
    products: Arc<dyn ProductStore>,
    ownership_lookup: OwnershipLookup,
}

impl AppServices {
    pub fn new(
        orders: Arc<dyn OrderStore>,
        products: Arc<dyn ProductStore>,
        ownership_lookup: OwnershipLookup,
    ) -> Self {
        Self {
            orders,
            products,
            ownership_lookup,
        }
    }

    pub fn orders(&self) -> &dyn OrderStore {
        self.orders.as_ref()
    }

    pub fn products(&self) -> &dyn ProductStore {
        self.products.as_ref()
    }

    pub fn ownership_lookup(&self) -> OwnershipLookup {
        self.ownership_lookup
    }
}

pub async fn build_services() -> AppServices {
    let ownership_lookup = ownership_lookup_from_env();

    let use_persistent = std::env::var("USE_PERSISTENT_STORES")
        .unwrap_or_else(|_| "false".to_string())
        .parse::<bool>()
        .unwrap_or(false);

    if use_persistent {
        return build_persistent_services(ownership_lookup).await;
    }

    build_in_memory_services(ownership_lookup)
}

fn build_in_memory_services(ownership_lookup: OwnershipLookup) -> AppServices {
    tracing::info!("using in-memory stores (set USE_PERSISTENT_STORES=true for Postgres)");

    AppServices::new(
        Arc::new(InMemoryOrderStore::new()),
        Arc::new(InMemoryProductStore::new()),
        ownership_lookup,
    )
}

async fn build_persistent_services(ownership_lookup: OwnershipLookup) -> AppServices {
    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set when USE_PERSISTENT_STORES=true");

    let pool = sqlx::PgPool::connect(&database_url)
        .await
        .expect("failed to connect to Postgres");

    tracing::info!("using Postgres stores");

    AppServices::new(
        Arc::new(PostgresOrderStore::new(pool.clone())),
        Arc::new(PostgresProductStore::new(pool)),
        ownership_lookup,
    )
}

fn ownership_lookup_from_env() -> OwnershipLookup {
    match std::env::var("STATS_OWNERSHIP_LOOKUP") {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!(
                value = %raw,
                "unrecognized STATS_OWNERSHIP_LOOKUP, expected per-item or batched; using batched"
            );
            OwnershipLookup::default()
        }),
        Err(_) => OwnershipLookup::default(),
    }
}
