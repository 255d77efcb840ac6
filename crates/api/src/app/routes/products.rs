use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;

use vendora_products::PageParams;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

/// Public catalog listing: available, unexpired products, paginated.
///
/// No auth required; this is the storefront view.
pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::PageQuery>,
) -> axum::response::Response {
    let params = match PageParams::from_query(query.page.as_deref(), query.limit.as_deref()) {
        Ok(params) => params,
        Err(_) => return errors::json_message(StatusCode::BAD_REQUEST, "Invalid pagination parameters"),
    };

    let now = Utc::now();

    let total = match services.products().count_available(now).await {
        Ok(total) => total,
        Err(err) => return errors::catalog_error_to_response(err),
    };

    let products = match services
        .products()
        .list_available(now, params.offset(), params.limit())
        .await
    {
        Ok(products) => products,
        Err(err) => return errors::catalog_error_to_response(err),
    };

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "message": "Products retrieved successfully",
            "products": products,
            "pagination": params.page_info(total),
        })),
    )
        .into_response()
}
