use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch},
    Json, Router,
};

use vendora_auth::UserRole;
use vendora_core::OrderId;
use vendora_orders::OrderStatus;

use crate::app::services::AppServices;
use crate::app::{dto, errors};
use crate::authz;
use crate::context::AuthContext;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_my_orders))
        .route("/all", get(list_all_orders))
        .route("/:order_id", get(get_my_order))
        .route("/:order_id/status", patch(update_order_status))
}

/// Buyer view: every order the caller has placed.
pub async fn list_my_orders(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(auth): Extension<AuthContext>,
) -> axum::response::Response {
    if let Err(denied) = authz::require_role(&auth, UserRole::Buyer) {
        return denied;
    }

    let orders = match services.orders().list_for_user(auth.user_id()).await {
        Ok(orders) => orders,
        Err(err) => return errors::store_error_to_response(err),
    };

    if orders.is_empty() {
        return errors::json_message(StatusCode::NOT_FOUND, "User has no orders");
    }

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "message": "Orders retrieved successfully",
            "orders": orders,
        })),
    )
        .into_response()
}

/// Admin view: every order in the store.
pub async fn list_all_orders(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(auth): Extension<AuthContext>,
) -> axum::response::Response {
    if let Err(denied) = authz::require_role(&auth, UserRole::Admin) {
        return denied;
    }

    let orders = match services.orders().list_all().await {
        Ok(orders) => orders,
        Err(err) => return errors::store_error_to_response(err),
    };

    if orders.is_empty() {
        return errors::json_message(StatusCode::NOT_FOUND, "No orders found");
    }

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "message": "Orders retrieved successfully",
            "orders": orders,
        })),
    )
        .into_response()
}

/// Buyer view of a single order, scoped to the caller's own orders.
pub async fn get_my_order(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(auth): Extension<AuthContext>,
    Path(order_id): Path<String>,
) -> axum::response::Response {
    if let Err(denied) = authz::require_role(&auth, UserRole::Buyer) {
        return denied;
    }

    let order_id: OrderId = match order_id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_message(StatusCode::BAD_REQUEST, "Invalid order id"),
    };

    let found = match services.orders().find_for_user(order_id, auth.user_id()).await {
        Ok(found) => found,
        Err(err) => return errors::store_error_to_response(err),
    };

    match found {
        Some(order) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "message": "Order retrieved successfully",
                "order": order,
            })),
        )
            .into_response(),
        None => errors::json_message(StatusCode::NOT_FOUND, "Order not found"),
    }
}

/// Admin action: move an order to a new lifecycle status.
pub async fn update_order_status(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(auth): Extension<AuthContext>,
    Path(order_id): Path<String>,
    Json(body): Json<dto::UpdateOrderStatusRequest>,
) -> axum::response::Response {
    if let Err(denied) = authz::require_role(&auth, UserRole::Admin) {
        return denied;
    }

    let order_id: OrderId = match order_id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_message(StatusCode::BAD_REQUEST, "Invalid order id"),
    };

    let status: OrderStatus = match body.status.parse() {
        Ok(v) => v,
        Err(err) => return errors::json_message(StatusCode::BAD_REQUEST, err.to_string()),
    };

    let updated = match services.orders().update_status(order_id, status).await {
        Ok(updated) => updated,
        Err(err) => return errors::store_error_to_response(err),
    };

    match updated {
        Some(order) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "message": "Order status updated successfully",
                "order": order,
            })),
        )
            .into_response(),
        None => errors::json_message(StatusCode::NOT_FOUND, "Order not found"),
    }
}
