use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use vendora_core::StoreError;
use vendora_stats::StatsError;

/// Standard `{"message": …}` body used across the API.
pub fn json_message(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "message": message.into(),
        })),
    )
        .into_response()
}

/// Map an aggregation outcome onto the seller-stats response table.
pub fn stats_error_to_response(err: StatsError) -> axum::response::Response {
    match err {
        StatsError::NoOrdersInRange => {
            json_message(StatusCode::NOT_FOUND, "No orders found for the given time frame")
        }
        StatsError::NoSellerItems => json_message(
            StatusCode::NOT_FOUND,
            "No items found for the seller in the given time frame",
        ),
        StatsError::Store(err) => store_error_to_response(err),
    }
}

/// Order and stats endpoints surface the store's message verbatim in the
/// 500 body; the detail also lands in the log.
pub fn store_error_to_response(err: StoreError) -> axum::response::Response {
    tracing::error!(error = %err, "store failure");
    json_message(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
}

/// The catalog listing keeps its own 500 shape: a fixed message with the
/// store detail in a separate field.
pub fn catalog_error_to_response(err: StoreError) -> axum::response::Response {
    tracing::error!(error = %err, "catalog store failure");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        axum::Json(json!({
            "message": "Internal server error",
            "error": err.to_string(),
        })),
    )
        .into_response()
}
