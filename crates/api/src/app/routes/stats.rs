use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use vendora_auth::UserRole;
use vendora_core::DateRange;
use vendora_stats::compute_seller_stats;

use crate::app::services::AppServices;
use crate::app::{dto, errors};
use crate::authz;
use crate::context::AuthContext;

pub fn router() -> Router {
    Router::new().route("/seller-stats", get(seller_stats))
}

/// Seller revenue over a date window: total amount, total sold items, and
/// the contributing line items in encounter order.
pub async fn seller_stats(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(auth): Extension<AuthContext>,
    Query(query): Query<dto::StatsQuery>,
) -> axum::response::Response {
    if let Err(denied) = authz::require_role(&auth, UserRole::Seller) {
        return denied;
    }

    // Presence first, format second; neither failure touches a store. A
    // blank value counts as absent, not as a malformed date.
    let (Some(raw_start), Some(raw_end)) = (
        dto::present_param(query.start_date.as_deref()),
        dto::present_param(query.end_date.as_deref()),
    ) else {
        return errors::json_message(StatusCode::BAD_REQUEST, "startDate and endDate are required");
    };

    let (Some(start), Some(end)) = (dto::parse_date_param(raw_start), dto::parse_date_param(raw_end))
    else {
        return errors::json_message(
            StatusCode::BAD_REQUEST,
            "startDate and endDate must be ISO-8601 dates",
        );
    };

    let range = DateRange::new(start, end);

    let stats = match compute_seller_stats(
        services.orders(),
        services.products(),
        auth.user_id(),
        range,
        services.ownership_lookup(),
    )
    .await
    {
        Ok(stats) => stats,
        Err(err) => return errors::stats_error_to_response(err),
    };

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "message": "Seller stats retrieved successfully",
            "totalAmount": stats.total_amount,
            "totalSoldItems": stats.total_sold_items,
            "orders": stats.lines,
        })),
    )
        .into_response()
}
