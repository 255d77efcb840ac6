use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};

use crate::context::AuthContext;

pub async fn health() -> StatusCode {
    StatusCode::OK
}

pub async fn whoami(Extension(auth): Extension<AuthContext>) -> impl IntoResponse {
    Json(serde_json::json!({
        "userId": auth.user_id().to_string(),
        "role": auth.role().as_str(),
    }))
}
