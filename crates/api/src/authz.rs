//! Role guard applied at the handler boundary, before any store access.

use axum::http::StatusCode;
use axum::response::Response;

use vendora_auth::UserRole;

use crate::app::errors;
use crate::context::AuthContext;

/// Require the caller to hold exactly `role`.
///
/// Checks are strict equality: admin tokens do not satisfy buyer or seller
/// routes, matching how each endpoint is scoped to one audience.
pub fn require_role(auth: &AuthContext, role: UserRole) -> Result<(), Response> {
    if auth.role() == role {
        return Ok(());
    }

    Err(errors::json_message(StatusCode::FORBIDDEN, "Forbidden"))
}
