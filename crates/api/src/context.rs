use vendora_auth::UserRole;
use vendora_core::UserId;

/// Authenticated identity for a request.
///
/// This is immutable and must be present for all protected routes.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct AuthContext {
    user_id: UserId,
    role: UserRole,
}

impl AuthContext {
    pub fn new(user_id: UserId, role: UserRole) -> Self {
        Self { user_id, role }
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn role(&self) -> UserRole {
        self.role
    }
}
