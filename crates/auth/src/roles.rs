use core::str::FromStr;

use serde::{Deserialize, Serialize};

use vendora_core::DomainError;

/// Account role carried in token claims.
///
/// The wire form is the lowercase literal (`"admin"`, `"buyer"`, `"seller"`),
/// both in tokens and in API responses.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Buyer,
    Seller,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Buyer => "buyer",
            UserRole::Seller => "seller",
        }
    }
}

impl core::fmt::Display for UserRole {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(UserRole::Admin),
            "buyer" => Ok(UserRole::Buyer),
            "seller" => Ok(UserRole::Seller),
            other => Err(DomainError::validation(format!("unknown role '{other}'"))),
        }
    }
}
