//! `vendora-auth`: authentication boundary for the marketplace API.
//!
//! Claims validation is pure and deterministic; only the token codec touches
//! cryptography. The crate stays decoupled from HTTP and storage.

pub mod claims;
pub mod roles;
pub mod token;

pub use claims::{Claims, TokenValidationError, validate_claims};
pub use roles::UserRole;
pub use token::{Hs256TokenCodec, TokenError, TokenVerifier};
