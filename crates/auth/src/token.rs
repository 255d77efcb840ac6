use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use thiserror::Error;

use crate::claims::{Claims, TokenValidationError, validate_claims};

/// Errors surfaced when encoding or verifying a bearer token.
#[derive(Debug, Error)]
pub enum TokenError {
    /// The token is malformed, badly signed, or uses the wrong algorithm.
    #[error("token rejected: {0}")]
    Rejected(#[from] jsonwebtoken::errors::Error),

    /// The signature checked out but the claims' time window does not hold now.
    #[error(transparent)]
    Claims(#[from] TokenValidationError),
}

/// Verification boundary used by transport layers.
///
/// Object-safe so HTTP middleware can hold implementations behind `Arc<dyn _>`.
pub trait TokenVerifier: Send + Sync {
    fn verify(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, TokenError>;
}

/// HMAC-SHA256 token codec. Both ends of the token lifecycle (minting at
/// login, verifying at the API edge) share this type.
pub struct Hs256TokenCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl Hs256TokenCodec {
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Time-window checks happen in `validate_claims` against an explicit
        // `now`, so decoding itself stays deterministic.
        validation.validate_exp = false;
        validation.required_spec_claims.clear();
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
        }
    }

    pub fn encode(&self, claims: &Claims) -> Result<String, TokenError> {
        let token = jsonwebtoken::encode(&Header::new(Algorithm::HS256), claims, &self.encoding)?;
        Ok(token)
    }

    /// Decode and signature-check a token without validating its time window.
    pub fn decode(&self, token: &str) -> Result<Claims, TokenError> {
        let data = jsonwebtoken::decode::<Claims>(token, &self.decoding, &self.validation)?;
        Ok(data.claims)
    }
}

impl TokenVerifier for Hs256TokenCodec {
    fn verify(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, TokenError> {
        let claims = self.decode(token)?;
        validate_claims(&claims, now)?;
        Ok(claims)
    }
}
