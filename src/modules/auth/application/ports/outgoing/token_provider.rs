use serde::{Deserialize, Serialize};

use crate::modules::auth::application::domain::entities::AdminIdentity;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("Token has expired")]
    TokenExpired,

    #[error("Token is not yet valid")]
    TokenNotYetValid,

    #[error("Invalid token signature")]
    InvalidSignature,

    #[error("Invalid token issuer")]
    InvalidIssuer,

    #[error("Malformed token")]
    MalformedToken,

    #[error("Token encoding error: {0}")]
    EncodingError(String),
}

/// Structure for JWT Claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,  // admin username
    pub role: String, // always "admin" for issued tokens
    pub exp: i64,
    pub iat: i64,
    pub nbf: i64,
    pub iss: String,
}

pub trait TokenProvider: Send + Sync {
    fn generate_access_token(&self, identity: &AdminIdentity) -> Result<String, TokenError>;
    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError>;
    /// Lifetime of tokens produced by `generate_access_token`, in seconds.
    fn access_token_ttl(&self) -> i64;
}
