use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use uuid::Uuid;

#[derive(Debug)]
pub enum TokenError {
    TokenExpired,
    TokenNotYetValid,
    InvalidSignature,
    MalformedToken,
    EncodingError(String),
}

impl fmt::Display for TokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenError::TokenExpired => write!(f, "Token has expired"),
            TokenError::TokenNotYetValid => write!(f, "Token is not yet valid"),
            TokenError::InvalidSignature => write!(f, "Invalid token signature"),
            TokenError::MalformedToken => write!(f, "Malformed token"),
            TokenError::EncodingError(msg) => write!(f, "Token encoding error: {}", msg),
        }
    }
}
impl Error for TokenError {}

/// Structure for JWT Claims
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: Uuid,          // Member ID
    pub exp: i64,           // Expiration timestamp
    pub iat: i64,           // Issued at timestamp
    pub nbf: i64,           // Not before timestamp
    pub token_type: String, // Currently always "access"
}

pub trait TokenProvider: Send + Sync {
    fn generate_access_token(&self, member_id: Uuid) -> Result<String, TokenError>;
    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError>;
}
