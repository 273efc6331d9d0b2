//! Signed, time-bounded access and refresh tokens.
//!
//! Tokens are HS256 JWTs carrying a strongly-typed claim set. Validity is
//! purely cryptographic plus an expiry check; nothing is persisted server
//! side. Verification accepts HS256 only, so a token signed with another
//! algorithm is rejected outright.

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use cartwheel_core::{Email, UserId};

/// Access tokens live 15 minutes.
pub const ACCESS_TOKEN_TTL_SECS: i64 = 15 * 60;

/// Refresh tokens live 7 days.
pub const REFRESH_TOKEN_TTL_SECS: i64 = 7 * 24 * 60 * 60;

/// Errors from token operations.
#[derive(Debug, Error)]
pub enum TokenError {
    /// Signing a new token failed.
    #[error("failed to sign token")]
    Signing(#[source] jsonwebtoken::errors::Error),

    /// The token is malformed, has a bad signature or algorithm, or is
    /// expired. Causes are deliberately not distinguished.
    #[error("invalid token")]
    Invalid,
}

/// Claim set carried by every token.
///
/// `email` is optional on decode: refresh tokens issued before the email
/// claim existed verify fine, and the caller falls back to a store lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Authenticated user.
    pub user_id: UserId,
    /// User's email at issue time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Expiry as a Unix timestamp (seconds).
    pub exp: i64,
}

/// Issues and validates signed tokens against the process-wide secret.
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Create a token service from the signing secret.
    #[must_use]
    pub fn new(secret: &SecretString) -> Self {
        let bytes = secret.expose_secret().as_bytes();
        Self {
            encoding: EncodingKey::from_secret(bytes),
            decoding: DecodingKey::from_secret(bytes),
            validation: Validation::new(Algorithm::HS256),
        }
    }

    /// Issue a short-lived access token.
    ///
    /// # Errors
    ///
    /// Returns `TokenError::Signing` if signing fails.
    pub fn issue_access(&self, user_id: UserId, email: &Email) -> Result<String, TokenError> {
        self.issue(user_id, email, ACCESS_TOKEN_TTL_SECS)
    }

    /// Issue a long-lived refresh token.
    ///
    /// # Errors
    ///
    /// Returns `TokenError::Signing` if signing fails.
    pub fn issue_refresh(&self, user_id: UserId, email: &Email) -> Result<String, TokenError> {
        self.issue(user_id, email, REFRESH_TOKEN_TTL_SECS)
    }

    fn issue(&self, user_id: UserId, email: &Email, ttl_secs: i64) -> Result<String, TokenError> {
        let claims = Claims {
            user_id,
            email: Some(email.as_str().to_owned()),
            exp: Utc::now().timestamp() + ttl_secs,
        };

        jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(TokenError::Signing)
    }

    /// Verify a token and return its claims.
    ///
    /// # Errors
    ///
    /// Returns `TokenError::Invalid` on signature mismatch, unexpected
    /// signing algorithm, malformed payload, or expiry in the past.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        jsonwebtoken::decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|_| TokenError::Invalid)
    }
}
