//! Signed session tokens.

use chrono::{TimeDelta, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::{Deserialize, Serialize};

use common::{AppError, AppResult, JwtConfig};
use domain::{AuthenticatedPrincipal, UserId};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// JWT claims payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Username of the principal
    pub sub: String,
    pub uid: UserId,
    pub exp: i64,
    pub iat: i64,
}

/// Produce an opaque token for an authenticated principal.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait TokenIssuer: Send + Sync {
    fn issue(&self, principal: &AuthenticatedPrincipal) -> AppResult<String>;
}

/// HS256 JWT issuer.
pub struct JwtIssuer {
    encoding_key: EncodingKey,
    expiration_hours: i64,
}

impl JwtIssuer {
    /// Create an issuer from configuration
    pub fn new(config: &JwtConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.secret_bytes()),
            expiration_hours: config.expiration_hours,
        }
    }
}

impl TokenIssuer for JwtIssuer {
    fn issue(&self, principal: &AuthenticatedPrincipal) -> AppResult<String> {
        let now = Utc::now();
        let expires_at = TimeDelta::try_hours(self.expiration_hours)
            .and_then(|lifetime| now.checked_add_signed(lifetime))
            .ok_or_else(|| {
                AppError::internal(format!(
                    "token lifetime of {} hours is out of range",
                    self.expiration_hours
                ))
            })?;

        let claims = Claims {
            sub: principal.username.clone(),
            uid: principal.id,
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)?;
        tracing::debug!(user_id = principal.id, "token issued");
        Ok(token)
    }
}
