//! JWT session token issuer

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bl_shared::config::JwtConfig;

use crate::errors::{DomainError, DomainResult};

/// Claims carried by a session token
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject: the normalized email of the authenticated identity
    pub sub: String,
    /// The authenticated user's id
    pub uid: Uuid,
    /// Issuer
    pub iss: String,
    /// Issued-at, seconds since epoch
    pub iat: i64,
    /// Expiry, seconds since epoch
    pub exp: i64,
}

/// Collaborator contract for issuing session tokens
pub trait TokenIssuer: Send + Sync {
    /// Issue an opaque session token for an authenticated identity
    fn issue(&self, user_id: Uuid, email: &str) -> DomainResult<String>;

    /// Decode and validate a previously issued token
    fn decode(&self, token: &str) -> DomainResult<Claims>;
}

/// HS256 JWT token issuer
pub struct JwtTokenIssuer {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtTokenIssuer {
    /// Creates a new issuer from configuration
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        let mut validation = Validation::default();
        validation.set_issuer(&[&config.issuer]);
        validation.validate_exp = true;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Creates an issuer with default (development) configuration
    pub fn with_defaults() -> Self {
        Self::new(JwtConfig::default())
    }
}

impl TokenIssuer for JwtTokenIssuer {
    fn issue(&self, user_id: Uuid, email: &str) -> DomainResult<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: email.to_string(),
            uid: user_id,
            iss: self.config.issuer.clone(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(self.config.token_expiry)).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(|e| {
            DomainError::Internal {
                message: format!("Token generation failed: {}", e),
            }
        })
    }

    fn decode(&self, token: &str) -> DomainResult<Claims> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|_| DomainError::InvalidCredentials)
    }
}
