use chrono::{Duration, Utc};
use entity::Role;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use tracing::debug;

use crate::config::AuthConfig;
use crate::types::{error::AppError, token::Claims};

/// Issues and verifies HS256 bearer tokens. There is no revocation list:
/// a token stays valid until `exp` whatever happens to its user.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl TokenService {
    pub fn new(secret: &str, ttl_minutes: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl: Duration::minutes(ttl_minutes),
        }
    }

    pub fn from_config(auth: &AuthConfig) -> Self {
        Self::new(&auth.secret_key, auth.token_ttl_minutes)
    }

    pub fn issue(&self, username: &str, role: Role) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: username.to_string(),
            role,
            iat: now.timestamp() as usize,
            exp: (now + self.ttl).timestamp() as usize,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| AppError::Internal(format!("signing token failed: {e}")))
    }

    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        let claims = decode::<Claims>(token, &self.decoding, &Validation::new(Algorithm::HS256))
            .map_err(|e| {
                debug!("rejected bearer token: {e}");
                AppError::Unauthorized
            })?
            .claims;

        if claims.sub.is_empty() {
            return Err(AppError::Unauthorized);
        }
        Ok(claims)
    }
}
