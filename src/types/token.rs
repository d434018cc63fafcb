use entity::Role;
use serde::{Deserialize, Serialize};

/// Payload signed into every bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,  // username
    pub role: Role,
    pub iat: usize,
    pub exp: usize,
}

#[derive(Deserialize)]
pub struct RLogin {
    pub username: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct TokenRes {
    pub access_token: String,
    pub token_type: String,
    pub role: Role,
    pub username: String,
}
