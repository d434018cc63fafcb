use actix_web::{post, web};
use std::sync::Arc;
use tracing::info;

use crate::db::database_service::DatabaseService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::token::{RLogin, TokenRes};
use crate::utils::token::TokenService;

/// OAuth2 password-style login. Extra form fields such as `grant_type` are ignored.
#[post("")]
async fn token(
    db: web::Data<Arc<DatabaseService>>,
    tokens: web::Data<TokenService>,
    form: web::Form<RLogin>,
) -> ApiResult<TokenRes> {
    let user = db.authenticate_user(&form.username, &form.password).await?;
    let access_token = tokens.issue(&user.username, user.role)?;
    info!("issued {} token for {}", user.role, user.username);

    Ok(ApiResponse::Ok(TokenRes {
        access_token,
        token_type: "bearer".to_string(),
        role: user.role,
        username: user.username,
    }))
}
