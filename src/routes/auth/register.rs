use actix_web::{post, web};
use entity::Role;
use std::sync::Arc;

use crate::db::database_service::DatabaseService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{DBUserCreate, RUserCreate, UserRes};
use crate::utils::password::hash_password;

/// Self-service signup. Always produces a generic `user` account.
#[post("")]
async fn register(
    db: web::Data<Arc<DatabaseService>>,
    body: web::Json<RUserCreate>,
) -> ApiResult<UserRes> {
    let RUserCreate { username, password } = body.into_inner();
    if username.trim().is_empty() || password.is_empty() {
        return Err(AppError::Validation("username and password are required".to_string()));
    }

    let user = db
        .create_user(DBUserCreate {
            username,
            hashed_password: hash_password(&password)?,
            role: Role::User,
            driver_id: None,
        })
        .await?;

    Ok(ApiResponse::Created(UserRes::new(user, vec![])))
}
