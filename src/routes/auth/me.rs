use actix_web::{get, web};
use entity::Role;
use std::sync::Arc;

use crate::db::database_service::DatabaseService;
use crate::types::driver::DriverRes;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::UserRes;

#[get("")]
async fn me(
    db: web::Data<Arc<DatabaseService>>,
    user: web::ReqData<entity::user::Model>,
) -> ApiResult<UserRes> {
    let user = user.into_inner();
    let reports = db.list_reports_by_reporter(user.id).await?;
    Ok(ApiResponse::Ok(UserRes::new(user, reports)))
}

#[get("")]
async fn my_driver_profile(
    db: web::Data<Arc<DatabaseService>>,
    user: web::ReqData<entity::user::Model>,
) -> ApiResult<DriverRes> {
    let driver_id = match (user.role, user.driver_id) {
        (Role::Driver, Some(id)) => id,
        _ => return Err(AppError::NotFound("Driver profile not found".to_string())),
    };
    Ok(ApiResponse::Ok(db.get_driver(driver_id).await?))
}
