use actix_web::{get, web};
use std::sync::Arc;

use crate::db::database_service::DatabaseService;
use crate::types::driver::DriverRes;
use crate::types::response::{ApiResponse, ApiResult};

/// Target of the QR code printed for a driver.
#[get("/{driver_id}")]
async fn public_driver_profile(
    db: web::Data<Arc<DatabaseService>>,
    path: web::Path<i32>,
) -> ApiResult<DriverRes> {
    Ok(ApiResponse::Ok(db.get_driver(path.into_inner()).await?))
}
