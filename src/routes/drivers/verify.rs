use actix_web::{get, web};
use std::sync::Arc;

use crate::db::database_service::DatabaseService;
use crate::types::driver::DriverRes;
use crate::types::response::{ApiResponse, ApiResult};

#[get("/{plate_number}")]
async fn verify_plate(
    db: web::Data<Arc<DatabaseService>>,
    path: web::Path<String>,
) -> ApiResult<DriverRes> {
    Ok(ApiResponse::Ok(db.get_driver_by_plate(&path).await?))
}
