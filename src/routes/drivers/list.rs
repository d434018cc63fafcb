use actix_web::{get, web};
use std::sync::Arc;

use crate::db::database_service::DatabaseService;
use crate::types::driver::{DriverRes, Pagination};
use crate::types::response::{ApiResponse, ApiResult};

#[get("/")]
async fn list_drivers(
    db: web::Data<Arc<DatabaseService>>,
    page: web::Query<Pagination>,
) -> ApiResult<Vec<DriverRes>> {
    Ok(ApiResponse::Ok(db.list_drivers(page.into_inner()).await?))
}
