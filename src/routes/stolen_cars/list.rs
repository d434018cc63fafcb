use actix_web::{get, web};
use std::sync::Arc;

use crate::db::database_service::DatabaseService;
use crate::types::driver::Pagination;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::stolen_car::StolenCarRes;

#[get("/")]
async fn list_stolen_cars(
    db: web::Data<Arc<DatabaseService>>,
    page: web::Query<Pagination>,
) -> ApiResult<Vec<StolenCarRes>> {
    let reports = db.list_stolen_car_reports(page.into_inner()).await?;
    Ok(ApiResponse::Ok(reports.into_iter().map(StolenCarRes::from).collect()))
}
