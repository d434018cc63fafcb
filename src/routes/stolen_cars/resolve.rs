use actix_web::{put, web};
use entity::ReportStatus;
use std::sync::Arc;

use crate::db::database_service::DatabaseService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::stolen_car::StolenCarRes;

/// Closes a report. Closed reports no longer take sightings.
#[put("/found")]
async fn mark_found(
    db: web::Data<Arc<DatabaseService>>,
    path: web::Path<i32>,
) -> ApiResult<StolenCarRes> {
    let report = db.set_report_status(path.into_inner(), ReportStatus::Found).await?;
    Ok(ApiResponse::Ok(report.into()))
}
