use actix_web::{post, web};
use std::sync::Arc;

use crate::db::database_service::DatabaseService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::stolen_car::{RStolenCarCreate, StolenCarRes};

#[post("/")]
async fn report_stolen_car(
    db: web::Data<Arc<DatabaseService>>,
    user: web::ReqData<entity::user::Model>,
    body: web::Json<RStolenCarCreate>,
) -> ApiResult<StolenCarRes> {
    if body.plate_number.trim().is_empty() {
        return Err(AppError::Validation("plate_number is required".to_string()));
    }
    let report = db.create_stolen_car_report(user.id, body.into_inner()).await?;
    Ok(ApiResponse::Created(report.into()))
}
