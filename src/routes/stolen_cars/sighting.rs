use actix_web::{post, web};
use std::sync::Arc;
use tracing::info;

use crate::db::database_service::DatabaseService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::stolen_car::{RSighting, SightingRes};

/// Unauthenticated: cameras and passers-by report where a plate was seen.
#[post("/")]
async fn report_sighting(
    db: web::Data<Arc<DatabaseService>>,
    query: web::Query<RSighting>,
) -> ApiResult<SightingRes> {
    let found = db.record_sighting(&query.plate_number, &query.location).await?;

    let message = if found {
        info!("stolen car {} sighted", query.plate_number);
        "Stolen car sighted! Location updated."
    } else {
        "Car not reported stolen."
    };

    Ok(ApiResponse::Ok(SightingRes { message: message.to_string(), found }))
}
