use actix_web::get;
use serde::{Deserialize, Serialize};

use crate::types::response::{ApiResponse, ApiResult};

#[derive(Serialize, Deserialize)]
pub struct Response {}

#[derive(Serialize, Deserialize)]
pub struct RootRes {
    pub message: String,
}

#[get("")]
async fn health(
    _req: actix_web::HttpRequest
) -> ApiResult<Response> {
    Ok(ApiResponse::EmptyOk)
}

#[get("/")]
async fn root() -> ApiResult<RootRes> {
    Ok(ApiResponse::Ok(RootRes {
        message: "Smart Traffic Violation System API is running".to_string(),
    }))
}
