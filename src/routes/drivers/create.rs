use actix_multipart::form::MultipartForm;
use actix_web::{post, web};
use std::sync::Arc;
use tracing::info;

use crate::config::EnvConfig;
use crate::db::database_service::DatabaseService;
use crate::types::driver::{DriverRegistration, DriverRes, RDriverCreate};
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::uploads::{discard_photo, store_photo};

#[post("/")]
async fn create_driver(
    db: web::Data<Arc<DatabaseService>>,
    config: web::Data<EnvConfig>,
    admin: web::ReqData<entity::user::Model>,
    MultipartForm(form): MultipartForm<RDriverCreate>,
) -> ApiResult<DriverRes> {
    let required = [
        ("name", &form.name),
        ("national_id", &form.national_id),
        ("license_number", &form.license_number),
        ("plate_number", &form.plate_number),
    ];
    if let Some((field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
        return Err(AppError::Validation(format!("{field} is required")));
    }

    let national_id = form.national_id.into_inner();

    // Cheap rejection before anything touches the disk.
    if db.national_id_taken(&national_id).await? {
        return Err(AppError::BadRequest("Driver with this National ID already registered".to_string()));
    }

    let photo = store_photo(&config.uploads_dir, form.file.as_ref()).await?;

    let registration = DriverRegistration {
        name: form.name.into_inner(),
        national_id,
        license_number: form.license_number.into_inner(),
        plate_number: form.plate_number.into_inner(),
        car_model: form.car_model.into_inner(),
        car_color: form.car_color.into_inner(),
        photo_url: photo.as_ref().map(|p| p.relative_path.clone()),
    };

    match db.register_driver(registration).await {
        Ok(driver) => {
            info!("admin {} registered driver {}", admin.username, driver.id);
            Ok(ApiResponse::Created(driver))
        }
        Err(err) => {
            if let Some(photo) = &photo {
                discard_photo(photo);
            }
            Err(err)
        }
    }
}
