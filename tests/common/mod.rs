#![allow(dead_code)]

use sea_orm::ConnectOptions;
use smart_traffic::config::{AuthConfig, EnvConfig};
use smart_traffic::db::database_service::DatabaseService;
use smart_traffic::utils::token::TokenService;
use std::sync::Arc;
use tempfile::TempDir;

pub mod client;

pub const TEST_SECRET: &str = "test-secret-key-12345";
pub const ADMIN_PASSWORD: &str = "admin123";

pub struct TestContext {
    pub db: Arc<DatabaseService>,
    pub config: EnvConfig,
    pub tokens: TokenService,
    pub _uploads: TempDir,
}

impl TestContext {
    pub async fn new() -> TestContext {
        let uploads = tempfile::tempdir().expect("Failed to create uploads dir");
        let config = get_test_config(&uploads);

        // One connection: every pooled connection would get its own in-memory database.
        let mut options = ConnectOptions::new(config.db_url.clone());
        options.max_connections(1).min_connections(1).sqlx_logging(false);

        let db = Arc::new(
            DatabaseService::connect(options)
                .await
                .expect("Failed to initialize DatabaseService")
        );

        TestContext {
            db,
            tokens: TokenService::from_config(&config.auth),
            config,
            _uploads: uploads,
        }
    }

    pub fn uploaded_files(&self) -> Vec<std::path::PathBuf> {
        std::fs::read_dir(&self.config.uploads_dir)
            .map(|entries| entries.filter_map(|e| e.ok()).map(|e| e.path()).collect())
            .unwrap_or_default()
    }
}

pub fn get_test_config(uploads: &TempDir) -> EnvConfig {
    EnvConfig {
        port: 8000,
        db_url: "sqlite::memory:".to_string(),
        auth: AuthConfig {
            secret_key: TEST_SECRET.to_string(),
            token_ttl_minutes: 30,
            admin_password: ADMIN_PASSWORD.to_string(),
        },
        uploads_dir: uploads.path().to_path_buf(),
    }
}

// Test data helpers
pub mod test_data {
    use smart_traffic::types::driver::DriverRegistration;

    pub fn sample_registration(national_id: &str, plate_number: &str) -> DriverRegistration {
        DriverRegistration {
            name: "Test Driver".to_string(),
            national_id: national_id.to_string(),
            license_number: format!("LIC-{national_id}"),
            plate_number: plate_number.to_string(),
            car_model: "Corolla".to_string(),
            car_color: "White".to_string(),
            photo_url: None,
        }
    }

    pub fn driver_form<'a>(national_id: &'a str, plate_number: &'a str, license: &'a str) -> Vec<(&'static str, &'a str)> {
        vec![
            ("name", "Test Driver"),
            ("national_id", national_id),
            ("license_number", license),
            ("plate_number", plate_number),
            ("car_model", "Corolla"),
            ("car_color", "White"),
        ]
    }
}

const BOUNDARY: &str = "----smart-traffic-test-boundary";

/// Hand-rolled `multipart/form-data` body. Returns (content type, body).
pub fn multipart_body(fields: &[(&str, &str)], file: Option<(&str, &[u8])>) -> (String, Vec<u8>) {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes());
        body.extend_from_slice(value.as_bytes());
        body.extend_from_slice(b"\r\n");
    }
    if let Some((file_name, bytes)) = file {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\n").as_bytes(),
        );
        body.extend_from_slice(b"Content-Type: image/jpeg\r\n\r\n");
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    (format!("multipart/form-data; boundary={BOUNDARY}"), body)
}
