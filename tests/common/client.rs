use actix_files::Files;
use actix_web::{web, App};
use entity::Role;
use smart_traffic::{
    config::EnvConfig,
    db::database_service::DatabaseService,
    types::{error::AppError, user::DBUserCreate},
    utils::{password::hash_password, token::TokenService, uploads::UPLOADS_URL},
};
use std::sync::Arc;

use super::{TestContext, ADMIN_PASSWORD};

pub struct TestClient {
    pub db: Arc<DatabaseService>,
    pub tokens: TokenService,
    pub config: EnvConfig,
}

impl TestClient {
    pub fn new(ctx: &TestContext) -> Self {
        TestClient {
            db: Arc::clone(&ctx.db),
            tokens: ctx.tokens.clone(),
            config: ctx.config.clone(),
        }
    }

    pub fn create_app(&self) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .app_data(web::Data::new(self.tokens.clone()))
            .app_data(web::Data::new(self.config.clone()))
            .service(Files::new(UPLOADS_URL, &self.config.uploads_dir))
            .configure(smart_traffic::routes::configure_routes)
    }

    #[allow(dead_code)]
    pub async fn create_test_admin(&self) -> (entity::user::Model, String) {
        self.db.ensure_admin(ADMIN_PASSWORD).await.expect("Failed to create admin");
        let admin = self.db
            .find_user_by_username("admin")
            .await
            .expect("Failed to load admin")
            .expect("Admin missing");

        let token = self.tokens.issue(&admin.username, admin.role).expect("Failed to issue token");
        (admin, token)
    }

    #[allow(dead_code)]
    pub async fn create_test_user(&self, username: &str) -> Result<(entity::user::Model, String), AppError> {
        let user = self.db.create_user(DBUserCreate {
            username: username.to_string(),
            hashed_password: hash_password("password")?,
            role: Role::User,
            driver_id: None,
        }).await?;

        let token = self.tokens.issue(&user.username, user.role)?;
        Ok((user, token))
    }
}
