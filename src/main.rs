use actix_cors::Cors;
use actix_files::Files;
use actix_web::{middleware::Logger, web, App, HttpServer};
use smart_traffic::config::EnvConfig;
use smart_traffic::db::database_service::DatabaseService;
use smart_traffic::routes::configure_routes;
use smart_traffic::utils::{token::TokenService, uploads::UPLOADS_URL};
use std::io;
use std::sync::Arc;
use tracing::info;

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = EnvConfig::from_env().map_err(io::Error::other)?;
    let addr = format!("0.0.0.0:{}", config.port);

    let database = Arc::new(
        DatabaseService::new(&config.db_url)
            .await
            .map_err(io::Error::other)?
    );

    if database
        .ensure_admin(&config.auth.admin_password)
        .await
        .map_err(io::Error::other)?
    {
        info!("Default admin created; change its password.");
    }

    std::fs::create_dir_all(&config.uploads_dir)?;
    let tokens = TokenService::from_config(&config.auth);

    info!("Starting server on {}", addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(Logger::default())
            .app_data(web::Data::new(Arc::clone(&database)))
            .app_data(web::Data::new(tokens.clone()))
            .app_data(web::Data::new(config.clone()))
            .service(Files::new(UPLOADS_URL, &config.uploads_dir))
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}
