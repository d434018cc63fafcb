use smart_traffic::config::EnvConfig;
use smart_traffic::db::database_service::DatabaseService;
use smart_traffic::db::user::ADMIN_USERNAME;

/// Resets the admin password to `ADMIN_PASSWORD`, creating the account if it is gone.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let config = EnvConfig::from_env()?;
    let db = DatabaseService::new(&config.db_url).await?;

    if db.ensure_admin(&config.auth.admin_password).await? {
        log_line("Admin user was missing and has been created.");
    } else {
        db.reset_password(ADMIN_USERNAME, &config.auth.admin_password).await?;
        log_line("Admin password has been reset.");
    }

    Ok(())
}

fn log_line(msg: &str) {
    tracing::info!("{msg}");
    println!("{msg}");
}
