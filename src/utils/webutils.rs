use actix_web::{dev::ServiceRequest, web, HttpMessage};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use entity::Role;
use std::sync::Arc;

use crate::db::database_service::DatabaseService;
use crate::types::error::AppError;
use crate::utils::token::TokenService;

/// Resolves a bearer token to the user row it names.
async fn authenticate(req: &ServiceRequest, token: &str) -> Result<entity::user::Model, AppError> {
    let tokens = req
        .app_data::<web::Data<TokenService>>()
        .cloned()
        .ok_or_else(|| AppError::Internal("token service not configured".to_string()))?;
    let db = req
        .app_data::<web::Data<Arc<DatabaseService>>>()
        .cloned()
        .ok_or_else(|| AppError::Internal("database not configured".to_string()))?;

    let claims = tokens.verify(token)?;

    // The token outlives the account it was issued for.
    db.find_user_by_username(&claims.sub)
        .await?
        .ok_or(AppError::Unauthorized)
}

pub async fn validate_token(req: ServiceRequest, credentials: BearerAuth) -> Result<ServiceRequest, (actix_web::Error, ServiceRequest)> {
    match authenticate(&req, credentials.token()).await {
        Ok(user) => {
            req.extensions_mut().insert(user);
            Ok(req)
        }
        Err(e) => Err((e.into(), req)),
    }
}

pub async fn validate_admin_token(req: ServiceRequest, credentials: BearerAuth) -> Result<ServiceRequest, (actix_web::Error, ServiceRequest)> {
    match authenticate(&req, credentials.token()).await {
        Ok(user) if user.role == Role::Admin => {
            req.extensions_mut().insert(user);
            Ok(req)
        }
        Ok(user) => {
            tracing::info!("user {} denied admin route {}", user.username, req.path());
            Err((AppError::Forbidden.into(), req))
        }
        Err(e) => Err((e.into(), req)),
    }
}
