use crate::db::database_service::DatabaseService;
use crate::{
    types::{error::AppError, user::DBUserCreate},
    utils::password::{hash_password, verify_password},
};
use entity::user::{ActiveModel as UserActive, Column, Entity as User, Model as UserModel};
use entity::Role;
use sea_orm::{ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, Set};
use tracing::info;

pub const ADMIN_USERNAME: &str = "admin";

impl DatabaseService {
    pub async fn user_exists_by_username(&self, username: &str) -> Result<bool, AppError> {
        Ok(User::find()
            .filter(Column::Username.eq(username))
            .count(&self.database_connection)
            .await?
            > 0)
    }

    pub async fn find_user_by_username(&self, username: &str) -> Result<Option<UserModel>, AppError> {
        Ok(User::find()
            .filter(Column::Username.eq(username))
            .one(&self.database_connection)
            .await?)
    }

    pub async fn create_user(&self, payload: DBUserCreate) -> Result<UserModel, AppError> {
        if self.user_exists_by_username(&payload.username).await? {
            return Err(AppError::BadRequest("Username already registered".to_string()));
        }

        Ok(UserActive {
            username: Set(payload.username),
            hashed_password: Set(payload.hashed_password),
            role: Set(payload.role),
            driver_id: Set(payload.driver_id),
            ..Default::default()
        }
        .insert(&self.database_connection)
        .await?)
    }

    /// Login check. Unknown users and wrong passwords fail the same way.
    pub async fn authenticate_user(&self, username: &str, password: &str) -> Result<UserModel, AppError> {
        match self.find_user_by_username(username).await? {
            Some(user) if verify_password(password, &user.hashed_password) => Ok(user),
            Some(_) => {
                info!("password mismatch for {username}");
                Err(AppError::InvalidLogin)
            }
            None => {
                info!("login attempt for unknown user {username}");
                Err(AppError::InvalidLogin)
            }
        }
    }

    pub async fn reset_password(&self, username: &str, new_password: &str) -> Result<(), AppError> {
        let user = self
            .find_user_by_username(username)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?;
        let mut am: UserActive = user.into();
        am.hashed_password = Set(hash_password(new_password)?);
        Ok(am.update(&self.database_connection).await.map(|_| ())?)
    }

    /// Creates the `admin` account unless it exists. Returns whether it was created.
    pub async fn ensure_admin(&self, password: &str) -> Result<bool, AppError> {
        if self.user_exists_by_username(ADMIN_USERNAME).await? {
            return Ok(false);
        }
        self.create_user(DBUserCreate {
            username: ADMIN_USERNAME.to_string(),
            hashed_password: hash_password(password)?,
            role: Role::Admin,
            driver_id: None,
        })
        .await?;
        info!("created default admin account");
        Ok(true)
    }
}
