use crate::db::database_service::DatabaseService;
use crate::types::{
    driver::{DriverRegistration, DriverRes, Pagination},
    error::AppError,
};
use crate::utils::password::hash_password;
use entity::car::{ActiveModel as CarActive, Column as CarColumn, Entity as Car};
use entity::driver::{ActiveModel as DriverActive, Column as DriverColumn, Entity as Driver, Model as DriverModel};
use entity::user::{ActiveModel as UserActive, Column as UserColumn, Entity as User};
use entity::Role;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, LoaderTrait, ModelTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};
use tracing::info;

const DUPLICATE_NATIONAL_ID: &str = "Driver with this National ID already registered";

async fn national_id_taken<C: ConnectionTrait>(conn: &C, national_id: &str) -> Result<bool, AppError> {
    let drivers = Driver::find()
        .filter(DriverColumn::NationalId.eq(national_id))
        .count(conn)
        .await?;
    // The driver's login is named after the national id too.
    let users = User::find()
        .filter(UserColumn::Username.eq(national_id))
        .count(conn)
        .await?;
    Ok(drivers + users > 0)
}

/// A unique violation on `national_id` means a concurrent registration won the race
/// after our precheck; report it like the precheck would.
fn registration_error(err: AppError) -> AppError {
    match err {
        AppError::Conflict(detail) if detail.contains("national_id") => {
            AppError::BadRequest(DUPLICATE_NATIONAL_ID.to_string())
        }
        other => other,
    }
}

impl DatabaseService {
    pub async fn national_id_taken(&self, national_id: &str) -> Result<bool, AppError> {
        national_id_taken(&self.database_connection, national_id).await
    }

    /// Creates the driver, its login and its first car in one transaction.
    /// The login is `national_id` / `national_id` with the driver role.
    pub async fn register_driver(&self, reg: DriverRegistration) -> Result<DriverRes, AppError> {
        let hashed_password = hash_password(&reg.national_id)?;
        let txn = self.database_connection.begin().await?;

        if national_id_taken(&txn, &reg.national_id).await? {
            txn.rollback().await?;
            return Err(AppError::BadRequest(DUPLICATE_NATIONAL_ID.to_string()));
        }

        let written = async {
            let driver = DriverActive {
                name: Set(reg.name),
                national_id: Set(reg.national_id.clone()),
                license_number: Set(reg.license_number),
                photo_url: Set(reg.photo_url),
                ..Default::default()
            }
            .insert(&txn)
            .await?;

            UserActive {
                username: Set(reg.national_id.clone()),
                hashed_password: Set(hashed_password),
                role: Set(Role::Driver),
                driver_id: Set(Some(driver.id)),
                ..Default::default()
            }
            .insert(&txn)
            .await?;

            let car = CarActive {
                plate_number: Set(reg.plate_number),
                model: Set(reg.car_model),
                color: Set(reg.car_color),
                owner_id: Set(driver.id),
                ..Default::default()
            }
            .insert(&txn)
            .await?;

            Ok::<_, sea_orm::DbErr>((driver, car))
        }
        .await;

        match written {
            Ok((driver, car)) => {
                txn.commit().await?;
                info!("registered driver {} with car {}", driver.id, car.plate_number);
                Ok(DriverRes::new(driver, vec![car]))
            }
            Err(err) => {
                txn.rollback().await?;
                Err(registration_error(err.into()))
            }
        }
    }

    async fn with_cars(&self, driver: DriverModel) -> Result<DriverRes, AppError> {
        let cars = driver
            .find_related(Car)
            .order_by_asc(CarColumn::Id)
            .all(&self.database_connection)
            .await?;
        Ok(DriverRes::new(driver, cars))
    }

    pub async fn get_driver(&self, id: i32) -> Result<DriverRes, AppError> {
        let driver = Driver::find_by_id(id)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| AppError::not_found("Driver"))?;
        self.with_cars(driver).await
    }

    pub async fn list_drivers(&self, page: Pagination) -> Result<Vec<DriverRes>, AppError> {
        let drivers = Driver::find()
            .order_by_asc(DriverColumn::Id)
            .offset(page.skip)
            .limit(page.limit)
            .all(&self.database_connection)
            .await?;
        let cars = drivers.load_many(Car, &self.database_connection).await?;

        Ok(drivers
            .into_iter()
            .zip(cars)
            .map(|(driver, cars)| DriverRes::new(driver, cars))
            .collect())
    }

    /// Owner of the car carrying `plate_number`.
    pub async fn get_driver_by_plate(&self, plate_number: &str) -> Result<DriverRes, AppError> {
        let car = Car::find()
            .filter(CarColumn::PlateNumber.eq(plate_number))
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| AppError::not_found("Car"))?;
        self.get_driver(car.owner_id).await
    }
}
