use crate::db::database_service::DatabaseService;
use crate::types::{driver::Pagination, error::AppError, stolen_car::RStolenCarCreate};
use chrono::Utc;
use entity::stolen_car::{ActiveModel as ReportActive, Column, Entity as StolenCar, Model as ReportModel};
use entity::ReportStatus;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set};

impl DatabaseService {
    pub async fn create_stolen_car_report(&self, reporter_id: i32, report: RStolenCarCreate) -> Result<ReportModel, AppError> {
        Ok(ReportActive {
            plate_number: Set(report.plate_number),
            description: Set(report.description),
            status: Set(ReportStatus::Reported),
            last_seen_location: Set(None),
            created_at: Set(Utc::now()),
            reporter_id: Set(reporter_id),
            ..Default::default()
        }
        .insert(&self.database_connection)
        .await?)
    }

    pub async fn list_stolen_car_reports(&self, page: Pagination) -> Result<Vec<ReportModel>, AppError> {
        Ok(StolenCar::find()
            .order_by_asc(Column::Id)
            .offset(page.skip)
            .limit(page.limit)
            .all(&self.database_connection)
            .await?)
    }

    pub async fn list_reports_by_reporter(&self, reporter_id: i32) -> Result<Vec<ReportModel>, AppError> {
        Ok(StolenCar::find()
            .filter(Column::ReporterId.eq(reporter_id))
            .order_by_asc(Column::Id)
            .all(&self.database_connection)
            .await?)
    }

    /// Overwrites the last seen location of the newest open report for `plate_number`.
    /// Returns false (and writes nothing) when no report is open for it.
    pub async fn record_sighting(&self, plate_number: &str, location: &str) -> Result<bool, AppError> {
        let open = StolenCar::find()
            .filter(Column::PlateNumber.eq(plate_number))
            .filter(Column::Status.eq(ReportStatus::Reported))
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .one(&self.database_connection)
            .await?;

        let Some(report) = open else {
            return Ok(false);
        };

        let mut am: ReportActive = report.into();
        am.last_seen_location = Set(Some(location.to_string()));
        am.update(&self.database_connection).await?;
        Ok(true)
    }

    pub async fn set_report_status(&self, report_id: i32, status: ReportStatus) -> Result<ReportModel, AppError> {
        let report = StolenCar::find_by_id(report_id)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| AppError::not_found("Report"))?;
        let mut am: ReportActive = report.into();
        am.status = Set(status);
        Ok(am.update(&self.database_connection).await?)
    }
}
