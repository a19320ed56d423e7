use survey_core::model::{NewResponse, Response, ResponseId};

use super::SqliteRepository;
use super::mapping::{map_report_row, map_response_row};
use crate::repository::{ReportRow, ResponseRepository, StorageError};

fn id_i64(id: ResponseId) -> Result<i64, StorageError> {
    i64::try_from(id.value())
        .map_err(|_| StorageError::Serialization("response id overflow".into()))
}

#[async_trait::async_trait]
impl ResponseRepository for SqliteRepository {
    async fn append(&self, response: &NewResponse) -> Result<ResponseId, StorageError> {
        let res = sqlx::query(
            r"
                INSERT INTO responses (
                    name, age, gender, preferred_learning_environment,
                    study_hours_per_week, study_time, study_tools,
                    primary_device, learning_style, study_satisfaction
                )
                VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
            ",
        )
        .bind(&response.name)
        .bind(i64::from(response.age))
        .bind(response.gender.label())
        .bind(response.environment.label())
        .bind(i64::from(response.study_hours))
        .bind(response.study_time.label())
        .bind(&response.study_tools)
        .bind(response.device.label())
        .bind(response.learning_style.label())
        .bind(i64::from(response.satisfaction.value()))
        .execute(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

        let raw = u64::try_from(res.last_insert_rowid())
            .map_err(|_| StorageError::Serialization("negative rowid".into()))?;
        Ok(ResponseId::new(raw))
    }

    async fn get(&self, id: ResponseId) -> Result<Response, StorageError> {
        let row = sqlx::query(
            r"
                SELECT
                    id, name, age, gender, preferred_learning_environment,
                    study_hours_per_week, study_time, study_tools,
                    primary_device, learning_style, study_satisfaction
                FROM responses
                WHERE id = ?1
            ",
        )
        .bind(id_i64(id)?)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?
        .ok_or(StorageError::NotFound)?;

        map_response_row(&row)
    }

    async fn fetch_all(&self) -> Result<Vec<ReportRow>, StorageError> {
        let rows = sqlx::query(
            r"
                SELECT
                    primary_device, preferred_learning_environment,
                    study_time, study_satisfaction
                FROM responses
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

        let mut out = Vec::with_capacity(rows.len());
        for row in rows {
            out.push(map_report_row(&row)?);
        }
        Ok(out)
    }
}
