use std::str::FromStr;

use sqlx::Row;
use survey_core::model::{NewResponse, Response, ResponseId, SatisfactionScore};

use crate::repository::{ReportRow, StorageError};

pub(crate) fn ser<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Serialization(e.to_string())
}

pub(crate) fn response_id_from_i64(v: i64) -> Result<ResponseId, StorageError> {
    let raw = u64::try_from(v)
        .map_err(|_| StorageError::Serialization(format!("invalid response id: {v}")))?;
    Ok(ResponseId::new(raw))
}

pub(crate) fn u32_from_i64(field: &'static str, v: i64) -> Result<u32, StorageError> {
    u32::try_from(v).map_err(|_| StorageError::Serialization(format!("invalid {field}: {v}")))
}

/// Parses a stored TEXT label into one of the fixed survey choices.
pub(crate) fn choice_from_text<T>(row: &sqlx::sqlite::SqliteRow, column: &str) -> Result<T, StorageError>
where
    T: FromStr,
    T::Err: core::fmt::Display,
{
    let raw: String = row.try_get(column).map_err(ser)?;
    raw.parse::<T>().map_err(ser)
}

pub(crate) fn satisfaction_from_i64(v: i64) -> Result<SatisfactionScore, StorageError> {
    SatisfactionScore::new(v).map_err(ser)
}

pub(crate) fn map_report_row(row: &sqlx::sqlite::SqliteRow) -> Result<ReportRow, StorageError> {
    Ok(ReportRow {
        device: choice_from_text(row, "primary_device")?,
        environment: choice_from_text(row, "preferred_learning_environment")?,
        study_time: choice_from_text(row, "study_time")?,
        satisfaction: satisfaction_from_i64(
            row.try_get::<i64, _>("study_satisfaction").map_err(ser)?,
        )?,
    })
}

pub(crate) fn map_response_row(row: &sqlx::sqlite::SqliteRow) -> Result<Response, StorageError> {
    let id = response_id_from_i64(row.try_get::<i64, _>("id").map_err(ser)?)?;
    let record = NewResponse {
        name: row.try_get("name").map_err(ser)?,
        age: u32_from_i64("age", row.try_get::<i64, _>("age").map_err(ser)?)?,
        gender: choice_from_text(row, "gender")?,
        environment: choice_from_text(row, "preferred_learning_environment")?,
        study_hours: u32_from_i64(
            "study_hours_per_week",
            row.try_get::<i64, _>("study_hours_per_week").map_err(ser)?,
        )?,
        study_time: choice_from_text(row, "study_time")?,
        study_tools: row.try_get("study_tools").map_err(ser)?,
        device: choice_from_text(row, "primary_device")?,
        learning_style: choice_from_text(row, "learning_style")?,
        satisfaction: satisfaction_from_i64(
            row.try_get::<i64, _>("study_satisfaction").map_err(ser)?,
        )?,
    };
    Response::from_persisted(id, record).map_err(ser)
}
