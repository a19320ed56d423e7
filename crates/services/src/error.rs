//! Shared error types for the services crate.

use thiserror::Error;

use storage::repository::StorageError;
use survey_core::model::ValidationError;

/// Errors emitted by `SurveyService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SurveyError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `ReportService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ReportError {
    #[error("no data available to generate charts")]
    NoData,
    #[error(transparent)]
    Storage(#[from] StorageError),
}
