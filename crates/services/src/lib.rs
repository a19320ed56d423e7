#![forbid(unsafe_code)]

pub mod auth;
pub mod error;
pub mod report_service;
pub mod survey_service;

pub use auth::{AuthError, Authenticator, EmailFormatAuthenticator};
pub use error::{ReportError, SurveyError};
pub use report_service::{ReportService, SATISFACTION_BUCKETS, SurveyReport};
pub use survey_service::SurveyService;
