use std::sync::Arc;

use storage::repository::ResponseRepository;
use survey_core::model::{ResponseDraft, ResponseId};

use crate::error::SurveyError;

/// The submission pipeline: validate a form draft, then append it to the
/// response log. All-or-nothing; a rejected draft leaves the store untouched.
pub struct SurveyService {
    responses: Arc<dyn ResponseRepository>,
}

impl SurveyService {
    #[must_use]
    pub fn new(responses: Arc<dyn ResponseRepository>) -> Self {
        Self { responses }
    }

    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(storage::repository::InMemoryRepository::new()))
    }

    /// Validate and persist one submission, returning the assigned id.
    ///
    /// # Errors
    ///
    /// Returns `SurveyError::Validation` if the draft is incomplete or
    /// numerically malformed (nothing is appended), or
    /// `SurveyError::Storage` if the insert fails.
    pub async fn submit(&self, draft: &ResponseDraft) -> Result<ResponseId, SurveyError> {
        let response = draft.validate()?;
        let id = self.responses.append(&response).await?;
        Ok(id)
    }
}
