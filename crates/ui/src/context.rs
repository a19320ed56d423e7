use std::sync::Arc;

use services::{Authenticator, ReportService, SurveyService};

/// Services the composition root (the `app` crate) hands to the UI.
pub trait UiApp: Send + Sync {
    fn survey(&self) -> Arc<SurveyService>;
    fn reports(&self) -> Arc<ReportService>;
    fn authenticator(&self) -> Arc<dyn Authenticator>;
}

#[derive(Clone)]
pub struct AppContext {
    survey: Arc<SurveyService>,
    reports: Arc<ReportService>,
    authenticator: Arc<dyn Authenticator>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            survey: app.survey(),
            reports: app.reports(),
            authenticator: app.authenticator(),
        }
    }

    #[must_use]
    pub fn survey(&self) -> Arc<SurveyService> {
        Arc::clone(&self.survey)
    }

    #[must_use]
    pub fn reports(&self) -> Arc<ReportService> {
        Arc::clone(&self.reports)
    }

    #[must_use]
    pub fn authenticator(&self) -> Arc<dyn Authenticator> {
        Arc::clone(&self.authenticator)
    }
}

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
