//! The login gate.
//!
//! A trivial local check, not a security boundary: the app only wants a
//! plausible email and a non-empty password before showing the survey.
//! Kept behind a trait so a real authenticator could be slotted in later.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AuthError {
    #[error("please enter both email and password")]
    MissingCredentials,
    #[error("please enter a valid email address")]
    InvalidEmail,
}

/// Credential check gating the `Unauthenticated -> SurveyActive` transition.
pub trait Authenticator: Send + Sync {
    /// Accept or reject a login attempt.
    ///
    /// # Errors
    ///
    /// Returns `AuthError` describing why the attempt was rejected.
    fn authenticate(&self, email: &str, password: &str) -> Result<(), AuthError>;
}

static EMAIL_FORMAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid email pattern")
});

/// The shipped authenticator: both fields present and the email shaped like
/// an email. Any password passes.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailFormatAuthenticator;

impl Authenticator for EmailFormatAuthenticator {
    fn authenticate(&self, email: &str, password: &str) -> Result<(), AuthError> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }
        if !EMAIL_FORMAT.is_match(email.trim()) {
            return Err(AuthError::InvalidEmail);
        }
        Ok(())
    }
}
