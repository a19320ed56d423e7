use thiserror::Error;

use crate::model::{SatisfactionError, ValidationError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Satisfaction(#[from] SatisfactionError),
}
