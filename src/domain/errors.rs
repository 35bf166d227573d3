// src/domain/errors.rs
use crate::domain::contact::ValidationReport;
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("invalid submission: {0}")]
    InvalidSubmission(ValidationReport),
}
