use access::ValidationError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("A submission is already in progress")]
    SubmissionPending,

    #[error("Service error: {0}")]
    Service(#[from] shared::Error),
}
