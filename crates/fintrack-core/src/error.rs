use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Description must not be empty")]
    EmptyDescription,
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Unknown entry kind `{0}` (expected `earning` or `spent`)")]
    UnknownKind(String),
    #[error("Transaction not found: {0}")]
    TransactionNotFound(Uuid),
}

pub type CoreResult<T> = Result<T, CoreError>;
