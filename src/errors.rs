use fintrack_config::ConfigError;
use fintrack_core::CoreError;
use thiserror::Error;

/// Unified error type for the core and configuration layers.
#[derive(Error, Debug)]
pub enum FintrackError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Transaction failed: {0}")]
    TransactionError(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Storage error: {0}")]
    StorageError(String),
}

/// User-facing CLI error wrapper.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] FintrackError),
    #[error("Invalid input: {0}")]
    Input(String),
    #[error("Command failed: {0}")]
    Command(String),
}

impl From<CoreError> for FintrackError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::TransactionNotFound(id) => {
                FintrackError::TransactionError(format!("transaction {} not found", id))
            }
            other @ (CoreError::InvalidAmount(_)
            | CoreError::EmptyDescription
            | CoreError::InvalidDate(_)
            | CoreError::UnknownKind(_)) => FintrackError::InvalidInput(other.to_string()),
        }
    }
}

impl From<ConfigError> for FintrackError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Io(io) => FintrackError::StorageError(io.to_string()),
            ConfigError::Serde(message) => FintrackError::ConfigError(message),
            other @ (ConfigError::UnknownKey(_) | ConfigError::InvalidValue { .. }) => {
                FintrackError::InvalidInput(other.to_string())
            }
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        CliError::from(FintrackError::from(err))
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Command(err.to_string())
    }
}

impl From<rustyline::error::ReadlineError> for CliError {
    fn from(err: rustyline::error::ReadlineError) -> Self {
        CliError::Command(err.to_string())
    }
}
