//! OrchestrationError is the error every lambda in this crate can fail with.
//! Repository, configuration and validation failures encountered while handling an event
//! are mapped to it.

use common::config::ConfigError;
use lambda_runtime::Error as LambdaRuntimeError;
use repositories::processed_records::ProcessedRecordsRepositoryError;
use std::fmt;
use std::fmt::{Display, Formatter};
use validator::ValidationErrors;

pub type LambdaRuntimeResult = std::result::Result<(), LambdaRuntimeError>;

#[derive(Debug, thiserror::Error)]
pub enum UnknownOrchestrationError {
    #[error("{0:?}")]
    GenericError(#[source] anyhow::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum OrchestrationError {
    Validation(String),
    Unknown(#[source] UnknownOrchestrationError),
}

impl Display for OrchestrationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

impl From<anyhow::Error> for OrchestrationError {
    fn from(e: anyhow::Error) -> Self {
        Self::Unknown(UnknownOrchestrationError::GenericError(e))
    }
}

impl From<ProcessedRecordsRepositoryError> for OrchestrationError {
    fn from(e: ProcessedRecordsRepositoryError) -> Self {
        match e {
            ProcessedRecordsRepositoryError::Unknown(e) => {
                Self::Unknown(UnknownOrchestrationError::GenericError(e))
            }
        }
    }
}

impl From<ConfigError> for OrchestrationError {
    fn from(e: ConfigError) -> Self {
        match e {
            ConfigError::Invalid(message) => Self::Validation(message),
            e => Self::Unknown(UnknownOrchestrationError::GenericError(e.into())),
        }
    }
}

impl From<ValidationErrors> for OrchestrationError {
    fn from(e: ValidationErrors) -> Self {
        OrchestrationError::Validation(format!("{e:#}"))
    }
}
