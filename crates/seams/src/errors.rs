use serde::{Deserialize, Serialize};
use thiserror::Error;

#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Deserialize, Serialize)]
pub enum AgentError {
    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    #[error("Tool execution failed: {0}")]
    ExecutionError(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type AgentResult<T> = Result<T, AgentError>;

/// Validation failures raised by the calculator and weather services
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ServiceError {
    #[error("{0}")]
    InvalidInput(String),
}

impl From<ServiceError> for AgentError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::InvalidInput(msg) => AgentError::InvalidParameters(msg),
        }
    }
}

/// Failures reading or writing trace and manifest files
#[derive(Error, Debug)]
pub enum TraceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON on line {line}: {source}")]
    InvalidLine {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid manifest: {0}")]
    InvalidManifest(#[from] serde_json::Error),
}

pub type TraceResult<T> = Result<T, TraceError>;
