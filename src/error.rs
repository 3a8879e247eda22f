//! Error handling for hutres

use std::fmt;

use reqwest::StatusCode;
use thiserror::Error;

/// Request steps whose status code is checked before the run continues
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Csrf,
    Login,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let step = match self {
            Step::Csrf => "CSRF token request",
            Step::Login => "login",
        };
        write!(f, "{}", step)
    }
}

/// Main error type for hutres operations
#[derive(Error, Debug)]
pub enum HutError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{step} failed with status {status} ({url})")]
    Status {
        step: Step,
        status: StatusCode,
        url: String,
    },

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl HutError {
    /// Status code carried by a rejected CSRF or login step
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            HutError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias for hutres operations
pub type Result<T> = std::result::Result<T, HutError>;
