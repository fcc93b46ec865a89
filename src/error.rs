//! Application error types

use serde::Serialize;
use thiserror::Error;

/// Application-wide error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    /// Connection failure, timeout, or a non-2xx status from the endpoint
    #[error("{}", transport_message(.status, .reason, .body))]
    Transport {
        status: Option<u16>,
        reason: String,
        body: Option<String>,
    },

    #[error("Failed to parse JSON response: {0}")]
    MalformedResponse(String),

    #[error("API Error: {0}")]
    Api(String),

    #[error("Unexpected response format: {0}")]
    UnexpectedFormat(String),

    #[error("Invalid cost value: {0}")]
    InvalidCost(String),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn transport_message(status: &Option<u16>, reason: &str, body: &Option<String>) -> String {
    let mut message = match status {
        Some(code) => format!("HTTP Error {}: {}", code, reason),
        None => format!("URL Error: {}", reason),
    };

    if let Some(body) = body.as_deref().map(str::trim).filter(|b| !b.is_empty()) {
        message.push_str(" - ");
        message.push_str(body);
    }

    message
}

/// Serializable error summary used for structured log events
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl From<&AppError> for ErrorResponse {
    fn from(err: &AppError) -> Self {
        let code = match err {
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Transport { .. } => "TRANSPORT_ERROR",
            AppError::MalformedResponse(_) => "MALFORMED_RESPONSE",
            AppError::Api(_) => "API_ERROR",
            AppError::UnexpectedFormat(_) => "UNEXPECTED_FORMAT",
            AppError::InvalidCost(_) => "INVALID_COST",
            AppError::Http(_) => "HTTP_ERROR",
            AppError::Csv(_) => "CSV_ERROR",
            AppError::Io(_) => "IO_ERROR",
        };

        ErrorResponse {
            code: code.to_string(),
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
