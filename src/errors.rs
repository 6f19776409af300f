// SPDX-License-Identifier: GPL-3.0-only

//! Error types for the image input application

use std::fmt;

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;

/// Main application error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// Host portal errors (capture device queries)
    Portal(PortalError),
    /// A picked file is outside the accept list
    UnsupportedFile(String),
    /// Generic error with message
    Other(String),
}

/// Portal-specific errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PortalError {
    /// Session bus connection failed
    BusUnavailable(String),
    /// The camera portal query failed or is not offered by the host
    QueryFailed(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Portal(e) => write!(f, "Capture device error: {}", e),
            AppError::UnsupportedFile(name) => write!(f, "Unsupported image type: {}", name),
            AppError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl fmt::Display for PortalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PortalError::BusUnavailable(msg) => write!(f, "Session bus unavailable: {}", msg),
            PortalError::QueryFailed(msg) => write!(f, "Camera portal query failed: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}
impl std::error::Error for PortalError {}

// Conversions from sub-errors to AppError
impl From<PortalError> for AppError {
    fn from(err: PortalError) -> Self {
        AppError::Portal(err)
    }
}

// Conversion from String for backward compatibility
impl From<String> for AppError {
    fn from(msg: String) -> Self {
        AppError::Other(msg)
    }
}

impl From<&str> for AppError {
    fn from(msg: &str) -> Self {
        AppError::Other(msg.to_string())
    }
}
