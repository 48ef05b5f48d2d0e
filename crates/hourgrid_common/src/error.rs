// --- File: crates/hourgrid_common/src/error.rs ---
use std::fmt;
use thiserror::Error;

/// The base error type for all hourgrid errors.
///
/// Each crate keeps its own error enum and implements `From<SpecificError> for HourgridError`.
#[derive(Error, Debug)]
pub enum HourgridError {
    /// Error occurred due to missing or invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Error occurred during validation
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Error occurred due to a conflict with the current state
    #[error("Conflict: {0}")]
    ConflictError(String),

    /// A feature is switched off at runtime
    #[error("Service unavailable: {0}")]
    UnavailableError(String),

    /// Error occurred due to an internal error
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// A trait for converting errors to HTTP status codes.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}

impl HttpStatusCode for HourgridError {
    fn status_code(&self) -> u16 {
        match self {
            HourgridError::ConfigError(_) => 500,
            HourgridError::ValidationError(_) => 400,
            HourgridError::ConflictError(_) => 409,
            HourgridError::UnavailableError(_) => 503,
            HourgridError::InternalError(_) => 500,
        }
    }
}

/// Adds context to foreign errors while converting them into [`HourgridError`].
pub trait Context<T, E> {
    /// Adds context to an error.
    fn context<C>(self, context: C) -> Result<T, HourgridError>
    where
        C: fmt::Display + Send + Sync + 'static;

    /// Adds context to an error with a lazy context provider.
    fn with_context<C, F>(self, f: F) -> Result<T, HourgridError>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T, E: std::error::Error + Send + Sync + 'static> Context<T, E> for Result<T, E> {
    fn context<C>(self, context: C) -> Result<T, HourgridError>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|error| HourgridError::InternalError(format!("{}: {}", context, error)))
    }

    fn with_context<C, F>(self, f: F) -> Result<T, HourgridError>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|error| HourgridError::InternalError(format!("{}: {}", f(), error)))
    }
}

// Utility functions for error handling
pub fn config_error<T: fmt::Display>(message: T) -> HourgridError {
    HourgridError::ConfigError(message.to_string())
}

pub fn validation_error<T: fmt::Display>(message: T) -> HourgridError {
    HourgridError::ValidationError(message.to_string())
}

pub fn conflict<T: fmt::Display>(message: T) -> HourgridError {
    HourgridError::ConflictError(message.to_string())
}

pub fn internal_error<T: fmt::Display>(message: T) -> HourgridError {
    HourgridError::InternalError(message.to_string())
}

pub fn unavailable<T: fmt::Display>(message: T) -> HourgridError {
    HourgridError::UnavailableError(message.to_string())
}
