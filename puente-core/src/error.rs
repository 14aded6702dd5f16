//! Error types for Puente.
//!
//! - [`RouterError`] - The condition an [`ErrorHandler`] turns into a response
//! - [`ParseMethodError`] - Returned when a verb string is not recognised
//!
//! [`ErrorHandler`]: crate::ErrorHandler

use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The literal token describing the "no route matched" condition.
///
/// The default error handler compares an error's description against this
/// string to decide between a 404 and a 500.
pub const ERROR_NOT_FOUND: &str = "not_found";

/// The error condition handed to an error handler.
#[derive(Error, Debug)]
pub enum RouterError {
    /// No registered route matched the request's path and method.
    #[error("not_found")]
    NotFound,

    /// An application-defined condition described by a message.
    #[error("{0}")]
    Message(String),

    /// A custom error raised by the application.
    #[error(transparent)]
    Custom(BoxError),
}

impl RouterError {
    /// Returns true if this is the "no route matched" condition.
    ///
    /// This is a description check, so a [`RouterError::Message`] carrying
    /// [`ERROR_NOT_FOUND`] counts as well.
    pub fn is_not_found(&self) -> bool {
        self.to_string() == ERROR_NOT_FOUND
    }
}

impl From<BoxError> for RouterError {
    fn from(err: BoxError) -> Self {
        RouterError::Custom(err)
    }
}

impl From<String> for RouterError {
    fn from(msg: String) -> Self {
        RouterError::Message(msg)
    }
}

impl From<&str> for RouterError {
    fn from(msg: &str) -> Self {
        RouterError::Message(msg.to_string())
    }
}

/// A verb string did not name one of the supported methods.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unsupported http method: {0}")]
pub struct ParseMethodError(pub String);
