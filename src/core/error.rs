/*!
Error handling for curve discovery and registration.

Engine failures are fatal for initialization and are carried with enough
context to tell which native call went wrong. Skipped registrations are not
errors and never show up here.
*/

use std::io;
use thiserror::Error;

/// Result type for curve discovery and registration
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for curve discovery and registration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The native engine could not be queried
    #[error("Engine query failed: {0}")]
    Engine(#[source] EngineError),

    /// A curve was requested that is not present in the registry
    #[error("Unsupported curve: {0}")]
    UnsupportedCurve(String),

    /// A process-wide value was set after it had already been fixed
    #[error("Already initialized: {0}")]
    AlreadyInitialized(&'static str),

    /// Rejected registration configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Malformed constant or name
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Failures reported by the native engine boundary
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A builtin-curve enumeration call failed
    #[error("{call} failed")]
    QueryFailed {
        call: &'static str,
    },

    /// The second enumeration call disagreed with the reported count
    #[error("builtin curve table changed size (expected {expected}, got {actual})")]
    InconsistentTable {
        expected: usize,
        actual: usize,
    },

    /// The engine has no short name for a curve identifier
    #[error("no short name for curve identifier {0}")]
    UnknownIdentifier(i32),

    /// The engine returned a name that is not valid UTF-8
    #[error("short name for curve identifier {0} is not valid UTF-8")]
    InvalidName(i32),
}

impl From<EngineError> for Error {
    fn from(err: EngineError) -> Self {
        Error::Engine(err)
    }
}

/// Create an engine error result
#[macro_export]
macro_rules! engine_err {
    ($err:expr) => {
        Err($crate::core::error::Error::Engine($err))
    };
}

/// Create an internal error result
#[macro_export]
macro_rules! internal_err {
    ($msg:expr) => {
        Err($crate::core::error::Error::Internal($msg.to_string()))
    };
    ($fmt:expr, $($arg:tt)*) => {
        Err($crate::core::error::Error::Internal(format!($fmt, $($arg)*)))
    };
}

/// Convert from Error to io::Error (for compatibility)
impl From<Error> for io::Error {
    fn from(error: Error) -> Self {
        match error {
            Error::Engine(err) => io::Error::new(io::ErrorKind::Other, err.to_string()),
            Error::UnsupportedCurve(name) => io::Error::new(
                io::ErrorKind::NotFound,
                format!("Unsupported curve: {}", name),
            ),
            Error::AlreadyInitialized(what) => io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("Already initialized: {}", what),
            ),
            Error::Config(msg) => io::Error::new(io::ErrorKind::InvalidInput, msg),
            Error::InvalidFormat(msg) => io::Error::new(io::ErrorKind::InvalidData, msg),
            Error::Internal(msg) => io::Error::new(io::ErrorKind::Other, msg),
        }
    }
}
