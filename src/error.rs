use std::path::PathBuf;
use thiserror::Error;

//==============================================================================
// Crate error type
//==============================================================================

/// Every fallible operation in the crate reports one of these.
///
/// Running out of values is not in here: a finished traversal is reported
/// through [`crate::counter::Step::EndOfSequence`].
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid bound {maximum}: the maximum must be a positive integer")]
    InvalidBound { maximum: i64 },

    #[error("division by zero")]
    DivisionByZero,

    #[error("integer overflow")]
    Overflow,

    #[error("invalid configuration: {message}")]
    Config { message: String },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to start async runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

impl Error {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Self::config(err.message().to_string())
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
