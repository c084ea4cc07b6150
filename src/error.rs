//! Error handling for lstable
//!
//! Per-entry failures are recovered by the lister; this type carries them
//! up to the point where they become a diagnostic line.

use std::io;
use thiserror::Error;

/// Error type for listing operations
#[derive(Error, Debug)]
pub enum ListerError {
    /// File system errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Metadata could not be read for a named entry
    #[error("{name}: No such file or directory")]
    EntryNotFound {
        /// Entry name as displayed
        name: String,
        /// Underlying I/O failure
        #[source]
        source: io::Error,
    },

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl ListerError {
    /// Build an `EntryNotFound` for `name`
    pub fn entry_not_found(name: impl Into<String>, source: io::Error) -> Self {
        Self::EntryNotFound {
            name: name.into(),
            source,
        }
    }
}

// Allow `?` on listing results inside io::Result code
impl From<ListerError> for io::Error {
    fn from(err: ListerError) -> Self {
        match err {
            ListerError::Io(e) => e,
            other => io::Error::new(io::ErrorKind::Other, other.to_string()),
        }
    }
}

/// Specialized Result type for listing operations
pub type Result<T> = std::result::Result<T, ListerError>;

/// Creates a ListerError with a formatted message
#[macro_export]
macro_rules! error {
    ($error_type:ident, $($arg:tt)*) => {
        $crate::error::ListerError::$error_type(format!($($arg)*))
    };
}

/// Returns an error result with a formatted message
#[macro_export]
macro_rules! bail {
    ($error_type:ident, $($arg:tt)*) => {
        return Err($crate::error!($error_type, $($arg)*))
    };
}

/// Ensures a condition is true, otherwise returns an error
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $error_type:ident, $($arg:tt)*) => {
        if !($cond) {
            $crate::bail!($error_type, $($arg)*)
        }
    };
}
