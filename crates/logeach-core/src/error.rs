//! Error types for the console helpers.

use thiserror::Error;

use crate::format::FormatError;

/// Boxed error returned by user callbacks.
pub type CallbackError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Comprehensive error type for all console operations.
#[derive(Error, Debug)]
pub enum ConsoleError {
    /// The first positional argument was not a string
    #[error("invalid argument. First argument must be a string. Value: `{value}`.")]
    InvalidTemplate { value: String },
    /// Neither the last nor the second-to-last argument was a function
    #[error("invalid argument. Callback argument must be a function. Value: `{value}`.")]
    InvalidCallback { value: String },
    /// A collection argument disagreed with the iteration length
    #[error(
        "invalid argument. Provided collections must have the same length. \
         Expected {expected}, found {found} (argument {position})."
    )]
    LengthMismatch {
        expected: usize,
        found: usize,
        position: usize,
    },
    /// The formatter rejected the template or its values
    #[error("Format error: {source}")]
    Format {
        #[from]
        source: FormatError,
    },
    /// A user callback failed
    #[error("Callback failed at index {index}: {source}")]
    Callback {
        index: usize,
        #[source]
        source: CallbackError,
    },
    /// The line sink could not write
    #[error("Output error: {source}")]
    Sink {
        #[from]
        source: std::io::Error,
    },
}

/// Builder for length mismatch errors.
pub struct LengthMismatchBuilder {
    expected: usize,
}

impl LengthMismatchBuilder {
    /// Create a builder for the given iteration length.
    pub fn new(expected: usize) -> Self {
        Self { expected }
    }

    /// Build the error for the offending argument.
    pub fn found(self, found: usize, position: usize) -> ConsoleError {
        ConsoleError::LengthMismatch {
            expected: self.expected,
            found,
            position,
        }
    }
}

impl ConsoleError {
    /// Creates a builder for length mismatch errors.
    pub fn length_mismatch(expected: usize) -> LengthMismatchBuilder {
        LengthMismatchBuilder::new(expected)
    }

    /// Creates an invalid template error describing the offending value.
    pub fn invalid_template(value: impl ToString) -> Self {
        Self::InvalidTemplate {
            value: value.to_string(),
        }
    }

    /// Creates an invalid callback error describing the offending value.
    pub fn invalid_callback(value: impl ToString) -> Self {
        Self::InvalidCallback {
            value: value.to_string(),
        }
    }
}

/// Extension trait attaching the iteration index to callback failures.
pub trait CallbackResultExt<T> {
    /// Map a callback error into [`ConsoleError::Callback`].
    fn at_index(self, index: usize) -> Result<T>;
}

impl<T> CallbackResultExt<T> for std::result::Result<T, CallbackError> {
    fn at_index(self, index: usize) -> Result<T> {
        self.map_err(|source| ConsoleError::Callback { index, source })
    }
}

/// Result type alias for console operations
pub type Result<T> = std::result::Result<T, ConsoleError>;
