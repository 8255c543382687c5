//! Error types for typed console input.

use std::io;

/// Errors that end an input request.
///
/// Recoverable conversion failures never surface here: the prompt loop
/// prints a notice and asks again. What remains are configuration
/// mistakes, caller usage errors and a terminal that stopped answering.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// No converter is registered for the requested type.
    #[error("No converter registered for type '{key}'.")]
    UnsupportedType { key: String },

    /// More than one custom prompt was supplied to a single request.
    #[error("Expected at most one custom prompt, got {count}.")]
    InvalidPromptArity { count: usize },

    /// A converter for this key is already registered.
    #[error("A converter for type '{key}' is already registered.")]
    DuplicateConverter { key: String },

    /// The process-wide registry was already installed or read.
    #[error("The converter registry is frozen; install it before the first conversion.")]
    RegistryFrozen,

    /// The input stream ended while waiting for a line.
    #[error("Input closed before a valid value was entered.")]
    Closed,

    /// Reading from or writing to the terminal failed.
    #[error("Terminal I/O failed: {0}")]
    Io(#[source] io::Error),
}

impl InputError {
    /// Create an unsupported-type error.
    pub fn unsupported(key: impl Into<String>) -> Self {
        Self::UnsupportedType { key: key.into() }
    }
}

impl From<io::Error> for InputError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

/// Why a single conversion attempt failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// The text is not valid syntax for the type.
    #[error("'{type_name}' syntax not recognised")]
    Malformed { type_name: String },

    /// Single-character input that is not exactly one character long.
    #[error("expected one {type_name}, got {length}")]
    WrongLength { type_name: String, length: usize },

    /// Valid syntax, but the value does not fit the target type.
    #[error("value out of range for {type_name}")]
    OutOfRange { type_name: String },

    /// A caller-supplied constraint refused the converted value.
    #[error("{message}")]
    Rejected { message: String },

    /// No converter is registered for the key.
    #[error("no converter for '{key}'")]
    UnsupportedType { key: String },
}

impl ConversionError {
    pub fn malformed(type_name: impl Into<String>) -> Self {
        Self::Malformed {
            type_name: type_name.into(),
        }
    }

    pub fn out_of_range(type_name: impl Into<String>) -> Self {
        Self::OutOfRange {
            type_name: type_name.into(),
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            message: message.into(),
        }
    }

    /// Whether the prompt loop should ask again after this failure.
    ///
    /// Only [`UnsupportedType`](Self::UnsupportedType) is fatal.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::UnsupportedType { .. })
    }
}

/// Outcome of converting one line of text.
pub type ConversionResult<T> = Result<T, ConversionError>;
