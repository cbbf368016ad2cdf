//! Error types for the Rivulet bridge.

use crate::response::GraphQlError;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

/// Result type alias for bridge operations.
pub type Result<T> = core::result::Result<T, Error>;

/// A transport-level failure produced by the underlying client.
///
/// Covers network, serialization, and client-internal failures. The bridge
/// passes the cause through unchanged; it never rewrites or wraps it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransportError {
    message: String,
}

impl TransportError {
    /// Creates a transport error with the given cause description.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the cause description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// A classified failure delivered to a stream consumer.
#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    /// Transport-level failure, passed through from the underlying client.
    Transport(TransportError),
    /// The call completed but returned domain-level errors. The list is
    /// kept whole and ordered; callers may need every entry for diagnostics.
    GraphQl {
        errors: Vec<GraphQlError>,
    },
    /// The client invoked the callback with neither a result nor an error.
    /// This state signals a contract violation by the client.
    Unknown,
}

impl Error {
    /// Creates a transport failure from a cause description.
    pub fn transport(message: impl Into<String>) -> Self {
        Error::Transport(TransportError::new(message))
    }

    /// Creates a domain-level failure carrying the given error list.
    pub fn graphql(errors: Vec<GraphQlError>) -> Self {
        Error::GraphQl { errors }
    }

    /// Returns true if this is a transport failure.
    #[inline]
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_))
    }

    /// Returns true if this is a domain-level failure.
    #[inline]
    pub fn is_graphql(&self) -> bool {
        matches!(self, Error::GraphQl { .. })
    }

    /// Returns true if this is the defensive fallback failure.
    #[inline]
    pub fn is_unknown(&self) -> bool {
        matches!(self, Error::Unknown)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Transport(cause) => {
                write!(f, "Transport failure: {}", cause)
            }
            Error::GraphQl { errors } => {
                write!(f, "GraphQL errors ({}):", errors.len())?;
                for err in errors {
                    write!(f, " {};", err)?;
                }
                Ok(())
            }
            Error::Unknown => {
                write!(f, "Callback invoked with neither a result nor an error")
            }
        }
    }
}

impl From<TransportError> for Error {
    fn from(cause: TransportError) -> Self {
        Error::Transport(cause)
    }
}
