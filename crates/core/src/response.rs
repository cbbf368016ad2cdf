//! The raw result shape delivered by the underlying client.
//!
//! A `Response` is what the client hands to a registered callback: an
//! optional data payload plus a (possibly empty) list of domain-level
//! errors. Both may be present at once; classification decides which wins.

use crate::value::Value;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

/// A source position attached to a GraphQL error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Location {
    /// 1-based line in the document.
    pub line: u32,
    /// 1-based column in the document.
    pub column: u32,
}

/// One step of the response path an error applies to.
#[derive(Clone, Debug, PartialEq)]
pub enum PathSegment {
    /// A named field.
    Field(String),
    /// A list index.
    Index(usize),
}

/// A domain-level error returned alongside a result.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphQlError {
    /// Human-readable description of the failure.
    pub message: String,
    /// Positions in the document the error refers to.
    pub locations: Vec<Location>,
    /// Path of the response field the error applies to.
    pub path: Vec<PathSegment>,
}

impl GraphQlError {
    /// Creates an error with just a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            locations: Vec::new(),
            path: Vec::new(),
        }
    }

    /// Attaches a source location, consuming and returning the error.
    pub fn with_location(mut self, line: u32, column: u32) -> Self {
        self.locations.push(Location { line, column });
        self
    }

    /// Attaches a path segment, consuming and returning the error.
    pub fn with_path_segment(mut self, segment: PathSegment) -> Self {
        self.path.push(segment);
        self
    }
}

impl fmt::Display for GraphQlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(location) = self.locations.first() {
            write!(f, " (line {}, column {})", location.line, location.column)?;
        }
        Ok(())
    }
}

/// The result object a callback invocation may carry.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Response {
    /// The data payload; absent when the call produced no data (for
    /// example a cache miss under a cache-only policy).
    pub data: Option<Value>,
    /// Domain-level errors returned alongside the payload, in server order.
    pub errors: Vec<GraphQlError>,
}

impl Response {
    /// Creates a response with the given payload and no errors.
    pub fn new(data: Option<Value>) -> Self {
        Self {
            data,
            errors: Vec::new(),
        }
    }

    /// Creates a response carrying a present payload.
    pub fn with_data(data: Value) -> Self {
        Self::new(Some(data))
    }

    /// Creates a response carrying errors and no payload.
    pub fn with_errors(errors: Vec<GraphQlError>) -> Self {
        Self {
            data: None,
            errors,
        }
    }

    /// Returns true if the response carries at least one domain-level error.
    #[inline]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}
