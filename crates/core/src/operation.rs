//! Operation descriptors.
//!
//! An `Operation` identifies one call against the underlying client: the
//! kind of call, the document to execute, and the variables it carries.
//! Descriptors are immutable once built and consumed by the registration
//! that uses them.

use crate::value::{JsonObject, Value};
use alloc::string::String;

/// The kind of call an operation describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperationKind {
    /// A read (one-shot fetch or continuous watch).
    Query,
    /// A write performed against the server.
    Mutation,
}

/// Cache policy vocabulary for read operations.
///
/// The policy is carried to the underlying client unchanged; its semantics
/// (which store is consulted, in what order) are the client's concern.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CachePolicy {
    /// Serve from the cache when possible, fall back to the network.
    #[default]
    CacheElseFetch,
    /// Always go to the network, ignoring cached data.
    FetchIgnoringCache,
    /// Serve from the cache only; never touch the network.
    CacheOnly,
    /// Serve cached data immediately, then refresh from the network.
    CacheAndFetch,
}

/// A typed request descriptor for one client call.
#[derive(Clone, Debug, PartialEq)]
pub struct Operation {
    kind: OperationKind,
    name: String,
    document: String,
    variables: JsonObject,
}

impl Operation {
    /// Creates a query descriptor.
    pub fn query(name: impl Into<String>, document: impl Into<String>) -> Self {
        Self::new(OperationKind::Query, name, document)
    }

    /// Creates a mutation descriptor.
    pub fn mutation(name: impl Into<String>, document: impl Into<String>) -> Self {
        Self::new(OperationKind::Mutation, name, document)
    }

    fn new(kind: OperationKind, name: impl Into<String>, document: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            document: document.into(),
            variables: JsonObject::new(),
        }
    }

    /// Adds a variable to the descriptor, consuming and returning it.
    pub fn with_variable(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.variables.insert(name, value.into());
        self
    }

    /// Returns the operation kind.
    #[inline]
    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    /// Returns the operation name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the document text.
    #[inline]
    pub fn document(&self) -> &str {
        &self.document
    }

    /// Returns the variables object.
    #[inline]
    pub fn variables(&self) -> &JsonObject {
        &self.variables
    }
}
