//! Rivulet Core - Core types and outcome classification for the Rivulet bridge.
//!
//! This crate provides the foundational types shared by the Rivulet stream
//! bridge and the client contract:
//!
//! - `Value` / `JsonObject`: JSON tree used for GraphQL data and variables
//! - `Operation`: a typed request descriptor (kind, name, document, variables)
//! - `CachePolicy`: call-time cache policy vocabulary
//! - `Response`: the raw result shape the underlying client delivers
//! - `GraphQlError`: a domain-level error returned alongside a result
//! - `Error` / `TransportError`: the failure taxonomy of the bridge
//! - `classify`: folds one callback invocation into a single outcome
//!
//! # Example
//!
//! ```rust
//! use rivulet_core::{classify, Error, Response, TransportError, Value};
//!
//! // A transport failure wins over any accompanying partial result.
//! let outcome = classify(
//!     Some(Response::with_data(Value::from("stale"))),
//!     Some(TransportError::new("socket closed")),
//! );
//! assert!(matches!(outcome, Err(Error::Transport(_))));
//!
//! // A bare result resolves to its payload, even an absent one.
//! let outcome = classify(Some(Response::new(None)), None);
//! assert_eq!(outcome, Ok(None));
//! ```

#![no_std]

extern crate alloc;

mod classify;
mod error;
mod operation;
mod response;
mod value;

pub use classify::classify;
pub use error::{Error, Result, TransportError};
pub use operation::{CachePolicy, Operation, OperationKind};
pub use response::{GraphQlError, Location, PathSegment, Response};
pub use value::{JsonObject, Value};
