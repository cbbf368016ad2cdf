//! Rivulet Client - The contract the underlying GraphQL client must satisfy.
//!
//! The Rivulet bridge does not implement networking or caching. It adapts an
//! existing callback-based client, and this crate pins down the shape that
//! client must have:
//!
//! - `Client`: the three registration primitives (fetch, watch, perform)
//! - `CancelHandle`: the capability returned by each registration
//! - `DispatchQueue`: the caller-supplied delivery context
//! - `OneShotCallback` / `WatchCallback`: the callback shapes
//!
//! Callbacks receive an optional result object and an optional transport
//! error on every invocation. Both options may in principle be absent; the
//! bridge classifies that case as a contract violation rather than ruling it
//! out in the type system, because real clients have been observed to do it.

extern crate alloc;

mod cancel;
mod dispatch;
mod traits;

pub use cancel::CancelHandle;
pub use dispatch::DispatchQueue;
pub use traits::{Client, OneShotCallback, WatchCallback};
