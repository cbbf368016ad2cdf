//! Rivulet Reactive - Stream bridge over the callback-based client contract.
//!
//! This crate turns the three registration primitives of a
//! [`Client`](rivulet_client::Client) into stream handles with well-defined
//! completion, error, and cancellation semantics:
//!
//! - `OneShotStream`: fetch and perform. Resolves exactly once, with a
//!   value or a classified failure
//! - `WatchStream`: watch. Emits a value per successful callback
//!   invocation until a failure terminates it or the consumer disposes it
//! - `ReactiveClient`: the facade that registers operations and hands out
//!   stream handles
//!
//! # Protocol
//!
//! Registration obtains a cancel handle from the client and wires a
//! callback into shared stream state. Every callback invocation is
//! classified synchronously on the delivery context; successes become
//! stream values, failures terminate the stream. Disposing a handle
//! (explicitly or by drop) invokes the cancel handle exactly once and
//! suppresses any late deliveries.
//!
//! # Example
//!
//! ```ignore
//! use rivulet_reactive::ReactiveClient;
//! use rivulet_core::{CachePolicy, Operation};
//! use rivulet_client::DispatchQueue;
//!
//! let reactive = ReactiveClient::new(client);
//! let stream = reactive.fetch(
//!     Operation::query("Hero", "query Hero { hero { name } }"),
//!     CachePolicy::CacheElseFetch,
//!     DispatchQueue::Immediate,
//!     |outcome| match outcome {
//!         Ok(data) => println!("resolved: {:?}", data),
//!         Err(failure) => println!("failed: {}", failure),
//!     },
//! );
//! // Dropping `stream` cancels the in-flight work if it has not resolved.
//! ```

#![no_std]

extern crate alloc;

mod bridge;
mod one_shot;
mod watch;

pub use bridge::ReactiveClient;
pub use one_shot::{OneShotObserver, OneShotStream};
pub use watch::{WatchErrorObserver, WatchStream, WatchValueObserver};

// Re-export commonly used types from dependencies
pub use rivulet_client::{CancelHandle, Client, DispatchQueue};
pub use rivulet_core::{CachePolicy, Error, Operation, Result, Value};
