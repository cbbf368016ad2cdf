//! The registration primitives the underlying client must expose.

use crate::cancel::CancelHandle;
use crate::dispatch::DispatchQueue;
use alloc::boxed::Box;
use rivulet_core::{CachePolicy, Operation, Response, TransportError};

/// Callback for one-shot registrations (fetch, perform).
///
/// Invoked with an optional result object and an optional transport error.
/// One invocation is expected; the bridge ignores any further ones, so a
/// client that reports twice (a cache round followed by a network round)
/// stays within contract.
pub type OneShotCallback = Box<dyn FnMut(Option<Response>, Option<TransportError>)>;

/// Callback for continuous registrations (watch).
///
/// Invoked once for the initial fetch and again whenever dependent cached
/// data changes, until the registration is cancelled.
pub type WatchCallback = Box<dyn FnMut(Option<Response>, Option<TransportError>)>;

/// The callback-based, cancellable client API the bridge adapts.
///
/// Contract requirements on implementors:
///
/// - Callbacks are invoked through the supplied [`DispatchQueue`], and a
///   registration may complete synchronously during the registering call
///   (for example a cache hit under [`CachePolicy::CacheElseFetch`]).
/// - The returned [`CancelHandle`] stops the in-flight or continuous work;
///   cancelling after completion must be a no-op.
/// - Watch callbacks are invoked in cache-change order; the client performs
///   no batching the bridge needs to undo.
pub trait Client {
    /// Registers a one-shot query. The callback fires once with the result.
    fn fetch(
        &self,
        operation: Operation,
        policy: CachePolicy,
        queue: DispatchQueue,
        callback: OneShotCallback,
    ) -> CancelHandle;

    /// Registers a continuous query. The callback fires for the initial
    /// fetch and for every subsequent change to dependent cached data.
    fn watch(
        &self,
        operation: Operation,
        policy: CachePolicy,
        queue: DispatchQueue,
        callback: WatchCallback,
    ) -> CancelHandle;

    /// Registers a mutation. The callback fires once with the result.
    fn perform(
        &self,
        operation: Operation,
        queue: DispatchQueue,
        callback: OneShotCallback,
    ) -> CancelHandle;
}
