//! The facade that registers operations and hands out stream handles.

use crate::one_shot::OneShotStream;
use crate::watch::WatchStream;
use alloc::boxed::Box;
use alloc::rc::Rc;
use rivulet_client::{Client, DispatchQueue};
use rivulet_core::{CachePolicy, Error, Operation, Result, Value};

/// Wraps a [`Client`] with the stream-bridge API.
///
/// Each call registers one operation with the underlying client and returns
/// a stream handle that owns that registration's cancel handle. Handles are
/// independent; disposing one never affects another.
pub struct ReactiveClient<C: Client> {
    client: Rc<C>,
}

impl<C: Client> ReactiveClient<C> {
    /// Wraps a client.
    pub fn new(client: C) -> Self {
        Self {
            client: Rc::new(client),
        }
    }

    /// Wraps an already shared client.
    pub fn from_shared(client: Rc<C>) -> Self {
        Self { client }
    }

    /// Returns the underlying client.
    #[inline]
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Registers a one-shot query and returns its stream.
    ///
    /// The observer receives the single terminal event: the classified
    /// payload on success, a classified failure otherwise.
    pub fn fetch(
        &self,
        operation: Operation,
        policy: CachePolicy,
        queue: DispatchQueue,
        observer: impl FnOnce(Result<Option<Value>>) + 'static,
    ) -> OneShotStream {
        OneShotStream::register(
            |callback| self.client.fetch(operation, policy, queue, callback),
            Box::new(observer),
        )
    }

    /// Registers a mutation and returns its stream.
    pub fn perform(
        &self,
        operation: Operation,
        queue: DispatchQueue,
        observer: impl FnOnce(Result<Option<Value>>) + 'static,
    ) -> OneShotStream {
        OneShotStream::register(
            |callback| self.client.perform(operation, queue, callback),
            Box::new(observer),
        )
    }

    /// Registers a continuous query and returns its stream.
    ///
    /// `on_next` receives one payload per successful emission, starting with
    /// the initial fetch; `on_error` receives the terminal failure if one
    /// occurs. Dispose (or drop) the returned stream to stop watching.
    pub fn watch(
        &self,
        operation: Operation,
        policy: CachePolicy,
        queue: DispatchQueue,
        on_next: impl FnMut(Option<Value>) + 'static,
        on_error: impl FnOnce(Error) + 'static,
    ) -> WatchStream {
        WatchStream::register(
            |callback| self.client.watch(operation, policy, queue, callback),
            Box::new(on_next),
            Box::new(on_error),
        )
    }
}

impl<C: Client> Clone for ReactiveClient<C> {
    fn clone(&self) -> Self {
        Self {
            client: Rc::clone(&self.client),
        }
    }
}
