//! Continuous stream bridge (watch).
//!
//! Wraps a watch registration as a multi-value stream: an initial emission
//! for the first fetch, one emission per subsequent cache change, in
//! arrival order. The first classified failure terminates the stream;
//! disposal by the consumer stops it and cancels the registration.

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::RefCell;
use rivulet_client::{CancelHandle, WatchCallback};
use rivulet_core::{classify, Error, Response, TransportError, Value};

/// Observer invoked once per successful emission.
pub type WatchValueObserver = Box<dyn FnMut(Option<Value>)>;

/// Observer invoked with the terminal failure, if one occurs.
pub type WatchErrorObserver = Box<dyn FnOnce(Error)>;

struct Shared {
    /// Value observer. Taken for the duration of each emission so no borrow
    /// is held while consumer code runs.
    on_next: Option<WatchValueObserver>,
    /// Failure observer; taken when the stream terminates with a failure.
    on_error: Option<WatchErrorObserver>,
    /// Set on the first failure or on disposal. Later callback invocations
    /// are ignored.
    terminated: bool,
    /// Cancellation capability obtained at registration; spent exactly once
    /// at disposal.
    cancel: Option<CancelHandle>,
}

/// A stream that emits zero or more values until a failure terminates it or
/// the consumer disposes it.
///
/// Returned by [`ReactiveClient::watch`](crate::ReactiveClient::watch).
/// Dropping the handle disposes it.
pub struct WatchStream {
    shared: Rc<RefCell<Shared>>,
}

impl WatchStream {
    /// Registers a watch operation through `register` and wires its
    /// callback into fresh stream state.
    ///
    /// The initial emission may arrive synchronously inside `register`.
    pub(crate) fn register<F>(
        register: F,
        on_next: WatchValueObserver,
        on_error: WatchErrorObserver,
    ) -> Self
    where
        F: FnOnce(WatchCallback) -> CancelHandle,
    {
        let shared = Rc::new(RefCell::new(Shared {
            on_next: Some(on_next),
            on_error: Some(on_error),
            terminated: false,
            cancel: None,
        }));

        let callback_shared = Rc::clone(&shared);
        let handle = register(Box::new(move |response, error| {
            Self::deliver(&callback_shared, response, error);
        }));

        shared.borrow_mut().cancel = Some(handle);
        Self { shared }
    }

    /// Classifies one callback invocation and emits it.
    fn deliver(
        shared: &Rc<RefCell<Shared>>,
        response: Option<Response>,
        error: Option<TransportError>,
    ) {
        if shared.borrow().terminated {
            return;
        }

        match classify(response, error) {
            Ok(data) => {
                let Some(mut on_next) = shared.borrow_mut().on_next.take() else {
                    return;
                };

                // No borrow held while the observer runs; it may re-enter
                // and dispose the stream.
                on_next(data);

                let mut state = shared.borrow_mut();
                if !state.terminated {
                    state.on_next = Some(on_next);
                }
            }
            Err(failure) => {
                let on_error = {
                    let mut state = shared.borrow_mut();
                    state.terminated = true;
                    state.on_next = None;
                    state.on_error.take()
                };
                if let Some(on_error) = on_error {
                    on_error(failure);
                }
            }
        }
    }

    /// Disposes the stream: stops all further emissions and cancels the
    /// registration. Idempotent.
    pub fn dispose(&self) {
        let cancel = {
            let mut state = self.shared.borrow_mut();
            state.terminated = true;
            state.on_next = None;
            state.on_error = None;
            state.cancel.take()
        };
        if let Some(mut cancel) = cancel {
            cancel.cancel();
        }
    }

    /// Returns true once the stream failed or was disposed.
    #[inline]
    pub fn is_terminated(&self) -> bool {
        self.shared.borrow().terminated
    }
}

impl Drop for WatchStream {
    fn drop(&mut self) {
        self.dispose();
    }
}
