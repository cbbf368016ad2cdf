//! One-shot stream bridge (fetch, perform).
//!
//! Wraps a single registration of a one-shot client primitive as a stream
//! that resolves exactly once. The first callback invocation is classified
//! and delivered as the terminal event; everything after that (further
//! invocations, redundant disposal) is ignored.

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::RefCell;
use rivulet_client::{CancelHandle, OneShotCallback};
use rivulet_core::{classify, Response, Result, TransportError, Value};

/// Observer invoked with the single terminal event of a one-shot stream.
pub type OneShotObserver = Box<dyn FnOnce(Result<Option<Value>>)>;

struct Shared {
    /// Consumer observer; taken when the terminal event is delivered or the
    /// stream is disposed.
    observer: Option<OneShotObserver>,
    /// Set once a terminal event was delivered or the stream was disposed.
    /// Suppresses every later delivery.
    settled: bool,
    /// Cancellation capability obtained at registration.
    cancel: Option<CancelHandle>,
}

/// A stream that resolves with at most one value or one failure.
///
/// Returned by [`ReactiveClient::fetch`](crate::ReactiveClient::fetch) and
/// [`ReactiveClient::perform`](crate::ReactiveClient::perform). Dropping the
/// handle disposes it.
pub struct OneShotStream {
    shared: Rc<RefCell<Shared>>,
}

impl OneShotStream {
    /// Registers a one-shot operation through `register` and wires its
    /// callback into fresh stream state.
    ///
    /// The callback may fire synchronously inside `register` (a cache-served
    /// fetch); the cancel handle returned afterwards is then already moot
    /// and is spent on attach.
    pub(crate) fn register<F>(register: F, observer: OneShotObserver) -> Self
    where
        F: FnOnce(OneShotCallback) -> CancelHandle,
    {
        let shared = Rc::new(RefCell::new(Shared {
            observer: Some(observer),
            settled: false,
            cancel: None,
        }));

        let callback_shared = Rc::clone(&shared);
        let handle = register(Box::new(move |response, error| {
            Self::deliver(&callback_shared, response, error);
        }));

        Self::attach_cancel(&shared, handle);
        Self { shared }
    }

    /// Classifies one callback invocation and delivers the terminal event.
    fn deliver(
        shared: &Rc<RefCell<Shared>>,
        response: Option<Response>,
        error: Option<TransportError>,
    ) {
        let observer = {
            let mut state = shared.borrow_mut();
            if state.settled {
                return;
            }
            state.settled = true;
            state.observer.take()
        };

        // No borrow held while the observer runs.
        if let Some(observer) = observer {
            observer(classify(response, error));
        }

        // The registration is finished; release the in-flight work. The
        // handle is a no-op on the client side at this point.
        let cancel = shared.borrow_mut().cancel.take();
        if let Some(mut cancel) = cancel {
            cancel.cancel();
        }
    }

    /// Stores the cancel handle, or spends it immediately when the stream
    /// already settled during registration.
    fn attach_cancel(shared: &Rc<RefCell<Shared>>, handle: CancelHandle) {
        let settled = shared.borrow().settled;
        if settled {
            let mut handle = handle;
            handle.cancel();
        } else {
            shared.borrow_mut().cancel = Some(handle);
        }
    }

    /// Disposes the stream: suppresses any future delivery and cancels the
    /// in-flight work. Idempotent.
    pub fn dispose(&self) {
        let cancel = {
            let mut state = self.shared.borrow_mut();
            state.settled = true;
            state.observer = None;
            state.cancel.take()
        };
        if let Some(mut cancel) = cancel {
            cancel.cancel();
        }
    }

    /// Returns true once the stream delivered its terminal event or was
    /// disposed.
    #[inline]
    pub fn is_settled(&self) -> bool {
        self.shared.borrow().settled
    }
}

impl Drop for OneShotStream {
    fn drop(&mut self) {
        self.dispose();
    }
}
