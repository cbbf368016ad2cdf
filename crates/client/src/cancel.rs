//! Cancellation capability for in-flight registrations.

use alloc::boxed::Box;
use core::fmt;

/// An opaque capability that stops an in-flight or continuous operation.
///
/// The handle is idempotent by construction: the wrapped closure is taken on
/// the first `cancel()` and later calls find nothing to run. Cancelling
/// after the operation already completed must be a no-op on the client side;
/// the guard here additionally makes redundant calls free.
pub struct CancelHandle {
    inner: Option<Box<dyn FnOnce()>>,
}

impl CancelHandle {
    /// Wraps a cancellation closure.
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            inner: Some(Box::new(cancel)),
        }
    }

    /// A handle with nothing to cancel. Useful for client paths that
    /// complete synchronously during registration.
    pub fn noop() -> Self {
        Self { inner: None }
    }

    /// Cancels the underlying operation. Safe to call any number of times;
    /// only the first call runs the closure.
    pub fn cancel(&mut self) {
        if let Some(cancel) = self.inner.take() {
            cancel();
        }
    }

    /// Returns true once the handle has been cancelled (or never held a
    /// closure to begin with).
    #[inline]
    pub fn is_spent(&self) -> bool {
        self.inner.is_none()
    }
}

impl fmt::Debug for CancelHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CancelHandle")
            .field("spent", &self.is_spent())
            .finish()
    }
}
