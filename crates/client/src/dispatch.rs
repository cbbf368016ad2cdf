//! Delivery context for client callbacks.
//!
//! The bridge performs no threading of its own. The caller picks a
//! `DispatchQueue` per registration and the client invokes its callback
//! through it. Classification and stream emission then happen synchronously
//! inside that invocation.

/// The delivery context a client uses to invoke callbacks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DispatchQueue {
    /// Invoke the callback inline, on the caller's stack.
    #[default]
    Immediate,
    /// Defer the callback to the host microtask queue. Off wasm there is no
    /// host event loop to defer to, so this degrades to inline delivery.
    Microtask,
}

impl DispatchQueue {
    /// Runs a task on this delivery context.
    pub fn dispatch(self, task: impl FnOnce() + 'static) {
        match self {
            DispatchQueue::Immediate => task(),
            DispatchQueue::Microtask => microtask(task),
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn microtask(task: impl FnOnce() + 'static) {
    wasm_bindgen_futures::spawn_local(async move { task() });
}

#[cfg(not(target_arch = "wasm32"))]
fn microtask(task: impl FnOnce() + 'static) {
    task();
}
