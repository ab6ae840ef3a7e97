//! Cancellation guard shared by every watcher registration.

#[cfg(test)]
#[path = "subscription_test.rs"]
mod subscription_test;

use std::fmt;

/// Owns the teardown for one listener registration.
///
/// Dropping the guard (or calling [`dispose`](Self::dispose)) unregisters
/// the listener. [`forget`](Self::forget) releases the guard without
/// unregistering, leaving the listener live for the page's lifetime; any
/// closure the canceller keeps alive is leaked along with it.
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Wrap a teardown closure.
    #[must_use]
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self { cancel: Some(Box::new(cancel)) }
    }

    /// Unregister the listener now.
    pub fn dispose(mut self) {
        self.run();
    }

    /// Keep the listener registered forever.
    pub fn forget(mut self) {
        if let Some(cancel) = self.cancel.take() {
            std::mem::forget(cancel);
        }
    }

    fn run(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.run();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("armed", &self.cancel.is_some())
            .finish()
    }
}
