//! Environment color-scheme signal.
//!
//! SYSTEM CONTEXT
//! ==============
//! Resolving an `Auto` preference needs one bit from the host: does the
//! environment currently prefer a dark scheme. The browser build reads it
//! from `matchMedia("(prefers-color-scheme: dark)")`; tests drive
//! [`FixedScheme`] by hand.

#[cfg(test)]
#[path = "scheme_test.rs"]
mod scheme_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::subscription::Subscription;

/// Callback invoked with the new dark-preferred flag on each change.
pub type SchemeCallback = Box<dyn Fn(bool)>;

/// Read-only view of the host environment's color-scheme preference.
pub trait SchemeSignal {
    /// True when the environment currently prefers a dark scheme.
    fn prefers_dark(&self) -> bool;

    /// Watch for changes to the preference.
    fn subscribe(&self, on_change: SchemeCallback) -> Subscription;
}

type SharedCallback = Rc<dyn Fn(bool)>;

#[derive(Default)]
struct FixedInner {
    dark: bool,
    next_id: u64,
    subscribers: Vec<(u64, SharedCallback)>,
}

/// Manually driven signal for tests and headless embedders.
#[derive(Clone, Default)]
pub struct FixedScheme {
    inner: Rc<RefCell<FixedInner>>,
}

impl FixedScheme {
    #[must_use]
    pub fn new(dark: bool) -> Self {
        let scheme = Self::default();
        scheme.inner.borrow_mut().dark = dark;
        scheme
    }

    /// Flip the signal, notifying subscribers, as an OS appearance change
    /// would. Setting the current value again is a no-op.
    pub fn set(&self, dark: bool) {
        if self.inner.borrow().dark == dark {
            return;
        }
        self.inner.borrow_mut().dark = dark;
        let subscribers: Vec<SharedCallback> = self
            .inner
            .borrow()
            .subscribers
            .iter()
            .map(|(_, callback)| Rc::clone(callback))
            .collect();
        for callback in subscribers {
            callback(dark);
        }
    }
}

impl SchemeSignal for FixedScheme {
    fn prefers_dark(&self) -> bool {
        self.inner.borrow().dark
    }

    fn subscribe(&self, on_change: SchemeCallback) -> Subscription {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.subscribers.push((id, Rc::from(on_change)));
            id
        };
        let inner = Rc::clone(&self.inner);
        Subscription::new(move || {
            inner.borrow_mut().subscribers.retain(|(sid, _)| *sid != id);
        })
    }
}

#[cfg(target_arch = "wasm32")]
mod media {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    use super::{SchemeCallback, SchemeSignal, Subscription};

    const QUERY: &str = "(prefers-color-scheme: dark)";

    /// `matchMedia` signal. A host without media queries reads as light
    /// and never fires.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct MediaScheme;

    impl MediaScheme {
        #[must_use]
        pub fn new() -> Self {
            Self
        }
    }

    fn media_query() -> Option<web_sys::MediaQueryList> {
        web_sys::window().and_then(|w| w.match_media(QUERY).ok().flatten())
    }

    impl SchemeSignal for MediaScheme {
        fn prefers_dark(&self) -> bool {
            media_query().is_some_and(|mq| mq.matches())
        }

        fn subscribe(&self, on_change: SchemeCallback) -> Subscription {
            let Some(mq) = media_query() else {
                return Subscription::new(|| {});
            };
            let closure = Closure::wrap(Box::new(move |event: web_sys::MediaQueryListEvent| {
                on_change(event.matches());
            }) as Box<dyn FnMut(web_sys::MediaQueryListEvent)>);
            if mq
                .add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())
                .is_err()
            {
                return Subscription::new(|| {});
            }
            Subscription::new(move || {
                let _ =
                    mq.remove_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
            })
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use media::MediaScheme;
