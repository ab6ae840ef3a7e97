//! Preference storage abstraction.
//!
//! SYSTEM CONTEXT
//! ==============
//! The persisted preference is shared, origin-scoped state that other tabs
//! can rewrite at any time. The trait keeps that dependency injectable:
//! the browser build mounts [`LocalStore`] over `localStorage`, while tests
//! and non-browser embedders mount [`MemoryStore`].

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::subscription::Subscription;

/// Callback invoked with the raw new value when another execution context
/// writes the store. `None` means the entry was removed.
pub type StoreCallback = Box<dyn Fn(Option<String>)>;

/// Durable, origin-scoped storage for the raw preference string.
///
/// `subscribe` delivers writes from *other* execution contexts only; a
/// same-context [`save`](Self::save) never notifies.
pub trait PreferenceStore {
    /// Read the raw stored value, if any.
    fn load(&self) -> Option<String>;

    /// Persist `value`, overwriting any previous entry.
    fn save(&self, value: &str);

    /// Watch for cross-context writes.
    fn subscribe(&self, on_change: StoreCallback) -> Subscription;
}

type SharedCallback = Rc<dyn Fn(Option<String>)>;

#[derive(Default)]
struct MemoryInner {
    value: Option<String>,
    next_id: u64,
    subscribers: Vec<(u64, SharedCallback)>,
}

/// In-memory store for tests and headless embedders.
///
/// Clones share the same cell, so one clone can stand in for "another tab"
/// via [`set_external`](Self::set_external).
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Rc<RefCell<MemoryInner>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Write as another context would: mutate the value *and* notify
    /// subscribers. `None` removes the entry.
    pub fn set_external(&self, value: Option<&str>) {
        self.inner.borrow_mut().value = value.map(str::to_owned);
        let subscribers: Vec<SharedCallback> = self
            .inner
            .borrow()
            .subscribers
            .iter()
            .map(|(_, callback)| Rc::clone(callback))
            .collect();
        for callback in subscribers {
            callback(value.map(str::to_owned));
        }
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self) -> Option<String> {
        self.inner.borrow().value.clone()
    }

    fn save(&self, value: &str) {
        self.inner.borrow_mut().value = Some(value.to_owned());
    }

    fn subscribe(&self, on_change: StoreCallback) -> Subscription {
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
mod local {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    use super::{PreferenceStore, StoreCallback, Subscription};
    use crate::preference::STORAGE_KEY;

    /// `window.localStorage` store under [`STORAGE_KEY`].
    ///
    /// Absent storage (headless host, denied access at the API level)
    /// degrades every operation to a no-op.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct LocalStore;

    impl LocalStore {
        #[must_use]
        pub fn new() -> Self {
            Self
        }
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }

    impl PreferenceStore for LocalStore {
        fn load(&self) -> Option<String> {
            storage().and_then(|s| s.get_item(STORAGE_KEY).ok().flatten())
        }

        fn save(&self, value: &str) {
            if let Some(storage) = storage() {
                let _ = storage.set_item(STORAGE_KEY, value);
            }
        }

        fn subscribe(&self, on_change: StoreCallback) -> Subscription {
            let Some(window) = web_sys::window() else {
                return Subscription::new(|| {});
            };
            // `storage` only fires in other same-origin contexts; the key
            // filter is ours.
            let closure = Closure::wrap(Box::new(move |event: web_sys::StorageEvent| {
                if event.key().as_deref() == Some(STORAGE_KEY) {
                    on_change(event.new_value());
                }
            }) as Box<dyn FnMut(web_sys::StorageEvent)>);
            if window
                .add_event_listener_with_callback("storage", closure.as_ref().unchecked_ref())
                .is_err()
            {
                return Subscription::new(|| {});
            }
            Subscription::new(move || {
                let _ = window
                    .remove_event_listener_with_callback("storage", closure.as_ref().unchecked_ref());
            })
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use local::LocalStore;
