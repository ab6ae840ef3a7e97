//! Theme controller: storage, resolution, presentation, and watchers.
//!
//! DESIGN
//! ======
//! The controller owns nothing browser-specific. It is assembled from an
//! injected store, scheme signal, and surface, so the same event handling
//! runs under `cargo test` on the host and against the live document in
//! the browser. Clones share collaborators; watcher closures hold a clone.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::rc::Rc;

use crate::preference::{EffectiveTheme, Preference, next_in_cycle};
use crate::scheme::SchemeSignal;
use crate::store::PreferenceStore;
use crate::subscription::Subscription;
use crate::surface::ThemeSurface;

/// Orchestrates the persisted preference, the environment signal, and the
/// presentation surface.
///
/// Every operation is total: missing or malformed state degrades to a
/// default, and nothing here returns an error.
#[derive(Clone)]
pub struct ThemeController {
    store: Rc<dyn PreferenceStore>,
    scheme: Rc<dyn SchemeSignal>,
    surface: Rc<dyn ThemeSurface>,
    fallback: Preference,
}

impl ThemeController {
    #[must_use]
    pub fn new(
        store: Rc<dyn PreferenceStore>,
        scheme: Rc<dyn SchemeSignal>,
        surface: Rc<dyn ThemeSurface>,
    ) -> Self {
        Self { store, scheme, surface, fallback: Preference::Auto }
    }

    /// Replace the fallback used while no value has been persisted.
    /// Persisted values always win over the fallback.
    #[must_use]
    pub fn with_fallback(mut self, fallback: Preference) -> Self {
        self.fallback = fallback;
        self
    }

    /// Current preference: the persisted value, or the fallback when the
    /// store is empty or holds an unrecognized entry.
    #[must_use]
    pub fn preference(&self) -> Preference {
        self.store
            .load()
            .as_deref()
            .and_then(Preference::parse)
            .unwrap_or(self.fallback)
    }

    /// Resolve `preference` against the live environment signal.
    #[must_use]
    pub fn resolve_effective(&self, preference: Preference) -> EffectiveTheme {
        preference.resolve(self.scheme.prefers_dark())
    }

    /// Push `preference` to the surface: marker from the resolved theme,
    /// icon from the raw preference.
    pub fn apply(&self, preference: Preference) {
        let effective = self.resolve_effective(preference);
        log::debug!("applying theme: preference={preference} effective={effective}");
        self.surface.set_dark_marker(effective.is_dark());
        self.surface.select_icon(preference);
    }

    /// Advance to the next preference, persist it, apply it, and return it.
    ///
    /// Cycling reads the raw stored string, so an entry outside the cycle
    /// order advances to `Light` (wrap from "not found") rather than to the
    /// lenient fallback's successor.
    pub fn cycle(&self) -> Preference {
        let raw = self
            .store
            .load()
            .unwrap_or_else(|| self.fallback.as_str().to_owned());
        let next = next_in_cycle(&raw);
        self.store.save(next.as_str());
        self.apply(next);
        next
    }

    /// Apply the current preference, then watch both external signals.
    ///
    /// The returned handle unregisters the watchers when disposed or
    /// dropped; [`ControllerHandle::forget`] leaves them registered for the
    /// page's lifetime.
    #[must_use]
    pub fn start(&self) -> ControllerHandle {
        self.apply(self.preference());
        ControllerHandle {
            scheme: self.watch_scheme(),
            store: self.watch_store(),
        }
    }

    /// Re-apply on environment changes, but only while the preference is
    /// `Auto`; otherwise the event is observed without visible effect.
    fn watch_scheme(&self) -> Subscription {
        let controller = self.clone();
        self.scheme.subscribe(Box::new(move |_dark| {
            if controller.preference() == Preference::Auto {
                controller.apply(Preference::Auto);
            }
        }))
    }

    /// Apply values written by other contexts; empty, absent, or
    /// unrecognized values apply as `Auto`.
    fn watch_store(&self) -> Subscription {
        let controller = self.clone();
        self.store.subscribe(Box::new(move |value| {
            let preference = value
                .as_deref()
                .filter(|raw| !raw.is_empty())
                .and_then(Preference::parse)
                .unwrap_or(Preference::Auto);
            controller.apply(preference);
        }))
    }
}

/// Disposer for the registrations made by [`ThemeController::start`].
#[derive(Debug)]
pub struct ControllerHandle {
    scheme: Subscription,
    store: Subscription,
}

impl ControllerHandle {
    /// Unregister both watchers now.
    pub fn dispose(self) {
        self.scheme.dispose();
        self.store.dispose();
    }

    /// Leave both watchers registered for the page's lifetime.
    pub fn forget(self) {
        self.scheme.forget();
        self.store.forget();
    }
}
