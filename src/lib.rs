//! Light/dark/auto theme preference controller for the browser.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns
//! the page's theme preference end to end: reading and writing the
//! persisted value, resolving `auto` against the operating environment's
//! color-scheme signal, toggling the dark marker on the document root, and
//! reacting to system appearance changes, cross-tab storage writes, and
//! clicks on the toggle control. The decision core is target-independent
//! and unit-tested on the host; only thin adapters touch web-sys.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`preference`] | Preference values, parsing, resolution, cycling |
//! | [`controller`] | [`controller::ThemeController`] and its watchers |
//! | [`store`] | Preference storage (localStorage / in-memory) |
//! | [`scheme`] | Environment color-scheme signal (matchMedia / fixed) |
//! | [`surface`] | Presentation target (document root class + icons) |
//! | [`subscription`] | Cancellation guard for watcher registrations |
//! | [`boot`] | Browser entry point and `window.themeManager` (wasm32) |
//!
//! ## DOM contract
//!
//! The page provides the styling and, optionally, a toggle control:
//!
//! ```html
//! <html class="...">            <!-- gains/loses class "dark" -->
//!   <button id="theme-toggle">
//!     <span data-theme-icon="light">...</span>
//!     <span data-theme-icon="dark" class="hidden">...</span>
//!     <span data-theme-icon="auto" class="hidden">...</span>
//!   </button>
//! </html>
//! ```
//!
//! The stylesheet decides what the root `dark` class and the icon `hidden`
//! class look like. Missing control or icons are skipped silently.

pub mod controller;
pub mod preference;
pub mod scheme;
pub mod store;
pub mod subscription;
pub mod surface;

#[cfg(target_arch = "wasm32")]
pub mod boot;
