//! Browser entry point: wires the controller to the live document.
//!
//! SYSTEM CONTEXT
//! ==============
//! Loading the module schedules [`mount`] for when the document is parsed.
//! Mounting builds a controller over `localStorage`, `matchMedia`, and the
//! DOM, starts the watchers for the page's lifetime, binds the toggle
//! control if one exists, and publishes `window.themeManager` for other
//! scripts. Embedding pages may set `window.__themePreference` before this
//! module loads to change the default used while nothing is persisted.

use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::{JsCast, JsValue};

use crate::controller::ThemeController;
use crate::preference::Preference;
use crate::scheme::MediaScheme;
use crate::store::LocalStore;
use crate::surface::{DomSurface, TOGGLE_ID};

const OVERRIDE_PROP: &str = "__themePreference";
const MANAGER_PROP: &str = "themeManager";

/// Module entry. Runs [`mount`] immediately when the document is already
/// parsed, otherwise defers it to `DOMContentLoaded`.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if document.ready_state() == "loading" {
        let callback = Closure::once_into_js(mount);
        let _ = document
            .add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref());
    } else {
        mount();
    }
}

fn mount() {
    let controller = ThemeController::new(
        Rc::new(LocalStore::new()),
        Rc::new(MediaScheme::new()),
        Rc::new(DomSurface::new()),
    )
    .with_fallback(preinit_override().unwrap_or_default());

    controller.start().forget();
    bind_toggle(&controller);
    expose_manager(&controller);
    log::debug!("theme controller mounted");
}

/// `window.__themePreference`, consulted once at mount time. Only a valid
/// wire literal counts; anything else leaves the default at auto.
fn preinit_override() -> Option<Preference> {
    let window = web_sys::window()?;
    let value = js_sys::Reflect::get(window.as_ref(), &JsValue::from_str(OVERRIDE_PROP)).ok()?;
    value.as_string().as_deref().and_then(Preference::parse)
}

/// Bind the toggle control's click to `cycle()`. No control, no binding.
fn bind_toggle(controller: &ThemeController) {
    let Some(control) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(TOGGLE_ID))
    else {
        return;
    };
    let controller = controller.clone();
    let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
        controller.cycle();
    }) as Box<dyn FnMut(web_sys::Event)>);
    if control
        .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
        .is_ok()
    {
        closure.forget();
    }
}

/// Publish `window.themeManager` with `getPreference`, `cycle`, and
/// `apply` so non-wasm scripts on the page can drive the controller.
fn expose_manager(controller: &ThemeController) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let manager = js_sys::Object::new();

    let get = {
        let controller = controller.clone();
        Closure::wrap(Box::new(move || controller.preference().as_str().to_owned())
            as Box<dyn FnMut() -> String>)
    };
    set_method(&manager, "getPreference", get.as_ref());
    get.forget();

    let cycle = {
        let controller = controller.clone();
        Closure::wrap(
            Box::new(move || controller.cycle().as_str().to_owned()) as Box<dyn FnMut() -> String>
        )
    };
    set_method(&manager, "cycle", cycle.as_ref());
    cycle.forget();

    let apply = {
        let controller = controller.clone();
        Closure::wrap(Box::new(move |raw: JsValue| {
            let preference = raw
                .as_string()
                .as_deref()
                .and_then(Preference::parse)
                .unwrap_or_default();
            controller.apply(preference);
        }) as Box<dyn FnMut(JsValue)>)
    };
    set_method(&manager, "apply", apply.as_ref());
    apply.forget();

    let _ = js_sys::Reflect::set(
        window.as_ref(),
        &JsValue::from_str(MANAGER_PROP),
        manager.as_ref(),
    );
}

fn set_method(target: &js_sys::Object, name: &str, value: &JsValue) {
    let _ = js_sys::Reflect::set(target.as_ref(), &JsValue::from_str(name), value);
}
