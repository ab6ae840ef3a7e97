//! Presentation surface: where the resolved theme lands.
//!
//! The browser implementation toggles a single class on the document root
//! and swaps icon visibility under the toggle control. Every missing DOM
//! piece is skipped silently; styling itself belongs to the page's
//! stylesheet.

use crate::preference::Preference;

/// Id of the optional toggle control element.
pub const TOGGLE_ID: &str = "theme-toggle";

/// Presentation target for the resolved theme.
pub trait ThemeSurface {
    /// Set or clear the dark marker on the page root.
    fn set_dark_marker(&self, dark: bool);

    /// Reveal the icon keyed by `preference`, hiding the others. Icons are
    /// keyed by the raw preference, not the resolved theme.
    fn select_icon(&self, preference: Preference);
}

#[cfg(target_arch = "wasm32")]
mod dom {
    use wasm_bindgen::JsCast;

    use super::{Preference, TOGGLE_ID, ThemeSurface};

    const DARK_CLASS: &str = "dark";
    const HIDDEN_CLASS: &str = "hidden";
    const ICON_ATTR: &str = "data-theme-icon";

    /// Live-document surface.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct DomSurface;

    impl DomSurface {
        #[must_use]
        pub fn new() -> Self {
            Self
        }
    }

    fn document() -> Option<web_sys::Document> {
        web_sys::window().and_then(|w| w.document())
    }

    impl ThemeSurface for DomSurface {
        fn set_dark_marker(&self, dark: bool) {
            let Some(root) = document().and_then(|d| d.document_element()) else {
                return;
            };
            let classes = root.class_list();
            if dark {
                let _ = classes.add_1(DARK_CLASS);
            } else {
                let _ = classes.remove_1(DARK_CLASS);
            }
        }

        fn select_icon(&self, preference: Preference) {
            let Some(control) = document().and_then(|d| d.get_element_by_id(TOGGLE_ID)) else {
                return;
            };
            let Ok(icons) = control.query_selector_all(&format!("[{ICON_ATTR}]")) else {
                return;
            };
            for index in 0..icons.length() {
                let Some(icon) = icons.item(index).and_then(|n| n.dyn_into::<web_sys::Element>().ok())
                else {
                    continue;
                };
                let classes = icon.class_list();
                let _ = classes.add_1(HIDDEN_CLASS);
                if icon.get_attribute(ICON_ATTR).as_deref() == Some(preference.as_str()) {
                    let _ = classes.remove_1(HIDDEN_CLASS);
                }
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use dom::DomSurface;
