//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use wasm_bindgen::JsValue;
use web_sys::{Storage, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get localStorage.
#[inline]
pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Check if the window exposes a global constructor (e.g. `IntersectionObserver`).
pub fn has_global(name: &str) -> bool {
    window()
        .and_then(|w| js_sys::Reflect::has(&w, &JsValue::from_str(name)).ok())
        .unwrap_or(false)
}

/// Evaluate a media query right now.
///
/// Returns `false` when `matchMedia` is unavailable.
pub fn matches_media(query: &str) -> bool {
    window()
        .and_then(|w| w.match_media(query).ok().flatten())
        .is_some_and(|list| list.matches())
}

/// Add or remove a class on the `<html>` element.
pub fn set_root_class(class: &str, enabled: bool) {
    if let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let classes = root.class_list();
        let _ = if enabled {
            classes.add_1(class)
        } else {
            classes.remove_1(class)
        };
    }
}
