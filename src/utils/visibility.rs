//! `IntersectionObserver` implementation of the visibility port.
//!
//! Each registration gets its own observer that disconnects after the
//! first intersection. Dropping the port disconnects whatever is still
//! pending, so a thumbnail that unmounts before becoming visible leaves
//! nothing behind.

use std::cell::RefCell;
use std::rc::Rc;

use archive_viewer_core::{ResourceLocator, VisibilityPort};
use archive_viewer_core::config::{VISIBILITY_ROOT_MARGIN, VISIBILITY_THRESHOLD};
use js_sys::Array;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::{console, dom};

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// One armed element.
struct Observation {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl Drop for Observation {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Visibility port backed by `IntersectionObserver`.
#[derive(Default)]
pub struct IntersectionPort {
    observations: RefCell<Vec<Observation>>,
}

impl IntersectionPort {
    pub fn new() -> Self {
        Self::default()
    }
}

impl VisibilityPort for IntersectionPort {
    type Handle = Element;

    fn is_available(&self) -> bool {
        dom::has_global("IntersectionObserver")
    }

    fn register(&self, handle: Element, locator: &ResourceLocator, on_visible: Box<dyn FnOnce()>) {
        let pending = Rc::new(RefCell::new(Some(on_visible)));
        let armed = pending.clone();
        let callback: ObserverCallback =
            Closure::new(move |entries: Array, observer: IntersectionObserver| {
                let visible = entries.iter().any(|entry| {
                    entry
                        .unchecked_into::<IntersectionObserverEntry>()
                        .is_intersecting()
                });
                if !visible {
                    return;
                }
                observer.disconnect();
                if let Some(on_visible) = armed.borrow_mut().take() {
                    // Run after this callback returns; the notification can
                    // unmount the element that owns this closure.
                    wasm_bindgen_futures::spawn_local(async move { on_visible() });
                }
            });

        let init = IntersectionObserverInit::new();
        init.set_root_margin(VISIBILITY_ROOT_MARGIN);
        init.set_threshold(&JsValue::from_f64(VISIBILITY_THRESHOLD));

        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => {
                observer.observe(&handle);
                self.observations.borrow_mut().push(Observation {
                    observer,
                    _callback: callback,
                });
            }
            Err(_) => {
                console::warn(&format!(
                    "Visibility observer failed for {}, loading eagerly",
                    locator
                ));
                if let Some(on_visible) = pending.borrow_mut().take() {
                    on_visible();
                }
            }
        }
    }
}
