//! Thin wrappers over the browser globals. Everything is `Option`-chained:
//! a missing window, document, or element disables the caller's behavior
//! instead of failing.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, EventTarget, ScrollBehavior, ScrollToOptions, Window};

/// Viewport width at or below which the page is treated as mobile.
pub const NARROW_VIEWPORT_MAX_PX: f64 = 768.0;

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    window()?.document()
}

pub fn query(selector: &str) -> Option<Element> {
    document()?.query_selector(selector).ok().flatten()
}

pub fn query_all(selector: &str) -> Vec<Element> {
    let Some(document) = document() else {
        return Vec::new();
    };
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };

    (0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Current vertical scroll offset.
pub fn scroll_y() -> f64 {
    window()
        .and_then(|w| w.page_y_offset().ok())
        .unwrap_or(0.0)
}

/// True when the viewport is narrow enough for the mobile menu layout.
pub fn is_narrow_viewport() -> bool {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|value| value.as_f64())
        .is_some_and(|width| width <= NARROW_VIEWPORT_MAX_PX)
}

/// Request an animated scroll to the given document offset.
pub fn smooth_scroll_to(top: f64) {
    let Some(window) = window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Attach an event listener that lives for the rest of the page. The
/// closure is leaked on purpose; listeners here are never removed.
pub fn add_listener<E, F>(target: &EventTarget, kind: &str, handler: F)
where
    E: FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::<dyn FnMut(E)>::new(handler);
    let _ = target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
    closure.forget();
}
