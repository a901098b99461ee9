//! Fade-in-on-view animation for the content cards.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::dom;

/// Elements that animate in as they enter the viewport.
pub const FADE_TARGETS: &str = ".project-card, .skill-category, .highlight-item, .contact-card";

const VISIBLE_CLASS: &str = "fade-in";
const VISIBILITY_THRESHOLD: f64 = 0.1;
// Negative bottom margin so cards animate slightly before full entry.
const ROOT_MARGIN: &str = "0px 0px -100px 0px";

/// Watch all card elements and add the animation class on first
/// intersection. Each element is unobserved as soon as it fires, so the
/// class is applied exactly once no matter how often it re-enters view.
pub fn observe_cards() {
    let targets = dom::query_all(FADE_TARGETS);
    if targets.is_empty() {
        return;
    }

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(VISIBILITY_THRESHOLD));
    options.set_root_margin(ROOT_MARGIN);

    let on_intersect = Closure::<dyn FnMut(Vec<IntersectionObserverEntry>, IntersectionObserver)>::new(
        |entries: Vec<IntersectionObserverEntry>, observer: IntersectionObserver| {
            for entry in entries {
                if entry.is_intersecting() {
                    let target = entry.target();
                    let _ = target.class_list().add_1(VISIBLE_CLASS);
                    observer.unobserve(&target);
                }
            }
        },
    );

    let Ok(observer) =
        IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options)
    else {
        return;
    };
    for target in &targets {
        observer.observe(target);
    }
    on_intersect.forget();
}
