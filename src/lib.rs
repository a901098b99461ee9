//! Client-side behavior layer for the portfolio page: smooth-scroll
//! navigation, mobile menu, scroll-reactive navbar, fade-in animations,
//! a scroll-to-top button, and an optional typing effect. The hosting
//! document is plain static HTML; this crate only attaches behavior.

pub mod debounce;
pub mod scroll;
pub mod typing;

#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(target_arch = "wasm32")]
mod fade;
#[cfg(target_arch = "wasm32")]
pub mod page;

/// Entry point. Defers initialization until the document has parsed, so
/// every selector the page controller binds to is present.
#[cfg(target_arch = "wasm32")]
pub fn run() {
    let Some(document) = dom::document() else {
        return;
    };

    if document.ready_state() == "loading" {
        dom::add_listener::<web_sys::Event, _>(document.as_ref(), "DOMContentLoaded", |_| {
            page::init();
        });
    } else {
        page::init();
    }
}
