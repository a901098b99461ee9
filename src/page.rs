//! Page controller: resolves the shared navigation elements once and wires
//! every behavior to the live document. Any element that is missing simply
//! disables the behaviors that depend on it.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{console, Element, Event, HtmlElement, MouseEvent, Node};

use crate::debounce::Debounce;
use crate::{dom, fade, scroll};

const ACTIVE_CLASS: &str = "active";
const DEBOUNCE_WAIT_MS: i32 = 100;

const SCROLL_TOP_BUTTON_STYLE: &str = "\
position: fixed; \
bottom: 30px; \
right: 30px; \
width: 50px; \
height: 50px; \
border-radius: 50%; \
background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); \
color: white; \
border: none; \
cursor: pointer; \
opacity: 0; \
visibility: hidden; \
transition: all 0.3s ease; \
z-index: 999; \
font-size: 1.2rem; \
box-shadow: 0 4px 12px rgba(0, 0, 0, 0.2);";

/// The navigation chrome shared across behaviors. Held as fields rather
/// than free bindings so the wiring is constructible from any set of
/// elements, live document or not.
pub struct PageController {
    navbar: Option<HtmlElement>,
    hamburger: Option<Element>,
    nav_menu: Option<Element>,
}

impl PageController {
    pub fn new(
        navbar: Option<HtmlElement>,
        hamburger: Option<Element>,
        nav_menu: Option<Element>,
    ) -> Self {
        Self {
            navbar,
            hamburger,
            nav_menu,
        }
    }

    /// Resolve the chrome from the live document.
    pub fn mount() -> Self {
        Self::new(
            dom::query("#navbar").and_then(|el| el.dyn_into::<HtmlElement>().ok()),
            dom::query(".hamburger"),
            dom::query(".nav-menu"),
        )
    }

    fn nav_height(&self) -> f64 {
        self.navbar
            .as_ref()
            .map(|navbar| f64::from(navbar.offset_height()))
            .unwrap_or(0.0)
    }

    pub fn menu_open(&self) -> bool {
        self.nav_menu
            .as_ref()
            .is_some_and(|menu| menu.class_list().contains(ACTIVE_CLASS))
    }

    pub fn toggle_menu(&self) {
        if let Some(menu) = &self.nav_menu {
            let _ = menu.class_list().toggle(ACTIVE_CLASS);
        }
    }

    pub fn close_menu(&self) {
        if let Some(menu) = &self.nav_menu {
            let _ = menu.class_list().remove_1(ACTIVE_CLASS);
        }
    }

    fn owns_click_target(&self, node: Option<&Node>) -> bool {
        let within = |el: Option<&Element>| el.is_some_and(|el| el.contains(node));
        within(self.hamburger.as_ref()) || within(self.nav_menu.as_ref())
    }

    /// Intercept in-page anchor clicks: animated scroll to the target,
    /// offset by the navbar height, closing the mobile menu on narrow
    /// viewports. Unresolvable targets are ignored.
    pub fn wire_anchor_navigation(self: &Rc<Self>) {
        for anchor in dom::query_all(r##"a[href^="#"]"##) {
            let controller = self.clone();
            let anchor_el = anchor.clone();
            dom::add_listener::<MouseEvent, _>(anchor.as_ref(), "click", move |event| {
                event.prevent_default();
                let Some(href) = anchor_el.get_attribute("href") else {
                    return;
                };
                let Some(target) =
                    dom::query(&href).and_then(|el| el.dyn_into::<HtmlElement>().ok())
                else {
                    return;
                };

                let top = scroll::anchor_target_offset(
                    f64::from(target.offset_top()),
                    controller.nav_height(),
                );
                dom::smooth_scroll_to(top);

                if dom::is_narrow_viewport() {
                    controller.close_menu();
                }
            });
        }
    }

    /// Hamburger toggles the menu; any click outside both closes it.
    pub fn wire_menu(self: &Rc<Self>) {
        let (Some(hamburger), Some(_)) = (self.hamburger.clone(), self.nav_menu.as_ref()) else {
            return;
        };

        let controller = self.clone();
        dom::add_listener::<MouseEvent, _>(hamburger.as_ref(), "click", move |_| {
            controller.toggle_menu();
        });

        let Some(document) = dom::document() else {
            return;
        };
        let controller = self.clone();
        dom::add_listener::<MouseEvent, _>(document.as_ref(), "click", move |event: MouseEvent| {
            let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
            if !controller.owns_click_target(target.as_ref()) {
                controller.close_menu();
            }
        });
    }

    /// Raise the navbar shadow once the page is scrolled past the
    /// threshold. Runs on every scroll tick.
    pub fn wire_navbar_shadow(self: &Rc<Self>) {
        let (Some(window), Some(navbar)) = (dom::window(), self.navbar.clone()) else {
            return;
        };
        dom::add_listener::<Event, _>(window.as_ref(), "scroll", move |_| {
            let _ = navbar
                .style()
                .set_property("box-shadow", scroll::navbar_shadow(dom::scroll_y()));
        });
    }

    /// Track which section is in view and mark the matching nav link.
    /// Section tops are re-read each tick; layout can shift under us.
    pub fn wire_active_links(self: &Rc<Self>) {
        let sections: Vec<(HtmlElement, String)> = dom::query_all("section")
            .into_iter()
            .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
            .filter_map(|el| {
                let id = el.id();
                (!id.is_empty()).then(|| (el, id))
            })
            .collect();
        let links = dom::query_all(".nav-link");
        if sections.is_empty() || links.is_empty() {
            return;
        }

        let Some(window) = dom::window() else {
            return;
        };
        let controller = self.clone();
        dom::add_listener::<Event, _>(window.as_ref(), "scroll", move |_| {
            let tops: Vec<f64> = sections
                .iter()
                .map(|(el, _)| f64::from(el.offset_top()))
                .collect();
            let current = scroll::active_section_index(&tops, dom::scroll_y(), controller.nav_height())
                .map(|index| format!("#{}", sections[index].1));

            for link in &links {
                let _ = link.class_list().remove_1(ACTIVE_CLASS);
                if let Some(href) = &current {
                    if link.get_attribute("href").as_deref() == Some(href.as_str()) {
                        let _ = link.class_list().add_1(ACTIVE_CLASS);
                    }
                }
            }
        });
    }
}

/// Floating scroll-to-top button, created once and shown past the
/// visibility threshold. Faded via opacity/visibility so the CSS
/// transition still applies.
pub fn mount_scroll_top_button() {
    let Some(document) = dom::document() else {
        return;
    };
    let Some(body) = document.body() else {
        return;
    };
    let Some(button) = document
        .create_element("button")
        .ok()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };

    button.set_inner_html("<i class=\"fas fa-arrow-up\"></i>");
    button.set_class_name("scroll-to-top");
    button.style().set_css_text(SCROLL_TOP_BUTTON_STYLE);
    let _ = body.append_child(&button);

    if let Some(window) = dom::window() {
        let button = button.clone();
        dom::add_listener::<Event, _>(window.as_ref(), "scroll", move |_| {
            let style = button.style();
            if scroll::scroll_top_button_visible(dom::scroll_y()) {
                let _ = style.set_property("opacity", "1");
                let _ = style.set_property("visibility", "visible");
            } else {
                let _ = style.set_property("opacity", "0");
                let _ = style.set_property("visibility", "hidden");
            }
        });
    }

    dom::add_listener::<MouseEvent, _>(button.as_ref(), "click", |_| {
        dom::smooth_scroll_to(0.0);
    });

    {
        let button = button.clone();
        dom::add_listener::<MouseEvent, _>(button.clone().as_ref(), "mouseenter", move |_| {
            let _ = button.style().set_property("transform", "translateY(-5px)");
        });
    }
    {
        let button = button.clone();
        dom::add_listener::<MouseEvent, _>(button.clone().as_ref(), "mouseleave", move |_| {
            let _ = button.style().set_property("transform", "translateY(0)");
        });
    }
}

fn decorate_on_load() {
    if let Some(hero) = dom::query(".hero-content").and_then(|el| el.dyn_into::<HtmlElement>().ok())
    {
        let _ = hero.style().set_property("animation", "fadeInUp 1s ease");
    }
    if let Some(img) = dom::query(".github-stats img") {
        let _ = img.set_attribute("loading", "lazy");
    }
}

fn console_banner() {
    console::log_2(
        &"%c\u{1F44B} Hi there!".into(),
        &"font-size: 20px; font-weight: bold; color: #2bbc8a;".into(),
    );
    console::log_2(
        &"%cThanks for checking out the source code!".into(),
        &"font-size: 14px; color: #666;".into(),
    );
    console::log_2(
        &"%cFeel free to reach out if you want to collaborate!".into(),
        &"font-size: 14px; color: #666;".into(),
    );
}

/// Debounced hook for scroll work heavy enough to need coalescing.
/// Nothing consumes it yet; the wiring point is kept so it can.
fn wire_debounced_scroll() {
    let Some(window) = dom::window() else {
        return;
    };
    let debounced = Debounce::new(DEBOUNCE_WAIT_MS, || {});
    dom::add_listener::<Event, _>(window.as_ref(), "scroll", move |_| debounced.call());
}

/// Wire every page behavior. Called once the document has parsed.
pub fn init() {
    let controller = Rc::new(PageController::mount());
    controller.wire_anchor_navigation();
    controller.wire_menu();
    controller.wire_navbar_shadow();
    controller.wire_active_links();

    mount_scroll_top_button();
    fade::observe_cards();
    decorate_on_load();
    wire_debounced_scroll();
    console_banner();
}
