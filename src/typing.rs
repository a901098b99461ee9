//! Character-by-character typing effect for the hero title.
//!
//! The effect re-types the title's captured markup one character at a
//! time. Markup is not animated: from `<` until the matching `>` the
//! machine emits characters with zero delay so tags appear instantly
//! and only visible text is typed at the normal cadence.

/// Delay before the first character is typed.
pub const START_DELAY_MS: u32 = 500;
/// Delay between visible characters.
pub const TYPE_DELAY_MS: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    TypingText,
    InsideTag,
    Done,
}

/// One emitted character and the delay to wait before the next step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub ch: char,
    pub delay_ms: u32,
}

/// Explicit state machine driving the effect, independent of any timer
/// so completion and tag handling are testable without a document.
#[derive(Debug)]
pub struct TypingEffect {
    chars: Vec<char>,
    index: usize,
    phase: Phase,
}

impl TypingEffect {
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            index: 0,
            phase: Phase::Idle,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }

    /// Advance by one character. Returns `None` once the source is
    /// exhausted, after which the machine stays in `Done`.
    pub fn step(&mut self) -> Option<Step> {
        let Some(&ch) = self.chars.get(self.index) else {
            self.phase = Phase::Done;
            return None;
        };

        self.phase = match ch {
            '<' => Phase::InsideTag,
            '>' => Phase::TypingText,
            _ if self.phase == Phase::Idle => Phase::TypingText,
            _ => self.phase,
        };
        self.index += 1;

        let delay_ms = if self.phase == Phase::InsideTag {
            0
        } else {
            TYPE_DELAY_MS
        };
        Some(Step { ch, delay_ms })
    }
}

#[cfg(target_arch = "wasm32")]
mod driver {
    use std::cell::RefCell;
    use std::rc::Rc;

    use gloo_timers::callback::Timeout;
    use wasm_bindgen::JsCast;
    use web_sys::HtmlElement;

    use super::{TypingEffect, START_DELAY_MS};
    use crate::dom;

    const CURSOR_STYLE: &str = "2px solid white";

    /// Re-type the hero title's markup in place. Silent no-op when the
    /// page has no `.hero-title`.
    pub fn type_hero_title() {
        let Some(hero) = dom::query(".hero-title").and_then(|el| el.dyn_into::<HtmlElement>().ok())
        else {
            return;
        };

        let source = hero.inner_html();
        hero.set_inner_html("");
        let _ = hero.style().set_property("border-right", CURSOR_STYLE);

        let effect = Rc::new(RefCell::new(TypingEffect::new(&source)));
        schedule(effect, hero, START_DELAY_MS);
    }

    fn schedule(effect: Rc<RefCell<TypingEffect>>, hero: HtmlElement, delay_ms: u32) {
        Timeout::new(delay_ms, move || {
            let step = effect.borrow_mut().step();
            match step {
                Some(step) => {
                    let mut html = hero.inner_html();
                    html.push(step.ch);
                    hero.set_inner_html(&html);
                    schedule(effect, hero, step.delay_ms);
                }
                None => {
                    // Typing finished: drop the blinking cursor.
                    let _ = hero.style().set_property("border-right", "none");
                }
            }
        })
        .forget();
    }
}

#[cfg(target_arch = "wasm32")]
pub use driver::type_hero_title;

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(effect: &mut TypingEffect) -> Vec<Step> {
        let mut steps = Vec::new();
        while let Some(step) = effect.step() {
            steps.push(step);
        }
        steps
    }

    #[test]
    fn plain_text_types_at_normal_cadence() {
        let mut effect = TypingEffect::new("Hi!");
        let steps = drain(&mut effect);
        let typed: String = steps.iter().map(|s| s.ch).collect();
        assert_eq!(typed, "Hi!");
        assert!(steps.iter().all(|s| s.delay_ms == TYPE_DELAY_MS));
        assert!(effect.is_done());
    }

    #[test]
    fn markup_is_emitted_without_delay() {
        let mut effect = TypingEffect::new("<b>Hi</b>");
        let steps = drain(&mut effect);
        let typed: String = steps.iter().map(|s| s.ch).collect();
        assert_eq!(typed, "<b>Hi</b>");

        let delays: Vec<u32> = steps.iter().map(|s| s.delay_ms).collect();
        // '<' and 'b' inside the tag are instant; the '>' resumes the
        // text cadence, matching the per-character behavior of the page.
        assert_eq!(delays, vec![0, 0, 100, 100, 100, 0, 0, 0, 100]);
    }

    #[test]
    fn phases_track_tag_boundaries() {
        let mut effect = TypingEffect::new("a<i>b");
        assert_eq!(effect.phase(), Phase::Idle);

        effect.step(); // 'a'
        assert_eq!(effect.phase(), Phase::TypingText);
        effect.step(); // '<'
        assert_eq!(effect.phase(), Phase::InsideTag);
        effect.step(); // 'i'
        assert_eq!(effect.phase(), Phase::InsideTag);
        effect.step(); // '>'
        assert_eq!(effect.phase(), Phase::TypingText);
        effect.step(); // 'b'
        assert_eq!(effect.phase(), Phase::TypingText);

        assert_eq!(effect.step(), None);
        assert_eq!(effect.phase(), Phase::Done);
    }

    #[test]
    fn exhausted_machine_stays_done() {
        let mut effect = TypingEffect::new("");
        assert_eq!(effect.step(), None);
        assert_eq!(effect.step(), None);
        assert!(effect.is_done());
    }
}
