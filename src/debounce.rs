//! Debounced execution: a handler runs only after a quiet window with no
//! further triggers. The timing policy lives in [`DebounceState`] so it can
//! be exercised against a simulated clock; the wasm [`Debounce`] wrapper
//! binds that policy to real browser timers.

/// Pure debounce policy over caller-supplied timestamps.
#[derive(Debug)]
pub struct DebounceState {
    wait_ms: u64,
    deadline_ms: Option<u64>,
}

impl DebounceState {
    pub fn new(wait_ms: u64) -> Self {
        Self {
            wait_ms,
            deadline_ms: None,
        }
    }

    /// Record a trigger at `now_ms`, pushing the deadline out to
    /// `now_ms + wait`.
    pub fn record_call(&mut self, now_ms: u64) {
        self.deadline_ms = Some(now_ms + self.wait_ms);
    }

    /// True while a firing is scheduled.
    pub fn pending(&self) -> bool {
        self.deadline_ms.is_some()
    }

    /// Whether the wrapped handler should fire at `now_ms`. Reports true
    /// exactly once per settled quiet window.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        match self.deadline_ms {
            Some(deadline) if now_ms >= deadline => {
                self.deadline_ms = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod timer {
    use std::cell::Cell;
    use std::rc::Rc;

    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    use crate::dom;

    /// Browser-timer debouncer. Each [`call`](Debounce::call) clears any
    /// pending timeout and schedules a fresh one, so the wrapped handler
    /// runs once, `wait_ms` after the last trigger.
    pub struct Debounce {
        wait_ms: i32,
        timeout_id: Rc<Cell<Option<i32>>>,
        // One closure for the life of the debouncer; reused across timeouts.
        fire: Closure<dyn FnMut()>,
    }

    impl Debounce {
        pub fn new<F>(wait_ms: i32, mut handler: F) -> Self
        where
            F: FnMut() + 'static,
        {
            let timeout_id = Rc::new(Cell::new(None));
            let fire = {
                let timeout_id = timeout_id.clone();
                Closure::new(move || {
                    timeout_id.set(None);
                    handler();
                })
            };
            Self {
                wait_ms,
                timeout_id,
                fire,
            }
        }

        pub fn call(&self) {
            let Some(window) = dom::window() else {
                return;
            };
            if let Some(id) = self.timeout_id.take() {
                window.clear_timeout_with_handle(id);
            }
            if let Ok(id) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                self.fire.as_ref().unchecked_ref(),
                self.wait_ms,
            ) {
                self.timeout_id.set(Some(id));
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use timer::Debounce;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_fires_without_a_trigger() {
        let mut state = DebounceState::new(100);
        assert!(!state.pending());
        assert!(!state.poll(1_000));
    }

    #[test]
    fn burst_of_calls_fires_once_after_the_last() {
        let mut state = DebounceState::new(100);
        state.record_call(0);
        state.record_call(50);
        state.record_call(90);

        assert!(!state.poll(100));
        assert!(!state.poll(189));
        assert!(state.poll(190));
        // Already fired; the window is spent.
        assert!(!state.poll(191));
        assert!(!state.pending());
    }

    #[test]
    fn settled_state_can_be_rearmed() {
        let mut state = DebounceState::new(100);
        state.record_call(0);
        assert!(state.poll(100));

        state.record_call(200);
        assert!(state.pending());
        assert!(!state.poll(299));
        assert!(state.poll(300));
    }
}
