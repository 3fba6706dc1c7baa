use std::cell::Cell;

use crate::viewport::ScrollSequence;

/// Lifecycle of the pinned-gallery scroll binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingState {
    Unbound,
    Bound,
    TornDown,
}

/// Owns the scroll listener for one gallery container. At most one binding
/// may be live at a time; rebinding tears the previous one down
/// synchronously before the new listener is installed, so two transforms
/// never compete for the same element.
pub struct GalleryBinding {
    state: BindingState,
    sequence: Option<ScrollSequence>,
    teardown: Option<Box<dyn FnOnce()>>,
}

impl GalleryBinding {
    pub fn new() -> Self {
        Self {
            state: BindingState::Unbound,
            sequence: None,
            teardown: None,
        }
    }

    pub fn state(&self) -> BindingState {
        self.state
    }

    pub fn sequence(&self) -> Option<ScrollSequence> {
        self.sequence
    }

    /// Install a new binding. `teardown` must remove every listener and
    /// reset any transform the binding applied.
    pub fn bind(&mut self, sequence: ScrollSequence, teardown: Box<dyn FnOnce()>) {
        if self.state == BindingState::Bound {
            self.teardown();
        }
        self.sequence = Some(sequence);
        self.teardown = Some(teardown);
        self.state = BindingState::Bound;
    }

    /// Run and drop the teardown closure. Safe to call in any state.
    pub fn teardown(&mut self) {
        if let Some(f) = self.teardown.take() {
            f();
            self.state = BindingState::TornDown;
        }
        self.sequence = None;
    }
}

impl Default for GalleryBinding {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for GalleryBinding {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// Generation counter that collapses event bursts into a single rebuild.
/// Each signal arms a new generation; a timer that fires later only acts if
/// its generation is still the current one.
#[derive(Debug, Default)]
pub struct Debounce {
    generation: Cell<u64>,
}

impl Debounce {
    pub fn new() -> Self {
        Self::default()
    }

    /// Invalidate all earlier generations and return the new one.
    pub fn arm(&self) -> u64 {
        let next = self.generation.get() + 1;
        self.generation.set(next);
        next
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.generation.get() == generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn seq(distance: f64) -> ScrollSequence {
        ScrollSequence {
            total_translate_x: distance,
            scroll_distance: distance,
        }
    }

    #[test]
    fn bind_and_teardown_lifecycle() {
        let torn = Rc::new(Cell::new(false));
        let mut binding = GalleryBinding::new();
        assert_eq!(binding.state(), BindingState::Unbound);
        assert!(binding.sequence().is_none());

        let t = torn.clone();
        binding.bind(seq(100.0), Box::new(move || t.set(true)));
        assert_eq!(binding.state(), BindingState::Bound);
        assert_eq!(binding.sequence().unwrap().total_translate_x, 100.0);
        assert!(!torn.get());

        binding.teardown();
        assert_eq!(binding.state(), BindingState::TornDown);
        assert!(binding.sequence().is_none());
        assert!(torn.get());

        // Teardown is idempotent.
        binding.teardown();
        assert_eq!(binding.state(), BindingState::TornDown);
    }

    #[test]
    fn rebind_tears_down_previous_binding_first() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let mut binding = GalleryBinding::new();

        let o = order.clone();
        binding.bind(seq(1.0), Box::new(move || o.borrow_mut().push("teardown-1")));
        order.borrow_mut().push("bind-2");
        let o = order.clone();
        binding.bind(seq(2.0), Box::new(move || o.borrow_mut().push("teardown-2")));

        // Old listener removed before the new one is recorded as live.
        assert_eq!(&*order.borrow(), &["teardown-1", "bind-2"]);
        assert_eq!(binding.state(), BindingState::Bound);
        assert_eq!(binding.sequence().unwrap().total_translate_x, 2.0);
    }

    #[test]
    fn drop_runs_teardown() {
        let torn = Rc::new(Cell::new(false));
        {
            let t = torn.clone();
            let mut binding = GalleryBinding::new();
            binding.bind(seq(10.0), Box::new(move || t.set(true)));
        }
        assert!(torn.get());
    }

    #[test]
    fn debounce_burst_collapses_to_one_rebuild() {
        let debounce = Debounce::new();
        // Three resize events inside the quiet window.
        let g1 = debounce.arm();
        let g2 = debounce.arm();
        let g3 = debounce.arm();

        let fired = [g1, g2, g3]
            .into_iter()
            .filter(|g| debounce.is_current(*g))
            .count();
        assert_eq!(fired, 1);
        assert!(debounce.is_current(g3));
        assert!(!debounce.is_current(g2));
    }
}
