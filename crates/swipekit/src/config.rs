//! Engine configuration.

use std::fmt;
use std::rc::Rc;

/// Host callback invoked with the new current index and its slide handle.
///
/// Callbacks are always deferred through the host scheduler, never invoked
/// synchronously inside the call that triggered them.
pub type SlideCallback<S> = Rc<dyn Fn(usize, &S)>;

/// Immutable-after-setup engine options.
pub struct SwipeOptions<S> {
    /// Logical starting index; reduced circularly into the slide range.
    pub start_index: isize,
    /// Transition speed in ms for animated moves.
    pub speed_ms: u64,
    /// Infinite looping via circular indexing. Disabled automatically
    /// when only one slide exists.
    pub continuous: bool,
    /// Autoplay delay in ms; 0 disables autoplay.
    pub auto_ms: u64,
    /// Ignore all pointer input.
    pub disabled: bool,
    /// Ask the host to suppress native scrolling on every pointer move.
    pub prevent_native_scroll: bool,
    /// Ask the host to stop propagation of every handled event.
    pub stop_propagation: bool,
    /// Invoked after each committed transition.
    pub on_change: Option<SlideCallback<S>>,
    /// Invoked when a transition for the current slide finishes.
    pub on_transition_end: Option<SlideCallback<S>>,
}

impl<S> SwipeOptions<S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_index(mut self, index: isize) -> Self {
        self.start_index = index;
        self
    }

    pub fn speed_ms(mut self, speed_ms: u64) -> Self {
        self.speed_ms = speed_ms;
        self
    }

    pub fn continuous(mut self, continuous: bool) -> Self {
        self.continuous = continuous;
        self
    }

    pub fn auto_ms(mut self, auto_ms: u64) -> Self {
        self.auto_ms = auto_ms;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn prevent_native_scroll(mut self, prevent: bool) -> Self {
        self.prevent_native_scroll = prevent;
        self
    }

    pub fn stop_propagation(mut self, stop: bool) -> Self {
        self.stop_propagation = stop;
        self
    }

    pub fn on_change(mut self, callback: impl Fn(usize, &S) + 'static) -> Self {
        self.on_change = Some(Rc::new(callback));
        self
    }

    pub fn on_transition_end(mut self, callback: impl Fn(usize, &S) + 'static) -> Self {
        self.on_transition_end = Some(Rc::new(callback));
        self
    }
}

impl<S> Default for SwipeOptions<S> {
    fn default() -> Self {
        Self {
            start_index: 0,
            speed_ms: 300,
            continuous: true,
            auto_ms: 0,
            disabled: false,
            prevent_native_scroll: false,
            stop_propagation: false,
            on_change: None,
            on_transition_end: None,
        }
    }
}

impl<S> Clone for SwipeOptions<S> {
    fn clone(&self) -> Self {
        Self {
            start_index: self.start_index,
            speed_ms: self.speed_ms,
            continuous: self.continuous,
            auto_ms: self.auto_ms,
            disabled: self.disabled,
            prevent_native_scroll: self.prevent_native_scroll,
            stop_propagation: self.stop_propagation,
            on_change: self.on_change.clone(),
            on_transition_end: self.on_transition_end.clone(),
        }
    }
}

impl<S> fmt::Debug for SwipeOptions<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwipeOptions")
            .field("start_index", &self.start_index)
            .field("speed_ms", &self.speed_ms)
            .field("continuous", &self.continuous)
            .field("auto_ms", &self.auto_ms)
            .field("disabled", &self.disabled)
            .field("prevent_native_scroll", &self.prevent_native_scroll)
            .field("stop_propagation", &self.stop_propagation)
            .field("on_change", &self.on_change.is_some())
            .field("on_transition_end", &self.on_transition_end.is_some())
            .finish()
    }
}
