//! The slide engine: transition planning, setup, autoplay, and the
//! imperative control surface.
//!
//! All mutable state lives in [`SwiperInner`] behind an `Rc<RefCell<..>>`
//! handle, so timer and deferred callbacks can re-enter the engine through
//! a `Weak` upgrade without keeping it alive. Everything runs on a single
//! logical thread: input events, timers, and render-completion
//! notifications all funnel through [`Swiper::handle_event`] or the
//! control-surface methods, so the position table has exactly one writer
//! at a time without locks.

use std::cell::RefCell;
use std::error::Error;
use std::fmt;
use std::rc::Rc;

use crate::circular::circle;
use crate::config::SwipeOptions;
use crate::events::{EventResponse, SwipeEvent};
use crate::gesture::DragState;
use crate::platform::{Clock, TaskScheduler, TimerId, TransformHost};
use crate::position::PositionTable;

/// Construction failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupError {
    /// The engine refuses to activate over an empty slide set; circular
    /// index arithmetic is undefined for zero slides.
    NoSlides,
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::NoSlides => write!(f, "cannot activate a carousel with zero slides"),
        }
    }
}

impl Error for SetupError {}

/// Gesture-driven slide positioning engine.
///
/// Cheap to clone; clones share the same engine state. Host input events
/// go through [`Swiper::handle_event`]; `next`/`previous`/`goto` form the
/// imperative control surface.
pub struct Swiper<H>
where
    H: TransformHost + TaskScheduler + Clock + 'static,
{
    inner: Rc<RefCell<SwiperInner<H>>>,
}

pub(crate) struct SwiperInner<H>
where
    H: TransformHost + TaskScheduler + Clock,
{
    pub(crate) host: H,
    pub(crate) options: SwipeOptions<H::Slide>,
    pub(crate) slides: Vec<H::Slide>,
    pub(crate) positions: PositionTable,
    /// Physical index of the current slide. Mutated only at the moment a
    /// transition is committed.
    pub(crate) index: usize,
    /// May differ from `options.continuous`: looping is disabled
    /// automatically when only one slide exists.
    pub(crate) continuous: bool,
    pub(crate) drag: Option<DragState<H::Instant>>,
    pub(crate) autoplay_timer: Option<TimerId>,
    /// Timestamp of the last committed move, for `goto` debouncing.
    pub(crate) last_move_at: Option<H::Instant>,
}

impl<H> Swiper<H>
where
    H: TransformHost + TaskScheduler + Clock + 'static,
{
    /// Activate the engine over the host's initial panel set.
    ///
    /// Runs setup (width measurement, slide stacking, neighbor
    /// pre-positioning) and schedules the first autoplay advance when an
    /// autoplay delay is configured.
    pub fn new(
        host: H,
        slides: Vec<H::Slide>,
        options: SwipeOptions<H::Slide>,
    ) -> Result<Self, SetupError> {
        if slides.is_empty() {
            return Err(SetupError::NoSlides);
        }

        let index = circle(options.start_index, slides.len());
        let continuous = options.continuous;
        let mut inner = SwiperInner {
            host,
            options,
            slides,
            positions: PositionTable::new(0, 0.0),
            index,
            continuous,
            drag: None,
            autoplay_timer: None,
            last_move_at: None,
        };
        inner.setup();

        let swiper = Self {
            inner: Rc::new(RefCell::new(inner)),
        };
        if swiper.inner.borrow().options.auto_ms > 0 {
            Self::schedule_autoplay(&swiper.inner);
        }
        Ok(swiper)
    }

    /// Feed one host input event through the engine. Returns what the
    /// host should do with the native event it translated.
    pub fn handle_event(&self, event: SwipeEvent) -> EventResponse {
        let mut reschedule = false;
        let mut response = {
            let mut inner = self.inner.borrow_mut();
            match event {
                SwipeEvent::PointerDown(sample) => inner.on_pointer_down(&sample),
                SwipeEvent::PointerMove(sample) => inner.on_pointer_move(&sample),
                SwipeEvent::PointerUp => inner.on_pointer_up(),
                SwipeEvent::TransitionComplete { index } => {
                    reschedule = inner.on_transition_complete(index);
                    EventResponse::none()
                }
                SwipeEvent::Resize => {
                    inner.setup();
                    EventResponse::none()
                }
            }
        };
        if reschedule {
            Self::schedule_autoplay(&self.inner);
        }
        response.stop_propagation |= self.inner.borrow().options.stop_propagation;
        response
    }

    /// Move to a logical index. An explicit `duration` both times the
    /// animation and debounces: the call is silently ignored when fewer
    /// than `duration` ms have elapsed since the last committed move.
    pub fn goto(&self, to: isize, duration: Option<u64>) {
        let mut inner = self.inner.borrow_mut();
        if let Some(duration) = duration {
            if inner.is_debounced(duration) {
                log::debug!("goto({to}) debounced");
                return;
            }
        }
        inner.stop_autoplay();
        let to = inner.clamp_target(to);
        inner.slide_to(to, duration);
    }

    /// Advance one slide forward. No-op at the last slide when not
    /// continuous.
    pub fn next(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.stop_autoplay();
        inner.advance_forward();
    }

    /// Go back one slide. No-op at the first slide when not continuous.
    pub fn previous(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.stop_autoplay();
        inner.advance_backward();
    }

    /// Physical index of the current slide.
    pub fn current_index(&self) -> usize {
        self.inner.borrow().index
    }

    /// Number of physical slides (including any panels duplicated for
    /// continuous mode).
    pub fn slide_count(&self) -> usize {
        self.inner.borrow().slides.len()
    }

    /// Whether continuous (looping) mode is active.
    pub fn is_continuous(&self) -> bool {
        self.inner.borrow().continuous
    }

    /// Measured slide width in px.
    pub fn width(&self) -> f32 {
        self.inner.borrow().positions.width()
    }

    /// Stored offset of a physical slide, or `None` if out of range.
    pub fn position_of(&self, physical: usize) -> Option<f32> {
        let inner = self.inner.borrow();
        (physical < inner.positions.len()).then(|| inner.positions.offset(physical))
    }

    /// Whether an autoplay advance is currently pending.
    pub fn autoplay_pending(&self) -> bool {
        self.inner.borrow().autoplay_timer.is_some()
    }

    /// Schedule the next autoplay advance. The timer task re-enters the
    /// engine through a weak handle, so a dropped engine cancels autoplay
    /// implicitly.
    fn schedule_autoplay(inner: &Rc<RefCell<SwiperInner<H>>>) {
        let delay_ms = {
            let inner = inner.borrow();
            if inner.options.auto_ms == 0 || inner.autoplay_timer.is_some() {
                return;
            }
            inner.options.auto_ms
        };

        let weak = Rc::downgrade(inner);
        let timer = inner.borrow().host.set_timer(
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    let mut inner = inner.borrow_mut();
                    inner.autoplay_timer = None;
                    inner.advance_forward();
                }
            }),
            delay_ms,
        );
        inner.borrow_mut().autoplay_timer = Some(timer);
    }
}

impl<H> Clone for Swiper<H>
where
    H: TransformHost + TaskScheduler + Clock + 'static,
{
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<H> SwiperInner<H>
where
    H: TransformHost + TaskScheduler + Clock,
{
    /// Measure, stack, and pre-position every slide. Runs at activation
    /// and again on every viewport resize.
    pub(crate) fn setup(&mut self) {
        // Looping needs at least two distinct logical positions.
        if self.slides.len() < 2 {
            self.continuous = false;
        }

        // With only two physical slides, wraparound animation would have
        // to show the same element on both sides of the current one.
        // Duplicate the first two panels so a ready neighbor always
        // exists.
        if self.continuous && self.slides.len() < 3 {
            let first = self.host.clone_slide(&self.slides[0]);
            let second = self.host.clone_slide(&self.slides[1]);
            self.slides.push(first);
            self.slides.push(second);
        }

        let width = self.host.measure_width(&self.slides[0]);
        let len = self.slides.len();
        self.positions.reset(len, width);

        // Stack every slide a full width away from the current one, on
        // the side it logically belongs to.
        for physical in (0..len).rev() {
            let offset = if self.index > physical {
                -width
            } else if self.index < physical {
                width
            } else {
                0.0
            };
            self.move_slide(physical, offset, 0);
        }

        if self.continuous {
            let behind = circle(self.index as isize - 1, len);
            let ahead = circle(self.index as isize + 1, len);
            self.move_slide(behind, -width, 0);
            self.move_slide(ahead, width, 0);
        }

        log::debug!(
            "setup: {len} slides, width {width}px, continuous={}, index={}",
            self.continuous,
            self.index
        );
    }

    /// Plan and issue a transition to logical index `to`.
    ///
    /// Pre-positions intermediates and the far-side neighbor with zero
    /// duration, animates the leaving/arriving pair, and only then
    /// mutates the current index — the sole mutation point — before
    /// deferring the change callback.
    pub(crate) fn slide_to(&mut self, to: isize, duration: Option<u64>) {
        let current = self.index as isize;
        if current == to {
            return;
        }

        let speed = duration.unwrap_or(self.options.speed_ms);
        let len = self.slides.len();
        let width = self.positions.width();
        let mut to = to;

        // 1.0 = moving backward, -1.0 = moving forward.
        let mut direction = if to > current { -1.0f32 } else { 1.0f32 };

        if self.continuous {
            // Circular wraparound can make the naively-nearer direction
            // wrong; the stored offset of the target's physical slide
            // tells us which side it is actually parked on. When the two
            // disagree, reinterpret `to` on the far side of the range so
            // the arithmetic below stays consistent.
            let natural = direction;
            direction = -self.positions.offset(circle(to, len)) / width;
            if direction != natural {
                to += -direction as isize * len as isize;
            }
        }

        // Park every slide strictly between current and target off-screen
        // in the travel direction, so no intermediate slide flashes by.
        let base = current.max(to);
        let between = (current - to).abs() - 1;
        for step in (0..between).rev() {
            let physical = circle(base - step - 1, len);
            self.move_slide(physical, width * direction, 0);
        }

        let to_physical = circle(to, len);

        if self.continuous {
            // Ready neighbor on the far side of the new current slide.
            let behind = circle(to_physical as isize - direction as isize, len);
            self.move_slide(behind, -(width * direction), 0);
        }

        self.move_slide(self.index, width * direction, speed);
        self.move_slide(to_physical, 0.0, speed);

        log::debug!("slide: {} -> {to_physical} over {speed}ms", self.index);
        self.index = to_physical;
        self.emit_change();
        self.mark_moved();
    }

    /// Record an offset and ask the host to render it.
    pub(crate) fn move_slide(&mut self, physical: usize, offset: f32, duration_ms: u64) {
        self.host
            .apply_transform(&self.slides[physical], offset, duration_ms);
        self.positions.set_offset(physical, offset);
    }

    /// Render-only variant used for live drag feedback: the position
    /// table keeps the committed offsets so a cancelled drag knows where
    /// to snap back to. Out-of-range neighbors (at the edges in
    /// non-continuous mode) are skipped.
    pub(crate) fn translate_slide(&self, physical: isize, offset: f32, duration_ms: u64) {
        if physical < 0 || physical >= self.slides.len() as isize {
            return;
        }
        self.host
            .apply_transform(&self.slides[physical as usize], offset, duration_ms);
    }

    pub(crate) fn advance_forward(&mut self) {
        if self.continuous {
            self.slide_to(self.index as isize + 1, None);
        } else if self.index < self.slides.len() - 1 {
            self.slide_to(self.index as isize + 1, None);
        }
    }

    pub(crate) fn advance_backward(&mut self) {
        if self.continuous {
            self.slide_to(self.index as isize - 1, None);
        } else if self.index > 0 {
            self.slide_to(self.index as isize - 1, None);
        }
    }

    /// In non-continuous mode an explicit target is clamped to the valid
    /// physical range; continuous mode accepts any logical index.
    pub(crate) fn clamp_target(&self, to: isize) -> isize {
        if self.continuous {
            to
        } else {
            to.clamp(0, self.slides.len() as isize - 1)
        }
    }

    pub(crate) fn is_debounced(&self, duration: u64) -> bool {
        match self.last_move_at {
            Some(at) => self.host.elapsed_millis(at) <= duration,
            None => false,
        }
    }

    pub(crate) fn mark_moved(&mut self) {
        self.last_move_at = Some(self.host.now());
    }

    /// Cancel any pending autoplay advance.
    pub(crate) fn stop_autoplay(&mut self) {
        if let Some(timer) = self.autoplay_timer.take() {
            self.host.cancel_timer(timer);
            log::trace!("autoplay advance cancelled");
        }
    }

    /// Defer the change callback with the post-transition index. Deferral
    /// keeps host callbacks from running inside the triggering call and
    /// from observing (or mutating) mid-transition state.
    pub(crate) fn emit_change(&self) {
        if let Some(callback) = self.options.on_change.clone() {
            let index = self.index;
            let slide = self.slides[index].clone();
            self.host.defer(Box::new(move || callback(index, &slide)));
        }
    }

    /// Handle a render-completion notification. Returns whether the
    /// autoplay scheduler should re-arm.
    pub(crate) fn on_transition_complete(&mut self, notified: usize) -> bool {
        if notified != self.index {
            // A gesture started mid-flight or a newer transition took
            // over; the stale notification carries no information.
            log::trace!(
                "ignoring stale transition-complete for {notified}, current is {}",
                self.index
            );
            return false;
        }

        if let Some(callback) = self.options.on_transition_end.clone() {
            let index = self.index;
            let slide = self.slides[index].clone();
            self.host.defer(Box::new(move || callback(index, &slide)));
        }

        self.options.auto_ms > 0
    }
}
