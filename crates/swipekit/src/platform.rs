//! Host collaborator traits.
//!
//! These traits let the engine delegate rendering, scheduling, and clock
//! responsibilities to the host environment, so the index/offset state
//! machine stays free of windowing or timer APIs. The engine is
//! single-threaded and cooperative; implementations are called on the one
//! logical thread that feeds it input events, so no `Send`/`Sync` bounds
//! are required.

/// Boxed unit of deferred work.
pub type Task = Box<dyn FnOnce() + 'static>;

/// Opaque handle for a scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

impl TimerId {
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Renders slides at horizontal offsets.
///
/// The slide handle is opaque to the engine: it is whatever the host uses
/// to identify a renderable panel. Handles are cloned when they are carried
/// into deferred callbacks, and when continuous mode needs to duplicate
/// panels to guarantee enough physical slides for wraparound animation.
pub trait TransformHost {
    type Slide: Clone + 'static;

    /// Measure the rendered width of a slide in px. Called during setup
    /// and again on every viewport resize.
    fn measure_width(&self, slide: &Self::Slide) -> f32;

    /// Render a slide at a horizontal offset, transitioning over
    /// `duration_ms` (0 = reposition instantly). Fire and forget.
    fn apply_transform(&self, slide: &Self::Slide, offset_px: f32, duration_ms: u64);

    /// Duplicate a renderable panel. Only used at setup when continuous
    /// mode is requested with fewer than three physical slides.
    fn clone_slide(&self, slide: &Self::Slide) -> Self::Slide;
}

/// Schedules deferred work and timers on behalf of the engine.
///
/// `defer` runs a task on a future tick, FIFO per source; the engine uses
/// it for every host callback so callbacks never run synchronously inside
/// a gesture-handling call.
pub trait TaskScheduler {
    /// Run `task` on the next scheduling tick.
    fn defer(&self, task: Task);

    /// Run `task` after `delay_ms` milliseconds.
    fn set_timer(&self, task: Task, delay_ms: u64) -> TimerId;

    /// Cancel a pending timer. Cancelling an already-fired or unknown
    /// timer is a no-op.
    fn cancel_timer(&self, timer: TimerId);
}

/// Provides timing information for gesture duration and debouncing.
pub trait Clock {
    /// Instant type produced by this clock implementation.
    type Instant: Copy;

    /// Returns the current instant.
    fn now(&self) -> Self::Instant;

    /// Returns the number of milliseconds elapsed since `since`.
    fn elapsed_millis(&self, since: Self::Instant) -> u64;
}

/// Wall clock backed by `web_time::Instant`, usable on both native and
/// WASM targets. Hosts with a real event loop can embed this for the
/// `Clock` part of their implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    type Instant = web_time::Instant;

    fn now(&self) -> Self::Instant {
        web_time::Instant::now()
    }

    fn elapsed_millis(&self, since: Self::Instant) -> u64 {
        since.elapsed().as_millis() as u64
    }
}
