//! Robot-style gesture driver.
//!
//! `SwipeRobot` launches an engine over a [`TestHost`] and performs
//! composed interactions — swipes, scroll drags, transition completions —
//! so tests read as user scenarios rather than raw event plumbing.
//!
//! # Example
//!
//! ```
//! use swipekit::SwipeOptions;
//! use swipekit_testing::SwipeRobot;
//!
//! let robot = SwipeRobot::new(5, SwipeOptions::new().continuous(true));
//! robot.swipe_left(120.0, 150);
//! assert_eq!(robot.index(), 1);
//! ```

use swipekit::{PointerSample, SwipeEvent, SwipeOptions, Swiper};

use crate::host::{TestHost, TestSlide};

/// Number of move samples a composed drag is split into.
const DRAG_STEPS: u64 = 4;

pub struct SwipeRobot {
    host: TestHost,
    swiper: Swiper<TestHost>,
}

impl SwipeRobot {
    /// Launch an engine over `slide_count` fresh slides on a default
    /// 300px-wide host.
    pub fn new(slide_count: usize, options: SwipeOptions<TestSlide>) -> Self {
        Self::with_host(TestHost::new(), slide_count, options)
    }

    pub fn with_host(host: TestHost, slide_count: usize, options: SwipeOptions<TestSlide>) -> Self {
        let slides = host.make_slides(slide_count);
        let swiper = Swiper::new(host.clone(), slides, options)
            .expect("robot requires at least one slide");
        Self { host, swiper }
    }

    pub fn host(&self) -> &TestHost {
        &self.host
    }

    pub fn swiper(&self) -> &Swiper<TestHost> {
        &self.swiper
    }

    /// Physical index of the current slide.
    pub fn index(&self) -> usize {
        self.swiper.current_index()
    }

    pub fn pointer_down(&self, x: f32, y: f32) {
        self.swiper
            .handle_event(SwipeEvent::PointerDown(PointerSample::single(x, y)));
    }

    pub fn pointer_move(&self, x: f32, y: f32) {
        self.swiper
            .handle_event(SwipeEvent::PointerMove(PointerSample::single(x, y)));
    }

    pub fn pointer_up(&self) {
        self.swiper.handle_event(SwipeEvent::PointerUp);
    }

    /// Perform a full drag of `(dx, dy)` px over `duration_ms`, split
    /// into evenly spaced move samples.
    pub fn drag(&self, dx: f32, dy: f32, duration_ms: u64) {
        let start_x = 200.0;
        let start_y = 200.0;
        self.pointer_down(start_x, start_y);
        let step_ms = duration_ms / DRAG_STEPS;
        for step in 1..=DRAG_STEPS {
            self.host.advance(step_ms);
            let progress = step as f32 / DRAG_STEPS as f32;
            self.pointer_move(start_x + dx * progress, start_y + dy * progress);
        }
        self.host.advance(duration_ms - step_ms * DRAG_STEPS);
        self.pointer_up();
    }

    /// Horizontal swipe toward the next slide.
    pub fn swipe_left(&self, distance: f32, duration_ms: u64) {
        self.drag(-distance, 0.0, duration_ms);
    }

    /// Horizontal swipe toward the previous slide.
    pub fn swipe_right(&self, distance: f32, duration_ms: u64) {
        self.drag(distance, 0.0, duration_ms);
    }

    /// Vertical drag, classified as native scrolling by the engine.
    pub fn scroll_drag(&self, dy: f32, duration_ms: u64) {
        self.drag(0.0, dy, duration_ms);
    }

    /// Notify the engine that the current slide's transition finished.
    pub fn complete_transition(&self) {
        let index = self.index();
        self.swiper
            .handle_event(SwipeEvent::TransitionComplete { index });
    }

    /// Flush deferred host callbacks.
    pub fn settle(&self) {
        self.host.drain_deferred();
    }
}
