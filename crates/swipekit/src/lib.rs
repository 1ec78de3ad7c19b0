//! Gesture-driven slide positioning engine.
//!
//! swipekit tracks which slide of a horizontal sequence is current,
//! interprets pointer/touch drag gestures into slide transitions, and
//! computes the offsets and transition timings needed to animate between
//! slides — including an optional infinite-looping ("continuous") mode
//! built on circular indexing over a finite physical slide array.
//!
//! The engine is a pure numeric model. Rendering, element measurement,
//! input capture, and timers stay with the host behind the traits in
//! [`platform`]: the host feeds [`SwipeEvent`]s in and receives
//! `apply_transform` calls and deferred callbacks out.
//!
//! Single-threaded by design: all work runs on one logical thread driven
//! by input events, timers, and render-completion notifications. Host
//! callbacks are always deferred to a later scheduling tick, so they never
//! observe mid-transition state.

pub mod circular;
pub mod config;
pub mod engine;
pub mod events;
mod gesture;
pub mod platform;
pub mod position;

pub use circular::circle;
pub use config::{SlideCallback, SwipeOptions};
pub use engine::{SetupError, Swiper};
pub use events::{ContactPoint, EventResponse, PointerSample, SwipeEvent};
pub use platform::{Clock, SystemClock, Task, TaskScheduler, TimerId, TransformHost};
pub use position::PositionTable;
