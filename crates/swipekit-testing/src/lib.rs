//! Testing utilities and harness for swipekit.
//!
//! Provides a deterministic host implementation ([`TestHost`]) with a
//! manual clock, observable timers/deferred tasks, and a transform log,
//! plus a robot-style driver ([`SwipeRobot`]) for composing gestures in
//! tests.

pub mod host;
pub mod robot;

pub use host::{TestHost, TestSlide, TransformCall};
pub use robot::SwipeRobot;
