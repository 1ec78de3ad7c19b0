//! Autoplay scheduling: delayed advance, suppression by user input, and
//! re-arming on transition completion.

use std::cell::Cell;
use std::rc::Rc;

use swipekit::{SwipeEvent, SwipeOptions};
use swipekit_testing::SwipeRobot;

fn autoplay_robot(slide_count: usize) -> SwipeRobot {
    SwipeRobot::new(
        slide_count,
        SwipeOptions::new().continuous(true).auto_ms(1000),
    )
}

#[test]
fn advances_forward_after_the_configured_delay() {
    let robot = autoplay_robot(3);
    assert!(robot.swiper().autoplay_pending());

    robot.host().advance(999);
    assert_eq!(robot.index(), 0);

    robot.host().advance(1);
    assert_eq!(robot.index(), 1);
}

#[test]
fn does_not_rearm_until_the_transition_completes() {
    let robot = autoplay_robot(3);
    robot.host().advance(1000);
    assert_eq!(robot.index(), 1);
    assert!(!robot.swiper().autoplay_pending());

    robot.complete_transition();
    assert!(robot.swiper().autoplay_pending());

    robot.host().advance(1000);
    assert_eq!(robot.index(), 2);
}

#[test]
fn stale_transition_notifications_are_ignored() {
    let ends = Rc::new(Cell::new(0u32));
    let seen = Rc::clone(&ends);
    let robot = SwipeRobot::new(
        3,
        SwipeOptions::new()
            .continuous(true)
            .auto_ms(1000)
            .on_transition_end(move |_, _| seen.set(seen.get() + 1)),
    );

    robot.host().advance(1000);
    assert_eq!(robot.index(), 1);

    // Completion notification for the slide we already left.
    robot
        .swiper()
        .handle_event(SwipeEvent::TransitionComplete { index: 0 });
    robot.settle();
    assert!(!robot.swiper().autoplay_pending());
    assert_eq!(ends.get(), 0);

    robot.complete_transition();
    robot.settle();
    assert!(robot.swiper().autoplay_pending());
    assert_eq!(ends.get(), 1);
}

#[test]
fn pointer_down_suppresses_the_pending_advance() {
    let robot = autoplay_robot(3);
    assert!(robot.swiper().autoplay_pending());

    robot.pointer_down(200.0, 200.0);
    assert!(!robot.swiper().autoplay_pending());

    // Nothing fires even as time passes.
    robot.host().advance(5000);
    assert_eq!(robot.index(), 0);
}

#[test]
fn explicit_controls_cancel_the_pending_advance() {
    let robot = autoplay_robot(3);
    robot.swiper().next();
    assert_eq!(robot.index(), 1);
    assert!(!robot.swiper().autoplay_pending());

    // The user-driven transition completing re-arms autoplay.
    robot.complete_transition();
    assert!(robot.swiper().autoplay_pending());
}

#[test]
fn transition_end_callback_is_deferred() {
    let observed = Rc::new(Cell::new(None::<usize>));
    let seen = Rc::clone(&observed);
    let robot = SwipeRobot::new(
        3,
        SwipeOptions::new()
            .continuous(true)
            .on_transition_end(move |index, _| seen.set(Some(index))),
    );

    robot.swiper().next();
    robot.settle();
    robot.complete_transition();
    assert_eq!(observed.get(), None, "callback must not run synchronously");

    robot.settle();
    assert_eq!(observed.get(), Some(1));
}

#[test]
fn no_autoplay_without_a_configured_delay() {
    let robot = SwipeRobot::new(3, SwipeOptions::new().continuous(true));
    assert!(!robot.swiper().autoplay_pending());
    robot.complete_transition();
    assert!(!robot.swiper().autoplay_pending());
}
