//! Deterministic in-memory host.
//!
//! `TestHost` implements all three platform traits over shared interior
//! state: a manual clock, a FIFO deferred-task queue, deadline-ordered
//! timers, and a log of every transform the engine issued. Tests drive
//! time explicitly with [`TestHost::advance`] and flush deferred callbacks
//! with [`TestHost::drain_deferred`], so every scheduling decision the
//! engine makes is observable and repeatable.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use swipekit::{Clock, Task, TaskScheduler, TimerId, TransformHost};

/// Opaque renderable panel stand-in. Ids are assigned in creation order,
/// so for a freshly built host a slide's id equals its physical index,
/// including panels duplicated for continuous mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestSlide {
    pub id: usize,
}

/// One recorded `apply_transform` call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformCall {
    pub slide: usize,
    pub offset: f32,
    pub duration_ms: u64,
}

struct PendingTimer {
    id: TimerId,
    deadline_ms: u64,
    task: Option<Task>,
}

struct TestHostState {
    width: f32,
    now_ms: u64,
    transforms: Vec<TransformCall>,
    deferred: VecDeque<Task>,
    timers: Vec<PendingTimer>,
    next_timer: u64,
    next_slide_id: usize,
    clone_count: usize,
}

/// Cheap-to-clone handle; clones share the same recorded state, so one
/// copy goes into the engine and another stays with the test.
#[derive(Clone)]
pub struct TestHost {
    state: Rc<RefCell<TestHostState>>,
}

impl TestHost {
    /// Host with the default 300px slide width.
    pub fn new() -> Self {
        Self::with_width(300.0)
    }

    pub fn with_width(width: f32) -> Self {
        Self {
            state: Rc::new(RefCell::new(TestHostState {
                width,
                now_ms: 0,
                transforms: Vec::new(),
                deferred: VecDeque::new(),
                timers: Vec::new(),
                next_timer: 0,
                next_slide_id: 0,
                clone_count: 0,
            })),
        }
    }

    /// Create `count` slides with sequential ids.
    pub fn make_slides(&self, count: usize) -> Vec<TestSlide> {
        let mut state = self.state.borrow_mut();
        (0..count)
            .map(|_| {
                let id = state.next_slide_id;
                state.next_slide_id += 1;
                TestSlide { id }
            })
            .collect()
    }

    /// Advance the manual clock, firing due timers in deadline order.
    /// Timer tasks run outside the host borrow, so they may re-enter the
    /// engine (and the host) freely.
    pub fn advance(&self, ms: u64) {
        let target = self.state.borrow().now_ms + ms;
        loop {
            let task = {
                let mut state = self.state.borrow_mut();
                let due = state
                    .timers
                    .iter()
                    .enumerate()
                    .filter(|(_, timer)| timer.deadline_ms <= target)
                    .min_by_key(|(_, timer)| (timer.deadline_ms, timer.id.raw()))
                    .map(|(position, _)| position);
                match due {
                    Some(position) => {
                        let mut timer = state.timers.remove(position);
                        state.now_ms = state.now_ms.max(timer.deadline_ms);
                        timer.task.take()
                    }
                    None => {
                        state.now_ms = target;
                        break;
                    }
                }
            };
            if let Some(task) = task {
                task();
            }
        }
    }

    /// Run every queued deferred task, FIFO, including tasks enqueued by
    /// the tasks themselves.
    pub fn drain_deferred(&self) {
        loop {
            let task = self.state.borrow_mut().deferred.pop_front();
            match task {
                Some(task) => task(),
                None => break,
            }
        }
    }

    pub fn now_ms(&self) -> u64 {
        self.state.borrow().now_ms
    }

    /// Change the reported slide width, simulating a viewport resize.
    /// Takes effect when the engine re-measures on a `Resize` event.
    pub fn set_width(&self, width: f32) {
        self.state.borrow_mut().width = width;
    }

    /// All transforms recorded so far, in issue order.
    pub fn transforms(&self) -> Vec<TransformCall> {
        self.state.borrow().transforms.clone()
    }

    pub fn clear_transforms(&self) {
        self.state.borrow_mut().transforms.clear();
    }

    pub fn transform_count(&self) -> usize {
        self.state.borrow().transforms.len()
    }

    /// Transforms issued for one slide, in issue order.
    pub fn transforms_for(&self, slide: usize) -> Vec<TransformCall> {
        self.state
            .borrow()
            .transforms
            .iter()
            .filter(|call| call.slide == slide)
            .copied()
            .collect()
    }

    /// Most recent transform issued for one slide.
    pub fn last_transform_for(&self, slide: usize) -> Option<TransformCall> {
        self.transforms_for(slide).last().copied()
    }

    /// Number of panels duplicated via `clone_slide`.
    pub fn clone_count(&self) -> usize {
        self.state.borrow().clone_count
    }

    pub fn pending_timers(&self) -> usize {
        self.state.borrow().timers.len()
    }

    pub fn pending_deferred(&self) -> usize {
        self.state.borrow().deferred.len()
    }
}

impl Default for TestHost {
    fn default() -> Self {
        Self::new()
    }
}

impl TransformHost for TestHost {
    type Slide = TestSlide;

    fn measure_width(&self, _slide: &TestSlide) -> f32 {
        self.state.borrow().width
    }

    fn apply_transform(&self, slide: &TestSlide, offset_px: f32, duration_ms: u64) {
        self.state.borrow_mut().transforms.push(TransformCall {
            slide: slide.id,
            offset: offset_px,
            duration_ms,
        });
    }

    fn clone_slide(&self, slide: &TestSlide) -> TestSlide {
        let _ = slide;
        let mut state = self.state.borrow_mut();
        let id = state.next_slide_id;
        state.next_slide_id += 1;
        state.clone_count += 1;
        TestSlide { id }
    }
}

impl TaskScheduler for TestHost {
    fn defer(&self, task: Task) {
        self.state.borrow_mut().deferred.push_back(task);
    }

    fn set_timer(&self, task: Task, delay_ms: u64) -> TimerId {
        let mut state = self.state.borrow_mut();
        let id = TimerId::from_raw(state.next_timer);
        state.next_timer += 1;
        let deadline_ms = state.now_ms + delay_ms;
        state.timers.push(PendingTimer {
            id,
            deadline_ms,
            task: Some(task),
        });
        id
    }

    fn cancel_timer(&self, timer: TimerId) {
        self.state
            .borrow_mut()
            .timers
            .retain(|pending| pending.id != timer);
    }
}

impl Clock for TestHost {
    type Instant = u64;

    fn now(&self) -> u64 {
        self.state.borrow().now_ms
    }

    fn elapsed_millis(&self, since: u64) -> u64 {
        self.state.borrow().now_ms.saturating_sub(since)
    }
}
