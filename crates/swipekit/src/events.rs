//! Input event model.
//!
//! The host translates its native pointer/touch stream into `SwipeEvent`
//! variants and feeds them to [`Swiper::handle_event`]. Dispatch is a
//! match over the variant set rather than a branch on event-type strings,
//! and the handler's verdict travels back as an [`EventResponse`] the host
//! applies to its native event (the engine never touches the host event
//! object directly).
//!
//! [`Swiper::handle_event`]: crate::Swiper::handle_event

use smallvec::SmallVec;

/// A single contact point position in px.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactPoint {
    pub x: f32,
    pub y: f32,
}

impl ContactPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// One pointer-down or pointer-move sample: the active contact points plus
/// an optional pinch scale factor reported by the platform.
///
/// Single-finger gestures are the common case, so contacts live inline.
#[derive(Debug, Clone, Default)]
pub struct PointerSample {
    pub contacts: SmallVec<[ContactPoint; 2]>,
    pub scale: Option<f32>,
}

impl PointerSample {
    /// Sample with a single contact and no pinch scale.
    pub fn single(x: f32, y: f32) -> Self {
        let mut contacts = SmallVec::new();
        contacts.push(ContactPoint::new(x, y));
        Self {
            contacts,
            scale: None,
        }
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = Some(scale);
        self
    }

    pub fn push_contact(mut self, x: f32, y: f32) -> Self {
        self.contacts.push(ContactPoint::new(x, y));
        self
    }

    /// Whether this sample is part of a multi-contact or pinch gesture,
    /// which the interpreter ignores without cancelling the drag.
    pub fn is_multi_touch(&self) -> bool {
        self.contacts.len() > 1 || self.scale.is_some_and(|scale| scale != 1.0)
    }
}

/// Host-fed engine input.
#[derive(Debug, Clone)]
pub enum SwipeEvent {
    PointerDown(PointerSample),
    PointerMove(PointerSample),
    PointerUp,
    /// The render transition for the slide at `index` just finished.
    TransitionComplete { index: usize },
    /// The host viewport was resized; slide widths must be re-measured.
    Resize,
}

/// What the host should do with the native event that produced a
/// `SwipeEvent`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventResponse {
    /// Suppress the platform's default handling (native scrolling).
    pub prevent_default: bool,
    /// Stop the native event from propagating further.
    pub stop_propagation: bool,
}

impl EventResponse {
    pub fn none() -> Self {
        Self::default()
    }
}
