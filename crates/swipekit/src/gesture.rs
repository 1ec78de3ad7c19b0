//! Gesture interpretation: Idle -> Dragging -> (Committing | Cancelling).
//!
//! A drag exists from pointer-down to pointer-up. The first move sample
//! classifies the gesture as horizontal swipe or vertical scroll, and the
//! classification is sticky for the rest of the drag. Horizontal drags
//! stream live offsets straight to the render surface (the position table
//! keeps the committed offsets, so a cancel knows where to snap back to);
//! pointer-up decides commit-or-cancel from the drag's speed and distance.

use crate::circular::circle;
use crate::engine::SwiperInner;
use crate::events::{EventResponse, PointerSample};
use crate::platform::{Clock, TaskScheduler, TransformHost};

/// A flick faster than this window commits on a small distance.
pub(crate) const COMMIT_WINDOW_MS: u64 = 250;
/// Minimum distance for a fast flick to commit.
pub(crate) const COMMIT_DISTANCE_PX: f32 = 20.0;

/// Transient per-drag record, created on pointer-down and consumed on
/// pointer-up.
pub(crate) struct DragState<I> {
    pub(crate) start_x: f32,
    pub(crate) start_y: f32,
    pub(crate) started_at: I,
    /// Latest horizontal delta; already resistance-scaled in
    /// non-continuous mode.
    pub(crate) delta_x: f32,
    /// Sticky scroll-vs-swipe classification from the first move sample.
    pub(crate) scrolling: Option<bool>,
}

impl<H> SwiperInner<H>
where
    H: TransformHost + TaskScheduler + Clock,
{
    pub(crate) fn on_pointer_down(&mut self, sample: &PointerSample) -> EventResponse {
        if self.options.disabled {
            return EventResponse::none();
        }
        let Some(contact) = sample.contacts.first().copied() else {
            return EventResponse::none();
        };

        // Suppress any pending autoplay advance as soon as the user
        // touches the carousel.
        self.stop_autoplay();

        // A new pointer-down replaces any prior drag outright.
        self.drag = Some(DragState {
            start_x: contact.x,
            start_y: contact.y,
            started_at: self.host.now(),
            delta_x: 0.0,
            scrolling: None,
        });
        EventResponse::none()
    }

    pub(crate) fn on_pointer_move(&mut self, sample: &PointerSample) -> EventResponse {
        let mut response = EventResponse {
            prevent_default: self.options.prevent_native_scroll,
            stop_propagation: false,
        };

        if self.options.disabled {
            return EventResponse::none();
        }
        let (start_x, start_y, mut scrolling) = match self.drag.as_ref() {
            Some(drag) => (drag.start_x, drag.start_y, drag.scrolling),
            None => return EventResponse::none(),
        };

        // Multi-contact and pinch samples are ignored without cancelling
        // the drag; tracking resumes once contacts reduce.
        if sample.is_multi_touch() {
            return response;
        }
        let Some(contact) = sample.contacts.first().copied() else {
            return response;
        };
        let delta_x = contact.x - start_x;
        let delta_y = contact.y - start_y;

        // One-time classification on the first move sample.
        if scrolling.is_none() {
            let vertical = delta_x.abs() < delta_y.abs();
            scrolling = Some(vertical);
            log::trace!(
                "drag classified as {}",
                if vertical { "vertical scroll" } else { "horizontal swipe" }
            );
        }

        let mut applied_delta = delta_x;
        if scrolling == Some(false) {
            // The host's native scrolling must not fight the swipe.
            response.prevent_default = true;
            response.stop_propagation = true;
            self.stop_autoplay();

            let len = self.slides.len();
            let width = self.positions.width();
            let index = self.index as isize;

            if self.continuous {
                for physical in [circle(index - 1, len), self.index, circle(index + 1, len)] {
                    let stored = self.positions.offset(physical);
                    self.translate_slide(physical as isize, delta_x + stored, 0);
                }
            } else {
                let at_left_bound = self.index == 0 && delta_x > 0.0;
                let at_right_bound = self.index == len - 1 && delta_x < 0.0;

                // Resistance curve for pushing past an edge. Scaling
                // preserves sign, so the bound checks below see the same
                // direction the raw gesture had.
                applied_delta = delta_x
                    / if at_left_bound || at_right_bound {
                        delta_x.abs() / width + 1.0
                    } else {
                        1.0
                    };

                let suppressed = (self.index == 0 && applied_delta > 0.0)
                    || (self.index == len - 1 && applied_delta < 0.0);
                if !suppressed {
                    for offset in [-1isize, 0, 1] {
                        let physical = index + offset;
                        if physical < 0 || physical >= len as isize {
                            continue;
                        }
                        let stored = self.positions.offset(physical as usize);
                        self.translate_slide(physical, applied_delta + stored, 0);
                    }
                }
            }
        }

        if let Some(drag) = self.drag.as_mut() {
            drag.delta_x = applied_delta;
            drag.scrolling = scrolling;
        }
        response
    }

    pub(crate) fn on_pointer_up(&mut self) -> EventResponse {
        let Some(drag) = self.drag.take() else {
            return EventResponse::none();
        };

        let duration = self.host.elapsed_millis(drag.started_at);
        let delta_x = drag.delta_x;
        let len = self.slides.len();
        let width = self.positions.width();
        let speed = self.options.speed_ms;

        // Commit on a fast flick over a small distance, or on any drag
        // past half the slide width.
        let is_valid = (duration < COMMIT_WINDOW_MS && delta_x.abs() > COMMIT_DISTANCE_PX)
            || delta_x.abs() > width / 2.0;

        // Continuous mode has no edges.
        let is_past_bounds = !self.continuous
            && ((self.index == 0 && delta_x > 0.0)
                || (self.index == len - 1 && delta_x < 0.0));

        let forward = delta_x < 0.0;
        let scrolling = drag.scrolling == Some(true);

        if !scrolling && is_valid && !is_past_bounds {
            let index = self.index as isize;
            if forward {
                if self.continuous {
                    self.move_slide(circle(index - 1, len), -width, 0);
                    self.move_slide(circle(index + 2, len), width, 0);
                } else if self.index >= 1 {
                    self.move_slide(self.index - 1, -width, 0);
                }
                let arriving = circle(index + 1, len);
                let leaving_offset = self.positions.offset(self.index);
                let arriving_offset = self.positions.offset(arriving);
                self.move_slide(self.index, leaving_offset - width, speed);
                self.move_slide(arriving, arriving_offset - width, speed);
                log::debug!("drag committed forward: {} -> {arriving}", self.index);
                self.index = arriving;
            } else {
                if self.continuous {
                    self.move_slide(circle(index + 1, len), width, 0);
                    self.move_slide(circle(index - 2, len), -width, 0);
                } else if self.index + 1 < len {
                    self.move_slide(self.index + 1, width, 0);
                }
                let arriving = circle(index - 1, len);
                let leaving_offset = self.positions.offset(self.index);
                let arriving_offset = self.positions.offset(arriving);
                self.move_slide(self.index, leaving_offset + width, speed);
                self.move_slide(arriving, arriving_offset + width, speed);
                log::debug!("drag committed backward: {} -> {arriving}", self.index);
                self.index = arriving;
            }
            self.emit_change();
            self.mark_moved();
        } else {
            // Cancel: animate every perturbed slide back to steady state.
            // Scroll-classified drags land here too, restoring anything a
            // prior gesture left mid-flight.
            let index = self.index as isize;
            if self.continuous {
                self.move_slide(circle(index - 1, len), -width, speed);
                self.move_slide(self.index, 0.0, speed);
                self.move_slide(circle(index + 1, len), width, speed);
            } else {
                if self.index >= 1 {
                    self.move_slide(self.index - 1, -width, speed);
                }
                self.move_slide(self.index, 0.0, speed);
                if self.index + 1 < len {
                    self.move_slide(self.index + 1, width, speed);
                }
            }
        }

        EventResponse::none()
    }
}
