//! Selection / navigation state machine
//!
//! A carousel is Idle while `scroll_handle` is empty and Scrolling while a
//! selection scroll is in flight. Directional input is dropped while
//! Scrolling; the pending move commits when the device reports the scroll
//! finished.

use crate::carousel::{Carousel, Completion, PendingMove};
use crate::constants::navigation;
use crate::device::{AnimationOutcome, Device};
use crate::events::CarouselEvent;
use crate::items::ItemCollection;
use crate::types::{Direction, ViewportMode, WrapMode};

/// Next focusable item found by stepping from the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    /// Logical index of the candidate.
    pub index: usize,
    /// The step crossed an end of the list.
    pub wrapped: bool,
}

/// Whether navigation may wrap for this mode and item count.
pub fn wrap_allowed(wrap_mode: WrapMode, len: usize) -> bool {
    wrap_mode.wraps_navigation() && len > navigation::MIN_ITEMS_EXCLUSIVE_FOR_WRAP
}

/// Step from `selected` in `direction`, skipping items that cannot take
/// focus. Crosses an end of the list only when `allow_wrap` is set. Never
/// returns `selected` itself.
pub fn find_candidate<L: ItemCollection + ?Sized>(
    items: &L,
    selected: usize,
    direction: Direction,
    allow_wrap: bool,
) -> Option<Candidate> {
    let len = items.len();
    if len == 0 {
        return None;
    }
    let last = len - 1;
    let mut index = selected.min(last);
    let mut wrapped = false;

    for _ in 0..last {
        index = match direction {
            Direction::Left if index > 0 => index - 1,
            Direction::Right if index < last => index + 1,
            _ if allow_wrap => {
                wrapped = true;
                match direction {
                    Direction::Left => last,
                    Direction::Right => 0,
                }
            }
            _ => return None,
        };
        if items.is_focusable(index) {
            return Some(Candidate { index, wrapped });
        }
    }
    None
}

impl<D: Device, L: ItemCollection> Carousel<D, L> {
    /// Move the selection one focusable step. Returns `false` when nothing
    /// moved: scrolling, dead end, vetoed, or nothing to centre on.
    pub(crate) fn move_selection(&mut self, direction: Direction) -> bool {
        if self.scroll_handle.is_some() {
            tracing::trace!(carousel = %self.id, ?direction, "navigation blocked while scrolling");
            return false;
        }

        let allow_wrap = wrap_allowed(self.wrap_mode, self.items.len());
        let Some(candidate) =
            find_candidate(&self.items, self.selected_index, direction, allow_wrap)
        else {
            return false;
        };

        if candidate.wrapped {
            tracing::debug!(carousel = %self.id, ?direction, index = candidate.index, "selection wrapped");
        }

        let item_id = self
            .items
            .get(candidate.index)
            .map(|item| item.id().to_owned())
            .unwrap_or_default();
        let proceed = self.events.publish(&CarouselEvent::BeforeSelectedItemChange {
            carousel: self.id.clone(),
            item_id,
            index: candidate.index,
        });
        if !proceed {
            tracing::debug!(carousel = %self.id, index = candidate.index, "selection change vetoed");
            return false;
        }

        let visual_wrap = candidate.wrapped && self.wrap_mode == WrapMode::Visual;
        let centre = if visual_wrap {
            // Slide into the clone beside the current item; the real item is
            // snapped to once the scroll lands.
            self.active_element().and_then(|el| match direction {
                Direction::Left => self.device.previous_sibling(el),
                Direction::Right => self.device.next_sibling(el),
            })
        } else {
            if self.viewport_mode == ViewportMode::Dom
                && !self.in_document.contains(&candidate.index)
            {
                // Candidate lies outside the attached window.
                self.materialize_window(candidate.index);
            }
            self.items.element_of(candidate.index)
        };
        let Some(centre) = centre else {
            tracing::debug!(
                carousel = %self.id,
                index = candidate.index,
                "no element to centre on"
            );
            return false;
        };

        if self.activate_then_scroll {
            self.activate(candidate.index);
        }

        let mut target = self.bounds_of(centre);
        if target.left == 0.0 {
            target.left = navigation::MIN_SCROLL_TARGET_LEFT;
        }
        let pending = PendingMove {
            index: candidate.index,
            wrapped: candidate.wrapped,
        };
        match self.scroll_to_bounds(target, self.animation_skipped()) {
            AnimationOutcome::Completed => self.finish_move(pending),
            AnimationOutcome::Pending(handle) => {
                self.scroll_handle = Some(handle);
                self.pending.insert(handle, Completion::Scroll(pending));
            }
        }
        true
    }

    /// Commit a move once its scroll has landed.
    pub(crate) fn finish_move(&mut self, pending: PendingMove) {
        if !self.activate_then_scroll {
            self.activate(pending.index);
        }
        if pending.wrapped
            && self.wrap_mode == WrapMode::Visual
            && let Some(el) = self.active_element()
        {
            self.align_to(el, true);
        }
        self.refresh_viewport();
        self.scroll_handle = None;
    }
}
