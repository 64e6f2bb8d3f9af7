//! Viewport manager
//!
//! Decides which items are materialized (DOM mode) or how they are tagged
//! relative to the visible mask (CLASSES mode) for the current selection.

use std::collections::HashMap;
use std::ops::Range;

use crate::carousel::Carousel;
use crate::constants::{classes, viewport};
use crate::device::Device;
use crate::items::{CarouselItem, ItemCollection};
use crate::types::{Bounds, ElementId, ViewportClass, ViewportMode};

/// Logical indices kept materialized around `selected` in DOM mode.
pub fn window(selected: usize, item_count: usize, len: usize) -> Range<usize> {
    let start = selected.saturating_sub(item_count);
    let end = selected.saturating_add(item_count).saturating_add(1).min(len);
    start..end.max(start)
}

/// Visible and near-visible horizontal bands around a centre line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportBands {
    /// Visible band as `[left, right)`.
    pub visible: (f32, f32),
    /// Near band as `[left, right)`.
    pub near: (f32, f32),
}

impl ViewportBands {
    /// Bands centred on `centre` for a mask `mask_width` wide.
    pub fn around(centre: f32, mask_width: f32) -> Self {
        let half = mask_width / 2.0;
        let near = mask_width * viewport::NEAR_BAND_MASK_WIDTHS;
        Self {
            visible: (centre - half, centre + half),
            near: (centre - near, centre + near),
        }
    }

    /// Half-open overlap test: touching the left edge counts, touching the
    /// right edge does not.
    pub fn classify(&self, bounds: Bounds) -> ViewportClass {
        let overlaps = |(left, right): (f32, f32)| {
            bounds.right() >= left && bounds.left < right
        };
        if overlaps(self.visible) {
            ViewportClass::InViewport
        } else if overlaps(self.near) {
            ViewportClass::NearViewport
        } else {
            ViewportClass::Outside
        }
    }
}

impl<D: Device, L: ItemCollection> Carousel<D, L> {
    /// Recompute the materialized window or viewport classes for the
    /// current selection. No-op for an empty carousel.
    pub fn refresh_viewport(&mut self) {
        if self.items.is_empty() {
            return;
        }
        match self.viewport_mode {
            ViewportMode::None => {}
            ViewportMode::Dom => self.refresh_dom_window(),
            ViewportMode::Classes => self.classify_elements(),
        }
    }

    fn centre_index(&self) -> usize {
        self.active_index.unwrap_or(0)
    }

    fn refresh_dom_window(&mut self) {
        self.materialize_window(self.selected_index);

        let centre = self.centre_index();
        if let Some(el) = self.items.element_of(centre) {
            self.align_to(el, true);
        }
    }

    /// Attach the DOM window around `around` and detach everything else.
    /// Leaves the scroll position alone.
    pub(crate) fn materialize_window(&mut self, around: usize) {
        let Some(content) = self.content else {
            return;
        };
        let range = window(around, self.viewport_item_count, self.items.len());

        for index in std::mem::take(&mut self.in_document) {
            if range.contains(&index) {
                continue;
            }
            if let Some(item) = self.items.get_mut(index) {
                item.remove_class(&mut self.device, classes::IN_VIEWPORT);
                if let Some(el) = item.element() {
                    // Detached, not destroyed: re-entry reuses it.
                    self.device.remove_element(el);
                }
            }
        }

        for index in range.clone() {
            let Some(item) = self.items.get_mut(index) else {
                continue;
            };
            item.add_class(&mut self.device, classes::IN_VIEWPORT);
            let el = item.render(&mut self.device);
            if self.device.parent_of(el).is_none() {
                let position = index - range.start + self.prefix_clone_count;
                self.device.insert_child_at(content, el, position);
            }
            self.in_document.push(index);
        }
        self.node_offset = range.start;

        tracing::debug!(
            carousel = %self.id,
            start = range.start,
            end = range.end,
            around,
            "viewport window refreshed"
        );
    }

    fn classify_elements(&mut self) {
        let (Some(mask), Some(content)) = (self.mask, self.content) else {
            return;
        };
        let Some(centre_el) = self.items.element_of(self.centre_index()) else {
            return;
        };
        let mask_width = self.device.element_size(mask).width;
        let bands =
            ViewportBands::around(self.bounds_of(centre_el).center(), mask_width);

        let logical: HashMap<ElementId, usize> = (0..self.items.len())
            .filter_map(|index| self.items.element_of(index).map(|el| (el, index)))
            .collect();

        for el in self.device.children_of(content) {
            let class = bands.classify(self.bounds_of(el));
            if let Some(&index) = logical.get(&el) {
                if let Some(item) = self.items.get_mut(index) {
                    apply_item_class(&mut self.device, item, class);
                }
            } else if self.clone_sources.contains_key(&el) {
                apply_element_class(&mut self.device, el, class);
            }
        }
    }
}

fn apply_item_class<D: Device>(
    device: &mut D,
    item: &mut CarouselItem,
    class: ViewportClass,
) {
    match class {
        ViewportClass::InViewport => {
            item.remove_class(device, classes::NEAR_VIEWPORT);
            item.add_class(device, classes::IN_VIEWPORT);
        }
        ViewportClass::NearViewport => {
            item.remove_class(device, classes::IN_VIEWPORT);
            item.add_class(device, classes::NEAR_VIEWPORT);
        }
        ViewportClass::Outside => {
            item.remove_class(device, classes::IN_VIEWPORT);
            item.remove_class(device, classes::NEAR_VIEWPORT);
        }
    }
}

fn apply_element_class<D: Device>(
    device: &mut D,
    el: ElementId,
    class: ViewportClass,
) {
    device.remove_class(el, classes::IN_VIEWPORT, false);
    device.remove_class(el, classes::NEAR_VIEWPORT, false);
    match class {
        ViewportClass::InViewport => device.add_class(el, classes::IN_VIEWPORT),
        ViewportClass::NearViewport => {
            device.add_class(el, classes::NEAR_VIEWPORT);
        }
        ViewportClass::Outside => {}
    }
}
