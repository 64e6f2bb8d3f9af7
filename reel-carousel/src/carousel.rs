//! Carousel widget: configuration, lifecycle and selection commit.
//!
//! The navigation, viewport and wrap engines live in their own modules as
//! further `impl` blocks on [`Carousel`]; this module owns the state they
//! share and the entry points a host calls.

use std::collections::HashMap;
use std::time::Duration;

use reel_config::{CarouselSettings, DeviceConfig};

use crate::alignment;
use crate::constants::{animation, classes, ids};
use crate::device::{AnimationOutcome, Device, ScrollRequest, VisibilityRequest};
use crate::error::{CarouselError, Result};
use crate::events::{CarouselEvent, EventBus, EventKind, SubscriptionId};
use crate::items::{CarouselItem, ItemCollection, ItemList, ItemTemplate};
use crate::types::{
    Alignment, AnimationHandle, Bounds, Direction, ElementId, Key,
    KeyDisposition, ViewportMode, WrapMode,
};

/// Scroll animation parameters handed to the device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationSettings {
    /// Frames per second requested from the device.
    pub fps: u32,
    /// Length of one selection scroll.
    pub duration: Duration,
    /// Device easing id.
    pub easing: String,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            fps: animation::FPS,
            duration: Duration::from_millis(animation::DURATION_MS),
            easing: animation::EASING.to_owned(),
        }
    }
}

/// A selection move waiting for its scroll to finish.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PendingMove {
    pub(crate) index: usize,
    pub(crate) wrapped: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Completion {
    Scroll(PendingMove),
    Rebind,
}

/// Horizontally scrolling, focus-navigable carousel.
///
/// Owns its device handle and item collection. All methods run on the UI
/// thread; animation completions are fed back through
/// [`Carousel::on_animation_complete`].
#[derive(Debug)]
pub struct Carousel<D: Device, L: ItemCollection = ItemList> {
    pub(crate) id: String,
    pub(crate) device: D,
    pub(crate) settings: CarouselSettings,
    pub(crate) items: L,
    pub(crate) data: Option<Vec<ItemTemplate>>,
    pub(crate) events: EventBus,

    pub(crate) mask: Option<ElementId>,
    pub(crate) content: Option<ElementId>,

    pub(crate) selected_index: usize,
    pub(crate) active_index: Option<usize>,
    pub(crate) has_focus: bool,

    pub(crate) wrap_mode: WrapMode,
    pub(crate) viewport_mode: ViewportMode,
    pub(crate) viewport_item_count: usize,

    /// Synthetic elements rendered before the first real item.
    pub(crate) prefix_clone_count: usize,
    /// Logical index of the first materialized item (DOM viewport mode).
    pub(crate) node_offset: usize,
    /// Logical indices currently attached (DOM viewport mode).
    pub(crate) in_document: Vec<usize>,
    pub(crate) clones: Vec<ElementId>,
    pub(crate) clone_sources: HashMap<ElementId, usize>,
    pub(crate) padding: Option<(ElementId, ElementId)>,

    pub(crate) alignment: Alignment,
    pub(crate) alignment_offset: f32,
    pub(crate) animation: AnimationSettings,
    pub(crate) animation_overridden: bool,
    pub(crate) activate_then_scroll: bool,
    pub(crate) keep_hidden: bool,
    pub(crate) multi_width_items: bool,

    pub(crate) scroll_handle: Option<AnimationHandle>,
    pub(crate) pending: HashMap<AnimationHandle, Completion>,
    pub(crate) bind_pending: bool,
}

impl<D: Device> Carousel<D, ItemList> {
    /// Carousel over the stock [`ItemList`].
    pub fn new(id: impl Into<String>, device: D, config: &DeviceConfig) -> Self {
        Self::with_collection(id, device, config, ItemList::new())
    }
}

impl<D: Device, L: ItemCollection> Carousel<D, L> {
    /// Build a carousel over a caller-supplied collection.
    pub fn with_collection(
        id: impl Into<String>,
        device: D,
        config: &DeviceConfig,
        items: L,
    ) -> Self {
        let mut carousel = Self {
            id: id.into(),
            device,
            settings: config.carousel().clone(),
            items,
            data: None,
            events: EventBus::new(),
            mask: None,
            content: None,
            selected_index: 0,
            active_index: None,
            has_focus: false,
            wrap_mode: WrapMode::default(),
            viewport_mode: ViewportMode::default(),
            viewport_item_count: 0,
            prefix_clone_count: 0,
            node_offset: 0,
            in_document: Vec::new(),
            clones: Vec::new(),
            clone_sources: HashMap::new(),
            padding: None,
            alignment: Alignment::default(),
            alignment_offset: 0.0,
            animation: AnimationSettings::default(),
            animation_overridden: false,
            activate_then_scroll: false,
            keep_hidden: false,
            multi_width_items: false,
            scroll_handle: None,
            pending: HashMap::new(),
            bind_pending: false,
        };
        if let Some(first) = carousel.items.first_focusable() {
            carousel.active_index = Some(first);
            carousel.selected_index = first;
        }
        carousel
    }

    // ========== CONFIGURATION ==========

    /// Set the boundary behaviour. Visual wrap is refused while the viewport
    /// mode is DOM.
    pub fn set_wrap_mode(&mut self, wrap_mode: WrapMode) -> Result<()> {
        if self.viewport_mode == ViewportMode::Dom && wrap_mode == WrapMode::Visual
        {
            return Err(CarouselError::ViewportConflictsWithVisualWrap);
        }
        self.wrap_mode = wrap_mode;
        Ok(())
    }

    /// Current boundary behaviour.
    pub fn wrap_mode(&self) -> WrapMode {
        self.wrap_mode
    }

    /// Choose how items are virtualized. `item_count` is the number of items
    /// kept attached on each side of the selection in DOM mode.
    pub fn set_viewport_mode(
        &mut self,
        viewport_mode: ViewportMode,
        item_count: usize,
    ) -> Result<()> {
        if viewport_mode == ViewportMode::Dom {
            if self.wrap_mode == WrapMode::Visual {
                return Err(CarouselError::ViewportConflictsWithVisualWrap);
            }
            if item_count == 0 {
                return Err(CarouselError::MissingViewportItemCount);
            }
        }
        self.items
            .set_auto_render_children(viewport_mode != ViewportMode::Dom);
        self.viewport_mode = viewport_mode;
        self.viewport_item_count = item_count;
        Ok(())
    }

    /// Current virtualization strategy.
    pub fn viewport_mode(&self) -> ViewportMode {
        self.viewport_mode
    }

    /// Items kept attached on each side of the selection in DOM mode.
    pub fn viewport_item_count(&self) -> usize {
        self.viewport_item_count
    }

    /// Where the active item rests inside the mask.
    pub fn set_alignment(&mut self, alignment: Alignment) {
        self.alignment = alignment;
    }

    /// Current alignment.
    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    /// Extra offset applied after alignment, in pixels.
    pub fn set_alignment_offset(&mut self, offset: f32) {
        self.alignment_offset = offset;
    }

    /// Current alignment offset.
    pub fn alignment_offset(&self) -> f32 {
        self.alignment_offset
    }

    /// Frames per second for selection scrolls.
    pub fn set_widget_animation_fps(&mut self, fps: u32) {
        self.animation.fps = fps;
    }

    /// Frames per second for selection scrolls.
    pub fn widget_animation_fps(&self) -> u32 {
        self.animation.fps
    }

    /// Duration of a selection scroll.
    pub fn set_widget_animation_duration(&mut self, duration: Duration) {
        self.animation.duration = duration;
    }

    /// Duration of a selection scroll.
    pub fn widget_animation_duration(&self) -> Duration {
        self.animation.duration
    }

    /// Easing id understood by the device, e.g. `"easeFromTo"`.
    pub fn set_widget_animation_easing(&mut self, easing: impl Into<String>) {
        self.animation.easing = easing.into();
    }

    /// Easing id for selection scrolls.
    pub fn widget_animation_easing(&self) -> &str {
        &self.animation.easing
    }

    /// Items differ in width; wrap clones then cover a full mask width.
    pub fn set_has_multi_width_items(&mut self, multi_width_items: bool) {
        self.multi_width_items = multi_width_items;
    }

    /// Activate the next item before scrolling instead of after.
    pub fn set_activate_then_scroll(&mut self, activate_then_scroll: bool) {
        self.activate_then_scroll = activate_then_scroll;
    }

    /// Leave the mask hidden after binding.
    pub fn set_keep_hidden(&mut self, keep_hidden: bool) {
        self.keep_hidden = keep_hidden;
    }

    /// Turn selection animation on or off regardless of device settings.
    pub fn set_animation_override(&mut self, animation_on: bool) {
        self.animation_overridden = !animation_on;
    }

    // ========== STATE ==========

    /// Id the carousel's elements are derived from.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The rendering device.
    pub fn device(&self) -> &D {
        &self.device
    }

    /// Mutable access to the rendering device.
    pub fn device_mut(&mut self) -> &mut D {
        &mut self.device
    }

    /// The item collection.
    pub fn items(&self) -> &L {
        &self.items
    }

    /// Number of real items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether there are no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Logical index of the selected item.
    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    /// Logical index of the active item, once one is focusable.
    pub fn active_index(&self) -> Option<usize> {
        self.active_index
    }

    /// The active item.
    pub fn active_item(&self) -> Option<&CarouselItem> {
        self.active_index.and_then(|index| self.items.get(index))
    }

    /// Synthetic elements ahead of the first real item: prefix clones, or 1
    /// for the left padding.
    pub fn prefix_clone_count(&self) -> usize {
        self.prefix_clone_count
    }

    /// Logical index of the first attached item.
    pub fn node_offset(&self) -> usize {
        self.node_offset
    }

    /// Whether a selection scroll is in flight.
    pub fn is_scrolling(&self) -> bool {
        self.scroll_handle.is_some()
    }

    /// Whether [`Carousel::layout_settled`] still has a bind to run.
    pub fn is_bind_pending(&self) -> bool {
        self.bind_pending
    }

    /// Fallback delay a host without a layout signal should wait before
    /// calling [`Carousel::layout_settled`].
    pub fn bind_delay(&self) -> Duration {
        self.settings.bind_delay()
    }

    /// The clipping mask, once rendered.
    pub fn mask_element(&self) -> Option<ElementId> {
        self.mask
    }

    /// The scrolled strip inside the mask, once rendered.
    pub fn content_element(&self) -> Option<ElementId> {
        self.content
    }

    /// Wrap clones currently in the render tree, in creation order.
    pub fn clone_elements(&self) -> &[ElementId] {
        &self.clones
    }

    /// Logical index of the item a clone element duplicates.
    pub fn clone_source(&self, el: ElementId) -> Option<usize> {
        self.clone_sources.get(&el).copied()
    }

    /// Left and right padding elements in non-visual wrap modes.
    pub fn padding_elements(&self) -> Option<(ElementId, ElementId)> {
        self.padding
    }

    /// Render-order position of a logical index, if it is materialized.
    pub fn render_index_of(&self, logical: usize) -> Option<usize> {
        if logical >= self.items.len() || logical < self.node_offset {
            return None;
        }
        if self.viewport_mode == ViewportMode::Dom
            && !self.in_document.contains(&logical)
        {
            return None;
        }
        Some(logical - self.node_offset + self.prefix_clone_count)
    }

    // ========== EVENTS ==========

    /// Register `handler` for events of `kind`. A `false` return cancels a
    /// cancelable event.
    pub fn subscribe<F>(&mut self, kind: EventKind, handler: F) -> SubscriptionId
    where
        F: FnMut(&CarouselEvent) -> bool + 'static,
    {
        self.events.subscribe(kind, handler)
    }

    /// Drop a subscription. Returns whether it existed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.events.unsubscribe(id)
    }

    // ========== DATA ==========

    /// Append a single item, for carousels built without a data source.
    ///
    /// After a bind the item is placed at its render position, ahead of the
    /// right padding or suffix clones, and visual wrap clones are rebuilt.
    /// Fails without adding anything when the carousel wraps visually and
    /// the new item has no measurable width.
    pub fn append_item(&mut self, template: ItemTemplate) -> Result<()> {
        let index = self.items.len();
        let mut item = CarouselItem::from(template);
        let bound = self.content.is_some() && !self.bind_pending;

        if let Some(content) = self.content
            && self.viewport_mode != ViewportMode::Dom
            && self.items.auto_render_children()
        {
            let el = item.render(&mut self.device);
            if bound {
                if self.wrap_mode == WrapMode::Visual {
                    let width = self.device.element_size(el).width;
                    if width.is_nan() || width <= 0.0 {
                        item.release(&mut self.device);
                        return Err(CarouselError::ZeroWidthItem { index });
                    }
                }
                if self.viewport_mode == ViewportMode::None {
                    item.add_class(&mut self.device, classes::IN_VIEWPORT);
                }
                let position = index - self.node_offset + self.prefix_clone_count;
                self.device.insert_child_at(content, el, position);
            } else {
                self.device.append_child(content, el);
            }
        }
        self.items.push(item);

        if self.active_index.is_none() && self.items.is_focusable(index) {
            self.activate(index);
        }

        if bound && let Some(content) = self.content {
            if self.wrap_mode == WrapMode::Visual && self.viewport_mode != ViewportMode::Dom {
                self.rebuild_wrap_clones(content)?;
            }
            self.refresh_viewport();
        }
        Ok(())
    }

    /// Replace every item. Clones and the rendered window are rebuilt on
    /// the next [`Carousel::layout_settled`].
    pub fn set_data_source(&mut self, templates: Vec<ItemTemplate>) {
        self.prefix_clone_count = 0;
        self.cancel_scroll();
        self.discard_clones();

        let old = self.items.replace_all(
            templates.iter().cloned().map(CarouselItem::from).collect(),
        );
        for mut item in old {
            item.release(&mut self.device);
        }
        self.data = Some(templates);
        self.in_document.clear();
        self.node_offset = 0;
        self.active_index = None;
        self.selected_index = 0;

        if let Some(first) = self.items.first_focusable() {
            self.activate(first);
        }

        tracing::debug!(
            carousel = %self.id,
            items = self.items.len(),
            "data source replaced"
        );

        if self.mask.is_some() {
            self.render();
        }
    }

    /// Hide the carousel and bind the current data source again once hidden.
    pub fn rebind_data_source(&mut self) {
        let Some(mask) = self.mask else {
            self.rebind_now();
            return;
        };
        let outcome = self.device.hide_element(VisibilityRequest {
            el: mask,
            skip_anim: !self.settings.fade(),
        });
        match outcome {
            AnimationOutcome::Completed => self.rebind_now(),
            AnimationOutcome::Pending(handle) => {
                self.pending.insert(handle, Completion::Rebind);
            }
        }
    }

    fn rebind_now(&mut self) {
        if let Some(data) = self.data.clone() {
            self.set_data_source(data);
        }
    }

    // ========== RENDERING ==========

    /// Build (or rebuild) the mask and content container and materialize
    /// items. The mask stays hidden until [`Carousel::layout_settled`].
    pub fn render(&mut self) -> ElementId {
        let mask = match self.mask {
            Some(mask) => {
                self.device.clear_element(mask);
                mask
            }
            None => {
                let mask = self.device.create_container(
                    &format!("{}{}", self.id, ids::MASK_SUFFIX),
                    &[classes::MASK.to_owned(), classes::NOT_SCROLLING.to_owned()],
                );
                self.mask = Some(mask);
                mask
            }
        };
        let content = match self.content {
            Some(content) => {
                self.device.clear_element(content);
                content
            }
            None => {
                let content = self
                    .device
                    .create_container(&self.id, &[classes::CAROUSEL.to_owned()]);
                self.content = Some(content);
                content
            }
        };
        self.in_document.clear();

        if self.viewport_mode != ViewportMode::Dom
            && self.items.auto_render_children()
        {
            for index in 0..self.items.len() {
                if let Some(item) = self.items.get_mut(index) {
                    let el = item.render(&mut self.device);
                    self.device.append_child(content, el);
                }
            }
        }
        self.device.append_child(mask, content);

        let _ = self.device.hide_element(VisibilityRequest {
            el: mask,
            skip_anim: true,
        });
        self.bind_pending = true;
        mask
    }

    /// Layout has settled: synthesize wrap clones or padding, position the
    /// strip at the active item, compute the initial window and show.
    ///
    /// Does nothing unless a bind is pending. Fails without touching the
    /// render tree when an item has no measurable width.
    pub fn layout_settled(&mut self) -> Result<()> {
        if !self.bind_pending {
            tracing::trace!(carousel = %self.id, "no bind pending");
            return Ok(());
        }
        let (Some(mask), Some(content)) = (self.mask, self.content) else {
            return Ok(());
        };

        if !self.items.is_empty() {
            let mask_width = self.device.element_size(mask).width;
            let plan = if self.wrap_mode == WrapMode::Visual {
                Some(self.plan_wrap_clones(mask_width)?)
            } else {
                None
            };

            self.discard_clones();
            self.node_offset = 0;
            self.in_document.clear();

            if self.viewport_mode == ViewportMode::None {
                for index in 0..self.items.len() {
                    if let Some(item) = self.items.get_mut(index) {
                        item.add_class(&mut self.device, classes::IN_VIEWPORT);
                    }
                }
            }

            self.prefix_clone_count = match plan {
                Some(plan) => self.apply_wrap_clones(content, &plan)?,
                None => self.attach_padding(content, mask_width),
            };

            if self.viewport_mode != ViewportMode::Dom
                && let Some(el) = self.active_element()
            {
                self.align_to(el, true);
            }

            self.refresh_viewport();
        }

        self.bind_pending = false;
        self.events.publish(&CarouselEvent::DataBound {
            carousel: self.id.clone(),
            item_count: self.items.len(),
        });

        if !self.keep_hidden {
            let _ = self.device.show_element(VisibilityRequest {
                el: mask,
                skip_anim: !self.settings.fade(),
            });
        }
        Ok(())
    }

    // ========== SELECTION ==========

    /// Give the carousel input focus; the active item gains the focus tag.
    pub fn focus(&mut self) {
        self.has_focus = true;
        if let Some(item) = self.active_index.and_then(|i| self.items.get_mut(i))
        {
            item.add_class(&mut self.device, classes::FOCUS);
        }
    }

    /// Drop input focus.
    pub fn blur(&mut self) {
        self.has_focus = false;
        if let Some(item) = self.active_index.and_then(|i| self.items.get_mut(i))
        {
            item.remove_class(&mut self.device, classes::FOCUS);
        }
    }

    /// Whether the carousel holds input focus.
    pub fn has_focus(&self) -> bool {
        self.has_focus
    }

    /// Focus the item at `index`. With `reposition`, snap the strip to it
    /// and refresh the viewport. Returns whether the item was focusable.
    pub fn set_active_child_index(
        &mut self,
        index: usize,
        reposition: bool,
    ) -> Result<bool> {
        let len = self.items.len();
        if index >= len {
            return Err(CarouselError::IndexOutOfBounds { index, len });
        }
        let moved = self.activate(index);

        if moved && reposition && self.content.is_some() {
            if self.viewport_mode != ViewportMode::Dom
                && let Some(el) = self.active_element()
            {
                self.align_to(el, true);
            }
            self.refresh_viewport();
        }
        Ok(moved)
    }

    /// Make `index` the active, selected item. Returns `false` when the
    /// item cannot take focus.
    pub(crate) fn activate(&mut self, index: usize) -> bool {
        if !self.items.is_focusable(index) {
            return false;
        }
        let previous = self.active_index;
        if let Some(old) = previous.and_then(|i| self.items.get_mut(i)) {
            old.remove_class(&mut self.device, classes::ACTIVE);
            old.remove_class(&mut self.device, classes::FOCUS);
        }
        let has_focus = self.has_focus;
        let Some(item) = self.items.get_mut(index) else {
            return false;
        };
        item.add_class(&mut self.device, classes::ACTIVE);
        if has_focus {
            item.add_class(&mut self.device, classes::FOCUS);
        }
        let item_id = item.id().to_owned();

        self.active_index = Some(index);
        self.selected_index = index;

        if previous != Some(index) {
            self.events.publish(&CarouselEvent::SelectedItemChange {
                carousel: self.id.clone(),
                item_id,
                index,
            });
        }
        true
    }

    /// Move one focusable step left. Returns whether a move started.
    pub fn select_previous(&mut self) -> bool {
        self.move_selection(Direction::Left)
    }

    /// Move one focusable step right. Returns whether a move started.
    pub fn select_next(&mut self) -> bool {
        self.move_selection(Direction::Right)
    }

    /// Route a key press. Arrow keys are swallowed while a scroll is in
    /// flight; left/right are consumed when they move the selection.
    pub fn on_key_down(&mut self, key: Key) -> KeyDisposition {
        if self.scroll_handle.is_some() && key.is_arrow() {
            tracing::trace!(carousel = %self.id, ?key, "key blocked while scrolling");
            return KeyDisposition::Consumed;
        }
        let moved = match key {
            Key::Left => self.select_previous(),
            Key::Right => self.select_next(),
            _ => false,
        };
        if moved {
            KeyDisposition::Consumed
        } else {
            KeyDisposition::Ignored
        }
    }

    // ========== ANIMATION ==========

    /// Report that a device animation finished. Returns whether it belonged
    /// to this carousel.
    pub fn on_animation_complete(&mut self, handle: AnimationHandle) -> bool {
        match self.pending.remove(&handle) {
            Some(Completion::Scroll(pending)) => {
                self.finish_move(pending);
                true
            }
            Some(Completion::Rebind) => {
                self.rebind_now();
                true
            }
            None => false,
        }
    }

    /// Stop an in-flight selection scroll without committing it.
    pub(crate) fn cancel_scroll(&mut self) {
        if let Some(handle) = self.scroll_handle.take() {
            tracing::debug!(
                carousel = %self.id,
                ?handle,
                "cancelling in-flight scroll"
            );
            self.device.stop_animation(handle);
            self.pending.remove(&handle);
        }
    }

    pub(crate) fn animation_skipped(&self) -> bool {
        self.animation_overridden || !self.settings.animate()
    }

    pub(crate) fn active_element(&self) -> Option<ElementId> {
        self.active_index.and_then(|i| self.items.element_of(i))
    }

    pub(crate) fn bounds_of(&self, el: ElementId) -> Bounds {
        Bounds {
            left: self.device.element_offset(el).left,
            width: self.device.element_size(el).width,
        }
    }

    /// Scroll the mask so `target` sits at the configured alignment.
    pub(crate) fn scroll_to_bounds(
        &mut self,
        target: Bounds,
        skip_anim: bool,
    ) -> AnimationOutcome {
        let Some(mask) = self.mask else {
            return AnimationOutcome::Completed;
        };
        let mask_width = self.device.element_size(mask).width;
        let to_left = alignment::target_left(
            target,
            mask_width,
            self.alignment,
            self.alignment_offset,
        );
        self.device.scroll_element_to(ScrollRequest {
            el: mask,
            to_left,
            fps: self.animation.fps,
            duration: self.animation.duration,
            easing: self.animation.easing.clone(),
            skip_anim,
        })
    }

    pub(crate) fn align_to(
        &mut self,
        el: ElementId,
        skip_anim: bool,
    ) -> AnimationOutcome {
        let bounds = self.bounds_of(el);
        self.scroll_to_bounds(bounds, skip_anim)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::MockDevice;

    fn carousel() -> Carousel<MockDevice> {
        // No expectations: any device call panics.
        Carousel::new("menu", MockDevice::new(), &DeviceConfig::default())
    }

    #[test]
    fn defaults_match_widget_defaults() {
        let c = carousel();
        assert_eq!(c.wrap_mode(), WrapMode::Visual);
        assert_eq!(c.viewport_mode(), ViewportMode::None);
        assert_eq!(c.alignment(), Alignment::Center);
        assert_eq!(c.widget_animation_fps(), 25);
        assert_eq!(c.widget_animation_duration(), Duration::from_millis(840));
        assert_eq!(c.widget_animation_easing(), "easeFromTo");
        assert_eq!(c.bind_delay(), Duration::from_millis(100));
        assert!(!c.is_scrolling());
    }

    #[test]
    fn dom_viewport_rejected_under_visual_wrap() {
        let mut c = carousel();
        assert_eq!(
            c.set_viewport_mode(ViewportMode::Dom, 2),
            Err(CarouselError::ViewportConflictsWithVisualWrap)
        );
        assert_eq!(c.viewport_mode(), ViewportMode::None);
        assert!(c.items().auto_render_children());
    }

    #[test]
    fn visual_wrap_rejected_under_dom_viewport() {
        let mut c = carousel();
        c.set_wrap_mode(WrapMode::None).unwrap();
        c.set_viewport_mode(ViewportMode::Dom, 2).unwrap();
        assert!(!c.items().auto_render_children());

        assert_eq!(
            c.set_wrap_mode(WrapMode::Visual),
            Err(CarouselError::ViewportConflictsWithVisualWrap)
        );
        assert_eq!(c.wrap_mode(), WrapMode::None);
        c.set_wrap_mode(WrapMode::NavigationOnly).unwrap();
    }

    #[test]
    fn dom_viewport_needs_item_count() {
        let mut c = carousel();
        c.set_wrap_mode(WrapMode::NavigationOnly).unwrap();
        assert_eq!(
            c.set_viewport_mode(ViewportMode::Dom, 0),
            Err(CarouselError::MissingViewportItemCount)
        );
        assert_eq!(c.viewport_mode(), ViewportMode::None);
    }

    #[test]
    fn empty_carousel_navigation_is_a_silent_no_op() {
        let mut c = carousel();
        assert!(!c.select_next());
        assert!(!c.select_previous());
        assert_eq!(c.on_key_down(Key::Right), KeyDisposition::Ignored);
        assert_eq!(c.layout_settled(), Ok(()));
    }

    #[test]
    fn out_of_range_selection_is_an_error() {
        let mut c = carousel();
        assert_eq!(
            c.set_active_child_index(0, false),
            Err(CarouselError::IndexOutOfBounds { index: 0, len: 0 })
        );
    }

    #[test]
    fn unrendered_items_activate_without_device_calls() {
        let mut c = carousel();
        c.append_item(ItemTemplate::new("a").unfocusable()).unwrap();
        c.append_item(ItemTemplate::new("b")).unwrap();
        assert_eq!(c.active_index(), Some(1));
        assert_eq!(c.selected_index(), 1);
        assert_eq!(c.set_active_child_index(0, true), Ok(false));
        assert_eq!(c.selected_index(), 1);
    }

    #[test]
    fn navigation_while_scrolling_leaves_device_alone() {
        let mut c = carousel();
        for id in ["a", "b", "c", "d", "e"] {
            c.append_item(ItemTemplate::new(id)).unwrap();
        }
        c.set_active_child_index(2, false).unwrap();
        c.scroll_handle = Some(AnimationHandle(3));

        assert!(!c.select_next());
        assert!(!c.select_previous());
        for key in [Key::Left, Key::Right, Key::Up, Key::Down] {
            assert_eq!(c.on_key_down(key), KeyDisposition::Consumed);
        }
        assert_eq!(c.selected_index(), 2);
        assert!(c.is_scrolling());
    }

    #[test]
    fn unknown_animation_handles_are_ignored() {
        let mut c = carousel();
        assert!(!c.on_animation_complete(AnimationHandle(7)));
    }
}
