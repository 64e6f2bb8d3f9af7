//! Rendering device capability
//!
//! The carousel never draws anything itself. Everything it needs from the
//! platform (element creation, tree edits, geometry, class tags and
//! time-boxed animations) goes through this trait, so the engine runs the
//! same against a browser bridge, a native scene graph or the in-memory
//! [`crate::headless::HeadlessDevice`].

use std::time::Duration;

use crate::types::{AnimationHandle, ElementId, Offset, Size};

/// Horizontal scroll of a container to an absolute offset.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollRequest {
    /// Container to scroll.
    pub el: ElementId,
    /// Destination scroll offset.
    pub to_left: f32,
    /// Frames per second.
    pub fps: u32,
    /// Animation length.
    pub duration: Duration,
    /// Device easing id.
    pub easing: String,
    /// Jump straight to the destination without animating.
    pub skip_anim: bool,
}

/// Show or hide an element, optionally fading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibilityRequest {
    /// Element to show or hide.
    pub el: ElementId,
    /// Switch instantly instead of fading.
    pub skip_anim: bool,
}

/// Result of asking the device to run an animation.
///
/// Devices complete skipped animations synchronously and report
/// `Completed`; the caller then runs its completion step inline. Anything
/// else returns a handle and the host reports completion later through
/// [`crate::Carousel::on_animation_complete`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationOutcome {
    /// Finished synchronously.
    Completed,
    /// Still running; completion is reported later.
    Pending(AnimationHandle),
}

/// Everything the carousel needs from the platform.
#[cfg_attr(test, mockall::automock)]
pub trait Device {
    /// Create a detached container element.
    fn create_container(&mut self, id: &str, classes: &[String]) -> ElementId;

    /// Deep-copy `source`. The copy is detached, carries `class` in addition
    /// to the source's classes and has `id_suffix` appended to its id.
    fn clone_element(
        &mut self,
        source: ElementId,
        class: &str,
        id_suffix: &str,
    ) -> ElementId;

    /// Release an element for good. Only called on detached elements.
    fn destroy_element(&mut self, el: ElementId);

    /// Detach `el` from its parent, keeping it alive for reuse.
    fn remove_element(&mut self, el: ElementId);

    /// Detach every child of `el`.
    fn clear_element(&mut self, el: ElementId);

    /// Attach `child` as the last child of `parent`.
    fn append_child(&mut self, parent: ElementId, child: ElementId);

    /// Attach `child` as the first child of `parent`.
    fn prepend_child(&mut self, parent: ElementId, child: ElementId);

    /// Insert `child` at `index` among `parent`'s children, appending when
    /// `index` is past the end.
    fn insert_child_at(
        &mut self,
        parent: ElementId,
        child: ElementId,
        index: usize,
    );

    /// Parent of an attached element.
    fn parent_of(&self, el: ElementId) -> Option<ElementId>;

    /// Children in render order.
    fn children_of(&self, el: ElementId) -> Vec<ElementId>;

    /// Sibling after `el`.
    fn next_sibling(&self, el: ElementId) -> Option<ElementId>;

    /// Sibling before `el`.
    fn previous_sibling(&self, el: ElementId) -> Option<ElementId>;

    /// Position relative to the parent. Detached elements report the origin.
    fn element_offset(&self, el: ElementId) -> Offset;

    /// Measured size.
    fn element_size(&self, el: ElementId) -> Size;

    /// Fix an element's size.
    fn set_element_size(&mut self, el: ElementId, size: Size);

    /// Add a class tag.
    fn add_class(&mut self, el: ElementId, class: &str);

    /// Remove `class` from `el`, and from all descendants when `deep`.
    fn remove_class(&mut self, el: ElementId, class: &str, deep: bool);

    /// Whether `el` carries `class`.
    fn has_class(&self, el: ElementId, class: &str) -> bool;

    /// Scroll a container horizontally.
    fn scroll_element_to(&mut self, request: ScrollRequest) -> AnimationOutcome;

    /// Cancel an animation. Its completion is never reported.
    fn stop_animation(&mut self, handle: AnimationHandle);

    /// Reveal an element.
    fn show_element(&mut self, request: VisibilityRequest) -> AnimationOutcome;

    /// Hide an element.
    fn hide_element(&mut self, request: VisibilityRequest) -> AnimationOutcome;
}
