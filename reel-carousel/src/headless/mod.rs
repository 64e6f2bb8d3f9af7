//! In-memory reference device
//!
//! [`HeadlessDevice`] keeps an element tree with class-driven sizes and lays
//! children out left to right with no gaps. Animations do not run on a clock:
//! the host advances them explicitly and forwards finished handles to
//! [`Carousel::on_animation_complete`].

mod animator;

pub use animator::{Easing, ScrollAnimator};

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::time::Duration;

use crate::carousel::Carousel;
use crate::device::{AnimationOutcome, Device, ScrollRequest, VisibilityRequest};
use crate::items::ItemCollection;
use crate::types::{AnimationHandle, ElementId, Offset, Size};

/// Length of an animated show or hide.
pub const FADE_DURATION: Duration = Duration::from_millis(250);

#[derive(Debug, Clone)]
struct Node {
    id: String,
    classes: BTreeSet<String>,
    size: Option<Size>,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
    visible: bool,
    scroll_left: f32,
}

impl Node {
    fn new(id: &str) -> Self {
        Self {
            id: id.to_owned(),
            classes: BTreeSet::new(),
            size: None,
            parent: None,
            children: Vec::new(),
            visible: true,
            scroll_left: 0.0,
        }
    }
}

#[derive(Debug, Clone)]
enum Running {
    Scroll { el: ElementId, animator: ScrollAnimator },
    Fade { el: ElementId, show: bool, remaining: Duration },
}

/// In-memory [`Device`]: an element arena laid out left to right with
/// host-driven animations.
#[derive(Debug, Default)]
pub struct HeadlessDevice {
    nodes: HashMap<ElementId, Node>,
    size_rules: Vec<(String, Size)>,
    running: BTreeMap<u64, Running>,
    scroll_log: Vec<ScrollRequest>,
    next_element: u64,
    next_handle: u64,
}

impl HeadlessDevice {
    /// Empty device with no size rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Elements carrying `class` measure `size` unless sized explicitly.
    /// Later rules win over earlier ones.
    pub fn size_class(mut self, class: impl Into<String>, size: Size) -> Self {
        self.size_rules.push((class.into(), size));
        self
    }

    /// Id an element was created with.
    pub fn element_id(&self, el: ElementId) -> Option<&str> {
        self.nodes.get(&el).map(|node| node.id.as_str())
    }

    /// First live element with the given id, lowest handle first.
    pub fn find_by_id(&self, id: &str) -> Option<ElementId> {
        self.nodes
            .iter()
            .filter(|(_, node)| node.id == id)
            .map(|(el, _)| *el)
            .min()
    }

    /// Whether `el` has not been destroyed.
    pub fn exists(&self, el: ElementId) -> bool {
        self.nodes.contains_key(&el)
    }

    /// Classes on `el`, sorted.
    pub fn classes_of(&self, el: ElementId) -> Vec<String> {
        self.nodes
            .get(&el)
            .map(|node| node.classes.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Whether `el` is shown.
    pub fn is_visible(&self, el: ElementId) -> bool {
        self.nodes.get(&el).is_some_and(|node| node.visible)
    }

    /// Current horizontal scroll of `el`.
    pub fn scroll_left(&self, el: ElementId) -> f32 {
        self.nodes.get(&el).map_or(0.0, |node| node.scroll_left)
    }

    /// Every scroll requested so far, oldest first.
    pub fn scroll_requests(&self) -> &[ScrollRequest] {
        &self.scroll_log
    }

    /// Animations still running.
    pub fn pending_animations(&self) -> usize {
        self.running.len()
    }

    /// Advance running animations by `dt`, returning the handles that
    /// finished in handle order.
    pub fn advance(&mut self, dt: Duration) -> Vec<AnimationHandle> {
        let mut finished = Vec::new();
        for (&handle, running) in self.running.iter_mut() {
            let done = match running {
                Running::Scroll { el, animator } => {
                    if let Some(left) = animator.tick(dt)
                        && let Some(node) = self.nodes.get_mut(&*el)
                    {
                        node.scroll_left = left;
                    }
                    !animator.is_active()
                }
                Running::Fade { el, show, remaining } => {
                    *remaining = remaining.saturating_sub(dt);
                    if remaining.is_zero() {
                        if let Some(node) = self.nodes.get_mut(&*el) {
                            node.visible = *show;
                        }
                        true
                    } else {
                        false
                    }
                }
            };
            if done {
                finished.push(handle);
            }
        }
        for handle in &finished {
            self.running.remove(handle);
        }
        finished.into_iter().map(AnimationHandle).collect()
    }

    /// Run every animation to its end.
    pub fn finish_all(&mut self) -> Vec<AnimationHandle> {
        self.advance(Duration::MAX)
    }

    fn next_handle(&mut self) -> AnimationHandle {
        self.next_handle += 1;
        AnimationHandle(self.next_handle)
    }

    fn alloc(&mut self, node: Node) -> ElementId {
        self.next_element += 1;
        let el = ElementId(self.next_element);
        self.nodes.insert(el, node);
        el
    }

    fn detach(&mut self, el: ElementId) {
        let Some(parent) = self.nodes.get_mut(&el).and_then(|n| n.parent.take())
        else {
            return;
        };
        if let Some(node) = self.nodes.get_mut(&parent) {
            node.children.retain(|child| *child != el);
        }
    }

    fn attach(&mut self, parent: ElementId, child: ElementId, index: usize) {
        if parent == child || !self.nodes.contains_key(&parent) {
            return;
        }
        self.detach(child);
        let Some(node) = self.nodes.get_mut(&child) else {
            return;
        };
        node.parent = Some(parent);
        if let Some(parent_node) = self.nodes.get_mut(&parent) {
            let index = index.min(parent_node.children.len());
            parent_node.children.insert(index, child);
        }
    }

    fn deep_copy(&mut self, source: ElementId) -> Option<ElementId> {
        let node = self.nodes.get(&source)?.clone();
        let children = node.children.clone();
        let copy = self.alloc(Node {
            parent: None,
            children: Vec::new(),
            ..node
        });
        for child in children {
            if let Some(child_copy) = self.deep_copy(child) {
                self.attach(copy, child_copy, usize::MAX);
            }
        }
        Some(copy)
    }

    fn sibling(&self, el: ElementId, forward: bool) -> Option<ElementId> {
        let parent = self.nodes.get(&el)?.parent?;
        let siblings = &self.nodes.get(&parent)?.children;
        let position = siblings.iter().position(|child| *child == el)?;
        if forward {
            siblings.get(position + 1).copied()
        } else {
            position.checked_sub(1).and_then(|p| siblings.get(p).copied())
        }
    }

    fn start_fade(&mut self, request: VisibilityRequest, show: bool) -> AnimationOutcome {
        let Some(node) = self.nodes.get_mut(&request.el) else {
            return AnimationOutcome::Completed;
        };
        if request.skip_anim {
            node.visible = show;
            return AnimationOutcome::Completed;
        }
        if show {
            node.visible = true;
        }
        let handle = self.next_handle();
        self.running.insert(
            handle.0,
            Running::Fade {
                el: request.el,
                show,
                remaining: FADE_DURATION,
            },
        );
        AnimationOutcome::Pending(handle)
    }
}

impl Device for HeadlessDevice {
    fn create_container(&mut self, id: &str, classes: &[String]) -> ElementId {
        let mut node = Node::new(id);
        node.classes.extend(classes.iter().cloned());
        self.alloc(node)
    }

    fn clone_element(
        &mut self,
        source: ElementId,
        class: &str,
        id_suffix: &str,
    ) -> ElementId {
        let Some(copy) = self.deep_copy(source) else {
            return self.create_container(id_suffix, &[class.to_owned()]);
        };
        if let Some(node) = self.nodes.get_mut(&copy) {
            node.id.push_str(id_suffix);
            node.classes.insert(class.to_owned());
        }
        copy
    }

    fn destroy_element(&mut self, el: ElementId) {
        self.detach(el);
        let mut stack = vec![el];
        while let Some(el) = stack.pop() {
            if let Some(node) = self.nodes.remove(&el) {
                stack.extend(node.children);
            }
        }
    }

    fn remove_element(&mut self, el: ElementId) {
        self.detach(el);
    }

    fn clear_element(&mut self, el: ElementId) {
        for child in self.children_of(el) {
            self.detach(child);
        }
    }

    fn append_child(&mut self, parent: ElementId, child: ElementId) {
        self.attach(parent, child, usize::MAX);
    }

    fn prepend_child(&mut self, parent: ElementId, child: ElementId) {
        self.attach(parent, child, 0);
    }

    fn insert_child_at(&mut self, parent: ElementId, child: ElementId, index: usize) {
        self.attach(parent, child, index);
    }

    fn parent_of(&self, el: ElementId) -> Option<ElementId> {
        self.nodes.get(&el).and_then(|node| node.parent)
    }

    fn children_of(&self, el: ElementId) -> Vec<ElementId> {
        self.nodes
            .get(&el)
            .map(|node| node.children.clone())
            .unwrap_or_default()
    }

    fn next_sibling(&self, el: ElementId) -> Option<ElementId> {
        self.sibling(el, true)
    }

    fn previous_sibling(&self, el: ElementId) -> Option<ElementId> {
        self.sibling(el, false)
    }

    fn element_offset(&self, el: ElementId) -> Offset {
        let Some(parent) = self.parent_of(el) else {
            return Offset::default();
        };
        let left = self
            .children_of(parent)
            .into_iter()
            .take_while(|child| *child != el)
            .map(|child| self.element_size(child).width)
            .sum();
        Offset { left, top: 0.0 }
    }

    fn element_size(&self, el: ElementId) -> Size {
        let Some(node) = self.nodes.get(&el) else {
            return Size::default();
        };
        node.size.unwrap_or_else(|| {
            self.size_rules
                .iter()
                .rev()
                .find(|(class, _)| node.classes.contains(class))
                .map(|(_, size)| *size)
                .unwrap_or_default()
        })
    }

    fn set_element_size(&mut self, el: ElementId, size: Size) {
        if let Some(node) = self.nodes.get_mut(&el) {
            node.size = Some(size);
        }
    }

    fn add_class(&mut self, el: ElementId, class: &str) {
        if let Some(node) = self.nodes.get_mut(&el) {
            node.classes.insert(class.to_owned());
        }
    }

    fn remove_class(&mut self, el: ElementId, class: &str, deep: bool) {
        let mut stack = vec![el];
        while let Some(el) = stack.pop() {
            if let Some(node) = self.nodes.get_mut(&el) {
                node.classes.remove(class);
                if deep {
                    stack.extend(node.children.iter().copied());
                }
            }
        }
    }

    fn has_class(&self, el: ElementId, class: &str) -> bool {
        self.nodes
            .get(&el)
            .is_some_and(|node| node.classes.contains(class))
    }

    fn scroll_element_to(&mut self, request: ScrollRequest) -> AnimationOutcome {
        self.scroll_log.push(request.clone());
        let Some(node) = self.nodes.get_mut(&request.el) else {
            return AnimationOutcome::Completed;
        };
        if request.skip_anim || request.duration.is_zero() {
            node.scroll_left = request.to_left;
            return AnimationOutcome::Completed;
        }
        let mut animator = ScrollAnimator::new();
        animator.start(
            node.scroll_left,
            request.to_left,
            request.duration,
            request.fps,
            Easing::from_id(&request.easing),
        );
        let handle = self.next_handle();
        self.running.insert(
            handle.0,
            Running::Scroll {
                el: request.el,
                animator,
            },
        );
        AnimationOutcome::Pending(handle)
    }

    fn stop_animation(&mut self, handle: AnimationHandle) {
        self.running.remove(&handle.0);
    }

    fn show_element(&mut self, request: VisibilityRequest) -> AnimationOutcome {
        self.start_fade(request, true)
    }

    fn hide_element(&mut self, request: VisibilityRequest) -> AnimationOutcome {
        self.start_fade(request, false)
    }
}

impl<L: ItemCollection> Carousel<HeadlessDevice, L> {
    /// Advance device animations by `dt` and deliver completions. Returns
    /// how many completions were delivered.
    pub fn advance_animations(&mut self, dt: Duration) -> usize {
        let finished = self.device.advance(dt);
        let count = finished.len();
        for handle in finished {
            self.on_animation_complete(handle);
        }
        count
    }

    /// Run every pending animation to its end and deliver completions,
    /// including any started by those completions.
    pub fn finish_animations(&mut self) {
        while self.device.pending_animations() > 0 {
            for handle in self.device.finish_all() {
                self.on_animation_complete(handle);
            }
        }
    }

    /// Ids of the content strip's children in render order.
    pub fn rendered_ids(&self) -> Vec<String> {
        let Some(content) = self.content else {
            return Vec::new();
        };
        self.device
            .children_of(content)
            .into_iter()
            .filter_map(|el| self.device.element_id(el).map(str::to_owned))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn device() -> HeadlessDevice {
        HeadlessDevice::new().size_class("tile", Size::new(100.0, 50.0))
    }

    fn tile(device: &mut HeadlessDevice, id: &str) -> ElementId {
        device.create_container(id, &["tile".to_owned()])
    }

    #[test]
    fn children_lay_out_left_to_right() {
        let mut device = device();
        let strip = device.create_container("strip", &[]);
        let a = tile(&mut device, "a");
        let b = tile(&mut device, "b");
        let c = tile(&mut device, "c");
        device.append_child(strip, b);
        device.append_child(strip, c);
        device.prepend_child(strip, a);

        assert_eq!(device.element_offset(a).left, 0.0);
        assert_eq!(device.element_offset(c).left, 200.0);
        assert_eq!(device.next_sibling(a), Some(b));
        assert_eq!(device.previous_sibling(a), None);

        device.remove_element(b);
        assert_eq!(device.element_offset(c).left, 100.0);
        assert_eq!(device.element_offset(b), Offset::default());
        assert!(device.exists(b));
    }

    #[test]
    fn insert_moves_between_parents() {
        let mut device = device();
        let left = device.create_container("left", &[]);
        let right = device.create_container("right", &[]);
        let a = tile(&mut device, "a");
        let b = tile(&mut device, "b");
        device.append_child(left, a);
        device.append_child(right, b);

        device.insert_child_at(right, a, 0);
        assert!(device.children_of(left).is_empty());
        assert_eq!(device.children_of(right), vec![a, b]);
        assert_eq!(device.parent_of(a), Some(right));
    }

    #[test]
    fn clones_are_detached_deep_copies() {
        let mut device = device();
        let strip = device.create_container("strip", &[]);
        let a = tile(&mut device, "a");
        let label = device.create_container("label", &["focus".to_owned()]);
        device.append_child(a, label);
        device.append_child(strip, a);

        let copy = device.clone_element(a, "clone", "_clone");
        assert_eq!(device.element_id(copy), Some("a_clone"));
        assert!(device.has_class(copy, "clone"));
        assert!(device.has_class(copy, "tile"));
        assert_eq!(device.parent_of(copy), None);

        let copied_label = device.children_of(copy)[0];
        assert_ne!(copied_label, label);
        device.remove_class(copy, "focus", true);
        assert!(!device.has_class(copied_label, "focus"));
        assert!(device.has_class(label, "focus"));
    }

    #[test]
    fn explicit_size_beats_class_rule() {
        let mut device = device().size_class("wide", Size::new(300.0, 50.0));
        let a = device.create_container("a", &["tile".to_owned(), "wide".to_owned()]);
        assert_eq!(device.element_size(a).width, 300.0);
        device.set_element_size(a, Size::new(10.0, 10.0));
        assert_eq!(device.element_size(a).width, 10.0);
    }

    #[test]
    fn scrolls_run_until_advanced() {
        let mut device = device();
        let mask = device.create_container("mask", &[]);
        let outcome = device.scroll_element_to(ScrollRequest {
            el: mask,
            to_left: 200.0,
            fps: 25,
            duration: Duration::from_millis(840),
            easing: "easeFromTo".into(),
            skip_anim: false,
        });
        let AnimationOutcome::Pending(handle) = outcome else {
            panic!("expected a pending scroll, got {outcome:?}");
        };
        assert_eq!(device.scroll_left(mask), 0.0);

        assert!(device.advance(Duration::from_millis(420)).is_empty());
        let midway = device.scroll_left(mask);
        assert!(midway > 0.0 && midway < 200.0);

        assert_eq!(device.advance(Duration::from_millis(420)), vec![handle]);
        assert_eq!(device.scroll_left(mask), 200.0);
        assert_eq!(device.pending_animations(), 0);
    }

    #[test]
    fn skipped_scroll_completes_inline() {
        let mut device = device();
        let mask = device.create_container("mask", &[]);
        let outcome = device.scroll_element_to(ScrollRequest {
            el: mask,
            to_left: 75.0,
            fps: 25,
            duration: Duration::from_millis(840),
            easing: "easeFromTo".into(),
            skip_anim: true,
        });
        assert_eq!(outcome, AnimationOutcome::Completed);
        assert_eq!(device.scroll_left(mask), 75.0);
        assert_eq!(device.scroll_requests().len(), 1);
    }

    #[test]
    fn stopped_animation_never_finishes() {
        let mut device = device();
        let mask = device.create_container("mask", &[]);
        let outcome = device.hide_element(VisibilityRequest {
            el: mask,
            skip_anim: false,
        });
        let AnimationOutcome::Pending(handle) = outcome else {
            panic!("expected a pending fade, got {outcome:?}");
        };
        device.stop_animation(handle);
        assert!(device.finish_all().is_empty());
        assert!(device.is_visible(mask));
    }

    #[test]
    fn destroy_removes_subtree() {
        let mut device = device();
        let a = tile(&mut device, "a");
        let inner = device.create_container("inner", &[]);
        device.append_child(a, inner);
        device.destroy_element(a);
        assert!(!device.exists(a));
        assert!(!device.exists(inner));
    }
}
