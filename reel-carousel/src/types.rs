//! Shared types for the carousel engine

use std::fmt;

/// Carousel boundary behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WrapMode {
    /// Navigation stops at the first and last item.
    None,
    /// Navigation wraps, the strip scrolls back across the whole list.
    NavigationOnly,
    /// Navigation wraps and the strip continues seamlessly through clones.
    #[default]
    Visual,
}

impl WrapMode {
    /// Whether navigation crosses the ends of the list.
    pub fn wraps_navigation(self) -> bool {
        !matches!(self, WrapMode::None)
    }
}

/// Strategy for deciding which items exist in the render tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewportMode {
    /// Everything is materialized and permanently tagged in-viewport.
    #[default]
    None,
    /// Everything is materialized, items are tagged by geometric proximity.
    Classes,
    /// Only a window around the selection is attached.
    Dom,
}

/// Where the active item rests inside the mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    /// Centre of the mask.
    #[default]
    Center,
    /// Left edge of the mask.
    Left,
    /// Right edge of the mask.
    Right,
}

/// Direction of travel for a navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards lower indices.
    Left,
    /// Towards higher indices.
    Right,
}

/// Keys the carousel reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
    /// Anything else.
    Other,
}

impl Key {
    /// Whether the key is one of the four arrows.
    pub fn is_arrow(self) -> bool {
        !matches!(self, Key::Other)
    }
}

/// Whether a key event was consumed (propagation stopped) or left for ancestors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDisposition {
    /// Propagation stops here.
    Consumed,
    /// Left for ancestors.
    Ignored,
}

/// Opaque handle to an element owned by the rendering device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u64);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "el#{}", self.0)
    }
}

/// Opaque handle to an in-flight device animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnimationHandle(pub u64);

/// Position of an element relative to its parent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    /// Horizontal position.
    pub left: f32,
    /// Vertical position.
    pub top: f32,
}

/// Measured element size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    /// Horizontal extent.
    pub width: f32,
    /// Vertical extent.
    pub height: f32,
}

impl Size {
    /// Size from its two extents.
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Position and size of an element relative to its container.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    /// Left edge.
    pub left: f32,
    /// Horizontal extent.
    pub width: f32,
}

impl Bounds {
    /// Right edge.
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    /// Horizontal midpoint.
    pub fn center(&self) -> f32 {
        self.left + self.width / 2.0
    }
}

/// Geometric relation of an item to the visible mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportClass {
    /// Overlaps the visible band.
    InViewport,
    /// Overlaps the near band only.
    NearViewport,
    /// Overlaps neither band.
    Outside,
}
