//! Carousel constants
//!
//! Defaults for animation, alignment and the wrap engine. Tuning should
//! happen here so every carousel updates consistently.

/// Scroll animation defaults.
pub mod animation {
    /// Frames per second.
    pub const FPS: u32 = 25;
    /// Scroll duration in milliseconds.
    pub const DURATION_MS: u64 = 840;
    /// Device easing id.
    pub const EASING: &str = "easeFromTo";
}

/// Navigation rules.
pub mod navigation {
    /// Wrapping is only allowed when the list has strictly more items than this.
    pub const MIN_ITEMS_EXCLUSIVE_FOR_WRAP: usize = 3;
    /// Some animation backends never report completion for a scroll to 0.
    pub const MIN_SCROLL_TARGET_LEFT: f32 = 1.0;
}

/// Viewport classification.
pub mod viewport {
    /// Half-width of the near-viewport band, in mask widths, around the centre.
    pub const NEAR_BAND_MASK_WIDTHS: f32 = 1.5;
}

/// Class names applied to elements and items.
pub mod classes {
    /// Clipping mask.
    pub const MASK: &str = "horizontallistmask";
    /// Mask while no scroll is running.
    pub const NOT_SCROLLING: &str = "notscrolling";
    /// Scrolled strip.
    pub const CAROUSEL: &str = "horizontalcarousel";
    /// Item inside the visible band.
    pub const IN_VIEWPORT: &str = "inviewport";
    /// Item inside the near band.
    pub const NEAR_VIEWPORT: &str = "nearviewport";
    /// Active item.
    pub const ACTIVE: &str = "active";
    /// Active item while the carousel has focus.
    pub const FOCUS: &str = "focus";
    /// Focus marker set by button widgets.
    pub const BUTTON_FOCUSSED: &str = "buttonFocussed";
    /// Wrap clone.
    pub const CLONE: &str = "clone";
    /// Padding element.
    pub const PADDING: &str = "viewportPadding";
    /// Left padding element.
    pub const PADDING_LEFT: &str = "viewportPaddingLeft";
    /// Right padding element.
    pub const PADDING_RIGHT: &str = "viewportPaddingRight";
}

/// Suffixes used when deriving element ids.
pub mod ids {
    /// Appended to the carousel id for the mask.
    pub const MASK_SUFFIX: &str = "_mask";
    /// Appended to a source id for its clone.
    pub const CLONE_SUFFIX: &str = "_clone";
    /// Appended to the carousel id for the left padding.
    pub const PADDING_LEFT_SUFFIX: &str = "PaddingLeft";
    /// Appended to the carousel id for the right padding.
    pub const PADDING_RIGHT_SUFFIX: &str = "PaddingRight";
}
