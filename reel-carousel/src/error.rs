use thiserror::Error;

/// Failures surfaced by carousel configuration, selection and binding.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CarouselError {
    /// DOM viewport mode and visual wrap mode were combined.
    #[error("DOM viewport mode is not supported together with visual wrap mode")]
    ViewportConflictsWithVisualWrap,

    /// DOM viewport mode was requested with a zero window.
    #[error("DOM viewport mode requires a positive viewport item count")]
    MissingViewportItemCount,

    /// A selection index past the end of the list.
    #[error("index {index} out of bounds: carousel contains {len} items")]
    IndexOutOfBounds {
        /// Requested index.
        index: usize,
        /// Number of items.
        len: usize,
    },

    /// Clone synthesis met an item that measures no width.
    #[error("item {index} has no measurable width, cannot synthesize wrap clones")]
    ZeroWidthItem {
        /// Logical index of the item.
        index: usize,
    },

    /// An operation needed an element the item does not have yet.
    #[error("item {index} has not been rendered")]
    ItemNotRendered {
        /// Logical index of the item.
        index: usize,
    },
}

/// Result alias for carousel operations.
pub type Result<T> = std::result::Result<T, CarouselError>;
