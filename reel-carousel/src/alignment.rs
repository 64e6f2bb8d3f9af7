//! Scroll destination for a target element.

use crate::types::{Alignment, Bounds};

/// Mask scroll offset that places `element` according to `alignment`,
/// shifted by `offset`.
pub fn target_left(
    element: Bounds,
    mask_width: f32,
    alignment: Alignment,
    offset: f32,
) -> f32 {
    match alignment {
        Alignment::Center => {
            element.left - (mask_width - element.width) / 2.0 + offset
        }
        Alignment::Left => element.left + offset,
        Alignment::Right => element.left - (mask_width - element.width) - offset,
    }
}
