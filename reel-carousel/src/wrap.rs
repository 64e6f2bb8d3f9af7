//! Wrap engine
//!
//! On bind, a visually wrapping carousel gets clones of its boundary items
//! on both sides so scrolling past either end shows a seamless continuation.
//! Non-visual wrap modes get a mask-wide padding element on each side
//! instead.

use crate::carousel::Carousel;
use crate::constants::{classes, ids};
use crate::device::Device;
use crate::error::{CarouselError, Result};
use crate::items::ItemCollection;
use crate::types::{ElementId, Size};

/// Logical indices to clone, in the order the clones are added.
///
/// Suffix clones are appended starting at the first item; prefix clones
/// are prepended starting at the last item, so both read in natural order
/// once placed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClonePlan {
    /// Items cloned after the last real item.
    pub suffix: Vec<usize>,
    /// Items cloned before the first real item, nearest first.
    pub prefix: Vec<usize>,
}

/// Width the suffix clones must cover for a mask `mask_width` wide.
pub fn base_threshold(mask_width: f32, multi_width_items: bool) -> f32 {
    if multi_width_items {
        mask_width
    } else {
        (mask_width / 2.0).ceil()
    }
}

/// Work out which items to clone given every item's width.
///
/// Prefix clones cover the base threshold plus the first item's width.
/// Fails on the first item without a positive width.
pub fn plan_clones(
    widths: &[f32],
    mask_width: f32,
    multi_width_items: bool,
) -> Result<ClonePlan> {
    if let Some(index) = widths.iter().position(|&w| w.is_nan() || w <= 0.0) {
        return Err(CarouselError::ZeroWidthItem { index });
    }
    let Some(&first) = widths.first() else {
        return Ok(ClonePlan::default());
    };
    let base = base_threshold(mask_width, multi_width_items);
    let len = widths.len();

    let mut suffix = Vec::new();
    let mut covered = 0.0;
    let mut index = 0;
    while covered < base {
        suffix.push(index);
        covered += widths[index];
        index = (index + 1) % len;
    }

    let mut prefix = Vec::new();
    let required = base + first;
    covered = 0.0;
    index = len - 1;
    while covered < required {
        prefix.push(index);
        covered += widths[index];
        index = if index == 0 { len - 1 } else { index - 1 };
    }

    Ok(ClonePlan { suffix, prefix })
}

impl<D: Device, L: ItemCollection> Carousel<D, L> {
    /// Measure every item and plan the clones. Touches nothing.
    pub(crate) fn plan_wrap_clones(&self, mask_width: f32) -> Result<ClonePlan> {
        let widths = (0..self.items.len())
            .map(|index| {
                self.items
                    .element_of(index)
                    .map(|el| self.device.element_size(el).width)
                    .ok_or(CarouselError::ItemNotRendered { index })
            })
            .collect::<Result<Vec<_>>>()?;
        plan_clones(&widths, mask_width, self.multi_width_items)
    }

    /// Place the planned clones around the real items. Returns the number
    /// of prefix clones.
    pub(crate) fn apply_wrap_clones(
        &mut self,
        content: ElementId,
        plan: &ClonePlan,
    ) -> Result<usize> {
        for &index in &plan.suffix {
            let clone = self.create_clone(index)?;
            self.device.append_child(content, clone);
        }
        for &index in &plan.prefix {
            let clone = self.create_clone(index)?;
            self.device.prepend_child(content, clone);
        }
        tracing::debug!(
            carousel = %self.id,
            suffix = plan.suffix.len(),
            prefix = plan.prefix.len(),
            "synthesized wrap clones"
        );
        Ok(plan.prefix.len())
    }

    fn create_clone(&mut self, index: usize) -> Result<ElementId> {
        let item = self
            .items
            .get(index)
            .ok_or(CarouselError::ItemNotRendered { index })?;
        let source = item
            .element()
            .ok_or(CarouselError::ItemNotRendered { index })?;
        let active = item.has_class(classes::ACTIVE);
        let focused = item.has_class(classes::FOCUS);

        let clone =
            self.device
                .clone_element(source, classes::CLONE, ids::CLONE_SUFFIX);
        if active {
            self.device.remove_class(clone, classes::ACTIVE, true);
        }
        if focused {
            self.device.remove_class(clone, classes::FOCUS, true);
            self.device.remove_class(clone, classes::BUTTON_FOCUSSED, true);
        }
        self.clones.push(clone);
        self.clone_sources.insert(clone, index);
        Ok(clone)
    }

    /// Replace the clones after the item list changed under a bound
    /// carousel, keeping the active item where it was on screen.
    pub(crate) fn rebuild_wrap_clones(&mut self, content: ElementId) -> Result<()> {
        let Some(mask) = self.mask else {
            return Ok(());
        };
        let mask_width = self.device.element_size(mask).width;
        let plan = self.plan_wrap_clones(mask_width)?;
        self.discard_clones();
        self.prefix_clone_count = self.apply_wrap_clones(content, &plan)?;
        if let Some(el) = self.active_element() {
            self.align_to(el, true);
        }
        Ok(())
    }

    /// Detach and release every clone from the previous bind.
    pub(crate) fn discard_clones(&mut self) {
        for clone in self.clones.drain(..) {
            self.device.remove_element(clone);
            self.device.destroy_element(clone);
        }
        self.clone_sources.clear();
    }

    /// Attach left and right padding, creating it on first use. Returns the
    /// prefix count the left padding contributes.
    pub(crate) fn attach_padding(
        &mut self,
        content: ElementId,
        mask_width: f32,
    ) -> usize {
        let (left, right) = match self.padding {
            Some(padding) => padding,
            None => {
                let left = self.device.create_container(
                    &format!("{}{}", self.id, ids::PADDING_LEFT_SUFFIX),
                    &[classes::PADDING.to_owned(), classes::PADDING_LEFT.to_owned()],
                );
                let right = self.device.create_container(
                    &format!("{}{}", self.id, ids::PADDING_RIGHT_SUFFIX),
                    &[
                        classes::PADDING.to_owned(),
                        classes::PADDING_RIGHT.to_owned(),
                    ],
                );
                self.padding = Some((left, right));
                (left, right)
            }
        };
        for el in [left, right] {
            let height = self.device.element_size(el).height;
            self.device
                .set_element_size(el, Size::new(mask_width, height));
        }
        self.device.prepend_child(content, left);
        self.device.append_child(content, right);
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_items_cover_half_mask_and_first_item() {
        let plan = plan_clones(&[100.0; 10], 250.0, false).unwrap();
        assert_eq!(plan.suffix, vec![0, 1]);
        assert_eq!(plan.prefix, vec![9, 8, 7]);
    }

    #[test]
    fn multi_width_items_cover_full_mask() {
        let plan = plan_clones(&[50.0, 200.0, 50.0, 100.0], 300.0, true).unwrap();
        // 50 + 200 + 50 >= 300
        assert_eq!(plan.suffix, vec![0, 1, 2]);
        // 100 + 50 + 200 >= 350
        assert_eq!(plan.prefix, vec![3, 2, 1]);
    }

    #[test]
    fn short_lists_wrap_around_repeatedly() {
        let plan = plan_clones(&[100.0], 500.0, false).unwrap();
        assert_eq!(plan.suffix, vec![0, 0, 0]);
        assert_eq!(plan.prefix, vec![0; 4]);
    }

    #[test]
    fn zero_width_is_rejected() {
        assert_eq!(
            plan_clones(&[100.0, 0.0, 100.0], 250.0, false),
            Err(CarouselError::ZeroWidthItem { index: 1 })
        );
        assert_eq!(
            plan_clones(&[f32::NAN], 250.0, false),
            Err(CarouselError::ZeroWidthItem { index: 0 })
        );
    }

    #[test]
    fn empty_lists_need_no_clones() {
        assert_eq!(plan_clones(&[], 250.0, false), Ok(ClonePlan::default()));
    }

    #[test]
    fn odd_mask_widths_round_up() {
        assert_eq!(base_threshold(251.0, false), 126.0);
        assert_eq!(base_threshold(251.0, true), 251.0);
    }
}
