//! Ordered, focusable item collection
//!
//! The carousel decorates a collection rather than owning list behaviour
//! itself. [`ItemList`] is the stock implementation; hosts with their own
//! list model implement [`ItemCollection`] over it.

use std::collections::BTreeSet;

use crate::device::Device;
use crate::types::ElementId;

/// Description of one item to bind into the carousel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemTemplate {
    /// Element id for the materialized item.
    pub id: String,
    /// Initial class tags.
    pub classes: Vec<String>,
    /// Whether navigation may land on the item.
    pub focusable: bool,
}

impl ItemTemplate {
    /// Focusable template with no classes.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            classes: Vec::new(),
            focusable: true,
        }
    }

    /// Add an initial class tag.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Mark the item as skipped by navigation.
    pub fn unfocusable(mut self) -> Self {
        self.focusable = false;
        self
    }
}

/// A child item and its (optional) materialized element.
#[derive(Debug, Clone)]
pub struct CarouselItem {
    id: String,
    classes: BTreeSet<String>,
    focusable: bool,
    element: Option<ElementId>,
}

impl CarouselItem {
    /// Item id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Whether navigation may land on the item.
    pub fn is_focusable(&self) -> bool {
        self.focusable
    }

    /// Allow or forbid focus.
    pub fn set_focusable(&mut self, focusable: bool) {
        self.focusable = focusable;
    }

    /// Materialized element, if any.
    pub fn element(&self) -> Option<ElementId> {
        self.element
    }

    /// Whether the item carries `class`.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    /// Class tags in sorted order.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    /// Tag the item, mirroring onto its element when materialized.
    pub fn add_class<D: Device + ?Sized>(&mut self, device: &mut D, class: &str) {
        if self.classes.insert(class.to_owned())
            && let Some(el) = self.element
        {
            device.add_class(el, class);
        }
    }

    /// Untag the item, mirroring onto its element when materialized.
    pub fn remove_class<D: Device + ?Sized>(
        &mut self,
        device: &mut D,
        class: &str,
    ) {
        if self.classes.remove(class)
            && let Some(el) = self.element
        {
            device.remove_class(el, class, false);
        }
    }

    /// Materialize the item, reusing an existing element.
    pub fn render<D: Device + ?Sized>(&mut self, device: &mut D) -> ElementId {
        if let Some(el) = self.element {
            return el;
        }
        let classes: Vec<String> = self.classes.iter().cloned().collect();
        let el = device.create_container(&self.id, &classes);
        self.element = Some(el);
        el
    }

    /// Drop the element, detaching and releasing it.
    pub fn release<D: Device + ?Sized>(&mut self, device: &mut D) {
        if let Some(el) = self.element.take() {
            device.remove_element(el);
            device.destroy_element(el);
        }
    }
}

impl From<ItemTemplate> for CarouselItem {
    fn from(template: ItemTemplate) -> Self {
        Self {
            id: template.id,
            classes: template.classes.into_iter().collect(),
            focusable: template.focusable,
            element: None,
        }
    }
}

/// Ordered child collection the carousel navigates over.
pub trait ItemCollection {
    /// Number of items.
    fn len(&self) -> usize;

    /// Whether there are no items.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Item at `index`.
    fn get(&self, index: usize) -> Option<&CarouselItem>;

    /// Mutable item at `index`.
    fn get_mut(&mut self, index: usize) -> Option<&mut CarouselItem>;

    /// Append an item.
    fn push(&mut self, item: CarouselItem);

    /// Replace every item, returning the previous ones.
    fn replace_all(&mut self, items: Vec<CarouselItem>) -> Vec<CarouselItem>;

    /// Whether rendering the collection also renders its children.
    fn auto_render_children(&self) -> bool;

    /// Turn child rendering on or off.
    fn set_auto_render_children(&mut self, on: bool);

    /// Whether the item at `index` exists and can take focus.
    fn is_focusable(&self, index: usize) -> bool {
        self.get(index).is_some_and(CarouselItem::is_focusable)
    }

    /// Element of the item at `index`, if materialized.
    fn element_of(&self, index: usize) -> Option<ElementId> {
        self.get(index).and_then(CarouselItem::element)
    }

    /// Lowest focusable index.
    fn first_focusable(&self) -> Option<usize> {
        (0..self.len()).find(|&index| self.is_focusable(index))
    }
}

/// Vector-backed [`ItemCollection`].
#[derive(Debug, Clone)]
pub struct ItemList {
    items: Vec<CarouselItem>,
    auto_render_children: bool,
}

impl Default for ItemList {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            auto_render_children: true,
        }
    }
}

impl ItemList {
    /// Empty list that renders its children.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ItemCollection for ItemList {
    fn len(&self) -> usize {
        self.items.len()
    }

    fn get(&self, index: usize) -> Option<&CarouselItem> {
        self.items.get(index)
    }

    fn get_mut(&mut self, index: usize) -> Option<&mut CarouselItem> {
        self.items.get_mut(index)
    }

    fn push(&mut self, item: CarouselItem) {
        self.items.push(item);
    }

    fn replace_all(&mut self, items: Vec<CarouselItem>) -> Vec<CarouselItem> {
        std::mem::replace(&mut self.items, items)
    }

    fn auto_render_children(&self) -> bool {
        self.auto_render_children
    }

    fn set_auto_render_children(&mut self, on: bool) {
        self.auto_render_children = on;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(focusable: &[bool]) -> ItemList {
        let mut list = ItemList::new();
        for (i, f) in focusable.iter().enumerate() {
            let mut template = ItemTemplate::new(format!("item{i}"));
            if !f {
                template = template.unfocusable();
            }
            list.push(template.into());
        }
        list
    }

    #[test]
    fn first_focusable_skips_disabled_items() {
        assert_eq!(list(&[false, false, true, true]).first_focusable(), Some(2));
        assert_eq!(list(&[false, false]).first_focusable(), None);
        assert_eq!(list(&[]).first_focusable(), None);
    }

    #[test]
    fn template_classes_carry_over() {
        let item: CarouselItem =
            ItemTemplate::new("a").with_class("poster").into();
        assert!(item.has_class("poster"));
        assert!(item.is_focusable());
        assert_eq!(item.element(), None);
    }

    #[test]
    fn replace_all_returns_previous_items() {
        let mut items = list(&[true, true]);
        let old = items.replace_all(vec![ItemTemplate::new("z").into()]);
        assert_eq!(old.len(), 2);
        assert_eq!(items.len(), 1);
        assert_eq!(items.get(0).map(CarouselItem::id), Some("z"));
    }
}
