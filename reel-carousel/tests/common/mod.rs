//! Shared fixtures for carousel integration tests
//!
//! Tiles are 100 units wide and the mask is 250 wide unless a test builds
//! its own device.

#![allow(dead_code)]

use reel_carousel::headless::HeadlessDevice;
use reel_carousel::{Carousel, ElementId, ItemCollection, ItemTemplate, Size};
use reel_config::{CarouselSettings, DeviceConfig, WidgetsConfig};

pub const MASK_WIDTH: f32 = 250.0;
pub const TILE_WIDTH: f32 = 100.0;

pub fn device() -> HeadlessDevice {
    HeadlessDevice::new()
        .size_class("horizontallistmask", Size::new(MASK_WIDTH, 100.0))
        .size_class("tile", Size::new(TILE_WIDTH, 100.0))
}

pub fn tiles(count: usize) -> Vec<ItemTemplate> {
    (0..count)
        .map(|i| ItemTemplate::new(format!("tile{i}")).with_class("tile"))
        .collect()
}

pub fn config(settings: CarouselSettings) -> DeviceConfig {
    DeviceConfig {
        widgets: WidgetsConfig {
            horizontal_carousel: settings,
        },
    }
}

/// Configure, bind and show a carousel, leaving no animation pending.
pub fn bound_with(
    device: HeadlessDevice,
    config: &DeviceConfig,
    templates: Vec<ItemTemplate>,
    configure: impl FnOnce(&mut Carousel<HeadlessDevice>),
) -> Carousel<HeadlessDevice> {
    let mut carousel = Carousel::new("row", device, config);
    configure(&mut carousel);
    carousel.set_data_source(templates);
    carousel.render();
    carousel
        .layout_settled()
        .expect("bind should succeed for measurable tiles");
    carousel.finish_animations();
    carousel
}

pub fn bound(
    count: usize,
    configure: impl FnOnce(&mut Carousel<HeadlessDevice>),
) -> Carousel<HeadlessDevice> {
    bound_with(device(), &DeviceConfig::default(), tiles(count), configure)
}

pub fn element(carousel: &Carousel<HeadlessDevice>, index: usize) -> ElementId {
    carousel
        .items()
        .element_of(index)
        .expect("item should be materialized")
}

pub fn mask(carousel: &Carousel<HeadlessDevice>) -> ElementId {
    carousel.mask_element().expect("carousel should be rendered")
}

/// Clone element duplicating logical item `index`, first created wins.
pub fn clone_of(carousel: &Carousel<HeadlessDevice>, index: usize) -> ElementId {
    carousel
        .clone_elements()
        .iter()
        .copied()
        .find(|el| carousel.clone_source(*el) == Some(index))
        .expect("clone should exist")
}

pub fn item_has_class(
    carousel: &Carousel<HeadlessDevice>,
    index: usize,
    class: &str,
) -> bool {
    carousel
        .items()
        .get(index)
        .is_some_and(|item| item.has_class(class))
}
