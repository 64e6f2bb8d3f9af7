//! Replacing data while idle, mid-scroll and through the fading rebind

mod common;

use common::{bound, bound_with, config, device, mask, tiles};
use reel_carousel::{ItemCollection, WrapMode};
use reel_config::CarouselSettings;

#[test]
fn new_data_cancels_an_in_flight_scroll() {
    let mut carousel = bound(10, |_| {});
    assert!(carousel.select_next());
    assert!(carousel.is_scrolling());

    carousel.set_data_source(tiles(6));
    assert!(!carousel.is_scrolling());
    assert_eq!(carousel.device().pending_animations(), 0);

    carousel.layout_settled().unwrap();
    carousel.finish_animations();
    // The cancelled move never commits against the new data.
    assert_eq!(carousel.selected_index(), 0);
    assert_eq!(carousel.len(), 6);

    assert!(carousel.select_next());
    carousel.finish_animations();
    assert_eq!(carousel.selected_index(), 1);
}

#[test]
fn new_data_releases_old_elements() {
    let mut carousel = bound(4, |c| c.set_wrap_mode(WrapMode::None).unwrap());
    let old = carousel.items().element_of(0).unwrap();

    carousel.set_data_source(tiles(4));
    assert!(!carousel.device().exists(old));
    assert_ne!(carousel.items().element_of(0), Some(old));
}

#[test]
fn rebind_fades_out_before_rebinding() {
    let mut carousel = bound(10, |_| {});
    let mask = mask(&carousel);

    carousel.rebind_data_source();
    assert!(!carousel.is_bind_pending());
    assert!(carousel.device().is_visible(mask));

    carousel.finish_animations();
    assert!(carousel.is_bind_pending());
    assert!(!carousel.device().is_visible(mask));

    carousel.layout_settled().unwrap();
    carousel.finish_animations();
    assert!(carousel.device().is_visible(mask));
    assert_eq!(carousel.len(), 10);
    assert_eq!(carousel.prefix_clone_count(), 3);
}

#[test]
fn rebind_without_fade_is_immediate() {
    let config = config(CarouselSettings {
        fade: Some(false),
        ..CarouselSettings::default()
    });
    let mut carousel = bound_with(device(), &config, tiles(10), |_| {});
    let mask = mask(&carousel);
    assert!(carousel.device().is_visible(mask));

    carousel.rebind_data_source();
    assert!(carousel.is_bind_pending());
    assert_eq!(carousel.device().pending_animations(), 0);

    carousel.layout_settled().unwrap();
    // Shown without a fade.
    assert!(carousel.device().is_visible(mask));
    assert_eq!(carousel.device().pending_animations(), 0);
}
