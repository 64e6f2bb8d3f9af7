//! Materialized window (DOM mode) and proximity classes (CLASSES mode)

mod common;

use common::{bound, bound_with, clone_of, device, element, item_has_class, mask};
use reel_carousel::{
    CarouselError, Device, EventKind, ItemCollection, ItemTemplate, ViewportMode,
    WrapMode,
};
use reel_config::DeviceConfig;

fn step_right(carousel: &mut reel_carousel::Carousel<reel_carousel::headless::HeadlessDevice>, times: usize) {
    for _ in 0..times {
        assert!(carousel.select_next());
        carousel.finish_animations();
    }
}

fn step_left(carousel: &mut reel_carousel::Carousel<reel_carousel::headless::HeadlessDevice>, times: usize) {
    for _ in 0..times {
        assert!(carousel.select_previous());
        carousel.finish_animations();
    }
}

fn ids(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| (*name).to_owned()).collect()
}

#[test]
fn dom_mode_conflicts_with_visual_wrap() {
    let mut carousel = bound(4, |_| {});
    assert_eq!(
        carousel.set_viewport_mode(ViewportMode::Dom, 2),
        Err(CarouselError::ViewportConflictsWithVisualWrap)
    );
    assert_eq!(carousel.viewport_mode(), ViewportMode::None);
}

#[test]
fn dom_mode_materializes_only_the_window() {
    let carousel = bound(10, |c| {
        c.set_wrap_mode(WrapMode::None).unwrap();
        c.set_viewport_mode(ViewportMode::Dom, 2).unwrap();
    });

    assert_eq!(
        carousel.rendered_ids(),
        ids(&["rowPaddingLeft", "tile0", "tile1", "tile2", "rowPaddingRight"])
    );
    assert_eq!(carousel.node_offset(), 0);
    assert!(carousel.items().element_of(3).is_none());
}

#[test]
fn dom_window_follows_the_selection() {
    let mut carousel = bound(10, |c| {
        c.set_wrap_mode(WrapMode::None).unwrap();
        c.set_viewport_mode(ViewportMode::Dom, 2).unwrap();
    });

    step_right(&mut carousel, 4);

    assert_eq!(carousel.selected_index(), 4);
    assert_eq!(carousel.node_offset(), 2);
    assert_eq!(
        carousel.rendered_ids(),
        ids(&[
            "rowPaddingLeft",
            "tile2",
            "tile3",
            "tile4",
            "tile5",
            "tile6",
            "rowPaddingRight",
        ])
    );
    assert_eq!(carousel.render_index_of(2), Some(1));
    assert_eq!(carousel.render_index_of(4), Some(3));
    assert_eq!(carousel.render_index_of(1), None);
    assert_eq!(carousel.render_index_of(7), None);
    assert!(item_has_class(&carousel, 4, "inviewport"));
    assert!(!item_has_class(&carousel, 0, "inviewport"));
}

#[test]
fn dom_window_clamps_at_the_end() {
    let mut carousel = bound(6, |c| {
        c.set_wrap_mode(WrapMode::None).unwrap();
        c.set_viewport_mode(ViewportMode::Dom, 2).unwrap();
    });
    carousel.set_active_child_index(5, true).unwrap();

    assert_eq!(carousel.node_offset(), 3);
    assert_eq!(
        carousel.rendered_ids(),
        ids(&["rowPaddingLeft", "tile3", "tile4", "tile5", "rowPaddingRight"])
    );
}

#[test]
fn evicted_items_are_detached_and_reused() {
    let mut carousel = bound(10, |c| {
        c.set_wrap_mode(WrapMode::NavigationOnly).unwrap();
        c.set_viewport_mode(ViewportMode::Dom, 1).unwrap();
    });
    let first = element(&carousel, 0);
    let content = carousel.content_element().unwrap();

    step_right(&mut carousel, 3);
    assert_eq!(carousel.device().parent_of(first), None);
    assert!(carousel.device().exists(first));

    step_left(&mut carousel, 3);
    assert_eq!(element(&carousel, 0), first);
    assert_eq!(carousel.device().parent_of(first), Some(content));
    assert_eq!(
        carousel.rendered_ids(),
        ids(&["rowPaddingLeft", "tile0", "tile1", "rowPaddingRight"])
    );
}

#[test]
fn dom_mode_skips_past_the_window_edge() {
    let templates = [true, false, false, true, true, true]
        .iter()
        .enumerate()
        .map(|(i, &focusable)| {
            let template = ItemTemplate::new(format!("tile{i}")).with_class("tile");
            if focusable { template } else { template.unfocusable() }
        })
        .collect();
    let mut carousel = bound_with(device(), &DeviceConfig::default(), templates, |c| {
        c.set_wrap_mode(WrapMode::None).unwrap();
        c.set_viewport_mode(ViewportMode::Dom, 1).unwrap();
    });
    assert!(carousel.items().element_of(3).is_none());

    assert!(carousel.select_next());
    carousel.finish_animations();

    assert_eq!(carousel.selected_index(), 3);
    assert_eq!(carousel.node_offset(), 2);
    assert_eq!(
        carousel.rendered_ids(),
        ids(&["rowPaddingLeft", "tile2", "tile3", "tile4", "rowPaddingRight"])
    );
    // Padding 250 then tile2 ahead of tile3.
    assert_eq!(carousel.device().scroll_left(mask(&carousel)), 275.0);
}

#[test]
fn dom_mode_wraps_to_the_far_end() {
    let mut carousel = bound(10, |c| {
        c.set_wrap_mode(WrapMode::NavigationOnly).unwrap();
        c.set_viewport_mode(ViewportMode::Dom, 2).unwrap();
    });
    let first = element(&carousel, 0);

    step_left(&mut carousel, 1);
    assert_eq!(carousel.selected_index(), 9);
    assert_eq!(carousel.node_offset(), 7);
    assert_eq!(
        carousel.rendered_ids(),
        ids(&["rowPaddingLeft", "tile7", "tile8", "tile9", "rowPaddingRight"])
    );
    assert_eq!(carousel.render_index_of(9), Some(3));
    assert_eq!(carousel.device().scroll_left(mask(&carousel)), 375.0);

    step_right(&mut carousel, 1);
    assert_eq!(carousel.selected_index(), 0);
    assert_eq!(element(&carousel, 0), first);
    assert_eq!(
        carousel.rendered_ids(),
        ids(&["rowPaddingLeft", "tile0", "tile1", "tile2", "rowPaddingRight"])
    );
    assert_eq!(carousel.device().scroll_left(mask(&carousel)), 175.0);
}

#[test]
fn vetoed_wrap_leaves_the_dom_window_alone() {
    let mut carousel = bound(10, |c| {
        c.set_wrap_mode(WrapMode::NavigationOnly).unwrap();
        c.set_viewport_mode(ViewportMode::Dom, 2).unwrap();
    });
    carousel.subscribe(EventKind::BeforeSelectedItemChange, |_| false);
    let before = carousel.rendered_ids();

    assert!(!carousel.select_previous());
    assert_eq!(carousel.node_offset(), 0);
    assert_eq!(carousel.rendered_ids(), before);
    assert!(carousel.items().element_of(9).is_none());
}

#[test]
fn dom_mode_keeps_the_active_item_aligned() {
    let mut carousel = bound(10, |c| {
        c.set_wrap_mode(WrapMode::None).unwrap();
        c.set_viewport_mode(ViewportMode::Dom, 2).unwrap();
    });
    step_right(&mut carousel, 4);

    let mask = carousel.mask_element().unwrap();
    let active = element(&carousel, 4);
    // Padding 250 then tile2, tile3 ahead of tile4.
    assert_eq!(carousel.device().element_offset(active).left, 450.0);
    assert_eq!(carousel.device().scroll_left(mask), 375.0);
}

#[test]
fn no_viewport_mode_tags_everything() {
    let carousel = bound(10, |_| {});
    for index in 0..10 {
        assert!(item_has_class(&carousel, index, "inviewport"));
    }
}

#[test]
fn classes_mode_tags_by_distance_from_active_item() {
    let carousel = bound(10, |c| {
        c.set_wrap_mode(WrapMode::None).unwrap();
        c.set_viewport_mode(ViewportMode::Classes, 0).unwrap();
    });
    // tile0 centre at 300: visible [175, 425), near [-75, 675).
    assert!(item_has_class(&carousel, 0, "inviewport"));
    assert!(item_has_class(&carousel, 1, "inviewport"));
    for index in 2..=4 {
        assert!(item_has_class(&carousel, index, "nearviewport"));
        assert!(!item_has_class(&carousel, index, "inviewport"));
    }
    for index in 5..10 {
        assert!(!item_has_class(&carousel, index, "inviewport"));
        assert!(!item_has_class(&carousel, index, "nearviewport"));
    }
    let el = element(&carousel, 1);
    assert!(carousel.device().has_class(el, "inviewport"));
}

#[test]
fn classes_mode_reclassifies_on_reposition() {
    let mut carousel = bound(10, |c| {
        c.set_wrap_mode(WrapMode::None).unwrap();
        c.set_viewport_mode(ViewportMode::Classes, 0).unwrap();
    });
    carousel.set_active_child_index(5, true).unwrap();

    // tile5 centre at 800: visible [675, 925), near [425, 1175).
    assert!(!item_has_class(&carousel, 0, "inviewport"));
    assert!(!item_has_class(&carousel, 0, "nearviewport"));
    assert!(item_has_class(&carousel, 1, "nearviewport"));
    for index in 4..=6 {
        assert!(item_has_class(&carousel, index, "inviewport"));
    }
    assert!(item_has_class(&carousel, 7, "nearviewport"));
    assert!(!item_has_class(&carousel, 7, "inviewport"));
}

#[test]
fn clones_are_classified_on_their_own() {
    let carousel = bound(10, |c| {
        c.set_viewport_mode(ViewportMode::Classes, 0).unwrap();
    });
    // tile0 centre at 350: visible [225, 475). The tile9 clone ends at 300.
    let clone9 = clone_of(&carousel, 9);
    assert!(carousel.device().has_class(clone9, "inviewport"));
    assert!(!item_has_class(&carousel, 9, "inviewport"));
    assert!(!item_has_class(&carousel, 9, "nearviewport"));

    let clone1 = clone_of(&carousel, 1);
    assert!(!carousel.device().has_class(clone1, "inviewport"));
    assert!(item_has_class(&carousel, 1, "inviewport"));
}
