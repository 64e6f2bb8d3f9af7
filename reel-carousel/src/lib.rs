//! Focus-navigable, horizontally scrolling carousel engine for TV UIs.
//!
//! [`Carousel`] decides which items exist in the render tree, moves focus
//! between them (wrapping past either end through cloned boundary items when
//! asked to), and keeps the visible window in step with the scroll animation.
//! Drawing, layout and animation playback belong to a [`Device`]; the crate
//! ships [`headless::HeadlessDevice`] for tests and simulation.
//!
//! ```
//! use reel_carousel::headless::HeadlessDevice;
//! use reel_carousel::{Carousel, ItemTemplate, Size};
//! use reel_config::DeviceConfig;
//!
//! let device = HeadlessDevice::new()
//!     .size_class("horizontallistmask", Size::new(250.0, 100.0))
//!     .size_class("tile", Size::new(100.0, 100.0));
//! let mut carousel = Carousel::new("row", device, &DeviceConfig::default());
//! carousel.set_data_source(
//!     (0..10)
//!         .map(|i| ItemTemplate::new(format!("tile{i}")).with_class("tile"))
//!         .collect(),
//! );
//! carousel.render();
//! carousel.layout_settled().unwrap();
//!
//! assert!(carousel.select_previous());
//! carousel.finish_animations();
//! assert_eq!(carousel.selected_index(), 9);
//! ```

pub mod alignment;
pub mod carousel;
pub mod constants;
pub mod device;
pub mod error;
pub mod events;
pub mod headless;
pub mod items;
pub mod navigation;
pub mod types;
pub mod viewport;
pub mod wrap;

pub use carousel::{AnimationSettings, Carousel};
pub use device::{AnimationOutcome, Device, ScrollRequest, VisibilityRequest};
pub use error::{CarouselError, Result};
pub use events::{CarouselEvent, EventBus, EventKind, SubscriptionId};
pub use items::{CarouselItem, ItemCollection, ItemList, ItemTemplate};
pub use types::{
    Alignment, AnimationHandle, Bounds, Direction, ElementId, Key,
    KeyDisposition, Offset, Size, ViewportClass, ViewportMode, WrapMode,
};
