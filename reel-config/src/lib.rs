//! Device and widget configuration for Reel.
//!
//! Devices expose an optional, per-widget-type settings block. Widgets read
//! their block through accessor methods that fall back to compiled defaults,
//! so an empty configuration file is always valid.

pub mod constants;
pub mod loader;
pub mod models;
pub mod validation;

pub use loader::ConfigSource;
pub use models::{CarouselSettings, DeviceConfig, WidgetsConfig};
pub use validation::{SettingsError, SettingsWarning, SettingsWarnings};
