use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::carousel;

/// Top-level device configuration handed to widgets at construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct DeviceConfig {
    /// Per-widget-type settings.
    pub widgets: WidgetsConfig,
}

/// Per-widget-type settings blocks. Unknown widget blocks are ignored so a
/// device file can carry settings for widgets this build does not ship.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct WidgetsConfig {
    /// Horizontal carousel settings.
    #[serde(alias = "horizontalcarousel")]
    pub horizontal_carousel: CarouselSettings,
}

/// Settings for the horizontal carousel widget.
///
/// Fields are `None` unless the device overrides them; use the accessor
/// methods to read the effective value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CarouselSettings {
    /// Delay (ms) before the first bind when the host has no layout signal.
    #[serde(alias = "bindDelay", skip_serializing_if = "Option::is_none")]
    pub bind_delay_ms: Option<u64>,
    /// Fade the mask in and out on show/hide.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fade: Option<bool>,
    /// Animate scrolling between selections.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animate: Option<bool>,
}

impl CarouselSettings {
    /// Effective bind delay in milliseconds. Zero counts as unset.
    pub fn bind_delay_ms(&self) -> u64 {
        // A zero delay is treated as unset, matching devices that write 0
        // to mean "use the default".
        self.bind_delay_ms
            .filter(|ms| *ms > 0)
            .unwrap_or(carousel::BIND_DELAY_MS)
    }

    /// Effective bind delay.
    pub fn bind_delay(&self) -> Duration {
        Duration::from_millis(self.bind_delay_ms())
    }

    /// Whether show and hide fade.
    pub fn fade(&self) -> bool {
        self.fade.unwrap_or(carousel::FADE)
    }

    /// Whether selection scrolls animate.
    pub fn animate(&self) -> bool {
        self.animate.unwrap_or(carousel::ANIMATE)
    }
}

impl DeviceConfig {
    /// Shorthand for the carousel settings block.
    pub fn carousel(&self) -> &CarouselSettings {
        &self.widgets.horizontal_carousel
    }
}
