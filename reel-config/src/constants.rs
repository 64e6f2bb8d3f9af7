//! Compiled defaults used when a configuration block leaves a field unset.

/// Defaults for the `horizontal_carousel` widget block.
pub mod carousel {
    /// Fallback delay (ms) between data binding and clone synthesis for hosts
    /// that cannot report when layout has settled. Some devices need more.
    pub const BIND_DELAY_MS: u64 = 100;
    /// Bind delays above this are reported as a warning.
    pub const SLOW_BIND_DELAY_MS: u64 = 1_000;
    /// Bind delays above this are rejected.
    pub const MAX_BIND_DELAY_MS: u64 = 10_000;
    /// Whether showing/hiding the carousel mask fades.
    pub const FADE: bool = true;
    /// Whether selection changes animate the scroll.
    pub const ANIMATE: bool = true;
}

/// Environment variables consulted by [`crate::DeviceConfig::load_from_env`].
pub mod env {
    /// Path to a TOML or JSON device configuration file.
    pub const CONFIG_PATH: &str = "REEL_CONFIG_PATH";
    /// Inline JSON device configuration.
    pub const CONFIG_JSON: &str = "REEL_CONFIG_JSON";
}

/// Files probed, in order, when no environment override is present.
pub const DEFAULT_FILE_CANDIDATES: &[&str] = &[
    "reel.toml",
    "reel.json",
    "config/reel.toml",
    "config/reel.json",
];
