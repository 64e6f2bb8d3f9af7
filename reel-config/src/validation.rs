//! Guard rails for device-supplied carousel settings.
//!
//! Hard limits fail the load; questionable but usable values come back as
//! warnings for the caller to surface.

use thiserror::Error;

use crate::constants::carousel;
use crate::models::DeviceConfig;

/// Setting outside what the carousel accepts.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SettingsError {
    /// The bind delay would keep the carousel hidden too long.
    #[error("horizontal carousel bind delay of {ms} ms exceeds the {max} ms limit")]
    BindDelayTooLong {
        /// Configured delay.
        ms: u64,
        /// Largest accepted delay.
        max: u64,
    },
}

/// A setting that loads but probably does not do what the device author
/// meant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsWarning {
    /// What is wrong.
    pub message: String,
    /// How to fix it.
    pub hint: Option<String>,
}

/// Warnings gathered by [`check`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SettingsWarnings {
    /// Warnings in rule order.
    pub items: Vec<SettingsWarning>,
}

impl SettingsWarnings {
    /// Record a warning with a hint.
    pub fn push_with_hint<S: Into<String>, H: Into<String>>(
        &mut self,
        message: S,
        hint: H,
    ) {
        self.items.push(SettingsWarning {
            message: message.into(),
            hint: Some(hint.into()),
        });
    }

    /// Whether nothing was flagged.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Check a parsed configuration against the carousel's limits.
pub fn check(config: &DeviceConfig) -> Result<SettingsWarnings, SettingsError> {
    let mut warnings = SettingsWarnings::default();
    let settings = config.carousel();

    match settings.bind_delay_ms {
        Some(ms) if ms > carousel::MAX_BIND_DELAY_MS => {
            return Err(SettingsError::BindDelayTooLong {
                ms,
                max: carousel::MAX_BIND_DELAY_MS,
            });
        }
        Some(0) => warnings.push_with_hint(
            format!(
                "bind delay of 0 ms falls back to {} ms",
                carousel::BIND_DELAY_MS
            ),
            "Omit bindDelay to use the default, or set a positive value",
        ),
        Some(ms) if ms > carousel::SLOW_BIND_DELAY_MS => warnings.push_with_hint(
            format!("bind delay of {ms} ms keeps the carousel hidden noticeably long"),
            "Hosts that report layout settled do not need a long fallback delay",
        ),
        _ => {}
    }

    Ok(warnings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CarouselSettings, WidgetsConfig};

    fn with_delay(ms: u64) -> DeviceConfig {
        DeviceConfig {
            widgets: WidgetsConfig {
                horizontal_carousel: CarouselSettings {
                    bind_delay_ms: Some(ms),
                    ..Default::default()
                },
            },
        }
    }

    #[test]
    fn defaults_pass_quietly() {
        assert!(check(&DeviceConfig::default()).unwrap().is_empty());
        assert!(check(&with_delay(250)).unwrap().is_empty());
    }

    #[test]
    fn zero_delay_warns() {
        let warnings = check(&with_delay(0)).unwrap();
        assert_eq!(warnings.items.len(), 1);
        assert!(warnings.items[0].message.contains("falls back to 100 ms"));
    }

    #[test]
    fn slow_delay_warns() {
        let warnings = check(&with_delay(2_000)).unwrap();
        assert_eq!(warnings.items.len(), 1);
        assert!(warnings.items[0].hint.is_some());
    }

    #[test]
    fn delay_past_limit_is_rejected() {
        assert_eq!(
            check(&with_delay(60_000)),
            Err(SettingsError::BindDelayTooLong {
                ms: 60_000,
                max: carousel::MAX_BIND_DELAY_MS,
            })
        );
        assert!(check(&with_delay(carousel::MAX_BIND_DELAY_MS)).is_ok());
    }
}
