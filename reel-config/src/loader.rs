use anyhow::{Context, anyhow};
use std::{
    env, fs,
    path::{Path, PathBuf},
};

use crate::constants::{DEFAULT_FILE_CANDIDATES, env as env_keys};
use crate::models::DeviceConfig;
use crate::validation;

/// Source that produced the device configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    /// Compiled defaults, nothing found.
    #[default]
    Default,
    /// File named by `$REEL_CONFIG_PATH`.
    EnvPath(PathBuf),
    /// Inline `$REEL_CONFIG_JSON`.
    EnvInline,
    /// Default file candidate or an explicit path.
    File(PathBuf),
}

/// File format picked from a config file's extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Toml,
    /// No recognised extension: TOML is tried, then JSON.
    Sniff,
}

impl Format {
    fn of(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::Json,
            Some("toml" | "tml") => Self::Toml,
            _ => Self::Sniff,
        }
    }
}

impl DeviceConfig {
    /// Resolve the device configuration from the environment, first match
    /// wins: `$REEL_CONFIG_PATH`, `$REEL_CONFIG_JSON`, the default file
    /// candidates under the working directory, then compiled defaults.
    ///
    /// Whatever is found goes through [`crate::validation::check`].
    pub fn load_from_env() -> anyhow::Result<(Self, ConfigSource)> {
        let non_empty = |key: &str| env::var(key).ok().filter(|v| !v.trim().is_empty());

        if let Some(path) = non_empty(env_keys::CONFIG_PATH).map(PathBuf::from) {
            let config = Self::load_from_file(&path)?;
            return Ok((config, ConfigSource::EnvPath(path)));
        }

        if let Some(raw) = non_empty(env_keys::CONFIG_JSON) {
            let config = Self::parse_json(&raw)
                .with_context(|| format!("failed to parse ${}", env_keys::CONFIG_JSON))?
                .checked(env_keys::CONFIG_JSON)?;
            return Ok((config, ConfigSource::EnvInline));
        }

        match Self::find_default_file(Path::new(".")) {
            Some(path) => {
                let config = Self::load_from_file(&path)?;
                Ok((config, ConfigSource::File(path)))
            }
            None => {
                tracing::debug!("no device configuration found, using defaults");
                Ok((Self::default(), ConfigSource::Default))
            }
        }
    }

    /// Read, parse and check one configuration file.
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let origin = path.display().to_string();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read device config from {origin}"))?;

        let config = match Format::of(path) {
            Format::Json => Self::parse_json(&contents)
                .with_context(|| format!("invalid device config {origin}"))?,
            Format::Toml => toml::from_str(&contents)
                .with_context(|| format!("invalid device config {origin}"))?,
            Format::Sniff => Self::parse_from_str(&contents, &origin)?,
        };

        tracing::debug!(path = %origin, "loaded device configuration");
        config.checked(&origin)
    }

    /// Parse a document of unknown format, TOML first.
    pub fn parse_from_str(contents: &str, origin: &str) -> anyhow::Result<Self> {
        toml::from_str(contents).or_else(|toml_err| {
            serde_json::from_str(contents).map_err(|json_err| {
                anyhow!(
                    "failed to parse device config {origin}: toml error: {toml_err}; json error: {json_err}"
                )
            })
        })
    }

    /// Parse a JSON document.
    pub fn parse_json(raw: &str) -> anyhow::Result<Self> {
        serde_json::from_str(raw)
            .map_err(|err| anyhow!("invalid device config json: {err}"))
    }

    /// First existing default candidate under `root`.
    pub fn find_default_file(root: &Path) -> Option<PathBuf> {
        DEFAULT_FILE_CANDIDATES
            .iter()
            .map(|candidate| root.join(candidate))
            .find(|path| path.exists())
    }

    /// Run the guard rails, logging warnings and failing on hard limits.
    fn checked(self, origin: &str) -> anyhow::Result<Self> {
        let warnings = validation::check(&self)
            .with_context(|| format!("device config {origin} rejected"))?;
        for warning in warnings.items {
            tracing::warn!(
                origin,
                hint = warning.hint.as_deref().unwrap_or_default(),
                "{}",
                warning.message
            );
        }
        Ok(self)
    }
}
