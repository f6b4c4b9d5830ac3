//! Configuration file loading with environment variable overrides.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Static fallback content rendered when a fetch cycle fails.
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Remote endpoints the fetch cycle talks to.
    #[serde(default)]
    pub endpoints: EndpointsConfig,

    /// Timing constants.
    #[serde(default)]
    pub timing: TimingConfig,
}

/// Static fallback content.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Image shown when a fetch cycle fails.
    pub image: String,
    /// Caption shown when a fetch cycle fails.
    pub quote: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self { image: "flower.jpg".to_string(), quote: "Grow With Grace".to_string() }
    }
}

/// Remote endpoint addresses. Any image-returning and quote-returning
/// endpoints will do; these are collaborators, not part of the contract.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct EndpointsConfig {
    /// Random-image endpoint.
    pub image: String,
    /// Random-quote endpoint.
    pub quote: String,
}

impl Default for EndpointsConfig {
    fn default() -> Self {
        Self {
            image: "https://picsum.photos/800/400".to_string(),
            quote: "https://dummyjson.com/quotes/random".to_string(),
        }
    }
}

/// Timing constants.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Delay between cycle completion and trigger re-enable, in
    /// milliseconds.
    pub reenable_delay_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self { reenable_delay_ms: 2000 }
    }
}

impl Config {
    /// Load configuration from the given path, or return defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
        toml::from_str(&contents)
            .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
    }
}

/// Discover the config file path using the resolution order:
/// 1. Explicit path (from `--config` flag)
/// 2. `POSTER_CONFIG` environment variable
/// 3. `~/.config/poster/config.toml`
#[must_use]
pub fn discover_config_path(explicit: Option<&str>) -> PathBuf {
    if let Some(p) = explicit {
        return PathBuf::from(p);
    }

    if let Ok(p) = std::env::var("POSTER_CONFIG") {
        return PathBuf::from(p);
    }

    default_config_path()
}

/// Default config path: `~/.config/poster/config.toml`.
fn default_config_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        PathBuf::from(home).join(".config/poster/config.toml")
    } else {
        PathBuf::from("poster.toml")
    }
}
