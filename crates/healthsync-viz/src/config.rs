//! Configuration types for chart rendering.
//!
//! This module provides the configuration structures that control how the
//! charts are styled. All types implement [`serde::Deserialize`] for
//! flexible loading from external sources.
//!
//! # Example
//!
//! ```
//! # use healthsync_viz::config::AppConfig;
//! // Use default configuration
//! let config = AppConfig::default();
//! assert!(config.style().background_color().is_ok());
//! ```

use serde::Deserialize;

use crate::color::Color;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified style configuration.
    pub fn new(style: StyleConfig) -> Self {
        Self { style }
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Visual styling configuration for rendered charts.
///
/// Fields that are not set fall back to renderer defaults.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// Background [`Color`] for charts, as a CSS color string.
    #[serde(default)]
    background_color: Option<String>,
}

impl StyleConfig {
    /// Returns the parsed background [`Color`], or `None` if no color is
    /// configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed
    /// into a valid [`Color`].
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_ref()
            .map(|color| Color::new(color))
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_background() {
        let config = AppConfig::default();
        assert!(config.style().background_color().unwrap().is_none());
    }

    #[test]
    fn test_invalid_background_color_is_reported() {
        let style = StyleConfig {
            background_color: Some("definitely-not-a-color".to_string()),
        };
        assert!(style.background_color().is_err());
    }
}
