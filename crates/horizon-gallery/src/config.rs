//! Gallery configuration.
//!
//! A [`GalleryConfig`] can be built in code or read from TOML. Every field has
//! a default, so a configuration file only needs the values it changes:
//!
//! ```toml
//! inter_page_spacing = 12.0
//! show_action_button = true
//!
//! [metrics]
//! toolbar_height = 49.0
//! ```

use std::path::Path;
use std::time::Duration;

use horizon_gallery_core::logging::targets;
use horizon_gallery_core::{Error, Result};
use serde::{Deserialize, Serialize};

use crate::chrome::ChromeMetrics;
use crate::gesture::DEFAULT_DOUBLE_TAP_TIMEOUT_MS;

/// Axis along which pages are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageOrientation {
    /// Pages are side by side; swipe left/right.
    #[default]
    Horizontal,
    /// Pages are stacked; swipe up/down.
    Vertical,
}

/// How the paging surface animates between pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageTransitionStyle {
    /// Pages scroll continuously, separated by the inter-page spacing.
    #[default]
    Scroll,
    /// Pages turn like paper.
    PageCurl,
}

/// Configuration for a gallery controller and its host surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// Gap between adjacent pages in logical pixels.
    pub inter_page_spacing: f32,
    /// Paging axis.
    pub orientation: PageOrientation,
    /// Transition style of the paging surface.
    pub transition_style: PageTransitionStyle,
    /// Duration of the inset animation after a chrome toggle, in milliseconds.
    pub chrome_animation_ms: u64,
    /// Maximum delay between the two taps of a double tap, in milliseconds.
    pub double_tap_timeout_ms: u64,
    /// Whether the chrome offers a "done" affordance that requests dismissal.
    pub show_done_button: bool,
    /// Whether the chrome offers the user-supplied action affordance.
    pub show_action_button: bool,
    /// Whether the toolbar shows the position of the current image.
    pub show_position_label: bool,
    /// Bar heights used to compute page insets.
    pub metrics: ChromeMetrics,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            inter_page_spacing: 20.0,
            orientation: PageOrientation::default(),
            transition_style: PageTransitionStyle::default(),
            chrome_animation_ms: 150,
            double_tap_timeout_ms: DEFAULT_DOUBLE_TAP_TIMEOUT_MS,
            show_done_button: true,
            show_action_button: false,
            show_position_label: true,
            metrics: ChromeMetrics::default(),
        }
    }
}

impl GalleryConfig {
    /// Parse and validate a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|err| Error::io(path, err))?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(target: targets::CONFIG, path = %path.display(), "loaded gallery configuration");
        Ok(config)
    }

    /// Check that every value is within its permitted range.
    pub fn validate(&self) -> Result<()> {
        check_length("inter_page_spacing", self.inter_page_spacing)?;
        check_length("metrics.status_bar_height", self.metrics.status_bar_height)?;
        check_length("metrics.navigation_bar_height", self.metrics.navigation_bar_height)?;
        check_length("metrics.toolbar_height", self.metrics.toolbar_height)?;

        if self.double_tap_timeout_ms == 0 {
            return Err(Error::invalid_value(
                "double_tap_timeout_ms",
                "must be greater than zero",
            ));
        }
        Ok(())
    }

    /// Set the inter-page spacing using builder pattern.
    pub fn with_inter_page_spacing(mut self, spacing: f32) -> Self {
        self.inter_page_spacing = spacing;
        self
    }

    /// Enable or disable the action affordance using builder pattern.
    pub fn with_action_button(mut self, enabled: bool) -> Self {
        self.show_action_button = enabled;
        self
    }

    /// Enable or disable the done affordance using builder pattern.
    pub fn with_done_button(mut self, enabled: bool) -> Self {
        self.show_done_button = enabled;
        self
    }

    /// Set the chrome metrics using builder pattern.
    pub fn with_metrics(mut self, metrics: ChromeMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    /// Duration of the inset animation after a chrome toggle.
    pub fn chrome_animation(&self) -> Duration {
        Duration::from_millis(self.chrome_animation_ms)
    }

    /// Maximum delay between the two taps of a double tap.
    pub fn double_tap_timeout(&self) -> Duration {
        Duration::from_millis(self.double_tap_timeout_ms)
    }
}

fn check_length(field: &'static str, value: f32) -> Result<()> {
    if !value.is_finite() {
        return Err(Error::invalid_value(field, format!("must be finite, got {value}")));
    }
    if value < 0.0 {
        return Err(Error::invalid_value(field, format!("must not be negative, got {value}")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GalleryConfig::default();
        assert_eq!(config.inter_page_spacing, 20.0);
        assert_eq!(config.orientation, PageOrientation::Horizontal);
        assert_eq!(config.transition_style, PageTransitionStyle::Scroll);
        assert_eq!(config.chrome_animation(), Duration::from_millis(150));
        assert_eq!(config.double_tap_timeout(), Duration::from_millis(300));
        assert!(config.show_done_button);
        assert!(!config.show_action_button);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = GalleryConfig::from_toml_str("").unwrap();
        assert_eq!(config, GalleryConfig::default());
    }

    #[test]
    fn test_partial_toml() {
        let config = GalleryConfig::from_toml_str(
            r#"
            inter_page_spacing = 8.0
            orientation = "vertical"
            transition_style = "page_curl"
            show_action_button = true

            [metrics]
            toolbar_height = 49.0
            "#,
        )
        .unwrap();

        assert_eq!(config.inter_page_spacing, 8.0);
        assert_eq!(config.orientation, PageOrientation::Vertical);
        assert_eq!(config.transition_style, PageTransitionStyle::PageCurl);
        assert!(config.show_action_button);
        assert_eq!(config.metrics.toolbar_height, 49.0);
        assert_eq!(config.metrics.navigation_bar_height, 44.0);
    }

    #[test]
    fn test_malformed_toml() {
        let err = GalleryConfig::from_toml_str("inter_page_spacing = \"wide\"").unwrap_err();
        assert!(matches!(err, Error::ConfigParse(_)));
    }

    #[test]
    fn test_negative_spacing_rejected() {
        let err = GalleryConfig::from_toml_str("inter_page_spacing = -1.0").unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidValue {
                field: "inter_page_spacing",
                ..
            }
        ));
    }

    #[test]
    fn test_zero_double_tap_timeout_rejected() {
        let config = GalleryConfig {
            double_tap_timeout_ms: 0,
            ..GalleryConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GalleryConfig::default()
            .with_inter_page_spacing(4.0)
            .with_action_button(true)
            .with_done_button(false);

        assert_eq!(config.inter_page_spacing, 4.0);
        assert!(config.show_action_button);
        assert!(!config.show_done_button);
    }
}
