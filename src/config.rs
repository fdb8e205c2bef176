use log::{warn, Level};
use serde::Deserialize;

use crate::error::{self, SiteError};

/// Id of the optional JSON island in `index.html` that overrides the defaults.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Timing and geometry knobs shared by every interactive piece of the page.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub slide_interval_ms: u32,
    pub carousel_step_px: f64,
    pub banner_delay_ms: u32,
    pub submit_delay_ms: u32,
    pub header_scroll_threshold_px: f64,
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
    pub parallax_factor_px: f64,
    pub parallax_scale: f64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            slide_interval_ms: 5000,
            carousel_step_px: 400.0,
            banner_delay_ms: 1000,
            submit_delay_ms: 1000,
            header_scroll_threshold_px: 50.0,
            reveal_threshold: 0.2,
            reveal_root_margin: "0px 0px -50px 0px".to_string(),
            parallax_factor_px: 50.0,
            parallax_scale: 1.1,
        }
    }
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self, SiteError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }

    /// Reads the config island from the current document, falling back to
    /// defaults when it is absent or malformed.
    pub fn load() -> Self {
        let raw = match error::document() {
            Ok(document) => document
                .get_element_by_id(CONFIG_ELEMENT_ID)
                .and_then(|el| el.text_content()),
            Err(e) => {
                warn!("Using default site config: {}", e);
                None
            }
        };

        match raw {
            Some(raw) => Self::from_json(&raw).unwrap_or_else(|e| {
                warn!("Ignoring site config island: {}", e);
                Self::default()
            }),
            None => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_island_yields_defaults() {
        assert_eq!(SiteConfig::from_json("  \n").unwrap(), SiteConfig::default());
    }

    #[test]
    fn partial_island_overrides_only_named_fields() {
        let config = SiteConfig::from_json(r#"{"slide_interval_ms": 8000}"#).unwrap();
        assert_eq!(config.slide_interval_ms, 8000);
        assert_eq!(config.carousel_step_px, 400.0);
        assert_eq!(config.reveal_root_margin, "0px 0px -50px 0px");
    }

    #[test]
    fn malformed_island_is_an_error() {
        let err = SiteConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, SiteError::Config(_)));
    }
}
