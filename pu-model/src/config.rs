//! Site-wide tunables.
//!
//! Both apps start from `SiteConfig::default()`. A page can override any
//! field by putting a JSON object in the `data-config` attribute of the app's
//! root element; missing fields keep their defaults.

use crate::locale::Locale;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    /// URL of the paper collection
    pub papers_url: String,
    /// URL of the chart statistics
    pub statistics_url: String,
    /// Quiet period before a burst of resize events is acted on
    pub resize_debounce_ms: u32,
    /// Delay between a chart container becoming visible and the redraw
    pub redraw_delay_ms: u32,
    /// Fraction of a container that must be visible to count as intersecting
    pub visibility_threshold: f64,
    /// Scroll offset (px) past which the navbar switches to its compact style
    pub navbar_scroll_threshold: f64,
    /// Height (px) of the fixed header, subtracted from anchor scroll targets
    pub header_offset: f64,
    /// Viewports wider than this (px) never show the mobile menu
    pub mobile_breakpoint: f64,
    /// Per-card delay step (seconds) for the staggered entrance animation
    pub card_stagger_secs: f64,
    /// Language of captions, buttons and messages
    pub locale: Locale,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            papers_url: "data/papers.json".to_string(),
            statistics_url: "data/statistics.json".to_string(),
            resize_debounce_ms: 250,
            redraw_delay_ms: 100,
            visibility_threshold: 0.1,
            navbar_scroll_threshold: 100.0,
            header_offset: 80.0,
            mobile_breakpoint: 768.0,
            card_stagger_secs: 0.1,
            locale: Locale::Zh,
        }
    }
}

impl SiteConfig {
    /// Parse a (possibly partial) JSON override.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse an optional override, falling back to defaults on absence or error.
    pub fn from_attr(attr: Option<&str>) -> Self {
        match attr.map(str::trim).filter(|a| !a.is_empty()) {
            Some(json) => Self::from_json(json).unwrap_or_else(|e| {
                log::warn!("Ignoring invalid data-config: {}", e);
                Self::default()
            }),
            None => Self::default(),
        }
    }
}
