use log::{warn, Level};
use serde::Deserialize;

use crate::dom::{Dom, PageElement};
use crate::error::EffectsError;

/// Id of the optional `<script type="application/json">` element that
/// overrides the defaults below.
pub const CONFIG_ELEMENT_SELECTOR: &str = "script#site-effects-config";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Chatty console while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EffectsConfig {
    pub animated_classes: Vec<String>,
    pub visible_class: String,
    pub root_margin: String,
    pub threshold: f64,
    pub sweep_delay_ms: u32,
    /// Extra room below the fold that still counts as "in view" for the
    /// sweep that runs right after load.
    pub initial_sweep_margin: f64,
    /// Distance above the bottom edge an element must reach before the
    /// scroll sweep reveals it.
    pub scroll_sweep_margin: f64,
    pub header_offset: f64,
    pub image_transition: String,
    pub hero_selector: String,
    pub parallax_factor: f64,
    pub parallax_scale: f64,
    pub button_selector: String,
    pub ripple_size: f64,
    pub ripple_duration_ms: u32,
    pub booking_url: String,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        EffectsConfig {
            animated_classes: ["fade-in", "fade-in-left", "fade-in-right", "fade-in-scale"]
                .iter()
                .map(|class| class.to_string())
                .collect(),
            visible_class: "visible".to_string(),
            root_margin: "0px 0px -50px 0px".to_string(),
            threshold: 0.05,
            sweep_delay_ms: 150,
            initial_sweep_margin: 100.0,
            scroll_sweep_margin: 50.0,
            header_offset: 20.0,
            image_transition: "opacity 0.5s ease".to_string(),
            hero_selector: ".hero-image img".to_string(),
            parallax_factor: 0.15,
            parallax_scale: 1.02,
            button_selector: ".btn".to_string(),
            ripple_size: 100.0,
            ripple_duration_ms: 600,
            booking_url: "https://calendly.com/elsybeauty".to_string(),
        }
    }
}

impl EffectsConfig {
    pub fn from_json(json: &str) -> Result<Self, EffectsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads overrides from the page, falling back to the defaults when the
    /// element is absent or its JSON does not parse.
    pub fn load<D: Dom>(dom: &D) -> Self {
        let Some(text) = dom.query(CONFIG_ELEMENT_SELECTOR).and_then(|el| el.text()) else {
            return EffectsConfig::default();
        };
        match EffectsConfig::from_json(&text) {
            Ok(config) => config,
            Err(e) => {
                warn!("Ignoring page effects config: {}", e);
                EffectsConfig::default()
            }
        }
    }

    /// Selector list matching every element with an entrance animation.
    pub fn animated_selector(&self) -> String {
        self.animated_classes
            .iter()
            .map(|class| format!(".{}", class))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
