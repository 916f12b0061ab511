use log::{warn, Level};
use serde::Deserialize;
use web_sys::Document;

use crate::reveal::RevealConfig;
use crate::typewriter::TypingDelays;

/// Id of the optional `<script type="application/json">` block that
/// overrides the defaults below.
pub const CONFIG_ELEMENT_ID: &str = "chronicle-config";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub phrases: Vec<String>,
    pub typing: TypingDelays,
    pub reveal: RevealConfig,
    /// Scroll offset past which the scroll-to-top button shows.
    pub scroll_top_threshold: f64,
    /// Hero translation per scrolled pixel.
    pub parallax_rate: f64,
    pub glow_shadow: String,
    pub pulse_ms: u32,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            phrases: [
                "Artificial Intelligence",
                "Machine Learning",
                "Neural Networks",
                "Deep Learning",
                "AI Revolution",
            ]
            .iter()
            .map(|p| p.to_string())
            .collect(),
            typing: TypingDelays::default(),
            reveal: RevealConfig::default(),
            scroll_top_threshold: 300.0,
            parallax_rate: -0.5,
            glow_shadow: "0 0 30px rgba(102, 126, 234, 0.4)".to_string(),
            pulse_ms: 600,
        }
    }
}

impl PageConfig {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Reads overrides from the page, falling back to the defaults when the
    /// block is missing or malformed.
    pub fn from_document(document: &Document) -> Self {
        let Some(json) = document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|element| element.text_content())
        else {
            return Self::default();
        };
        match Self::from_json(&json) {
            Ok(config) => config,
            Err(e) => {
                warn!("Ignoring invalid #{}: {}", CONFIG_ELEMENT_ID, e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_keeps_defaults() {
        assert_eq!(PageConfig::from_json("{}").unwrap(), PageConfig::default());
    }

    #[test]
    fn partial_override_merges_with_defaults() {
        let config = PageConfig::from_json(
            r#"{
                "phrases": ["AI", "ML"],
                "typing": { "hold_full_ms": 1500 },
                "reveal": { "threshold": 0.25, "replay": true }
            }"#,
        )
        .unwrap();

        assert_eq!(config.phrases, vec!["AI", "ML"]);
        assert_eq!(config.typing.hold_full_ms, 1500);
        assert_eq!(config.typing.type_ms, 100);
        assert_eq!(config.reveal.threshold, 0.25);
        assert!(config.reveal.replay);
        assert_eq!(config.reveal.bottom_margin_px, 50.0);
        assert_eq!(config.reveal.groups.len(), 3);
        assert_eq!(config.scroll_top_threshold, 300.0);
    }

    #[test]
    fn custom_groups_default_to_no_stagger() {
        let config = PageConfig::from_json(
            r#"{ "reveal": { "groups": [{ "selector": ".quote" }] } }"#,
        )
        .unwrap();
        assert_eq!(config.reveal.groups[0].selector, ".quote");
        assert!(!config.reveal.groups[0].stagger);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(PageConfig::from_json("{ phrases: ").is_err());
    }
}
