use leptos::logging::warn;
use serde::Deserialize;

/// Storage slot used when no configuration overrides it.
pub const DEFAULT_STORAGE_KEY: &str = "projectRatings";

/// Shown instead of the list when no review matches the filter.
pub const DEFAULT_EMPTY_MESSAGE: &str = "No reviews yet. Be the first to share your feedback!";

/// Widget settings. Every field is optional when deserialized.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct WidgetConfig {
    pub storage_key: String,
    pub toast_duration_ms: u32,
    pub empty_message: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            toast_duration_ms: 3000,
            empty_message: DEFAULT_EMPTY_MESSAGE.to_string(),
        }
    }
}

impl WidgetConfig {
    /// Parses a JSON object, falling back to defaults for absent fields.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Reads `STAR_REVIEWS_CONFIG` as it was set at build time, so the server
    /// render and the wasm bundle agree on the same settings.
    pub fn from_build_env() -> Self {
        match option_env!("STAR_REVIEWS_CONFIG") {
            Some(raw) => Self::from_json(raw).unwrap_or_else(|err| {
                warn!("[CONFIG] Ignoring invalid STAR_REVIEWS_CONFIG: {}", err);
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
    fn partial_json_keeps_defaults() {
        let config = WidgetConfig::from_json(r#"{"storage_key":"demo"}"#).unwrap();
        assert_eq!(config.storage_key, "demo");
        assert_eq!(config.toast_duration_ms, 3000);
        assert_eq!(config.empty_message, DEFAULT_EMPTY_MESSAGE);
    }
}
