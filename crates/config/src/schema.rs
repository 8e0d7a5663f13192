use serde::{Deserialize, Serialize};

/// Root configuration structure parsed from `sentinel.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SentinelConfig {
    /// Synthetic metrics feed settings.
    pub feed: FeedConfig,
    /// AI log-analyst settings.
    pub analyst: AnalystConfig,
    /// Console behaviour.
    pub ui: UiConfig,
}

/// Settings for the background metrics feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Milliseconds between window advances.
    pub interval_ms: u64,
    /// Fixed RNG seed — set for reproducible demo streams, unset for entropy.
    pub seed: Option<u64>,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            interval_ms: 2_000,
            seed: None,
        }
    }
}

/// Settings for the AI log analyst.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalystConfig {
    /// Completion model identifier.
    pub model: String,
    /// Base URL of the generative-language API.
    pub endpoint: String,
    /// Name of the environment variable holding the API key.
    pub api_key_env: String,
}

impl Default for AnalystConfig {
    fn default() -> Self {
        Self {
            model:       "gemini-2.5-flash".to_string(),
            endpoint:    "https://generativelanguage.googleapis.com/v1beta".to_string(),
            api_key_env: "API_KEY".to_string(),
        }
    }
}

/// Console behaviour settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Milliseconds between input polls / redraws.
    pub poll_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { poll_ms: 250 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_falls_back_field_wise() {
        let cfg: SentinelConfig = toml::from_str(
            r#"
            [feed]
            interval_ms = 500
            "#,
        )
        .unwrap();

        assert_eq!(cfg.feed.interval_ms, 500);
        assert_eq!(cfg.feed.seed, None);
        assert_eq!(cfg.analyst.model, "gemini-2.5-flash");
        assert_eq!(cfg.ui.poll_ms, 250);
    }

    #[test]
    fn seed_is_parsed_when_present() {
        let cfg: SentinelConfig = toml::from_str(
            r#"
            [feed]
            seed = 42

            [analyst]
            api_key_env = "GEMINI_KEY"
            "#,
        )
        .unwrap();

        assert_eq!(cfg.feed.seed, Some(42));
        assert_eq!(cfg.analyst.api_key_env, "GEMINI_KEY");
    }
}
