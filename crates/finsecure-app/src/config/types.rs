//! Configuration types

use serde::{Deserialize, Serialize};

use finsecure_core::RiskScore;

/// Application settings (`config.toml`)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub client: ClientSettings,
}

/// Backend connection settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ApiSettings {
    /// Backend base address; falls through to the built-in default when unset
    #[serde(default)]
    pub base_url: Option<String>,
}

/// Client view defaults
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ClientSettings {
    /// Initial slider position; out-of-range values are clamped
    #[serde(default = "default_risk_score")]
    pub default_risk_score: i64,
}

impl ClientSettings {
    pub fn risk_score(&self) -> RiskScore {
        RiskScore::new(self.default_risk_score)
    }
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            default_risk_score: default_risk_score(),
        }
    }
}

fn default_risk_score() -> i64 {
    i64::from(RiskScore::default().value())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();
        assert!(settings.api.base_url.is_none());
        assert_eq!(settings.client.risk_score().value(), 50);
    }

    #[test]
    fn test_partial_settings_fill_defaults() {
        let settings: Settings = toml::from_str("[api]\nbase_url = \"http://api:9000\"\n").unwrap();
        assert_eq!(settings.api.base_url.as_deref(), Some("http://api:9000"));
        assert_eq!(settings.client.default_risk_score, 50);
    }

    #[test]
    fn test_risk_score_out_of_range_is_clamped() {
        let settings: Settings = toml::from_str("[client]\ndefault_risk_score = 140\n").unwrap();
        assert_eq!(settings.client.risk_score(), RiskScore::MAX);
    }
}
