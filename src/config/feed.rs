//! Remote incident feed configuration (ArcGIS FeatureServer)

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Incident feed settings
#[derive(Debug, Clone, Deserialize)]
pub struct FeedConfig {
    /// Feature layer URL; `/query` is appended per request
    #[serde(default = "default_layer_url")]
    pub layer_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Optional `orderByFields` expression, e.g. `FireDiscoveryDateTime DESC`.
    ///
    /// Only set this when the field is known to exist on the layer: the
    /// service rejects the whole query on an unknown ordering field.
    #[serde(default)]
    pub order_by_fields: Option<String>,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl FeedConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// The configured ordering expression, if present and non-blank.
    pub fn ordering(&self) -> Option<&str> {
        self.order_by_fields
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Validate feed configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.layer_url.starts_with("http://") && !self.layer_url.starts_with("https://") {
            return Err(ValidationError::InvalidFeedUrl);
        }
        if self.timeout_secs == 0 || self.timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            layer_url: default_layer_url(),
            timeout_secs: default_timeout(),
            order_by_fields: None,
            user_agent: default_user_agent(),
        }
    }
}

fn default_layer_url() -> String {
    "https://services3.arcgis.com/T4QMspbfLg3qTGWY/arcgis/rest/services/WFIGS_Incident_Locations_Current/FeatureServer/0".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    "FireGPT/1.0".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_config_defaults() {
        let config = FeedConfig::default();
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert!(config.ordering().is_none());
        assert_eq!(config.user_agent, "FireGPT/1.0");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_blank_ordering_is_absent() {
        let config = FeedConfig {
            order_by_fields: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(config.ordering().is_none());

        let config = FeedConfig {
            order_by_fields: Some(" FireDiscoveryDateTime DESC ".to_string()),
            ..Default::default()
        };
        assert_eq!(config.ordering(), Some("FireDiscoveryDateTime DESC"));
    }

    #[test]
    fn test_validation_invalid_url() {
        let config = FeedConfig {
            layer_url: "ftp://example.com/layer".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_invalid_timeout() {
        let config = FeedConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
