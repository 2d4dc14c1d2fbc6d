//! Wire shapes of the ArcGIS FeatureServer query response.

use serde::Deserialize;
use serde_json::{Map, Value};

/// Body of a `/query` response.
///
/// The service reports failures in-band with HTTP 200 and an `error`
/// object, so both shapes are read from the same body. `features` and
/// `attributes` may be absent or `null`; both read as empty.
#[derive(Debug, Deserialize)]
pub struct QueryResponse {
    #[serde(default)]
    features: Option<Vec<Feature>>,
    #[serde(default)]
    pub error: Option<Value>,
}

impl QueryResponse {
    pub fn features(&self) -> &[Feature] {
        self.features.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Deserialize)]
pub struct Feature {
    #[serde(default)]
    attributes: Option<Map<String, Value>>,
}

impl Feature {
    pub fn attributes(&self) -> Map<String, Value> {
        self.attributes.clone().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_features() {
        let body = r#"{"features": [{"attributes": {"IncidentName": "Park"}}, {}]}"#;
        let parsed: QueryResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.features().len(), 2);
        assert!(parsed.features()[1].attributes().is_empty());
        assert!(parsed.error.is_none());
    }

    #[test]
    fn parses_in_band_error() {
        let body = r#"{"error": {"code": 400, "message": "Invalid query"}}"#;
        let parsed: QueryResponse = serde_json::from_str(body).unwrap();
        assert!(parsed.features().is_empty());
        assert_eq!(parsed.error.unwrap()["code"], 400);
    }

    #[test]
    fn null_attribute_bag_reads_as_empty() {
        let body = r#"{"features": [{"attributes": null}, {"attributes": {"IncidentName": "Park"}}]}"#;
        let parsed: QueryResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.features().len(), 2);
        assert!(parsed.features()[0].attributes().is_empty());
        assert_eq!(parsed.features()[1].attributes()["IncidentName"], "Park");
    }

    #[test]
    fn null_feature_list_reads_as_empty() {
        let parsed: QueryResponse = serde_json::from_str(r#"{"features": null}"#).unwrap();
        assert!(parsed.features().is_empty());
        assert!(parsed.error.is_none());
    }
}
