//! Live wildfire incident, reshaped from the remote feed's attribute bag.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Feed attribute names, in the order they are requested.
pub const INCIDENT_OUT_FIELDS: [&str; 8] = [
    "IncidentName",
    "POOState",
    "IncidentTypeCategory",
    "IncidentSize",
    "PercentContained",
    "ModifiedOnDateTime",
    "POOCounty",
    "FireDiscoveryDateTime",
];

/// A wildfire incident.
///
/// Values are passed through as the feed reported them. A missing attribute
/// serializes as `null`; keys are never omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IncidentFeature {
    pub name: Option<Value>,
    pub state: Option<Value>,
    #[serde(rename = "type")]
    pub incident_type: Option<Value>,
    pub size: Option<Value>,
    pub percent_contained: Option<Value>,
    pub county: Option<Value>,
    pub discovered: Option<Value>,
    pub last_updated: Option<Value>,
}

impl IncidentFeature {
    /// Builds an incident from a feed attribute bag.
    pub fn from_attributes(attributes: &Map<String, Value>) -> Self {
        let pick = |key: &str| attributes.get(key).filter(|v| !v.is_null()).cloned();

        Self {
            name: pick("IncidentName"),
            state: pick("POOState"),
            incident_type: pick("IncidentTypeCategory"),
            size: pick("IncidentSize"),
            percent_contained: pick("PercentContained"),
            county: pick("POOCounty"),
            discovered: pick("FireDiscoveryDateTime"),
            last_updated: pick("ModifiedOnDateTime"),
        }
    }

    /// Converts the epoch-millisecond timestamps to RFC 3339 strings.
    ///
    /// Zero, non-numeric, or out-of-range values become `None`.
    pub fn with_iso_timestamps(mut self) -> Self {
        self.discovered = self.discovered.as_ref().and_then(epoch_millis_to_iso);
        self.last_updated = self.last_updated.as_ref().and_then(epoch_millis_to_iso);
        self
    }
}

fn epoch_millis_to_iso(value: &Value) -> Option<Value> {
    let millis = value.as_f64().filter(|ms| *ms != 0.0 && ms.is_finite())?;
    let at: DateTime<Utc> = DateTime::from_timestamp_millis(millis as i64)?;
    Some(Value::String(at.to_rfc3339_opts(SecondsFormat::Millis, true)))
}
