//! Historical fire location point as stored in the local document store.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::LooseValue;

/// Store field holding the fire season (year).
pub const FIELD_FIRE_SEASON: &str = "FIRESEASON";
/// Store field holding the prescribed-fire flag.
pub const FIELD_PRESCRIBED_FIRE: &str = "PRESCRIBEDFIRE";
/// Store field holding the managing organization identifier.
pub const FIELD_MGMT_ORG_ID: &str = "MGMTORGID";

/// Fields returned for every fire point, in store naming.
pub const FIRE_POINT_FIELDS: [&str; 8] = [
    "ID",
    "NAME",
    FIELD_FIRE_SEASON,
    FIELD_MGMT_ORG_ID,
    FIELD_PRESCRIBED_FIRE,
    "LATITUDE",
    "LONGITUDE",
    "MAPNAME",
];

/// A fire location point.
///
/// Serialized with the store's own upper-case field names. Every field is
/// optional because the imported data is not uniform; the store's internal
/// `_id` is deliberately absent from this type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FirePoint {
    #[serde(rename = "ID", default)]
    pub id: Option<LooseValue>,

    #[serde(rename = "NAME", default)]
    pub name: Option<String>,

    #[serde(rename = "FIRESEASON", default)]
    pub fire_season: Option<LooseValue>,

    #[serde(rename = "MGMTORGID", default)]
    pub mgmt_org_id: Option<String>,

    /// `Y`, `N`, or absent.
    #[serde(rename = "PRESCRIBEDFIRE", default)]
    pub prescribed_fire: Option<String>,

    #[serde(rename = "LATITUDE", default)]
    pub latitude: Option<LooseValue>,

    #[serde(rename = "LONGITUDE", default)]
    pub longitude: Option<LooseValue>,

    #[serde(rename = "MAPNAME", default)]
    pub map_name: Option<String>,
}

/// Number of fire points recorded for a fire season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearCount {
    pub year: i64,
    pub count: u64,
}

impl YearCount {
    pub fn new(year: i64, count: u64) -> Self {
        Self { year, count }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_mixed_representations() {
        let point: FirePoint = serde_json::from_value(json!({
            "ID": "1042",
            "NAME": "Deadman Creek",
            "FIRESEASON": 2024,
            "MGMTORGID": "AKS",
            "PRESCRIBEDFIRE": "N",
            "LATITUDE": 64.85,
            "LONGITUDE": "-147.72",
            "MAPNAME": "Fairbanks"
        }))
        .unwrap();

        assert_eq!(point.id, Some(LooseValue::from("1042")));
        assert_eq!(point.fire_season, Some(LooseValue::Int(2024)));
        assert_eq!(point.latitude, Some(LooseValue::Float(64.85)));
        assert_eq!(point.longitude, Some(LooseValue::from("-147.72")));
    }

    #[test]
    fn missing_fields_become_null() {
        let point: FirePoint = serde_json::from_value(json!({"NAME": "Unnamed"})).unwrap();
        let out = serde_json::to_value(&point).unwrap();
        assert_eq!(out["NAME"], json!("Unnamed"));
        assert_eq!(out["FIRESEASON"], json!(null));
        assert_eq!(out.as_object().unwrap().len(), FIRE_POINT_FIELDS.len());
    }

    #[test]
    fn serialized_point_never_carries_internal_id() {
        let point: FirePoint =
            serde_json::from_value(json!({"_id": "65a1", "NAME": "Hidden"})).unwrap();
        let out = serde_json::to_value(&point).unwrap();
        assert!(out.get("_id").is_none());
    }

    #[test]
    fn year_count_serializes_flat() {
        let json = serde_json::to_value(YearCount::new(2024, 17)).unwrap();
        assert_eq!(json, json!({"year": 2024, "count": 17}));
    }
}
