//! Translation of fire point queries into MongoDB filter documents.

use mongodb::bson::{Bson, Document};

use crate::domain::fire_point::{
    FirePointQuery, FIELD_FIRE_SEASON, FIELD_MGMT_ORG_ID, FIELD_PRESCRIBED_FIRE,
    FIRE_POINT_FIELDS,
};

/// Matches a fire season stored either as the integer or as its decimal string.
///
/// The imported collection holds both representations, so both are always
/// queried: `{"$or": [{"FIRESEASON": "2024"}, {"FIRESEASON": 2024}]}`.
pub fn year_filter(year: i64) -> Document {
    let mut as_text = Document::new();
    as_text.insert(FIELD_FIRE_SEASON, year.to_string());

    let mut as_number = Document::new();
    as_number.insert(FIELD_FIRE_SEASON, year);

    let mut filter = Document::new();
    filter.insert(
        "$or",
        vec![Bson::Document(as_text), Bson::Document(as_number)],
    );
    filter
}

/// Builds the filter document for a search. An empty query matches everything.
pub fn search_filter(query: &FirePointQuery) -> Document {
    let mut filter = match query.year {
        Some(year) => year_filter(year),
        None => Document::new(),
    };

    if let Some(flag) = query.prescribed {
        filter.insert(FIELD_PRESCRIBED_FIRE, flag.as_str());
    }

    if let Some(ref org) = query.org {
        filter.insert(FIELD_MGMT_ORG_ID, org.as_str());
    }

    filter
}

/// Projection returning only the documented fields, never `_id`.
pub fn projection() -> Document {
    let mut projection = Document::new();
    projection.insert("_id", 0);
    for field in FIRE_POINT_FIELDS {
        projection.insert(field, 1);
    }
    projection
}
