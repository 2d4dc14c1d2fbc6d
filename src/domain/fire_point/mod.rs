//! Fire point module - historical fire location records and their filters.

#[allow(clippy::module_inception)]
mod fire_point;
mod query;

pub use fire_point::{
    FirePoint, YearCount, FIELD_FIRE_SEASON, FIELD_MGMT_ORG_ID, FIELD_PRESCRIBED_FIRE,
    FIRE_POINT_FIELDS,
};
pub use query::{FirePointQuery, PrescribedFlag};
