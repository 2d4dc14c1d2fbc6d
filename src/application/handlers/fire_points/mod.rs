//! Fire point query handlers.

mod count_by_year;
mod search_fire_points;

pub use count_by_year::{CountByYearHandler, CountByYearQuery};
pub use search_fire_points::SearchFirePointsHandler;
