//! MongoDB adapters - the local fire point store.

mod filters;
mod fire_point_reader;

pub use filters::{projection, search_filter, year_filter};
pub use fire_point_reader::MongoFirePointReader;
