//! In-memory adapters for tests and local development.

mod fire_point_reader;

pub use fire_point_reader::InMemoryFirePointReader;
