// crates/paypoint-core/src/model/mod.rs
pub mod convert;
pub mod domain;
pub mod raw;

pub use domain::{Coordinates, Facet, FilterState, Point, UserCoordinate};
pub use raw::PointRaw;
