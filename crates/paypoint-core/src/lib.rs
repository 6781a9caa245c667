// crates/paypoint-core/src/lib.rs

//! # paypoint-core
//!
//! A fixed catalog of payment points with the queries a map-based locator
//! needs: facet values for the filter selectors, exact-match facet
//! filtering, and the nearest point to the user's position.
//!
//! ```
//! use paypoint_core::prelude::*;
//!
//! let catalog = PointCatalog::embedded()?;
//! let istanbul = FilterState::new().with(Facet::City, "İstanbul");
//! let user = UserCoordinate::new(41.0, 29.0).ok();
//!
//! let result = query::run(&catalog, &istanbul, user);
//! assert!(result.filtered.iter().all(|p| p.city() == "İstanbul"));
//! assert!(result.nearest.is_some());
//! # Ok::<(), CatalogError>(())
//! ```

pub mod catalog;
pub mod common;
pub mod error;
pub mod geo;
pub mod loader;
pub mod location;
pub mod model;
pub mod prelude;
pub mod query;
pub mod session;
pub mod traits;

// Re-exports
pub use crate::catalog::{derive_facets, Facets, PointCatalog};
pub use crate::common::CatalogStats;
pub use crate::error::{CatalogError, CoordinateError, LocationError, Result, UnknownFacet};
pub use crate::geo::Bounds;
pub use crate::location::{
    FixedLocation, Geolocation, LocationEvent, LocationProvider, LocationReply, LocationState,
    NoLocation,
};
pub use crate::model::{Coordinates, Facet, FilterState, Point, PointRaw, UserCoordinate};
pub use crate::query::{Nearest, QueryResult};
pub use crate::session::LocatorSession;
