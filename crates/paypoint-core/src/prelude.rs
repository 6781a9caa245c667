//! paypoint-core prelude: bring common types and traits into scope.

pub use crate::catalog::{derive_facets, Facets, PointCatalog};
pub use crate::common::CatalogStats;
pub use crate::error::{CatalogError, CoordinateError, LocationError, Result};
pub use crate::geo::{haversine_m, Bounds, DEFAULT_CENTER, DEFAULT_ZOOM};
pub use crate::location::{
    FixedLocation, Geolocation, LocationEvent, LocationProvider, LocationReply, LocationState,
    NoLocation,
};
pub use crate::model::{Coordinates, Facet, FilterState, Point, UserCoordinate};
pub use crate::query::{self, Nearest, QueryResult};
pub use crate::session::LocatorSession;
pub use crate::traits::{Faceted, Located};
