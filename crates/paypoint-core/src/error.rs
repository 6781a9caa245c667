// crates/paypoint-core/src/error.rs
use thiserror::Error;

/// Errors raised while building or loading a [`PointCatalog`](crate::PointCatalog).
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("dataset not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("snapshot error: {0}")]
    Bincode(#[from] bincode::Error),

    /// A record failed validation. `index` is its position in the source list.
    #[error("invalid point at index {index}{}: {reason}", describe_id(.id))]
    InvalidPoint {
        index: usize,
        id: Option<u32>,
        reason: String,
    },

    #[error("duplicate point id {id} (records at index {first} and {second})")]
    DuplicateId { id: u32, first: usize, second: usize },

    #[error(transparent)]
    InvalidCoordinate(#[from] CoordinateError),

    #[error("unsupported dataset format: {0}")]
    UnsupportedFormat(String),
}

fn describe_id(id: &Option<u32>) -> String {
    match id {
        Some(id) => format!(" (id {id})"),
        None => String::new(),
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;

/// A latitude/longitude pair that cannot be used for distance math.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CoordinateError {
    #[error("coordinate is not finite: ({lat}, {lng})")]
    NotFinite { lat: f64, lng: f64 },

    #[error("latitude {0} outside [-90, 90]")]
    Latitude(f64),

    #[error("longitude {0} outside [-180, 180]")]
    Longitude(f64),
}

/// Reasons a geolocation request ends without a coordinate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LocationError {
    #[error("geolocation capability unavailable")]
    Unavailable,

    #[error("geolocation permission denied")]
    Denied,

    #[error("position unavailable: {0}")]
    PositionUnavailable(String),

    #[error("geolocation request timed out")]
    Timeout,

    #[error("geolocation request dropped without an answer")]
    Dropped,

    #[error("provider returned an invalid coordinate: {0}")]
    Invalid(#[from] CoordinateError),
}

/// A facet name other than `city`, `district` or `type`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown facet '{0}' (expected city, district or type)")]
pub struct UnknownFacet(pub String);
