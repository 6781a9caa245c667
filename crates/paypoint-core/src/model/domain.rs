// crates/paypoint-core/src/model/domain.rs
use crate::error::{CoordinateError, UnknownFacet};
use crate::geo::check_lat_lng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A latitude/longitude pair in degrees.
///
/// Serialized as a two-element `[lat, lng]` array, the layout used by the
/// dataset files.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Checks that both values are finite and inside their degree ranges.
    pub fn validate(self) -> Result<Self, CoordinateError> {
        check_lat_lng(self.lat, self.lng)?;
        Ok(self)
    }
}

impl From<[f64; 2]> for Coordinates {
    fn from([lat, lng]: [f64; 2]) -> Self {
        Self { lat, lng }
    }
}

impl From<Coordinates> for [f64; 2] {
    fn from(c: Coordinates) -> Self {
        [c.lat, c.lng]
    }
}

/// A payment point. Immutable once the catalog is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub id: u32,
    pub name: String,
    pub city: String,
    pub district: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub coordinates: Coordinates,
    #[serde(default)]
    pub details: String,
}

impl Point {
    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn district(&self) -> &str {
        &self.district
    }

    /// The `type` attribute (`ATM`, `Şube`, ...).
    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn details(&self) -> &str {
        &self.details
    }

    pub fn coordinates(&self) -> Coordinates {
        self.coordinates
    }
}

/// The user's position, only ever constructed from a complete, valid fix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UserCoordinate {
    lat: f64,
    lng: f64,
}

impl UserCoordinate {
    pub fn new(lat: f64, lng: f64) -> Result<Self, CoordinateError> {
        check_lat_lng(lat, lng)?;
        Ok(Self { lat, lng })
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lng(&self) -> f64 {
        self.lng
    }
}

impl From<UserCoordinate> for Coordinates {
    fn from(u: UserCoordinate) -> Self {
        Coordinates::new(u.lat, u.lng)
    }
}

/// A categorical attribute used for exact-match filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Facet {
    City,
    District,
    Type,
}

impl Facet {
    pub const ALL: [Facet; 3] = [Facet::City, Facet::District, Facet::Type];

    pub fn as_str(self) -> &'static str {
        match self {
            Facet::City => "city",
            Facet::District => "district",
            Facet::Type => "type",
        }
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Facet {
    type Err = UnknownFacet;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "city" => Ok(Facet::City),
            "district" => Ok(Facet::District),
            "type" | "kind" => Ok(Facet::Type),
            _ => Err(UnknownFacet(s.to_owned())),
        }
    }
}

/// Selected value per facet. `None` means "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub district: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`FilterState::set`].
    pub fn with(mut self, facet: Facet, value: impl Into<String>) -> Self {
        self.set(facet, value);
        self
    }

    /// Selects `value` for `facet`. An empty or whitespace-only value clears it.
    ///
    /// Non-empty values are stored verbatim; matching is exact.
    pub fn set(&mut self, facet: Facet, value: impl Into<String>) {
        let value = value.into();
        *self.slot_mut(facet) = if value.trim().is_empty() {
            None
        } else {
            Some(value)
        };
    }

    pub fn clear(&mut self, facet: Facet) {
        *self.slot_mut(facet) = None;
    }

    /// The selected value for `facet`.
    ///
    /// Blank values count as unselected, whichever way the state was built
    /// (field literal, deserialization or [`FilterState::set`]).
    pub fn get(&self, facet: Facet) -> Option<&str> {
        let slot = match facet {
            Facet::City => &self.city,
            Facet::District => &self.district,
            Facet::Type => &self.kind,
        };
        slot.as_deref().filter(|v| !v.trim().is_empty())
    }

    /// No facet carries a constraint.
    pub fn is_empty(&self) -> bool {
        self.active().next().is_none()
    }

    /// The constrained facets with their selected values, in [`Facet::ALL`] order.
    pub fn active(&self) -> impl Iterator<Item = (Facet, &str)> + '_ {
        Facet::ALL
            .into_iter()
            .filter_map(move |facet| self.get(facet).map(|v| (facet, v)))
    }

    fn slot_mut(&mut self, facet: Facet) -> &mut Option<String> {
        match facet {
            Facet::City => &mut self.city,
            Facet::District => &mut self.district,
            Facet::Type => &mut self.kind,
        }
    }
}
