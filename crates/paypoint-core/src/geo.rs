// crates/paypoint-core/src/geo.rs

//! Spherical-earth helpers: coordinate checks, haversine distance, bounds.

use crate::error::CoordinateError;
use crate::model::Coordinates;
use crate::traits::Located;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Mean Earth radius in meters (IUGG).
pub const EARTH_RADIUS_M: f64 = 6_371_008.8;

const DEG_TO_RAD: f64 = PI / 180.0;

/// Initial map center (central İstanbul) when nothing else is shown.
pub const DEFAULT_CENTER: Coordinates = Coordinates::new(41.0082, 28.9784);

/// Initial slippy-map zoom level.
pub const DEFAULT_ZOOM: u8 = 10;

/// Validates a latitude/longitude pair in degrees.
pub fn check_lat_lng(lat: f64, lng: f64) -> Result<(), CoordinateError> {
    if !lat.is_finite() || !lng.is_finite() {
        return Err(CoordinateError::NotFinite { lat, lng });
    }
    if !(-90.0..=90.0).contains(&lat) {
        return Err(CoordinateError::Latitude(lat));
    }
    if !(-180.0..=180.0).contains(&lng) {
        return Err(CoordinateError::Longitude(lng));
    }
    Ok(())
}

/// Great-circle distance in meters between two coordinates.
///
/// Uses the haversine formula on a sphere of radius [`EARTH_RADIUS_M`].
/// Identical inputs yield exactly `0.0`.
///
/// ```
/// use paypoint_core::geo::haversine_m;
/// use paypoint_core::Coordinates;
///
/// // One degree of latitude is roughly 111 km.
/// let d = haversine_m(Coordinates::new(0.0, 0.0), Coordinates::new(1.0, 0.0));
/// assert!((d - 111_195.0).abs() < 10.0);
/// ```
pub fn haversine_m(from: Coordinates, to: Coordinates) -> f64 {
    let lat1_rad = from.lat * DEG_TO_RAD;
    let lat2_rad = to.lat * DEG_TO_RAD;
    let delta_lat = (to.lat - from.lat) * DEG_TO_RAD;
    let delta_lng = (to.lng - from.lng) * DEG_TO_RAD;

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    // rounding can push `a` just past 1 for antipodal points
    let c = 2.0 * a.min(1.0).sqrt().asin();

    EARTH_RADIUS_M * c
}

/// Axis-aligned latitude/longitude box around a set of points.
///
/// Used by the presentation layer to fit the map view to the filtered
/// markers. Does not handle antimeridian wraparound.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl Bounds {
    /// A degenerate box holding a single coordinate.
    pub fn around(c: Coordinates) -> Self {
        Self {
            south: c.lat,
            west: c.lng,
            north: c.lat,
            east: c.lng,
        }
    }

    /// Grows the box to include `c`.
    pub fn extend(&mut self, c: Coordinates) {
        self.south = self.south.min(c.lat);
        self.north = self.north.max(c.lat);
        self.west = self.west.min(c.lng);
        self.east = self.east.max(c.lng);
    }

    pub fn contains(&self, c: Coordinates) -> bool {
        (self.south..=self.north).contains(&c.lat) && (self.west..=self.east).contains(&c.lng)
    }

    pub fn center(&self) -> Coordinates {
        Coordinates::new(
            (self.south + self.north) / 2.0,
            (self.west + self.east) / 2.0,
        )
    }
}

/// Bounding box of `items`, or `None` when there are none.
pub fn bounds<I>(items: I) -> Option<Bounds>
where
    I: IntoIterator,
    I::Item: Located,
{
    let mut iter = items.into_iter();
    let mut out = Bounds::around(iter.next()?.location());
    for item in iter {
        out.extend(item.location());
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_point_is_zero() {
        let c = Coordinates::new(40.99, 29.03);
        assert_eq!(haversine_m(c, c), 0.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Coordinates::new(40.99, 29.03);
        let b = Coordinates::new(39.92, 32.85);
        assert!((haversine_m(a, b) - haversine_m(b, a)).abs() < 1e-6);
    }

    #[test]
    fn istanbul_to_ankara() {
        // Kadıköy -> Kızılay, roughly 350 km as the crow flies
        let d = haversine_m(
            Coordinates::new(40.99, 29.03),
            Coordinates::new(39.92, 32.85),
        );
        assert!((340_000.0..360_000.0).contains(&d), "{d}");
    }

    #[test]
    fn antipodes_do_not_produce_nan() {
        let d = haversine_m(Coordinates::new(0.0, 0.0), Coordinates::new(0.0, 180.0));
        assert!((d - PI * EARTH_RADIUS_M).abs() < 1.0);
    }

    #[test]
    fn check_lat_lng_boundaries() {
        assert!(check_lat_lng(90.0, -180.0).is_ok());
        assert_eq!(
            check_lat_lng(-90.1, 0.0),
            Err(CoordinateError::Latitude(-90.1))
        );
        assert_eq!(
            check_lat_lng(0.0, 180.1),
            Err(CoordinateError::Longitude(180.1))
        );
        assert!(matches!(
            check_lat_lng(0.0, f64::INFINITY),
            Err(CoordinateError::NotFinite { .. })
        ));
    }

    #[test]
    fn bounds_cover_all_points() {
        let pts = [
            Coordinates::new(40.99, 29.03),
            Coordinates::new(41.04, 29.00),
            Coordinates::new(39.92, 32.85),
        ];
        let b = bounds(pts).unwrap();
        assert_eq!(b.south, 39.92);
        assert_eq!(b.north, 41.04);
        assert_eq!(b.west, 29.00);
        assert_eq!(b.east, 32.85);
        assert!(pts.iter().all(|p| b.contains(*p)));
    }

    #[test]
    fn bounds_of_nothing() {
        assert_eq!(bounds(Vec::<Coordinates>::new()), None);
    }
}
