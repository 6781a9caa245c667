// crates/paypoint-core/src/query.rs

//! Stateless queries over a point set.
//!
//! Every function here is a pure function of its inputs: nothing is cached
//! and results are recomputed in full on each call. The point sets involved
//! are small and static, so linear scans are all that is needed.

use crate::catalog::PointCatalog;
use crate::geo::{self, haversine_m, Bounds};
use crate::model::{Coordinates, FilterState, Point, UserCoordinate};
use crate::traits::Faceted;
use serde::Serialize;

/// The point closest to the user together with its distance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Nearest<'a> {
    pub point: &'a Point,
    /// Great-circle distance in meters, never negative.
    pub distance_m: f64,
}

/// Output of [`run`]: what the presentation layer renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryResult<'a> {
    /// Points satisfying every active facet, in catalog order.
    pub filtered: Vec<&'a Point>,
    /// Nearest point over the *full* catalog; filters do not apply.
    pub nearest: Option<Nearest<'a>>,
    /// Bounding box of `filtered`.
    pub bounds: Option<Bounds>,
}

impl<'a> QueryResult<'a> {
    pub fn nearest_point(&self) -> Option<&'a Point> {
        self.nearest.map(|n| n.point)
    }

    pub fn nearest_distance_m(&self) -> Option<f64> {
        self.nearest.map(|n| n.distance_m)
    }
}

/// Keeps the points matching every constrained facet of `filters`.
///
/// Order is preserved. An empty [`FilterState`] passes everything through.
/// Accepts any iterator of point references, so results can be refined
/// further: `filter(filter(points, &a), &b)`.
pub fn filter<'a, I>(points: I, filters: &FilterState) -> Vec<&'a Point>
where
    I: IntoIterator<Item = &'a Point>,
{
    points.into_iter().filter(|p| p.matches(filters)).collect()
}

/// Finds the point with the smallest haversine distance to `user`.
///
/// Returns `None` when `user` is absent or `points` is empty. On ties the
/// point appearing first wins.
pub fn nearest<'a, I>(points: I, user: Option<UserCoordinate>) -> Option<Nearest<'a>>
where
    I: IntoIterator<Item = &'a Point>,
{
    let origin: Coordinates = user?.into();
    let mut best: Option<Nearest<'a>> = None;

    for point in points {
        let distance_m = haversine_m(origin, point.coordinates);
        match best {
            // strict comparison keeps the earlier point on ties
            Some(b) if distance_m >= b.distance_m => {}
            _ => best = Some(Nearest { point, distance_m }),
        }
    }
    best
}

/// Distance in meters from `user` to each point, in input order.
pub fn distances<'a, I>(points: I, user: UserCoordinate) -> Vec<(&'a Point, f64)>
where
    I: IntoIterator<Item = &'a Point>,
{
    let origin: Coordinates = user.into();
    points
        .into_iter()
        .map(|p| (p, haversine_m(origin, p.coordinates)))
        .collect()
}

/// Computes the full [`QueryResult`] for one set of inputs.
pub fn run<'a>(
    catalog: &'a PointCatalog,
    filters: &FilterState,
    user: Option<UserCoordinate>,
) -> QueryResult<'a> {
    let filtered = filter(catalog.points(), filters);
    let bounds = geo::bounds(&filtered);
    let nearest = nearest(catalog.points(), user);

    tracing::debug!(
        filtered = filtered.len(),
        nearest = ?nearest.map(|n| n.point.id),
        "query recomputed"
    );

    QueryResult {
        filtered,
        nearest,
        bounds,
    }
}

/// Formats a distance for display: kilometers with one decimal.
///
/// ```
/// assert_eq!(paypoint_core::query::format_distance_km(2_749.6), "2.7 km");
/// ```
pub fn format_distance_km(meters: f64) -> String {
    format!("{:.1} km", meters / 1000.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Facet;

    fn pt(id: u32, city: &str, kind: &str, lat: f64, lng: f64) -> Point {
        Point {
            id,
            name: format!("P{id}"),
            city: city.into(),
            district: "Merkez".into(),
            kind: kind.into(),
            coordinates: Coordinates::new(lat, lng),
            details: String::new(),
        }
    }

    #[test]
    fn filter_is_case_sensitive() {
        let pts = vec![pt(1, "Ankara", "ATM", 39.9, 32.8)];
        assert!(filter(&pts, &FilterState::new().with(Facet::City, "ankara")).is_empty());
        assert_eq!(
            filter(&pts, &FilterState::new().with(Facet::City, "Ankara")).len(),
            1
        );
    }

    #[test]
    fn filter_has_no_partial_matching() {
        let pts = vec![pt(1, "Ankara", "ATM", 39.9, 32.8)];
        let f = FilterState::new().with(Facet::City, "Ank");
        assert!(filter(&pts, &f).is_empty());
    }

    #[test]
    fn nearest_without_user_is_none() {
        let pts = vec![pt(1, "Ankara", "ATM", 39.9, 32.8)];
        assert!(nearest(&pts, None).is_none());
    }

    #[test]
    fn nearest_prefers_first_on_tie() {
        let pts = vec![
            pt(7, "A", "ATM", 41.0, 29.0),
            pt(3, "A", "ATM", 41.0, 29.0),
        ];
        let user = UserCoordinate::new(40.0, 28.0).unwrap();
        assert_eq!(nearest(&pts, Some(user)).unwrap().point.id, 7);
    }

    #[test]
    fn nearest_picks_strictly_closer_later_point() {
        let pts = vec![
            pt(1, "A", "ATM", 41.5, 29.0),
            pt(2, "A", "ATM", 41.1, 29.0),
        ];
        let user = UserCoordinate::new(41.0, 29.0).unwrap();
        assert_eq!(nearest(&pts, Some(user)).unwrap().point.id, 2);
    }

    #[test]
    fn distances_follow_input_order() {
        let pts = vec![
            pt(1, "A", "ATM", 41.0, 29.0),
            pt(2, "A", "ATM", 40.0, 29.0),
        ];
        let user = UserCoordinate::new(41.0, 29.0).unwrap();
        let d = distances(&pts, user);
        assert_eq!(d[0].0.id, 1);
        assert_eq!(d[0].1, 0.0);
        assert!(d[1].1 > 100_000.0);
    }

    #[test]
    fn formats_kilometers() {
        assert_eq!(format_distance_km(0.0), "0.0 km");
        assert_eq!(format_distance_km(12_345.0), "12.3 km");
    }
}
