// crates/paypoint-core/src/catalog.rs

//! The fixed point collection and the facet values derived from it.

use crate::common::CatalogStats;
use crate::error::{CatalogError, Result};
use crate::model::convert::{point_from_raw, validate_point};
use crate::model::{Facet, Point, PointRaw};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// Distinct values per facet, each sorted ascending (byte-wise lexicographic).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facets {
    pub cities: BTreeSet<String>,
    pub districts: BTreeSet<String>,
    pub types: BTreeSet<String>,
}

impl Facets {
    pub fn values(&self, facet: Facet) -> &BTreeSet<String> {
        match facet {
            Facet::City => &self.cities,
            Facet::District => &self.districts,
            Facet::Type => &self.types,
        }
    }
}

/// Collects the distinct city, district and type values of `points`.
///
/// An empty slice yields empty sets.
pub fn derive_facets(points: &[Point]) -> Facets {
    let mut facets = Facets::default();
    for p in points {
        facets.cities.insert(p.city.clone());
        facets.districts.insert(p.district.clone());
        facets.types.insert(p.kind.clone());
    }
    facets
}

/// The complete, immutable set of payment points.
///
/// Built once (from the embedded dataset, a file, or in memory) and never
/// mutated afterwards. Every point has been validated and ids are unique.
/// Facets are derived at construction and cached for the catalog's lifetime.
#[derive(Debug, Clone, PartialEq)]
pub struct PointCatalog {
    points: Vec<Point>,
    facets: Facets,
}

impl PointCatalog {
    /// Validates raw records and builds the catalog.
    ///
    /// Fails on the first record that is missing a required field, carries an
    /// out-of-range coordinate, or reuses an id.
    pub fn from_raw(raw: Vec<PointRaw>) -> Result<Self> {
        let points = raw
            .into_iter()
            .enumerate()
            .map(|(index, r)| point_from_raw(index, r))
            .collect::<Result<Vec<_>>>()?;
        Self::assemble(points)
    }

    /// Builds the catalog from already-typed points, applying the same checks
    /// as [`PointCatalog::from_raw`].
    pub fn from_points(points: Vec<Point>) -> Result<Self> {
        for (index, p) in points.iter().enumerate() {
            validate_point(index, p)?;
        }
        Self::assemble(points)
    }

    fn assemble(points: Vec<Point>) -> Result<Self> {
        let mut seen: HashMap<u32, usize> = HashMap::with_capacity(points.len());
        for (index, p) in points.iter().enumerate() {
            if let Some(first) = seen.insert(p.id, index) {
                return Err(CatalogError::DuplicateId {
                    id: p.id,
                    first,
                    second: index,
                });
            }
        }

        let facets = derive_facets(&points);
        tracing::debug!(
            points = points.len(),
            cities = facets.cities.len(),
            districts = facets.districts.len(),
            types = facets.types.len(),
            "catalog assembled"
        );
        Ok(Self { points, facets })
    }

    /// All points in catalog order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Linear lookup by id.
    pub fn get(&self, id: u32) -> Option<&Point> {
        self.points.iter().find(|p| p.id == id)
    }

    pub fn facets(&self) -> &Facets {
        &self.facets
    }

    pub fn stats(&self) -> CatalogStats {
        CatalogStats {
            points: self.points.len(),
            cities: self.facets.cities.len(),
            districts: self.facets.districts.len(),
            types: self.facets.types.len(),
        }
    }
}

impl<'a> IntoIterator for &'a PointCatalog {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
