// crates/paypoint-core/src/common.rs
use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for the catalog.
///
/// Returned by [`PointCatalog::stats`](crate::PointCatalog::stats); the facet
/// counts are the number of distinct values per facet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStats {
    pub points: usize,
    pub cities: usize,
    pub districts: usize,
    pub types: usize,
}
