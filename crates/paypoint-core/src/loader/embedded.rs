// crates/paypoint-core/src/loader/embedded.rs
use crate::catalog::PointCatalog;
use crate::error::{CatalogError, Result};
use once_cell::sync::OnceCell;

/// The dataset shipped with the build.
static EMBEDDED_JSON: &str = include_str!("../../data/points.json");

// Single in-process cache so the embedded data is parsed and validated once.
static EMBEDDED_CATALOG: OnceCell<PointCatalog> = OnceCell::new();

impl PointCatalog {
    /// The catalog compiled into the binary from `data/points.json`.
    ///
    /// Parsed and validated on first use, then served from a process-wide
    /// cache.
    pub fn embedded() -> Result<Self> {
        EMBEDDED_CATALOG
            .get_or_try_init(|| {
                let catalog = Self::from_json_str(EMBEDDED_JSON)?;
                tracing::info!(points = catalog.len(), "embedded catalog loaded");
                Ok::<_, CatalogError>(catalog)
            })
            .cloned()
    }

    /// Raw JSON of the embedded dataset.
    pub fn embedded_source() -> &'static str {
        EMBEDDED_JSON
    }
}
