// crates/paypoint-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the Physical Layer (I/O, Decompression) and delegates to the
//! payload parsers (JSON source vs bincode snapshot). Every path ends in
//! [`PointCatalog::from_raw`] or [`PointCatalog::from_points`], so loaded data
//! is always validated.

use crate::catalog::PointCatalog;
use crate::error::{CatalogError, Result};
#[cfg(feature = "json")]
use crate::model::raw::PointsRaw;
use crate::model::Point;
use bincode::Options;
use std::io::Read;
use std::path::{Path, PathBuf};

mod builder;
mod common_io;
#[cfg(feature = "json")]
mod embedded;

/// Upper bound on snapshot size, guards against corrupt length prefixes.
const SNAPSHOT_LIMIT: u64 = 64 * 1024 * 1024;

pub(crate) fn snapshot_options() -> impl Options {
    bincode::DefaultOptions::new().with_limit(SNAPSHOT_LIMIT)
}

/// On-disk dataset layouts, picked by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// `.json` or `.json.gz`
    Json { gzip: bool },
    /// `.bin` or `.bin.gz`
    Snapshot { gzip: bool },
}

impl SourceFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();
        let (stem, gzip) = match name.strip_suffix(".gz") {
            Some(stem) => (stem, true),
            None => (name.as_str(), false),
        };

        if stem.ends_with(".json") {
            Ok(SourceFormat::Json { gzip })
        } else if stem.ends_with(".bin") {
            Ok(SourceFormat::Snapshot { gzip })
        } else {
            Err(CatalogError::UnsupportedFormat(format!(
                "{} (expected .json, .json.gz, .bin or .bin.gz)",
                path.display()
            )))
        }
    }
}

impl PointCatalog {
    /// Directory holding the dataset shipped with the crate.
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_dataset_filename() -> &'static str {
        "points.json"
    }

    /// **Standard Loader:** reads a dataset file, format chosen by extension.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let format = SourceFormat::from_path(path)?;

        let catalog = match format {
            SourceFormat::Json { gzip } => {
                let reader = common_io::open_stream(path, gzip)?;
                Self::read_json(reader)?
            }
            SourceFormat::Snapshot { gzip } => {
                let reader = common_io::open_stream(path, gzip)?;
                Self::read_snapshot(reader)?
            }
        };

        tracing::info!(
            path = %path.display(),
            ?format,
            points = catalog.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Parses a JSON array of point records.
    ///
    /// Only the array itself must be well-formed JSON; a record with a
    /// missing or wrongly typed field fails as [`CatalogError::InvalidPoint`].
    #[cfg(feature = "json")]
    pub fn from_json_str(json: &str) -> Result<Self> {
        let records: Vec<serde_json::Value> = serde_json::from_str(json)?;
        Self::from_raw(raw_records(records)?)
    }

    /// Parses a JSON array of point records from a reader.
    #[cfg(feature = "json")]
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        let records: Vec<serde_json::Value> = serde_json::from_reader(reader)?;
        Self::from_raw(raw_records(records)?)
    }

    /// Rebuilds a catalog from snapshot bytes (see `save_as` / `to_bytes`).
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let points: Vec<Point> = snapshot_options().deserialize(data)?;
        Self::from_points(points)
    }

    #[cfg(feature = "json")]
    fn read_json(reader: Box<dyn Read>) -> Result<Self> {
        Self::from_json_reader(reader)
    }

    #[cfg(not(feature = "json"))]
    fn read_json(_reader: Box<dyn Read>) -> Result<Self> {
        Err(CatalogError::UnsupportedFormat(
            "JSON sources need the 'json' feature".into(),
        ))
    }

    fn read_snapshot(reader: Box<dyn Read>) -> Result<Self> {
        let points: Vec<Point> = snapshot_options().deserialize_from(reader)?;
        Self::from_points(points)
    }
}

/// Decodes each record on its own so a type error names its record.
#[cfg(feature = "json")]
fn raw_records(records: Vec<serde_json::Value>) -> Result<PointsRaw> {
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            let id = record
                .get("id")
                .and_then(serde_json::Value::as_u64)
                .and_then(|id| u32::try_from(id).ok());
            serde_json::from_value(record).map_err(|e| CatalogError::InvalidPoint {
                index,
                id,
                reason: e.to_string(),
            })
        })
        .collect()
}
