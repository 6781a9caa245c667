// crates/paypoint-core/src/loader/builder.rs
#![cfg(feature = "builder")]

use super::{snapshot_options, SourceFormat};
use crate::catalog::PointCatalog;
use crate::error::{CatalogError, Result};
use bincode::Options;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::{write::GzEncoder, Compression};

impl PointCatalog {
    /// Writes a bincode snapshot of the catalog.
    ///
    /// The path must end in `.bin` or `.bin.gz`; the latter is gzip-compressed
    /// (feature `compact`). Snapshots load back through
    /// [`PointCatalog::load_from_path`].
    pub fn save_as(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let gzip = match SourceFormat::from_path(path)? {
            SourceFormat::Snapshot { gzip } => gzip,
            SourceFormat::Json { .. } => {
                return Err(CatalogError::UnsupportedFormat(format!(
                    "{}: snapshots are written as .bin or .bin.gz",
                    path.display()
                )))
            }
        };

        let mut writer = BufWriter::new(File::create(path)?);
        if gzip {
            self.write_gzip(&mut writer, path)?;
        } else {
            self.write_snapshot(&mut writer)?;
        }
        writer.flush()?;

        tracing::info!(path = %path.display(), points = self.len(), gzip, "snapshot written");
        Ok(())
    }

    /// Serializes the points into `writer` in snapshot format.
    pub fn write_snapshot<W: Write>(&self, writer: W) -> Result<()> {
        snapshot_options().serialize_into(writer, self.points())?;
        Ok(())
    }

    /// Snapshot bytes, suitable for [`PointCatalog::from_bytes`].
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(snapshot_options().serialize(self.points())?)
    }

    #[cfg(feature = "compact")]
    fn write_gzip<W: Write>(&self, writer: W, _path: &Path) -> Result<()> {
        let mut encoder = GzEncoder::new(writer, Compression::default());
        self.write_snapshot(&mut encoder)?;
        encoder.finish()?;
        Ok(())
    }

    #[cfg(not(feature = "compact"))]
    fn write_gzip<W: Write>(&self, _writer: W, path: &Path) -> Result<()> {
        Err(CatalogError::UnsupportedFormat(format!(
            "gzip requested for {} but the 'compact' feature is disabled",
            path.display()
        )))
    }
}
