// crates/paypoint-core/src/model/raw.rs
use serde::{Deserialize, Serialize};

/// Raw point record as it comes from the dataset file.
///
/// Every field is optional here so a missing field surfaces as a validation
/// failure naming the record (see [`convert::point_from_raw`]) rather than as
/// an opaque parse error somewhere inside the file. The JSON loader decodes
/// records one at a time, so a wrongly typed field names its record too.
///
/// [`convert::point_from_raw`]: super::convert::point_from_raw
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PointRaw {
    #[serde(default)]
    pub id: Option<u32>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub district: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    /// `[latitude, longitude]`
    #[serde(default)]
    pub coordinates: Option<Vec<f64>>,
    #[serde(default)]
    pub details: Option<String>,
}

pub type PointsRaw = Vec<PointRaw>;
