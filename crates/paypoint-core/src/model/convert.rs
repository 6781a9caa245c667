// crates/paypoint-core/src/model/convert.rs
use super::domain::{Coordinates, Point};
use super::raw::PointRaw;
use crate::error::{CatalogError, Result};

/// **Standard Converter:** Raw -> Point.
///
/// `index` is the record's position in the source list and is carried into
/// any validation error so the offending record can be found.
pub fn point_from_raw(index: usize, raw: PointRaw) -> Result<Point> {
    let raw_id = raw.id;
    let invalid = |reason: String| CatalogError::InvalidPoint {
        index,
        id: raw_id,
        reason,
    };

    let id = raw_id.ok_or_else(|| invalid("missing field `id`".into()))?;
    let name = required(raw.name, "name").map_err(invalid)?;
    let city = required(raw.city, "city").map_err(invalid)?;
    let district = required(raw.district, "district").map_err(invalid)?;
    let kind = required(raw.kind, "type").map_err(invalid)?;

    let coordinates = match raw.coordinates.as_deref() {
        Some(&[lat, lng]) => Coordinates::new(lat, lng),
        Some(other) => {
            return Err(invalid(format!(
                "`coordinates` must be [lat, lng], got {} value(s)",
                other.len()
            )))
        }
        None => return Err(invalid("missing field `coordinates`".into())),
    };

    let point = Point {
        id,
        name,
        city,
        district,
        kind,
        coordinates,
        details: raw.details.unwrap_or_default(),
    };
    validate_point(index, &point)?;
    Ok(point)
}

/// Checks the invariants every catalog point must hold: non-empty facet and
/// name strings, finite in-range coordinates.
pub fn validate_point(index: usize, point: &Point) -> Result<()> {
    let invalid = |reason: String| CatalogError::InvalidPoint {
        index,
        id: Some(point.id),
        reason,
    };

    for (field, value) in [
        ("name", &point.name),
        ("city", &point.city),
        ("district", &point.district),
        ("type", &point.kind),
    ] {
        if value.trim().is_empty() {
            return Err(invalid(format!("field `{field}` is empty")));
        }
    }

    point
        .coordinates
        .validate()
        .map_err(|e| invalid(e.to_string()))?;
    Ok(())
}

fn required(value: Option<String>, field: &str) -> std::result::Result<String, String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        Some(_) => Err(format!("field `{field}` is empty")),
        None => Err(format!("missing field `{field}`")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw() -> PointRaw {
        PointRaw {
            id: Some(7),
            name: Some("Kızılay Şubesi".into()),
            city: Some("Ankara".into()),
            district: Some("Çankaya".into()),
            kind: Some("Şube".into()),
            coordinates: Some(vec![39.92, 32.85]),
            details: None,
        }
    }

    #[test]
    fn converts_complete_record() {
        let p = point_from_raw(0, raw()).unwrap();
        assert_eq!(p.id, 7);
        assert_eq!(p.kind, "Şube");
        assert_eq!(p.coordinates, Coordinates::new(39.92, 32.85));
        assert_eq!(p.details, "");
    }

    #[test]
    fn missing_field_names_record() {
        let mut r = raw();
        r.district = None;
        match point_from_raw(4, r) {
            Err(CatalogError::InvalidPoint { index, id, reason }) => {
                assert_eq!(index, 4);
                assert_eq!(id, Some(7));
                assert!(reason.contains("district"), "{reason}");
            }
            other => panic!("expected InvalidPoint, got {other:?}"),
        }
    }

    #[test]
    fn missing_id_is_reported_without_id() {
        let mut r = raw();
        r.id = None;
        let err = point_from_raw(2, r).unwrap_err();
        assert_eq!(err.to_string(), "invalid point at index 2: missing field `id`");
    }

    #[test]
    fn rejects_out_of_range_latitude() {
        let mut r = raw();
        r.coordinates = Some(vec![95.0, 32.85]);
        let err = point_from_raw(0, r).unwrap_err();
        assert!(err.to_string().contains("latitude 95"), "{err}");
    }

    #[test]
    fn rejects_wrong_coordinate_arity() {
        let mut r = raw();
        r.coordinates = Some(vec![39.92]);
        assert!(matches!(
            point_from_raw(0, r),
            Err(CatalogError::InvalidPoint { .. })
        ));
    }

    #[test]
    fn rejects_blank_type() {
        let mut r = raw();
        r.kind = Some(" ".into());
        let err = point_from_raw(0, r).unwrap_err();
        assert!(err.to_string().contains("`type` is empty"), "{err}");
    }
}
