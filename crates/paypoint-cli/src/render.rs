//! Text and JSON output for the subcommands.

use paypoint_core::query::{format_distance_km, Nearest, QueryResult};
use paypoint_core::{CatalogStats, Facet, Facets, Point};
use serde::Serialize;

pub fn json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn stats(stats: &CatalogStats) {
    println!("Catalog statistics:");
    println!("  Points: {}", stats.points);
    println!("  Cities: {}", stats.cities);
    println!("  Districts: {}", stats.districts);
    println!("  Types: {}", stats.types);
}

pub fn facets(facets: &Facets, only: Option<Facet>) {
    let selected: Vec<Facet> = match only {
        Some(f) => vec![f],
        None => Facet::ALL.to_vec(),
    };
    for facet in selected {
        println!("{facet}:");
        for value in facets.values(facet) {
            println!("  {value}");
        }
    }
}

pub fn point_line(p: &Point) -> String {
    format!(
        "#{:<3} {} ({} / {}, {}) [{:.4}, {:.4}]",
        p.id,
        p.name,
        p.city,
        p.district,
        p.kind,
        p.coordinates.lat,
        p.coordinates.lng
    )
}

pub fn points<'a>(points: impl IntoIterator<Item = &'a Point>) {
    let mut shown = 0usize;
    for p in points {
        println!("{}", point_line(p));
        shown += 1;
    }
    if shown == 0 {
        println!("No points match the selected filters.");
    }
}

pub fn nearest(nearest: Option<&Nearest<'_>>) {
    match nearest {
        Some(n) => {
            println!("Nearest point: {}", n.point.name);
            println!("  {} / {}, {}", n.point.city, n.point.district, n.point.kind);
            println!("  Distance: {}", format_distance_km(n.distance_m));
            if !n.point.details.is_empty() {
                println!("  {}", n.point.details);
            }
        }
        None => println!("Nearest point: unavailable (no location or empty catalog)"),
    }
}

pub fn query(result: &QueryResult<'_>) {
    println!("{} point(s):", result.filtered.len());
    points(result.filtered.iter().copied());
    if let Some(b) = result.bounds {
        println!(
            "Bounds: [{:.4}, {:.4}] - [{:.4}, {:.4}]",
            b.south, b.west, b.north, b.east
        );
    }
    println!();
    nearest(result.nearest.as_ref());
}

#[cfg(test)]
mod tests {
    use super::*;
    use paypoint_core::Coordinates;

    #[test]
    fn point_line_shows_facets_and_position() {
        let p = Point {
            id: 7,
            name: "Kızılay Şubesi".into(),
            city: "Ankara".into(),
            district: "Çankaya".into(),
            kind: "Şube".into(),
            coordinates: Coordinates::new(39.92, 32.85),
            details: String::new(),
        };
        assert_eq!(
            point_line(&p),
            "#7   Kızılay Şubesi (Ankara / Çankaya, Şube) [39.9200, 32.8500]"
        );
    }
}
