//! Basic usage example for paypoint-rs
//!
//! This example demonstrates how to:
//! - Load the embedded catalog and read the facet values
//! - Filter points on exact facet values
//! - Find the nearest point to a position
//! - Drive a `LocatorSession` the way a map view would

use paypoint_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== paypoint-rs Basic Usage Example ===\n");

    let catalog = PointCatalog::embedded()?;
    println!("Loaded {} payment points\n", catalog.len());

    // Example 1: Selector values
    println!("--- Example 1: Facet values ---");
    for facet in Facet::ALL {
        let values: Vec<&str> = catalog.facets().values(facet).iter().map(String::as_str).collect();
        println!("{facet}: {}", values.join(", "));
    }
    println!();

    // Example 2: Filtering
    println!("--- Example 2: ATMs in İstanbul ---");
    let filters = FilterState::new()
        .with(Facet::City, "İstanbul")
        .with(Facet::Type, "ATM");
    for p in query::filter(&catalog, &filters) {
        println!("- {} ({})", p.name(), p.district());
    }
    println!();

    // Example 3: Nearest point to Taksim
    println!("--- Example 3: Nearest point ---");
    let taksim = UserCoordinate::new(41.0369, 28.9850).ok();
    if let Some(n) = query::nearest(&catalog, taksim) {
        println!(
            "{} in {}, {}",
            n.point.name(),
            n.point.district(),
            query::format_distance_km(n.distance_m)
        );
    }
    println!();

    // Example 4: A session with a location provider
    println!("--- Example 4: Locator session ---");
    let mut session = LocatorSession::new(&catalog);
    session.set_filter(Facet::City, "Ankara");
    session.start_location(&FixedLocation::new(41.0082, 28.9784));
    session.poll_location();

    let result = session.result();
    println!("Shown on map: {}", result.filtered.len());
    if let Some(b) = result.bounds {
        println!("Fit map to: [{}, {}] - [{}, {}]", b.south, b.west, b.north, b.east);
    }
    // filters narrow the markers only; the nearest point comes from the full catalog
    if let (Some(p), Some(d)) = (result.nearest_point(), result.nearest_distance_m()) {
        println!("Nearest overall: {} ({})", p.name(), query::format_distance_km(d));
    }

    Ok(())
}
