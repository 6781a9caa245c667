//! Error handling example for paypoint-rs
//!
//! This example demonstrates how malformed data and failed geolocation
//! surface to the caller.

use paypoint_rs::prelude::*;

/// Never answers; the reply is dropped as soon as the request is made.
struct Silent;

impl LocationProvider for Silent {
    fn request(&self, _reply: LocationReply) {}
}

fn main() -> Result<()> {
    println!("=== paypoint-rs Error Handling Example ===\n");

    // Example 1: A record without a district is rejected, naming the record
    println!("--- Example 1: Malformed record ---");
    let json = r#"[
        {"id": 1, "name": "Konak ATM", "city": "İzmir", "district": "Konak", "type": "ATM",
         "coordinates": [38.4192, 27.1287]},
        {"id": 2, "name": "Bornova ATM", "city": "İzmir", "type": "ATM",
         "coordinates": [38.4697, 27.2211]}
    ]"#;
    match PointCatalog::from_json_str(json) {
        Ok(_) => println!("unexpectedly accepted"),
        Err(e @ CatalogError::InvalidPoint { .. }) => println!("✓ rejected: {e}"),
        Err(e) => println!("other error: {e}"),
    }
    println!();

    // Example 2: Out-of-range coordinates
    println!("--- Example 2: Invalid coordinates ---");
    match UserCoordinate::new(91.0, 29.0) {
        Ok(_) => println!("unexpectedly accepted"),
        Err(e) => println!("✓ rejected: {e}"),
    }
    println!();

    // Example 3: Missing dataset file
    println!("--- Example 3: Missing file ---");
    match PointCatalog::load_from_path("does/not/exist.json") {
        Err(CatalogError::NotFound(path)) => println!("✓ not found: {path}"),
        other => println!("unexpected: {other:?}"),
    }
    println!();

    // Example 4: Geolocation failures leave the nearest point absent
    println!("--- Example 4: Geolocation failures ---");
    let catalog = PointCatalog::embedded()?;

    let mut session = LocatorSession::new(&catalog);
    println!("capability present: {}", session.start_location(&NoLocation));
    println!("state: {:?}", session.location());

    let mut session = LocatorSession::new(&catalog);
    session.start_location(&Silent);
    if let Some(LocationEvent::Failed(reason)) = session.poll_location() {
        println!("✓ failed: {reason}");
    }
    println!("nearest: {:?}", session.result().nearest_point().map(Point::name));

    Ok(())
}
