//! paypoint: command-line front end for paypoint-core
//!
//! Shows what a map-based locator would display for a given selection:
//! the facet values for the selectors, the filtered points, and the point
//! nearest to a position.
//!
//! Usage examples
//! --------------
//!
//! - Catalog summary and selector values
//!   $ paypoint stats
//!   $ paypoint facets city
//!
//! - Filter on exact facet values
//!   $ paypoint filter --city "İstanbul" --type ATM
//!
//! - Nearest point to a position (filters never apply here)
//!   $ paypoint nearest 41.0082 28.9784
//!
//! - Both at once, as the map view computes them
//!   $ paypoint query --city Ankara --lat 41.0 --lng 29.0
//!
//! - Snapshot the catalog for faster loading
//!   $ paypoint --input points.json build points.bin.gz
//!
//! Data source
//! -----------
//!
//! The catalog compiled into `paypoint-core` is used unless `--input` (or
//! `PAYPOINT_DATA`) names a `.json`, `.json.gz`, `.bin` or `.bin.gz` file.
//! Log verbosity follows `RUST_LOG` (default `warn`); logs go to stderr.
mod args;
mod render;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use paypoint_core::prelude::*;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_catalog(input: Option<&str>) -> anyhow::Result<PointCatalog> {
    match input {
        Some(path) => PointCatalog::load_from_path(path)
            .with_context(|| format!("failed to load catalog from {path}")),
        None => embedded_catalog(),
    }
}

#[cfg(feature = "json")]
fn embedded_catalog() -> anyhow::Result<PointCatalog> {
    PointCatalog::embedded().context("embedded catalog is invalid")
}

#[cfg(not(feature = "json"))]
fn embedded_catalog() -> anyhow::Result<PointCatalog> {
    anyhow::bail!("no embedded catalog in this build (feature 'json' is off); pass --input")
}

fn user_position(lat: f64, lng: f64) -> anyhow::Result<UserCoordinate> {
    UserCoordinate::new(lat, lng).with_context(|| format!("invalid position ({lat}, {lng})"))
}

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_tracing();

    let catalog = load_catalog(args.input.as_deref())?;

    match args.command {
        Commands::Stats => {
            let stats = catalog.stats();
            if args.json {
                render::json(&stats)?;
            } else {
                render::stats(&stats);
            }
        }

        Commands::Facets { facet } => {
            if args.json {
                match facet {
                    Some(f) => render::json(catalog.facets().values(f))?,
                    None => render::json(catalog.facets())?,
                }
            } else {
                render::facets(catalog.facets(), facet);
            }
        }

        Commands::List => {
            if args.json {
                render::json(catalog.points())?;
            } else {
                render::points(&catalog);
            }
        }

        Commands::Filter(filters) => {
            let matched = query::filter(&catalog, &filters.to_state());
            if args.json {
                render::json(&matched)?;
            } else {
                render::points(matched);
            }
        }

        Commands::Nearest(pos) => {
            let user = user_position(pos.lat, pos.lng)?;
            let nearest = query::nearest(&catalog, Some(user));
            if args.json {
                render::json(&nearest)?;
            } else {
                render::nearest(nearest.as_ref());
            }
        }

        Commands::Query { filters, lat, lng } => {
            let mut session = LocatorSession::new(&catalog);
            session.set_filters(filters.to_state());

            if let Some(LocationEvent::Failed(reason)) = locate(&mut session, lat, lng) {
                eprintln!("Location unavailable: {reason}");
            }

            if args.json {
                render::json(session.result())?;
            } else {
                render::query(session.result());
            }
        }

        Commands::Build { output } => build(&catalog, &output)?,
    }

    Ok(())
}

/// Resolves the user position given on the command line, if any.
///
/// Without `--lat`/`--lng` no request is made and the session stays
/// unresolved, so there is no nearest point.
fn locate(
    session: &mut LocatorSession<'_>,
    lat: Option<f64>,
    lng: Option<f64>,
) -> Option<LocationEvent> {
    let (Some(lat), Some(lng)) = (lat, lng) else {
        return None;
    };
    session.start_location(&FixedLocation::new(lat, lng));
    session.poll_location()
}

#[cfg(feature = "builder")]
fn build(catalog: &PointCatalog, output: &str) -> anyhow::Result<()> {
    catalog
        .save_as(output)
        .with_context(|| format!("failed to write snapshot {output}"))?;
    println!("Wrote {} points to {output}", catalog.len());
    Ok(())
}

#[cfg(not(feature = "builder"))]
fn build(_catalog: &PointCatalog, _output: &str) -> anyhow::Result<()> {
    anyhow::bail!("snapshot writing needs the 'builder' feature")
}
