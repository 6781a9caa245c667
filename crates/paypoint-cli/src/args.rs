use clap::{Args, Parser, Subcommand};
use paypoint_core::{Facet, FilterState};

/// CLI arguments for paypoint
#[derive(Debug, Parser)]
#[command(
    name = "paypoint",
    version,
    about = "Browse payment points by city, district and type, and find the nearest one"
)]
pub struct CliArgs {
    /// Dataset file (.json, .json.gz, .bin, .bin.gz). Defaults to the embedded catalog.
    #[arg(short = 'i', long = "input", env = "PAYPOINT_DATA", global = true)]
    pub input: Option<String>,

    /// Print results as JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the catalog
    Stats,

    /// List the selectable values of every facet, or of one
    Facets {
        /// city, district or type
        facet: Option<Facet>,
    },

    /// List every point in catalog order
    List,

    /// List the points matching all given facet values
    Filter(FilterArgs),

    /// Find the point closest to a position
    Nearest(PositionArgs),

    /// Filtered list plus nearest point, as the map view shows them
    Query {
        #[command(flatten)]
        filters: FilterArgs,

        /// Latitude of the user, in degrees
        #[arg(long, requires = "lng", allow_negative_numbers = true)]
        lat: Option<f64>,

        /// Longitude of the user, in degrees
        #[arg(long, requires = "lat", allow_negative_numbers = true)]
        lng: Option<f64>,
    },

    /// Write the loaded catalog as a binary snapshot (.bin or .bin.gz)
    Build {
        /// Output path
        output: String,
    },
}

/// Exact-match facet values; omitted or empty means no constraint.
#[derive(Debug, Clone, Default, Args)]
pub struct FilterArgs {
    #[arg(long)]
    pub city: Option<String>,

    #[arg(long)]
    pub district: Option<String>,

    /// Point type (e.g. ATM)
    #[arg(long = "type")]
    pub kind: Option<String>,
}

impl FilterArgs {
    pub fn to_state(&self) -> FilterState {
        let mut state = FilterState::new();
        for (facet, value) in [
            (Facet::City, &self.city),
            (Facet::District, &self.district),
            (Facet::Type, &self.kind),
        ] {
            if let Some(v) = value {
                state.set(facet, v.as_str());
            }
        }
        state
    }
}

#[derive(Debug, Clone, Copy, Args)]
pub struct PositionArgs {
    /// Latitude in degrees
    #[arg(allow_negative_numbers = true)]
    pub lat: f64,

    /// Longitude in degrees
    #[arg(allow_negative_numbers = true)]
    pub lng: f64,
}
