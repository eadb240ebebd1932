use clap::{Parser, Subcommand, ValueEnum};

use std::path::PathBuf;

// ── CLI definition ─────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(
    name = "fare",
    about = "Distance, ETA and fare estimates for the driver app",
    long_about = "Quote trips, rank nearby riders and audit the Bengaluru mock data\n\
                  against the fare and ETA formulas."
)]
pub struct Cli {
    /// Raise log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,

    /// JSON file with quote settings (avg_speed_kmh, vehicle_class)
    #[arg(long, env = "FARE_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Quote a straight-line trip between two points
    Quote {
        /// Pickup as LAT,LNG
        #[arg(long, value_name = "LAT,LNG", allow_hyphen_values = true)]
        from: String,
        /// Drop as LAT,LNG
        #[arg(long, value_name = "LAT,LNG", allow_hyphen_values = true)]
        to: String,
        #[command(flatten)]
        overrides: QuoteOverrides,
    },
    /// Fare breakdown for a known distance
    Fare {
        /// Trip length in kilometres
        #[arg(long, allow_hyphen_values = true)]
        distance: f64,
        #[command(flatten)]
        overrides: QuoteOverrides,
    },
    /// Rank the mock riders around the mock driver
    Nearby {
        /// Only list riders within this many kilometres
        #[arg(long)]
        radius: Option<f64>,
    },
    /// Compare mock ride-request estimates with the formulas
    Fixtures {
        #[command(flatten)]
        overrides: QuoteOverrides,
    },
    /// Weekly earnings totals from the mock dashboard data
    Earnings,
}

/// Flags that override values loaded from `--config`.
#[derive(clap::Args, Debug, Default, Clone)]
pub struct QuoteOverrides {
    /// Vehicle class: bike, auto or car
    #[arg(long)]
    pub vehicle: Option<String>,
    /// Average speed in km/h used for ETA
    #[arg(long, allow_hyphen_values = true)]
    pub speed: Option<f64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned text for a terminal
    Table,
    /// Pretty-printed JSON
    Json,
    /// CSV with a header row
    Csv,
}

impl Cli {
    /// Default `env_logger` filter implied by `-v` flags.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}
