use std::io::Write;

use anyhow::{bail, Context, Result};
use fare_core::earnings::EarningsSummary;
use fare_core::fixtures::{self, RequestAudit};
use fare_core::nearby::{nearest_first, within_radius, Ranked};
use fare_core::quote::{quote_distance, quote_trip, RideQuote};
use fare_core::{format_currency, format_distance, GeoPoint, QuoteConfig, VehicleClass};
use serde::Serialize;

use crate::cli::{Cli, Commands, QuoteOverrides};
use crate::config;
use crate::output::{write_rows, Row};

/// Parse `"LAT,LNG"` into a validated point.
pub fn parse_point(text: &str) -> Result<GeoPoint> {
    let Some((lat, lng)) = text.split_once(',') else {
        bail!("expected LAT,LNG but got '{text}'");
    };
    let lat: f64 = lat
        .trim()
        .parse()
        .with_context(|| format!("invalid latitude in '{text}'"))?;
    let lng: f64 = lng
        .trim()
        .parse()
        .with_context(|| format!("invalid longitude in '{text}'"))?;
    Ok(GeoPoint::new(lat, lng)?)
}

pub fn run(cli: &Cli, out: &mut impl Write) -> Result<()> {
    let config_path = cli.config.as_deref();
    match &cli.command {
        Commands::Quote {
            from,
            to,
            overrides,
        } => {
            let config = config::resolve(config_path, overrides)?;
            let pickup = parse_point(from).context("bad --from")?;
            let drop = parse_point(to).context("bad --to")?;
            let quote = quote_trip(pickup, drop, &config)?;
            log::info!("quoted {pickup} -> {drop} on {}", config.vehicle_class);
            write_rows(cli.format, &[QuoteRow::from(&quote)], out)
        }
        Commands::Fare {
            distance,
            overrides,
        } => {
            let rows = fare_rows(*distance, config_path, overrides)?;
            write_rows(cli.format, &rows, out)
        }
        Commands::Nearby { radius } => {
            let driver = fixtures::current_driver();
            let riders = fixtures::nearby_riders();
            let ranked = match radius {
                Some(radius) => within_radius(driver.location, &riders, *radius)?,
                None => nearest_first(driver.location, &riders),
            };
            log::info!("{} of {} riders listed", ranked.len(), riders.len());
            let rows: Vec<NearbyRow> = ranked.iter().map(NearbyRow::from).collect();
            write_rows(cli.format, &rows, out)
        }
        Commands::Fixtures { overrides } => {
            let config = config::resolve(config_path, overrides)?;
            let audits = fixtures::pending_requests()
                .iter()
                .map(|request| fixtures::audit_request(request, &config))
                .collect::<Result<Vec<_>, _>>()?;
            let mismatches = audits.iter().filter(|a| !a.price_matches()).count();
            if mismatches > 0 {
                log::warn!(
                    "{mismatches} of {} mock prices differ from the fare formula",
                    audits.len()
                );
            }
            let rows: Vec<AuditRow> = audits.iter().map(AuditRow::from).collect();
            write_rows(cli.format, &rows, out)
        }
        Commands::Earnings => {
            let days = fixtures::weekly_earnings();
            let summary = EarningsSummary::from_days(&days);
            let mut rows: Vec<EarningsRow> = days
                .iter()
                .map(|d| EarningsRow::new(&d.day, d.amount, d.rides))
                .collect();
            rows.push(EarningsRow::new(
                "Total",
                summary.total_amount,
                summary.total_rides,
            ));
            if let Some(avg) = summary.average_per_ride() {
                log::info!("average fare per ride: {}", format_currency(to_i64(avg)));
            }
            write_rows(cli.format, &rows, out)
        }
    }
}

/// One row per vehicle class unless `--vehicle` narrows it down.
fn fare_rows(
    distance_km: f64,
    config_path: Option<&std::path::Path>,
    overrides: &QuoteOverrides,
) -> Result<Vec<QuoteRow>> {
    let base = config::resolve(config_path, overrides)?;
    let classes: Vec<VehicleClass> = if overrides.vehicle.is_some() {
        vec![base.vehicle_class]
    } else {
        VehicleClass::ALL.to_vec()
    };
    classes
        .into_iter()
        .map(|class| {
            let config: QuoteConfig = base.with_vehicle_class(class);
            Ok(QuoteRow::from(&quote_distance(distance_km, &config)?))
        })
        .collect()
}

fn to_i64(amount: u64) -> i64 {
    i64::try_from(amount).unwrap_or(i64::MAX)
}

#[derive(Debug, Serialize)]
pub struct QuoteRow {
    pub vehicle: VehicleClass,
    pub distance_km: f64,
    pub eta_minutes: u32,
    pub base_price: u32,
    pub distance_charge: f64,
    pub total_price: u32,
    pub distance: String,
    pub duration: String,
    pub price: String,
}

impl From<&RideQuote> for QuoteRow {
    fn from(quote: &RideQuote) -> Self {
        let summary = quote.summary();
        Self {
            vehicle: quote.vehicle_class,
            distance_km: quote.distance_km,
            eta_minutes: quote.eta_minutes,
            base_price: quote.fare.base_price,
            distance_charge: quote.fare.distance_charge,
            total_price: quote.fare.total_price,
            distance: summary.distance,
            duration: summary.duration,
            price: summary.price,
        }
    }
}

impl Row for QuoteRow {
    const HEADERS: &'static [&'static str] = &[
        "vehicle",
        "distance_km",
        "eta_minutes",
        "base_price",
        "distance_charge",
        "total_price",
        "distance",
        "duration",
        "price",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.vehicle.to_string(),
            self.distance_km.to_string(),
            self.eta_minutes.to_string(),
            self.base_price.to_string(),
            format!("{:.2}", self.distance_charge),
            self.total_price.to_string(),
            self.distance.clone(),
            self.duration.clone(),
            self.price.clone(),
        ]
    }
}

#[derive(Debug, Serialize)]
pub struct NearbyRow {
    pub id: String,
    pub name: String,
    pub rating: f32,
    pub distance_km: f64,
    pub distance: String,
}

impl From<&Ranked<'_, fixtures::MockRider>> for NearbyRow {
    fn from(ranked: &Ranked<'_, fixtures::MockRider>) -> Self {
        Self {
            id: ranked.item.id.clone(),
            name: ranked.item.name.clone(),
            rating: ranked.item.rating,
            distance_km: ranked.distance_km,
            distance: format_distance(ranked.distance_km),
        }
    }
}

impl Row for NearbyRow {
    const HEADERS: &'static [&'static str] = &["id", "name", "rating", "distance_km", "distance"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            format!("{:.1}", self.rating),
            self.distance_km.to_string(),
            self.distance.clone(),
        ]
    }
}

#[derive(Debug, Serialize)]
pub struct AuditRow {
    #[serde(flatten)]
    pub audit: RequestAudit,
    pub price_matches: bool,
    pub duration_matches: bool,
}

impl From<&RequestAudit> for AuditRow {
    fn from(audit: &RequestAudit) -> Self {
        Self {
            audit: audit.clone(),
            price_matches: audit.price_matches(),
            duration_matches: audit.duration_matches(),
        }
    }
}

impl Row for AuditRow {
    const HEADERS: &'static [&'static str] = &[
        "id",
        "straight_line_km",
        "estimated_distance_km",
        "mock_price",
        "formula_price",
        "mock_duration_min",
        "formula_duration_min",
        "price_matches",
        "duration_matches",
    ];

    fn cells(&self) -> Vec<String> {
        let a = &self.audit;
        vec![
            a.id.clone(),
            a.straight_line_km.to_string(),
            a.estimated_distance_km.to_string(),
            a.mock_price.to_string(),
            a.formula_price.to_string(),
            a.mock_duration_min.to_string(),
            a.formula_duration_min.to_string(),
            self.price_matches.to_string(),
            self.duration_matches.to_string(),
        ]
    }
}

#[derive(Debug, Serialize)]
pub struct EarningsRow {
    pub day: String,
    pub amount: u64,
    pub rides: u32,
    pub earnings: String,
}

impl EarningsRow {
    fn new(day: &str, amount: u64, rides: u32) -> Self {
        Self {
            day: day.to_string(),
            amount,
            rides,
            earnings: format_currency(to_i64(amount)),
        }
    }
}

impl Row for EarningsRow {
    const HEADERS: &'static [&'static str] = &["day", "amount", "rides", "earnings"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.day.clone(),
            self.amount.to_string(),
            self.rides.to_string(),
            self.earnings.clone(),
        ]
    }
}
