use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use fare_core::{QuoteConfig, VehicleClass};

use crate::cli::QuoteOverrides;

/// Load quote settings from a JSON file, falling back to defaults when no
/// file is given. Missing fields keep their defaults.
pub fn load_quote_config(path: Option<&Path>) -> Result<QuoteConfig> {
    let Some(path) = path else {
        return Ok(QuoteConfig::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    let config: QuoteConfig = serde_json::from_str(&text)
        .with_context(|| format!("invalid config file {}", path.display()))?;
    log::debug!("loaded quote config from {}: {config:?}", path.display());
    Ok(config)
}

/// Command-line flags win over file values. The result is validated.
pub fn apply_overrides(mut config: QuoteConfig, overrides: &QuoteOverrides) -> Result<QuoteConfig> {
    if let Some(vehicle) = &overrides.vehicle {
        config = config.with_vehicle_class(vehicle.parse::<VehicleClass>()?);
    }
    if let Some(speed) = overrides.speed {
        config = config.with_avg_speed_kmh(speed);
    }
    config.validate()?;
    Ok(config)
}

pub fn resolve(path: Option<&Path>, overrides: &QuoteOverrides) -> Result<QuoteConfig> {
    apply_overrides(load_quote_config(path)?, overrides)
}
