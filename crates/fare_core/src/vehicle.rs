use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GeoPricingError;

/// Pricing parameters attached to a vehicle class, in whole rupees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FareRates {
    pub base_price: u32,
    pub per_km_rate: u32,
    pub minimum_fare: u32,
}

/// Category of vehicle a driver operates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", try_from = "String")]
pub enum VehicleClass {
    Bike,
    #[default]
    Auto,
    Car,
}

impl VehicleClass {
    pub const ALL: [VehicleClass; 3] = [VehicleClass::Bike, VehicleClass::Auto, VehicleClass::Car];

    pub const fn rates(self) -> FareRates {
        match self {
            VehicleClass::Bike => FareRates {
                base_price: 20,
                per_km_rate: 12,
                minimum_fare: 30,
            },
            VehicleClass::Auto => FareRates {
                base_price: 30,
                per_km_rate: 15,
                minimum_fare: 50,
            },
            VehicleClass::Car => FareRates {
                base_price: 50,
                per_km_rate: 22,
                minimum_fare: 100,
            },
        }
    }

    /// Wire code used by the driver app (`"AUTO"`, `"BIKE"`, `"CAR"`).
    pub const fn code(self) -> &'static str {
        match self {
            VehicleClass::Bike => "BIKE",
            VehicleClass::Auto => "AUTO",
            VehicleClass::Car => "CAR",
        }
    }

    pub const fn display_name(self) -> &'static str {
        match self {
            VehicleClass::Bike => "Bike",
            VehicleClass::Auto => "Auto Rickshaw",
            VehicleClass::Car => "Car",
        }
    }
}

impl FromStr for VehicleClass {
    type Err = GeoPricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "BIKE" => Ok(VehicleClass::Bike),
            "AUTO" => Ok(VehicleClass::Auto),
            "CAR" => Ok(VehicleClass::Car),
            _ => Err(GeoPricingError::InvalidVehicleClass(s.to_string())),
        }
    }
}

impl TryFrom<String> for VehicleClass {
    type Error = GeoPricingError;

    fn try_from(code: String) -> Result<Self, Self::Error> {
        code.parse()
    }
}

impl std::fmt::Display for VehicleClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
