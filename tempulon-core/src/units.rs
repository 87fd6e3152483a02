use std::{fmt, str::FromStr};

const MPS_TO_MPH: f64 = 2.23694;

/// Temperature unit chosen for display. Remote data is always Celsius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "C",
            TemperatureUnit::Fahrenheit => "F",
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for TemperatureUnit {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_uppercase().as_str() {
            "C" => Ok(TemperatureUnit::Celsius),
            "F" => Ok(TemperatureUnit::Fahrenheit),
            _ => Err(anyhow::anyhow!("Unknown temperature unit '{value}'. Use C or F.")),
        }
    }
}

/// Wind speed unit. Remote data is always meters/second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeedUnit {
    MetersPerSecond,
    MilesPerHour,
}

/// Celsius to `unit`, rounded to 2 decimals for Fahrenheit; Celsius passes through.
pub fn convert_temperature(celsius: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Fahrenheit => round_to(celsius * 9.0 / 5.0 + 32.0, 2),
        TemperatureUnit::Celsius => celsius,
    }
}

/// Meters/second to `unit`, rounded to 2 decimals for mph; m/s passes through.
pub fn convert_wind_speed(mps: f64, unit: SpeedUnit) -> f64 {
    match unit {
        SpeedUnit::MilesPerHour => round_to(mps * MPS_TO_MPH, 2),
        SpeedUnit::MetersPerSecond => mps,
    }
}

pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
